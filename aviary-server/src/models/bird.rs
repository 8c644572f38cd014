//! The bird record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One bird entry: a species/description pair.
///
/// No id, no timestamps. Fields are not validated; any string, including
/// the empty string, is accepted for either field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Bird {
    pub species: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_species_and_description() {
        let bird = Bird {
            species: "great tit".to_string(),
            description: "found across Europe".to_string(),
        };

        let value = serde_json::to_value(&bird).unwrap();
        assert_eq!(
            value,
            json!({"species": "great tit", "description": "found across Europe"})
        );
    }

    #[test]
    fn empty_fields_are_accepted() {
        let bird: Bird = serde_json::from_str(r#"{"species": "", "description": ""}"#).unwrap();
        assert_eq!(bird.species, "");
        assert_eq!(bird.description, "");
    }
}

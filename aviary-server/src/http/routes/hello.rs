//! Greeting endpoint

use axum::routing::get;
use axum::Router;

/// GET /hello
async fn hello() -> &'static str {
    "Hello World!"
}

/// Greeting routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/hello", get(hello))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greets_with_exact_literal() {
        assert_eq!(hello().await, "Hello World!");
    }
}

//! Bird record endpoints

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::models::Bird;
use crate::state::AppState;

/// Create bird form body. Missing fields become empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateBirdForm {
    pub species: String,
    pub description: String,
}

/// GET /bird - list all bird records as a JSON array
async fn list_birds(State(state): State<AppState>) -> Result<Response, ApiError> {
    let birds = state.store().get_birds().await.map_err(ApiError::StoreRead)?;
    let body = serde_json::to_string(&birds)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// POST /bird - insert a record from an urlencoded form
async fn create_bird(
    State(state): State<AppState>,
    form: Result<Form<CreateBirdForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form.map_err(|e| ApiError::MalformedRequest(e.to_string()))?;

    let bird = Bird {
        species: form.species,
        description: form.description,
    };
    state
        .store()
        .create_bird(&bird)
        .await
        .map_err(ApiError::StoreWrite)?;

    // Form posts land back on the static index.
    Ok((StatusCode::FOUND, [(header::LOCATION, "/assets/")]).into_response())
}

/// Bird routes
pub fn router() -> Router<AppState> {
    Router::new().route("/bird", get(list_birds).post(create_bird))
}

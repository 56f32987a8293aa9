// Root endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};

use super::common::ErrorResponse;
use crate::web::AppState;

/// Redirect `/` to the project homepage when one is configured
pub async fn redirect_to_homepage(State(state): State<AppState>) -> Response {
    match state.config.homepage_url.as_deref() {
        Some(url) => Redirect::temporary(url).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Not found.".to_string())),
        )
            .into_response(),
    }
}

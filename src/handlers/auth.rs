use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::{ErrorResponse, PortfolioError};
use crate::model::Credential;
use crate::router::AppState;
use crate::token::TokenProvider;

/// `GET /api/auth-token`: always 200, demo token when nothing is configured.
pub async fn get_token(State(state): State<AppState>) -> Json<Credential> {
    Json(TokenProvider::new(&state.config).get_token())
}

/// `POST /api/auth-token`: 400 when no token is configured, 500 when the
/// configured token is unusable.
pub async fn issue_token(State(state): State<AppState>) -> Response {
    match TokenProvider::new(&state.config).issue_token() {
        Ok(credential) => Json(credential).into_response(),
        Err(err @ PortfolioError::ConfigurationMissing) => err.into_response(),
        Err(err) => {
            tracing::error!("token retrieval failed: {err}");
            let body = ErrorResponse {
                error: "Token retrieval failed".to_string(),
                details: Some(err.to_string()),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

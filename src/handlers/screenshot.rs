use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::PortfolioError;
use crate::screenshot::{self, DEFAULT_SCREENSHOT};

/// `GET /api/screenshot?url=...`
pub async fn get_screenshot(RawQuery(query): RawQuery) -> Response {
    let url = super::first_query_value(query.as_deref(), "url");
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return PortfolioError::MissingParameter { name: "URL" }.into_response();
    };

    match screenshot::lookup(&url) {
        Ok(shot) => Json(shot).into_response(),
        Err(err) => {
            tracing::error!("error generating screenshot: {err}");
            let body = json!({
                "error": "Failed to generate screenshot",
                "url": url,
                "screenshot": DEFAULT_SCREENSHOT,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

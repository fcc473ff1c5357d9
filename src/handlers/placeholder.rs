use axum::extract::Path;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::placeholder::{Placeholder, CACHE_CONTROL, CONTENT_TYPE};

#[derive(Debug, Deserialize)]
pub struct PlaceholderPath {
    pub kind: String,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

/// `GET /api/placeholder/{kind}[/{identifier}[/{size}]]`
pub async fn get_placeholder(Path(params): Path<PlaceholderPath>) -> impl IntoResponse {
    let svg = Placeholder::new(
        &params.kind,
        params.identifier.as_deref(),
        params.size.as_deref(),
    )
    .to_svg();

    (
        [
            (header::CONTENT_TYPE, CONTENT_TYPE),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        svg,
    )
}

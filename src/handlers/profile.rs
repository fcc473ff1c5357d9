use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::aggregator::AggregatedProfile;
use crate::error::Result;
use crate::router::AppState;

/// Overall data source of the response body: `live`, `mock` or `partial`.
pub const PROFILE_SOURCE_HEADER: &str = "x-profile-source";
/// `true` when a live fetch failed and mock data was substituted.
pub const PROFILE_DEGRADED_HEADER: &str = "x-profile-degraded";

/// `GET /api/profile?token=...`: the profile bundle, falling back to mock
/// data section by section. The query string is read leniently so that no
/// query can turn this into an error response.
pub async fn get_profile(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    let token = super::first_query_value(query.as_deref(), "token");
    let AggregatedProfile { bundle, report } = state
        .aggregator
        .get_profile_bundle(token.as_deref())
        .await?;

    if report.is_degraded() {
        warn!(failures = %report.failures(), "serving profile with mock fallback");
    }

    let headers = [
        (PROFILE_SOURCE_HEADER, report.overall().to_string()),
        (PROFILE_DEGRADED_HEADER, report.is_degraded().to_string()),
    ];
    Ok((headers, Json(bundle)).into_response())
}

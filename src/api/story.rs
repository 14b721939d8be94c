use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::models::{Story, StoryParams};
use crate::rendering::render_story_svg;
use crate::services::Clock;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Browsers and shared caches may both keep a card for an hour.
pub const STORY_CACHE_CONTROL: &str = "public, max-age=3600, s-maxage=3600";

/// Render a story card
///
/// Returns a 1200x630 SVG Open Graph image. Every parameter is optional and
/// unknown values fall back to defaults, so this endpoint always answers 200.
#[utoipa::path(
    get,
    path = "/api/og-story",
    responses(
        (status = 200, description = "SVG story card", content_type = "image/svg+xml", body = String),
    ),
    params(
        ("c" = Option<String>, Query, description = "Two-letter country code (any case)"),
        ("t" = Option<String>, Query, description = "Content type: ciianalysis, crisisalert, dailybrief or marketfocus"),
        ("s" = Option<String>, Query, description = "Country Instability Index score (integer)"),
        ("l" = Option<String>, Query, description = "Severity level: critical, high, elevated, normal or low"),
    ),
    tag = "Story"
)]
pub async fn handle_og_story(State(clock): State<Arc<dyn Clock>>, uri: Uri) -> Response {
    let params = story_params_from_uri(&uri);
    story_response(&params, clock.today())
}

/// Extract story parameters from the request URI.
///
/// A query string that cannot be decoded renders the default card rather
/// than rejecting the request.
pub fn story_params_from_uri(uri: &Uri) -> StoryParams {
    match Query::<Vec<(String, String)>>::try_from_uri(uri) {
        Ok(Query(pairs)) => StoryParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!(%rejection, "Unreadable story query, using defaults");
            StoryParams::default()
        }
    }
}

/// Build the full HTTP response for a story.
pub fn story_response(params: &StoryParams, today: NaiveDate) -> Response {
    let story = Story::resolve(params, today);

    tracing::info!(
        country = %story.country_code,
        level = %story.level,
        score = ?story.score,
        "Story card requested"
    );

    let svg = render_story_svg(&story);

    tracing::debug!(size_bytes = svg.len(), "Story card rendered");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, STORY_CACHE_CONTROL),
        ],
        svg,
    )
        .into_response()
}

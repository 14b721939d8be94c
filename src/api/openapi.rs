use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use crate::error::ApiError;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "og-story API",
        description = "Dynamic Open Graph story cards for social link previews",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(crate::api::story::handle_og_story),
    tags(
        (name = "Story", description = "Story card rendering")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn handle_openapi() -> Result<Response, ApiError> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| ApiError::Internal(format!("OpenAPI serialization failed: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], json).into_response())
}

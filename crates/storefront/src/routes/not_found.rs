//! Fallback for unmatched paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::{StatusCode, Uri};

use crate::filters;

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

/// Render the 404 page.
pub async fn not_found(uri: Uri) -> (StatusCode, NotFoundTemplate) {
    tracing::warn!(path = %uri.path(), "Route not found");

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            path: uri.path().to_string(),
        },
    )
}

//! Fallback for unmatched paths.

use askama::Template;
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::filters;
use crate::middleware::OptionalAdminAuth;
use crate::models::Flash;

/// 404 page template.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub admin_name: Option<String>,
    pub current_path: &'static str,
    pub flash: Option<Flash>,
    pub path: String,
}

/// Render the 404 page.
pub async fn not_found(admin: OptionalAdminAuth, uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "Page not found");

    let template = NotFoundTemplate {
        admin_name: admin.name(),
        current_path: "",
        flash: None,
        path: uri.path().to_string(),
    };

    match template.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render 404 page: {e}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//! GET  /                              - Redirect to /produtos
//!
//! # Auth (placeholder; CRUD pages are open)
//! GET  /login                         - Login page
//! POST /login                         - Remember the typed name
//! POST /logout                        - Forget it
//!
//! # Products
//! GET  /produtos                      - Card grid (?excluir={id} opens the delete modal)
//! GET  /produtos/cadastrar            - Empty form
//! POST /produtos/cadastrar            - Create
//! GET  /produtos/editar/{id}          - Pre-filled form
//! POST /produtos/editar/{id}          - Update
//! POST /produtos/{id}/excluir         - Delete
//!
//! # Categories
//! Same shape under /categorias
//! ```

pub mod auth;
pub mod categories;
pub mod not_found;
pub mod products;

use std::str::FromStr;

use axum::{Router, response::Redirect, routing::get};

pub use not_found::not_found;

use crate::state::AppState;

/// Delete confirmation modal shared by the list pages.
#[derive(Debug, Clone)]
pub struct DeleteModal {
    /// Name of the record, shown in the question.
    pub name: String,
    /// POST target that performs the delete.
    pub action: String,
    pub cancel_href: &'static str,
}

/// Parse an optional id query value; blank or malformed means none.
fn parse_id<T: FromStr>(value: Option<&str>) -> Option<T> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

/// Create all page routes for admin.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/produtos") }))
        .merge(auth::router())
        .merge(products::router())
        .merge(categories::router())
}

#[cfg(test)]
mod tests {
    use leve_bem_core::ProductId;

    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id::<ProductId>(Some(" 5 ")), Some(ProductId::new(5)));
        assert_eq!(parse_id::<ProductId>(Some("")), None);
        assert_eq!(parse_id::<ProductId>(Some("x")), None);
        assert_eq!(parse_id::<ProductId>(None), None);
    }
}

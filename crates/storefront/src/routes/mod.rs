//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Catalog (?categoria, ?busca, ?ordem, ?comprar)
//! GET  /inicio              - Home showcase (categories, two product rows)
//! POST /comprar             - Order a showcase product directly
//! GET  /categorias          - Category links into the catalog
//! POST /pedido-confirmado   - Confirm the pending order
//! GET  /pedido-confirmado   - Confirmed order with recommendations
//! GET  /health              - Health check
//! GET  /static/*            - CSS, JS, images
//! *                         - 404 page
//! ```

pub mod catalog;
pub mod categories;
pub mod home;
pub mod not_found;
pub mod order;

use axum::{
    Router,
    routing::{get, post},
};

pub use not_found::not_found;

use crate::state::AppState;

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/inicio", get(home::index))
        .route("/comprar", post(order::buy))
        .route("/categorias", get(categories::index))
        .route(
            "/pedido-confirmado",
            get(order::show).post(order::confirm),
        )
}

//! Integration tests for Leve&Bem.
//!
//! Everything runs in-process: [`MockApi`] stands in for the remote REST API
//! and the storefront and admin routers are served on ephemeral ports, then
//! driven over real HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p leve-bem-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_client` - `ApiClient` against the mock
//! - `storefront` - catalog filters, home showcase, order flow
//! - `admin` - CRUD forms, delete, login

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures;
pub mod mock_api;

use axum::Router;
use leve_bem_admin::config::AdminConfig;
use leve_bem_storefront::config::StorefrontConfig;
use reqwest::Client;

pub use mock_api::{MockApi, RecordedRequest};

/// Serve `router` on an ephemeral localhost port; returns its base URL.
///
/// The server runs until the test's runtime shuts down.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener
        .local_addr()
        .expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{addr}")
}

/// Start the storefront against `api`; returns its base URL.
///
/// # Panics
///
/// Panics if the application state cannot be built.
pub async fn start_storefront(api: &MockApi) -> String {
    let state = leve_bem_storefront::state::AppState::new(StorefrontConfig::local(api.base_url()))
        .expect("Failed to build storefront state");
    serve(leve_bem_storefront::app(state)).await
}

/// Start the admin panel against `api`; returns its base URL.
///
/// # Panics
///
/// Panics if the application state cannot be built.
pub async fn start_admin(api: &MockApi) -> String {
    let state = leve_bem_admin::state::AppState::new(AdminConfig::local(api.base_url()))
        .expect("Failed to build admin state");
    serve(leve_bem_admin::app(state)).await
}

/// A browser-like client: keeps cookies, does not follow redirects.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn browser() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

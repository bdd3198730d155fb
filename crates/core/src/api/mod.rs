//! HTTP client for the Leve&Bem REST API.
//!
//! # Architecture
//!
//! - One `reqwest::Client` shared behind an `Arc`; cloning the client is cheap
//! - Resource handles ([`Products`], [`Categories`], [`Users`]) borrow the client
//!   and map domain operations onto the API's verbs and paths
//! - No retries, no timeouts, no caching: every call is a single round trip
//!   and failures are returned to the caller as [`ApiError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use leve_bem_core::api::ApiClient;
//!
//! let api = ApiClient::new("https://crud-as-task2.onrender.com")?;
//!
//! let (products, categories) = tokio::try_join!(
//!     api.products().list_all(),
//!     api.categories().list_all(),
//! )?;
//! let recommended = api.products().recommendations(products[0].id).await?;
//! ```

mod categories;
mod products;
mod users;

pub use categories::Categories;
pub use products::Products;
pub use users::Users;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Base URL of the hosted Leve&Bem API.
pub const DEFAULT_BASE_URL: &str = "https://crud-as-task2.onrender.com";

/// Errors that can occur when talking to the REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// A single-entity lookup did not succeed.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The body did not match the expected entity shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Collapse any non-2xx answer into `NotFound(what)`.
    ///
    /// Lookups by id treat every failing status the same way.
    fn into_not_found(self, what: impl Into<String>) -> Self {
        match self {
            Self::Api { .. } => Self::NotFound(what.into()),
            other => other,
        }
    }
}

/// Client for the Leve&Bem REST API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBaseUrl` if `base_url` is not an absolute http(s) URL,
    /// or `Http` if the underlying HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("leve-bem/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// The API origin this client talks to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Product (`/alimentacao`) operations.
    #[must_use]
    pub const fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// Category (`/categoria`) operations.
    #[must_use]
    pub const fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    /// User (`/usuarios`) operations.
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// `GET path` and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.inner.client.get(self.url(path)).send().await?;
        read_json(response).await
    }

    /// Send `body` as JSON with `method` and decode the JSON answer.
    async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .inner
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }

    /// `DELETE path`, ignoring any response body.
    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.inner.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }
}

/// Check the status and decode a JSON body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(500).collect::<String>(),
            "Failed to parse Leve&Bem API response"
        );
        ApiError::Parse(e)
    })
}

/// Build an `ApiError::Api` from a failed response.
async fn api_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let url = response.url().clone();
    let message = response.text().await.unwrap_or_default();

    tracing::warn!(
        status = %status,
        url = %url,
        body = %message.chars().take(200).collect::<String>(),
        "Leve&Bem API returned non-success status"
    );

    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Percent-encode free text for use as a single path segment.
fn path_segment(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

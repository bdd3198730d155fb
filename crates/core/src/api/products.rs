//! `/alimentacao` endpoints.

use reqwest::Method;
use tracing::instrument;

use super::{ApiClient, ApiError, path_segment};
use crate::types::{Product, ProductId, ProductInput, ProductUpdate};

/// Product operations, borrowed from an [`ApiClient`].
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    api: &'a ApiClient,
}

impl<'a> Products<'a> {
    pub(super) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// `GET /alimentacao/all`, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// is not a product list.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ApiError> {
        self.api.get("/alimentacao/all").await
    }

    /// `GET /alimentacao/{id}`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status is reported as `ApiError::NotFound`.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, ApiError> {
        self.api
            .get(&format!("/alimentacao/{id}"))
            .await
            .map_err(|e| e.into_not_found(format!("produto {id}")))
    }

    /// `GET /alimentacao/nome/{name}`: products whose name matches on the
    /// server side.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, ApiError> {
        self.api
            .get(&format!("/alimentacao/nome/{}", path_segment(name)))
            .await
    }

    /// `POST /alimentacao/cadastrar`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.api
            .send(Method::POST, "/alimentacao/cadastrar", input)
            .await
    }

    /// `PUT /alimentacao/atualizar`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self, update), fields(id = %update.id))]
    pub async fn update(&self, update: &ProductUpdate) -> Result<Product, ApiError> {
        self.api
            .send(Method::PUT, "/alimentacao/atualizar", update)
            .await
    }

    /// `DELETE /alimentacao/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.api.delete(&format!("/alimentacao/{id}")).await
    }

    /// `GET /alimentacao/recomendacao/{id}`: related products chosen by the
    /// server.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self))]
    pub async fn recommendations(&self, id: ProductId) -> Result<Vec<Product>, ApiError> {
        self.api
            .get(&format!("/alimentacao/recomendacao/{id}"))
            .await
    }
}

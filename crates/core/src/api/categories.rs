//! `/categoria` endpoints.

use reqwest::Method;
use tracing::instrument;

use super::{ApiClient, ApiError, path_segment};
use crate::types::{Category, CategoryId, CategoryInput, CategoryUpdate};

/// Category operations, borrowed from an [`ApiClient`].
#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    api: &'a ApiClient,
}

impl<'a> Categories<'a> {
    pub(super) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// `GET /categoria/all`, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Category>, ApiError> {
        self.api.get("/categoria/all").await
    }

    /// `GET /categoria/{id}`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status is reported as `ApiError::NotFound`.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.api
            .get(&format!("/categoria/{id}"))
            .await
            .map_err(|e| e.into_not_found(format!("categoria {id}")))
    }

    /// `GET /categoria/descricao/{text}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self))]
    pub async fn find_by_description(&self, text: &str) -> Result<Vec<Category>, ApiError> {
        self.api
            .get(&format!("/categoria/descricao/{}", path_segment(text)))
            .await
    }

    /// `POST /categoria/cadastrar`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self, input), fields(description = %input.description))]
    pub async fn create(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        self.api
            .send(Method::POST, "/categoria/cadastrar", input)
            .await
    }

    /// `PUT /categoria/atualizar`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self, update), fields(id = %update.id))]
    pub async fn update(&self, update: &CategoryUpdate) -> Result<Category, ApiError> {
        self.api
            .send(Method::PUT, "/categoria/atualizar", update)
            .await
    }

    /// `DELETE /categoria/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: CategoryId) -> Result<(), ApiError> {
        self.api.delete(&format!("/categoria/{id}")).await
    }
}

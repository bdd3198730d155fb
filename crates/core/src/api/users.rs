//! `/usuarios` endpoints.

use reqwest::Method;
use tracing::instrument;

use super::{ApiClient, ApiError};
use crate::types::{User, UserId, UserInput, UserUpdate};

/// User operations, borrowed from an [`ApiClient`].
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    api: &'a ApiClient,
}

impl<'a> Users<'a> {
    pub(super) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// `GET /usuarios/all`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<User>, ApiError> {
        self.api.get("/usuarios/all").await
    }

    /// `GET /usuarios/{id}`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status is reported as `ApiError::NotFound`.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: UserId) -> Result<User, ApiError> {
        self.api
            .get(&format!("/usuarios/{id}"))
            .await
            .map_err(|e| e.into_not_found(format!("usuario {id}")))
    }

    /// `POST /usuarios/cadastrar`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self, input), fields(login = %input.login))]
    pub async fn create(&self, input: &UserInput) -> Result<User, ApiError> {
        self.api
            .send(Method::POST, "/usuarios/cadastrar", input)
            .await
    }

    /// `PUT /usuarios/atualizar`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    #[instrument(skip(self, update), fields(id = %update.id))]
    pub async fn update(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.api
            .send(Method::PUT, "/usuarios/atualizar", update)
            .await
    }

    /// `DELETE /usuarios/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        self.api.delete(&format!("/usuarios/{id}")).await
    }
}

//! User (`usuarios`) records.
//!
//! Users only appear as the owner reference of a product; the management
//! CLI is the one place that lists them.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A user account as returned by `GET /usuarios/...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login (usually an e-mail address).
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Body of `POST /usuarios/cadastrar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "usuario")]
    pub login: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl UserInput {
    #[must_use]
    pub fn into_update(self, id: UserId) -> UserUpdate {
        UserUpdate { id, input: self }
    }
}

/// Body of `PUT /usuarios/atualizar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub id: UserId,
    #[serde(flatten)]
    pub input: UserInput,
}

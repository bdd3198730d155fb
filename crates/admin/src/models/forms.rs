//! Form inputs and their server-side validation.
//!
//! The templates carry `required` / `min="0"` attributes as well, but the
//! handlers never trust them: a form is validated here before any API call.

use leve_bem_core::{CategoryId, CategoryInput, EntityRef, Product, ProductInput, UserId};
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

/// Validation failures, worded for display on the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Preencha os campos!")]
    CredentialsRequired,
    #[error("Informe o nome do prato.")]
    NameRequired,
    #[error("Informe um preço válido, maior ou igual a zero.")]
    InvalidPrice,
    #[error("Informe as calorias como um número inteiro maior ou igual a zero.")]
    InvalidCalories,
    #[error("Selecione uma categoria.")]
    CategoryRequired,
    #[error("Informe a descrição da categoria.")]
    DescriptionRequired,
}

/// Login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub usuario: String,
    #[serde(default = "empty_secret")]
    pub senha: SecretString,
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

impl LoginForm {
    /// Accept any non-empty pair; returns the trimmed user name.
    ///
    /// # Errors
    ///
    /// Returns `FormError::CredentialsRequired` if either field is blank.
    pub fn validate(&self) -> Result<String, FormError> {
        let name = self.usuario.trim();
        if name.is_empty() || self.senha.expose_secret().trim().is_empty() {
            return Err(FormError::CredentialsRequired);
        }
        Ok(name.to_string())
    }
}

/// Product create/edit form, kept as typed so it can be re-rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub preco: String,
    #[serde(default)]
    pub ingredientes: String,
    #[serde(default)]
    pub calorias: String,
    #[serde(default)]
    pub categoria: String,
}

impl ProductForm {
    /// Validate and build the API payload.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: name, price, calories, then category.
    pub fn validate(&self, owner: UserId) -> Result<ProductInput, FormError> {
        let name = self.nome.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }

        let price = parse_price(&self.preco).ok_or(FormError::InvalidPrice)?;

        let calories = self
            .calorias
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidCalories)?;

        let category = self
            .categoria
            .trim()
            .parse::<CategoryId>()
            .map_err(|_| FormError::CategoryRequired)?;

        Ok(ProductInput {
            name: name.to_string(),
            price,
            ingredients: self.ingredientes.trim().to_string(),
            calories,
            category: EntityRef::new(category),
            owner: EntityRef::new(owner),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            nome: product.name.clone(),
            preco: product.price.normalize().to_string(),
            ingredientes: product.ingredients.clone(),
            calorias: product.calories.to_string(),
            categoria: product
                .category_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Accepts `12.5` or `12,50`; rejects negatives and garbage.
fn parse_price(raw: &str) -> Option<Decimal> {
    let price = raw.trim().replace(',', ".").parse::<Decimal>().ok()?;
    (price >= Decimal::ZERO).then_some(price)
}

/// Category create/edit form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub descricao: String,
}

impl CategoryForm {
    /// Validate and build the API payload.
    ///
    /// # Errors
    ///
    /// Returns `FormError::DescriptionRequired` if the description is blank.
    pub fn validate(&self) -> Result<CategoryInput, FormError> {
        let description = self.descricao.trim();
        if description.is_empty() {
            return Err(FormError::DescriptionRequired);
        }
        Ok(CategoryInput {
            description: description.to_string(),
        })
    }
}

//! Core types for Leve&Bem.
//!
//! Records mirror the JSON shapes of the remote REST API. Field names on the
//! wire are Portuguese (`nome`, `preco`, ...) and are renamed with serde.

pub mod category;
pub mod id;
pub mod price;
pub mod product;
pub mod user;

use serde::{Deserialize, Deserializer};

pub use category::{Category, CategoryInput, CategoryUpdate};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{EntityRef, Product, ProductInput, ProductUpdate};
pub use user::{User, UserInput, UserUpdate};

/// Deserialize an explicit `null` as the type's default.
///
/// `#[serde(default)]` only covers a missing key; the API also sends `null`
/// for blank text and number columns.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

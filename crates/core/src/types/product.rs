//! Product (`alimentacao`) records and write payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, CategoryId, Price, ProductId, User, UserId, null_as_default};

/// A menu item as returned by `GET /alimentacao/...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Ingredients / description text.
    #[serde(rename = "ingredientes", default, deserialize_with = "null_as_default")]
    pub ingredients: String,
    #[serde(rename = "calorias", default, deserialize_with = "null_as_default")]
    pub calories: u32,
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
}

impl Product {
    /// Id of the product's category, if it has one.
    #[must_use]
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }

    /// Price in reais.
    #[must_use]
    pub const fn price(&self) -> Price {
        Price::brl(self.price)
    }
}

/// A reference to another entity by id, serialized as `{"id": N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef<I> {
    pub id: I,
}

impl<I> EntityRef<I> {
    #[must_use]
    pub const fn new(id: I) -> Self {
        Self { id }
    }
}

/// Body of `POST /alimentacao/cadastrar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "ingredientes")]
    pub ingredients: String,
    #[serde(rename = "calorias")]
    pub calories: u32,
    #[serde(rename = "categoria")]
    pub category: EntityRef<CategoryId>,
    /// Owning user. The front-ends always send a fixed configured id.
    #[serde(rename = "usuario")]
    pub owner: EntityRef<UserId>,
}

impl ProductInput {
    /// Attach an id, producing the body for an update.
    #[must_use]
    pub fn into_update(self, id: ProductId) -> ProductUpdate {
        ProductUpdate { id, input: self }
    }
}

/// Body of `PUT /alimentacao/atualizar`: the id of the product being
/// replaced plus every writable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub id: ProductId,
    #[serde(flatten)]
    pub input: ProductInput,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_api_product() {
        let product: Product = serde_json::from_value(json!({
            "id": 10,
            "nome": "Wrap",
            "preco": 22.5,
            "ingredientes": "Frango, alface",
            "calorias": 420,
            "categoria": { "id": 1, "descricao": "Lanches" },
            "usuario": { "id": 1, "nome": "Loja" }
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::new(10));
        assert_eq!(product.price, Decimal::new(225, 1));
        assert_eq!(product.category_id(), Some(CategoryId::new(1)));
        assert_eq!(product.price().display(), "R$ 22,50");
        assert!(product.photo.is_none());
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_fields() {
        let product: Product =
            serde_json::from_value(json!({ "id": 11, "nome": "Suco", "preco": 12 })).unwrap();

        assert_eq!(product.calories, 0);
        assert!(product.ingredients.is_empty());
        assert!(product.category_id().is_none());
    }

    #[test]
    fn test_null_columns_do_not_reject_the_list() {
        let products: Vec<Product> = serde_json::from_value(json!([
            { "id": 1, "nome": "Wrap", "preco": 22.5, "ingredientes": null, "calorias": 420 },
            { "id": 2, "nome": "Suco", "preco": 12, "ingredientes": "Couve", "calorias": null }
        ]))
        .unwrap();

        let [wrap, suco] = products.as_slice() else {
            panic!("expected two products");
        };
        assert!(wrap.ingredients.is_empty());
        assert_eq!(wrap.calories, 420);
        assert_eq!(suco.ingredients, "Couve");
        assert_eq!(suco.calories, 0);
    }

    #[test]
    fn test_update_payload_is_flat() {
        let input = ProductInput {
            name: "Wrap".to_string(),
            price: Decimal::new(225, 1),
            ingredients: "Frango".to_string(),
            calories: 420,
            category: EntityRef::new(CategoryId::new(1)),
            owner: EntityRef::new(UserId::new(1)),
        };

        let body = serde_json::to_value(input.into_update(ProductId::new(10))).unwrap();

        assert_eq!(
            body,
            json!({
                "id": 10,
                "nome": "Wrap",
                "preco": 22.5,
                "ingredientes": "Frango",
                "calorias": 420,
                "categoria": { "id": 1 },
                "usuario": { "id": 1 }
            })
        );
    }
}

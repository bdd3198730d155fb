//! Sample menu shared by the tests.
//!
//! Two categories and three products, with prices chosen so that the
//! ascending order differs from the server order.

use leve_bem_core::{Category, CategoryId, Product, ProductId, User, UserId};
use rust_decimal::Decimal;

pub const LANCHES: i64 = 1;
pub const BEBIDAS: i64 = 2;

pub const WRAP: i64 = 1;
pub const SUCO: i64 = 2;
pub const SALADA: i64 = 3;

#[must_use]
pub fn category(id: i64, description: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        description: description.to_string(),
    }
}

/// A product priced in cents.
#[must_use]
pub fn product(id: i64, name: &str, cents: i64, category: &Category) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        ingredients: format!("Ingredientes de {name}"),
        calories: 200,
        photo: None,
        category: Some(category.clone()),
        owner: None,
    }
}

/// `[Lanches, Bebidas]`
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![category(LANCHES, "Lanches"), category(BEBIDAS, "Bebidas")]
}

/// `[Wrap (Lanches, 22,50), Suco Verde (Bebidas, 12,00), Salada (Lanches, 18,90)]`
#[must_use]
pub fn products() -> Vec<Product> {
    let lanches = category(LANCHES, "Lanches");
    let bebidas = category(BEBIDAS, "Bebidas");
    vec![
        product(WRAP, "Wrap", 2250, &lanches),
        product(SUCO, "Suco Verde", 1200, &bebidas),
        product(SALADA, "Salada", 1890, &lanches),
    ]
}

#[must_use]
pub fn users() -> Vec<User> {
    vec![User {
        id: UserId::new(1),
        name: Some("Leve&Bem".to_string()),
        login: Some("contato@levebem.com.br".to_string()),
        photo: None,
    }]
}

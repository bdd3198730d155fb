//! Catalog filtering: category filter, name search, and price sort.
//!
//! The three parts are independent. Category and search are ANDed, then the
//! optional sort is applied to what remains. Everything is derived from the
//! full product list on every call; nothing is cached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Product};

/// Price ordering requested by the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceSort {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl PriceSort {
    /// Query-string value (`asc` / `desc`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for PriceSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized sort value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price sort: {0} (expected asc or desc)")]
pub struct InvalidPriceSort(pub String);

impl FromStr for PriceSort {
    type Err = InvalidPriceSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(InvalidPriceSort(other.to_string())),
        }
    }
}

/// The shopper's current catalog selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Single selected category; `None` keeps every category.
    pub category: Option<CategoryId>,
    /// Case-insensitive substring matched against the product name only.
    pub search: String,
    /// `None` keeps the order the API returned.
    pub sort: Option<PriceSort>,
}

impl CatalogQuery {
    /// Whether any filter or sort is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.search.trim().is_empty() || self.sort.is_some()
    }

    /// Whether `product` passes both the category and the search filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_search(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category
            .is_none_or(|selected| product.category_id() == Some(selected))
    }

    fn matches_search(&self, product: &Product) -> bool {
        let term = self.search.trim();
        term.is_empty() || product.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Filter and sort `products`.
    ///
    /// Filtering preserves the input's relative order. Ascending sort is
    /// stable on equal prices; descending is the exact reverse of ascending.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut selected: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();

        if let Some(sort) = self.sort {
            selected.sort_by(|a, b| a.price.cmp(&b.price));
            if sort == PriceSort::Descending {
                selected.reverse();
            }
        }

        selected
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{Category, ProductId};

    fn product(id: i64, name: &str, price: &str, category: Option<i64>) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: price.parse::<Decimal>().unwrap(),
            ingredients: String::new(),
            calories: 0,
            photo: None,
            category: category.map(|c| Category {
                id: CategoryId::new(c),
                description: String::new(),
            }),
            owner: None,
        }
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.as_i64()).collect()
    }

    fn menu() -> Vec<Product> {
        vec![
            product(10, "Wrap", "22.5", Some(1)),
            product(11, "Suco", "12.0", Some(2)),
            product(12, "Wrap Vegano", "19.9", Some(1)),
            product(13, "Salada", "12.0", None),
            product(14, "Suco Verde", "9.5", Some(2)),
        ]
    }

    #[test]
    fn test_category_filter_scenario() {
        let products = vec![
            product(10, "Wrap", "22.5", Some(1)),
            product(11, "Suco", "12.0", Some(2)),
        ];
        let query = CatalogQuery {
            category: Some(CategoryId::new(1)),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&query.apply(&products)), vec![10]);
    }

    #[test]
    fn test_search_scenario_is_case_insensitive() {
        let products = vec![
            product(10, "Wrap", "22.5", Some(1)),
            product(11, "Suco", "12.0", Some(2)),
        ];
        let query = CatalogQuery {
            search: "wr".to_string(),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&query.apply(&products)), vec![10]);

        let upper = CatalogQuery {
            search: "WR".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&upper.apply(&products)), vec![10]);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let query = CatalogQuery {
            category: Some(CategoryId::new(2)),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&query.apply(&menu())), vec![11, 14]);
    }

    #[test]
    fn test_search_matches_name_only() {
        let mut products = menu();
        products[1].ingredients = "wrap de laranja".to_string();
        let query = CatalogQuery {
            search: "wrap".to_string(),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&query.apply(&products)), vec![10, 12]);
    }

    #[test]
    fn test_search_handles_accents() {
        let products = vec![product(1, "Açaí na Tigela", "18", None)];
        let query = CatalogQuery {
            search: "AÇAÍ".to_string(),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&query.apply(&products)), vec![1]);
    }

    #[test]
    fn test_combined_filter_is_intersection() {
        let products = menu();
        let by_category = CatalogQuery {
            category: Some(CategoryId::new(2)),
            ..CatalogQuery::default()
        };
        let by_search = CatalogQuery {
            search: "verde".to_string(),
            ..CatalogQuery::default()
        };
        let combined = CatalogQuery {
            category: Some(CategoryId::new(2)),
            search: "verde".to_string(),
            sort: None,
        };

        let a = ids(&by_category.apply(&products));
        let b = ids(&by_search.apply(&products));
        let expected: Vec<i64> = a.into_iter().filter(|id| b.contains(id)).collect();

        assert_eq!(ids(&combined.apply(&products)), expected);
        assert_eq!(expected, vec![14]);
    }

    #[test]
    fn test_no_filters_keeps_server_order() {
        let query = CatalogQuery::default();

        assert!(!query.is_active());
        assert_eq!(ids(&query.apply(&menu())), vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_ascending_sort_is_stable_on_ties() {
        let query = CatalogQuery {
            sort: Some(PriceSort::Ascending),
            ..CatalogQuery::default()
        };

        // 11 and 13 share a price and keep their original relative order.
        assert_eq!(ids(&query.apply(&menu())), vec![14, 11, 13, 12, 10]);
    }

    #[test]
    fn test_descending_is_exact_reverse_of_ascending() {
        let products = menu();
        let asc = CatalogQuery {
            sort: Some(PriceSort::Ascending),
            ..CatalogQuery::default()
        };
        let desc = CatalogQuery {
            sort: Some(PriceSort::Descending),
            ..CatalogQuery::default()
        };

        let mut reversed = ids(&asc.apply(&products));
        reversed.reverse();

        assert_eq!(ids(&desc.apply(&products)), reversed);
    }

    #[test]
    fn test_price_sort_parsing() {
        assert_eq!("asc".parse::<PriceSort>().unwrap(), PriceSort::Ascending);
        assert_eq!("DESC".parse::<PriceSort>().unwrap(), PriceSort::Descending);
        assert!("price".parse::<PriceSort>().is_err());
        assert_eq!(PriceSort::Descending.to_string(), "desc");
    }

    #[test]
    fn test_blank_search_is_inactive() {
        let query = CatalogQuery {
            search: "   ".to_string(),
            ..CatalogQuery::default()
        };

        assert!(!query.is_active());
        assert_eq!(query.apply(&menu()).len(), 5);
    }
}

//! Category (`categoria`) records and write payloads.

use serde::{Deserialize, Serialize};

use super::{CategoryId, null_as_default};

/// A named grouping of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "descricao", default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Body of `POST /categoria/cadastrar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    #[serde(rename = "descricao")]
    pub description: String,
}

impl CategoryInput {
    #[must_use]
    pub fn into_update(self, id: CategoryId) -> CategoryUpdate {
        CategoryUpdate { id, input: self }
    }
}

/// Body of `PUT /categoria/atualizar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    #[serde(flatten)]
    pub input: CategoryInput,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_null_description_reads_as_empty() {
        let category: Category =
            serde_json::from_value(json!({ "id": 3, "descricao": null })).unwrap();

        assert_eq!(category.id, CategoryId::new(3));
        assert!(category.description.is_empty());
    }
}

//! Category strip: every category as a link into the filtered catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use leve_bem_core::{CatalogQuery, Category};
use tracing::instrument;

use super::catalog::{CategoryLink, catalog_href};
use crate::filters;
use crate::state::AppState;

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate {
    pub categories: Vec<CategoryLink>,
    pub load_failed: bool,
}

/// Each category as a link to the catalog filtered by it.
#[must_use]
pub fn category_links(categories: &[Category]) -> Vec<CategoryLink> {
    categories
        .iter()
        .map(|category| CategoryLink {
            description: category.description.clone(),
            href: catalog_href(
                &CatalogQuery {
                    category: Some(category.id),
                    ..CatalogQuery::default()
                },
                None,
            ),
            selected: false,
        })
        .collect()
}

/// Display the category listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> CategoriesTemplate {
    match state.api().categories().list_all().await {
        Ok(categories) => CategoriesTemplate {
            categories: category_links(&categories),
            load_failed: false,
        },
        Err(e) => {
            tracing::error!("Failed to fetch categories: {e}");
            CategoriesTemplate {
                categories: Vec::new(),
                load_failed: true,
            }
        }
    }
}

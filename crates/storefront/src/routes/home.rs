//! Home showcase: the category strip plus two product rows whose buy
//! buttons go straight to the order confirmation.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use leve_bem_core::Product;
use tracing::instrument;

use super::catalog::{CategoryLink, ProductView};
use super::categories::category_links;
use crate::filters;
use crate::state::AppState;

/// Products in the "Mais Pedidos" row.
pub const HIGHLIGHT_COUNT: usize = 6;

/// Products in the "Ofertas Relâmpago" row, taken after the highlights.
pub const OFFER_COUNT: usize = 6;

/// Offers shown when the menu is too short to fill the row past the
/// highlights.
pub const OFFER_FALLBACK_COUNT: usize = 5;

/// Split the menu into the highlight and offer rows.
///
/// Offers are the products after the highlights; when there are none, the
/// first few products are offered again.
#[must_use]
pub fn showcase_rows(products: &[Product]) -> (Vec<ProductView>, Vec<ProductView>) {
    let highlights = products
        .iter()
        .take(HIGHLIGHT_COUNT)
        .map(ProductView::from)
        .collect();

    let mut offers: Vec<ProductView> = products
        .iter()
        .skip(HIGHLIGHT_COUNT)
        .take(OFFER_COUNT)
        .map(ProductView::from)
        .collect();
    if offers.is_empty() {
        offers = products
            .iter()
            .take(OFFER_FALLBACK_COUNT)
            .map(ProductView::from)
            .collect();
    }

    (highlights, offers)
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryLink>,
    pub highlights: Vec<ProductView>,
    pub offers: Vec<ProductView>,
    pub load_failed: bool,
}

/// Display the home showcase.
///
/// Same fan-out as the catalog: either request failing empties the page and
/// shows the error banner.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> HomeTemplate {
    let api = state.api();
    let products_api = api.products();
    let categories_api = api.categories();

    match tokio::try_join!(products_api.list_all(), categories_api.list_all()) {
        Ok((products, categories)) => {
            let (highlights, offers) = showcase_rows(&products);
            HomeTemplate {
                categories: category_links(&categories),
                highlights,
                offers,
                load_failed: false,
            }
        }
        Err(e) => {
            tracing::error!("Failed to load home showcase: {e}");
            HomeTemplate {
                categories: Vec::new(),
                highlights: Vec::new(),
                offers: Vec::new(),
                load_failed: true,
            }
        }
    }
}

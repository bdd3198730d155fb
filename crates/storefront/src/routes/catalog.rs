//! Catalog page: category filter, name search, price sort and the
//! purchase confirmation modal.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use leve_bem_core::{CatalogQuery, Category, PriceSort, Product, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::set_pending_order;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub ingredients: String,
    pub calories: u32,
    pub photo: String,
    pub has_photo: bool,
    pub category: String,
    /// Opens the confirmation modal; empty outside the catalog grid.
    pub buy_href: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        let photo = product.photo.clone().unwrap_or_default();
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price().display(),
            ingredients: product.ingredients.clone(),
            calories: product.calories,
            has_photo: !photo.trim().is_empty(),
            photo,
            category: product
                .category
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            buy_href: String::new(),
        }
    }
}

/// A category filter chip.
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub description: String,
    pub href: String,
    pub selected: bool,
}

/// A price sort option.
#[derive(Debug, Clone)]
pub struct SortLink {
    pub label: &'static str,
    pub href: String,
    pub selected: bool,
}

/// The purchase confirmation modal.
#[derive(Debug, Clone)]
pub struct OrderModal {
    pub product: ProductView,
    /// Back to the catalog with the same filters and no modal.
    pub cancel_href: String,
}

/// Raw catalog query parameters.
///
/// Values are parsed leniently: an empty or malformed value is ignored
/// rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub categoria: Option<String>,
    pub busca: Option<String>,
    pub ordem: Option<String>,
    pub comprar: Option<String>,
}

impl CatalogParams {
    /// The filter and sort selection.
    #[must_use]
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            category: parse_param(self.categoria.as_deref()),
            search: self.busca.as_deref().unwrap_or_default().trim().to_string(),
            sort: parse_param(self.ordem.as_deref()),
        }
    }

    /// Product whose confirmation modal should be open.
    #[must_use]
    pub fn buy(&self) -> Option<ProductId> {
        parse_param(self.comprar.as_deref())
    }
}

fn parse_param<T: FromStr>(value: Option<&str>) -> Option<T> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

/// Catalog URL for `query`, optionally with the modal for `buy` open.
#[must_use]
pub fn catalog_href(query: &CatalogQuery, buy: Option<ProductId>) -> String {
    let mut params = Vec::new();
    if let Some(category) = query.category {
        params.push(format!("categoria={category}"));
    }
    let search = query.search.trim();
    if !search.is_empty() {
        params.push(format!("busca={}", urlencoding::encode(search)));
    }
    if let Some(sort) = query.sort {
        params.push(format!("ordem={sort}"));
    }
    if let Some(id) = buy {
        params.push(format!("comprar={id}"));
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub items: Vec<ProductView>,
    pub categories: Vec<CategoryLink>,
    pub all_categories_href: String,
    pub no_category_selected: bool,
    pub sort_links: Vec<SortLink>,
    pub search: String,
    /// Hidden inputs so the search form keeps the other selections.
    pub category_param: String,
    pub sort_param: String,
    /// Any filter or sort is active, so "Limpar" is offered.
    pub has_filters: bool,
    pub load_failed: bool,
    pub modal: Option<OrderModal>,
}

impl CatalogTemplate {
    fn new(
        query: &CatalogQuery,
        products: &[Product],
        categories: &[Category],
        load_failed: bool,
        modal: Option<OrderModal>,
    ) -> Self {
        let items = query
            .apply(products)
            .into_iter()
            .map(|product| ProductView {
                buy_href: catalog_href(query, Some(product.id)),
                ..ProductView::from(product)
            })
            .collect();

        let categories = categories
            .iter()
            .map(|category| CategoryLink {
                description: category.description.clone(),
                href: catalog_href(
                    &CatalogQuery {
                        category: Some(category.id),
                        ..query.clone()
                    },
                    None,
                ),
                selected: query.category == Some(category.id),
            })
            .collect();

        let sort_links = [
            ("Relevância", None),
            ("Menor preço", Some(PriceSort::Ascending)),
            ("Maior preço", Some(PriceSort::Descending)),
        ]
        .into_iter()
        .map(|(label, sort)| SortLink {
            label,
            href: catalog_href(
                &CatalogQuery {
                    sort,
                    ..query.clone()
                },
                None,
            ),
            selected: query.sort == sort,
        })
        .collect();

        Self {
            items,
            categories,
            all_categories_href: catalog_href(
                &CatalogQuery {
                    category: None,
                    ..query.clone()
                },
                None,
            ),
            no_category_selected: query.category.is_none(),
            sort_links,
            search: query.search.clone(),
            category_param: query.category.map(|c| c.to_string()).unwrap_or_default(),
            sort_param: query.sort.map(|s| s.to_string()).unwrap_or_default(),
            has_filters: *query != CatalogQuery::default(),
            load_failed,
            modal,
        }
    }
}

/// Display the catalog.
///
/// Products and categories are fetched concurrently. If either request fails
/// the page still renders, with an error banner and no products.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
    session: Session,
) -> Result<CatalogTemplate> {
    let query = params.query();
    let api = state.api();
    let products_api = api.products();
    let categories_api = api.categories();

    let (products, categories, load_failed) =
        match tokio::try_join!(products_api.list_all(), categories_api.list_all()) {
            Ok((products, categories)) => (products, categories, false),
            Err(e) => {
                tracing::error!("Failed to load catalog: {e}");
                (Vec::new(), Vec::new(), true)
            }
        };

    let selected = params
        .buy()
        .and_then(|id| products.iter().find(|p| p.id == id));
    let modal = match selected {
        Some(product) => {
            set_pending_order(&session, product).await?;
            Some(OrderModal {
                product: ProductView::from(product),
                cancel_href: catalog_href(&query, None),
            })
        }
        None => None,
    };

    Ok(CatalogTemplate::new(
        &query,
        &products,
        &categories,
        load_failed,
        modal,
    ))
}

//! Product management: card grid, create/edit form, delete confirmation.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use leve_bem_core::{Category, Product, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{DeleteModal, parse_id};
use crate::error::Result;
use crate::filters;
use crate::middleware::{OptionalAdminAuth, set_flash, take_flash};
use crate::models::{Flash, ProductForm};
use crate::state::AppState;

const SAVE_FAILED: &str = "Não foi possível salvar o prato. Tente novamente.";

/// Product card data for templates.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub ingredients: String,
    pub calories: u32,
    pub category: String,
    pub photo: String,
    pub has_photo: bool,
    pub edit_href: String,
    pub delete_href: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let photo = product.photo.clone().unwrap_or_default();
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price().display(),
            ingredients: product.ingredients.clone(),
            calories: product.calories,
            category: product
                .category
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            has_photo: !photo.trim().is_empty(),
            photo,
            edit_href: format!("/produtos/editar/{}", product.id),
            delete_href: format!("/produtos?excluir={}", product.id),
        }
    }
}

/// An entry of the form's category select.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub id: String,
    pub description: String,
    pub selected: bool,
}

impl CategoryOption {
    fn list(categories: &[Category], selected: &str) -> Vec<Self> {
        let selected = selected.trim();
        categories
            .iter()
            .map(|category| {
                let id = category.id.to_string();
                Self {
                    selected: id == selected,
                    id,
                    description: category.description.clone(),
                }
            })
            .collect()
    }
}

/// Products list page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub admin_name: Option<String>,
    pub current_path: &'static str,
    pub flash: Option<Flash>,
    pub products: Vec<ProductCard>,
    pub load_failed: bool,
    pub delete_modal: Option<DeleteModal>,
}

/// Shared create/edit form template.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub admin_name: Option<String>,
    pub current_path: &'static str,
    pub flash: Option<Flash>,
    pub title: &'static str,
    pub action: String,
    pub form: ProductForm,
    pub categories: Vec<CategoryOption>,
    pub error: Option<String>,
}

/// Whether the form creates a product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

impl FormMode {
    const fn title(self) -> &'static str {
        match self {
            Self::Create => "Cadastrar prato",
            Self::Edit(_) => "Editar prato",
        }
    }

    fn action(self) -> String {
        match self {
            Self::Create => "/produtos/cadastrar".to_string(),
            Self::Edit(id) => format!("/produtos/editar/{id}"),
        }
    }
}

/// Products list query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Product whose delete confirmation should be open.
    pub excluir: Option<String>,
}

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/produtos", get(index))
        .route("/produtos/cadastrar", get(new_form).post(create))
        .route("/produtos/editar/{id}", get(edit_form).post(update))
        .route("/produtos/{id}/excluir", post(delete))
}

/// Products list page.
///
/// GET /produtos
#[instrument(skip(admin, state, session))]
async fn index(
    admin: OptionalAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
    session: Session,
) -> Result<Html<String>> {
    let flash = take_flash(&session).await;

    let (products, load_failed) = match state.api().products().list_all().await {
        Ok(products) => (products, false),
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            (Vec::new(), true)
        }
    };

    let delete_modal = parse_id::<ProductId>(query.excluir.as_deref())
        .and_then(|id| products.iter().find(|p| p.id == id))
        .map(|product| DeleteModal {
            name: product.name.clone(),
            action: format!("/produtos/{}/excluir", product.id),
            cancel_href: "/produtos",
        });

    let template = ProductsIndexTemplate {
        admin_name: admin.name(),
        current_path: "/produtos",
        flash,
        products: products.iter().map(ProductCard::from).collect(),
        load_failed,
        delete_modal,
    };

    Ok(Html(template.render()?))
}

/// Render the form with the category select filled in.
///
/// A failed category fetch leaves the select empty and shows an error.
async fn render_form(
    state: &AppState,
    admin_name: Option<String>,
    mode: FormMode,
    form: ProductForm,
    error: Option<String>,
) -> Result<Html<String>> {
    let (categories, categories_error) = match state.api().categories().list_all().await {
        Ok(categories) => (CategoryOption::list(&categories, &form.categoria), None),
        Err(e) => {
            tracing::error!("Failed to fetch categories for product form: {e}");
            (
                Vec::new(),
                Some("Não foi possível carregar as categorias.".to_string()),
            )
        }
    };

    let template = ProductFormTemplate {
        admin_name,
        current_path: "/produtos",
        flash: None,
        title: mode.title(),
        action: mode.action(),
        form,
        categories,
        error: error.or(categories_error),
    };

    Ok(Html(template.render()?))
}

/// Empty create form.
///
/// GET /produtos/cadastrar
async fn new_form(admin: OptionalAdminAuth, State(state): State<AppState>) -> Result<Html<String>> {
    render_form(&state, admin.name(), FormMode::Create, ProductForm::default(), None).await
}

/// Create a product.
///
/// POST /produtos/cadastrar
#[instrument(skip_all)]
async fn create(
    admin: OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let input = match form.validate(state.config().owner_user_id) {
        Ok(input) => input,
        Err(e) => {
            tracing::info!("Product form rejected: {e}");
            return Ok(render_form(&state, admin.name(), FormMode::Create, form, Some(e.to_string()))
                .await?
                .into_response());
        }
    };

    match state.api().products().create(&input).await {
        Ok(product) => {
            tracing::info!(id = %product.id, "Product created");
            set_flash(&session, Flash::success("Produto cadastrado com sucesso!")).await;
            Ok(Redirect::to("/produtos").into_response())
        }
        Err(e) => {
            tracing::error!("Failed to create product: {e}");
            Ok(render_form(&state, admin.name(), FormMode::Create, form, Some(SAVE_FAILED.to_string()))
                .await?
                .into_response())
        }
    }
}

/// Edit form, pre-populated from the API.
///
/// GET /produtos/editar/{id}
#[instrument(skip(admin, state, session))]
async fn edit_form(
    admin: OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<ProductId>,
) -> Result<Response> {
    match state.api().products().get_by_id(id).await {
        Ok(product) => Ok(render_form(
            &state,
            admin.name(),
            FormMode::Edit(id),
            ProductForm::from(&product),
            None,
        )
        .await?
        .into_response()),
        Err(e) => {
            tracing::error!("Failed to fetch product {id}: {e}");
            set_flash(&session, Flash::error("Prato não encontrado.")).await;
            Ok(Redirect::to("/produtos").into_response())
        }
    }
}

/// Update a product.
///
/// POST /produtos/editar/{id}
#[instrument(skip(admin, state, session, form))]
async fn update(
    admin: OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<ProductId>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let mode = FormMode::Edit(id);
    let update = match form.validate(state.config().owner_user_id) {
        Ok(input) => input.into_update(id),
        Err(e) => {
            tracing::info!("Product form rejected: {e}");
            return Ok(render_form(&state, admin.name(), mode, form, Some(e.to_string()))
                .await?
                .into_response());
        }
    };

    match state.api().products().update(&update).await {
        Ok(_) => {
            tracing::info!("Product updated");
            set_flash(&session, Flash::success("Produto atualizado com sucesso!")).await;
            Ok(Redirect::to("/produtos").into_response())
        }
        Err(e) => {
            tracing::error!("Failed to update product: {e}");
            Ok(render_form(&state, admin.name(), mode, form, Some(SAVE_FAILED.to_string()))
                .await?
                .into_response())
        }
    }
}

/// Delete a product and go back to the (re-fetched) list.
///
/// POST /produtos/{id}/excluir
#[instrument(skip(state, session))]
async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<ProductId>,
) -> Redirect {
    match state.api().products().delete(id).await {
        Ok(()) => {
            tracing::info!("Product deleted");
            set_flash(&session, Flash::success("Produto excluído com sucesso!")).await;
        }
        Err(e) => {
            tracing::error!("Failed to delete product: {e}");
            set_flash(&session, Flash::error("Não foi possível excluir o prato.")).await;
        }
    }
    Redirect::to("/produtos")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use leve_bem_core::CategoryId;
    use rust_decimal::Decimal;

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(7),
            name: "Wrap".to_string(),
            price: Decimal::new(2250, 2),
            ingredients: "Frango".to_string(),
            calories: 320,
            photo: None,
            category: Some(Category {
                id: CategoryId::new(1),
                description: "Lanches".to_string(),
            }),
            owner: None,
        }
    }

    #[test]
    fn test_card_links() {
        let card = ProductCard::from(&product());

        assert_eq!(card.price, "R$ 22,50");
        assert_eq!(card.category, "Lanches");
        assert_eq!(card.edit_href, "/produtos/editar/7");
        assert_eq!(card.delete_href, "/produtos?excluir=7");
        assert!(!card.has_photo);
    }

    #[test]
    fn test_category_options_mark_selection() {
        let categories = vec![
            Category {
                id: CategoryId::new(1),
                description: "Lanches".to_string(),
            },
            Category {
                id: CategoryId::new(2),
                description: "Bebidas".to_string(),
            },
        ];

        let options = CategoryOption::list(&categories, "2");
        let selected: Vec<bool> = options.iter().map(|o| o.selected).collect();
        assert_eq!(selected, vec![false, true]);
    }

    #[test]
    fn test_form_mode() {
        assert_eq!(FormMode::Create.action(), "/produtos/cadastrar");
        assert_eq!(FormMode::Edit(ProductId::new(3)).action(), "/produtos/editar/3");
        assert_eq!(FormMode::Edit(ProductId::new(3)).title(), "Editar prato");
    }

    #[test]
    fn test_index_renders_delete_modal() {
        let template = ProductsIndexTemplate {
            admin_name: Some("Ana".to_string()),
            current_path: "/produtos",
            flash: Some(Flash::success("Produto cadastrado com sucesso!")),
            products: vec![ProductCard::from(&product())],
            load_failed: false,
            delete_modal: Some(DeleteModal {
                name: "Wrap".to_string(),
                action: "/produtos/7/excluir".to_string(),
                cancel_href: "/produtos",
            }),
        };
        let html = template.render().unwrap();

        assert!(html.contains("Produto cadastrado com sucesso!"));
        assert!(html.contains(r#"action="/produtos/7/excluir""#));
        assert!(html.contains("Ana"));
    }

    #[test]
    fn test_form_keeps_typed_values() {
        let template = ProductFormTemplate {
            admin_name: None,
            current_path: "/produtos",
            flash: None,
            title: FormMode::Create.title(),
            action: FormMode::Create.action(),
            form: ProductForm {
                nome: String::new(),
                preco: "12,50".to_string(),
                ..ProductForm::default()
            },
            categories: Vec::new(),
            error: Some("Informe o nome do prato.".to_string()),
        };
        let html = template.render().unwrap();

        assert!(html.contains("Informe o nome do prato."));
        assert!(html.contains(r#"value="12,50""#));
    }

    #[test]
    fn test_form_constrains_numeric_inputs() {
        let template = ProductFormTemplate {
            admin_name: None,
            current_path: "/produtos",
            flash: None,
            title: FormMode::Create.title(),
            action: FormMode::Create.action(),
            form: ProductForm::default(),
            categories: Vec::new(),
            error: None,
        };
        let html = template.render().unwrap();

        assert!(html.contains(r#"name="preco""#));
        assert!(html.contains(r#"pattern="\d+([.,]\d{1,2})?""#));
        assert!(html.contains(r#"name="calorias" value="" min="0""#));
    }
}

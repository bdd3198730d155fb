//! Category management.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use leve_bem_core::{Category, CategoryId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{DeleteModal, parse_id};
use crate::error::Result;
use crate::filters;
use crate::middleware::{OptionalAdminAuth, set_flash, take_flash};
use crate::models::{CategoryForm, Flash};
use crate::state::AppState;

const SAVE_FAILED: &str = "Não foi possível salvar a categoria. Tente novamente.";

/// Category row data for templates.
#[derive(Debug, Clone)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub description: String,
    pub edit_href: String,
    pub delete_href: String,
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            description: category.description.clone(),
            edit_href: format!("/categorias/editar/{}", category.id),
            delete_href: format!("/categorias?excluir={}", category.id),
        }
    }
}

/// Categories list page template.
#[derive(Template)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub admin_name: Option<String>,
    pub current_path: &'static str,
    pub flash: Option<Flash>,
    pub categories: Vec<CategoryRow>,
    pub load_failed: bool,
    pub delete_modal: Option<DeleteModal>,
}

/// Shared create/edit form template.
#[derive(Template)]
#[template(path = "categories/form.html")]
pub struct CategoryFormTemplate {
    pub admin_name: Option<String>,
    pub current_path: &'static str,
    pub flash: Option<Flash>,
    pub title: &'static str,
    pub action: String,
    pub form: CategoryForm,
    pub error: Option<String>,
}

impl CategoryFormTemplate {
    fn new(
        admin_name: Option<String>,
        id: Option<CategoryId>,
        form: CategoryForm,
        error: Option<String>,
    ) -> Self {
        let (title, action) = match id {
            Some(id) => ("Editar categoria", format!("/categorias/editar/{id}")),
            None => ("Cadastrar categoria", "/categorias/cadastrar".to_string()),
        };
        Self {
            admin_name,
            current_path: "/categorias",
            flash: None,
            title,
            action,
            form,
            error,
        }
    }
}

/// Categories list query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Category whose delete confirmation should be open.
    pub excluir: Option<String>,
}

/// Build the categories router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categorias", get(index))
        .route("/categorias/cadastrar", get(new_form).post(create))
        .route("/categorias/editar/{id}", get(edit_form).post(update))
        .route("/categorias/{id}/excluir", post(delete))
}

/// Categories list page.
///
/// GET /categorias
#[instrument(skip(admin, state, session))]
async fn index(
    admin: OptionalAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
    session: Session,
) -> Result<Html<String>> {
    let flash = take_flash(&session).await;

    let (categories, load_failed) = match state.api().categories().list_all().await {
        Ok(categories) => (categories, false),
        Err(e) => {
            tracing::error!("Failed to fetch categories: {e}");
            (Vec::new(), true)
        }
    };

    let delete_modal = parse_id::<CategoryId>(query.excluir.as_deref())
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|category| DeleteModal {
            name: category.description.clone(),
            action: format!("/categorias/{}/excluir", category.id),
            cancel_href: "/categorias",
        });

    let template = CategoriesIndexTemplate {
        admin_name: admin.name(),
        current_path: "/categorias",
        flash,
        categories: categories.iter().map(CategoryRow::from).collect(),
        load_failed,
        delete_modal,
    };

    Ok(Html(template.render()?))
}

/// Empty create form.
///
/// GET /categorias/cadastrar
async fn new_form(admin: OptionalAdminAuth) -> Result<Html<String>> {
    let template = CategoryFormTemplate::new(admin.name(), None, CategoryForm::default(), None);
    Ok(Html(template.render()?))
}

/// Create a category.
///
/// POST /categorias/cadastrar
#[instrument(skip_all)]
async fn create(
    admin: OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CategoryForm>,
) -> Result<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(e) => {
            tracing::info!("Category form rejected: {e}");
            let template = CategoryFormTemplate::new(admin.name(), None, form, Some(e.to_string()));
            return Ok(Html(template.render()?).into_response());
        }
    };

    match state.api().categories().create(&input).await {
        Ok(category) => {
            tracing::info!(id = %category.id, "Category created");
            set_flash(&session, Flash::success("Categoria cadastrada com sucesso!")).await;
            Ok(Redirect::to("/categorias").into_response())
        }
        Err(e) => {
            tracing::error!("Failed to create category: {e}");
            let template =
                CategoryFormTemplate::new(admin.name(), None, form, Some(SAVE_FAILED.to_string()));
            Ok(Html(template.render()?).into_response())
        }
    }
}

/// Edit form, pre-populated from the API.
///
/// GET /categorias/editar/{id}
#[instrument(skip(admin, state, session))]
async fn edit_form(
    admin: OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<CategoryId>,
) -> Result<Response> {
    match state.api().categories().get_by_id(id).await {
        Ok(category) => {
            let form = CategoryForm {
                descricao: category.description,
            };
            let template = CategoryFormTemplate::new(admin.name(), Some(id), form, None);
            Ok(Html(template.render()?).into_response())
        }
        Err(e) => {
            tracing::error!("Failed to fetch category {id}: {e}");
            set_flash(&session, Flash::error("Categoria não encontrada.")).await;
            Ok(Redirect::to("/categorias").into_response())
        }
    }
}

/// Update a category.
///
/// POST /categorias/editar/{id}
#[instrument(skip(admin, state, session, form))]
async fn update(
    admin: OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<CategoryId>,
    Form(form): Form<CategoryForm>,
) -> Result<Response> {
    let update = match form.validate() {
        Ok(input) => input.into_update(id),
        Err(e) => {
            tracing::info!("Category form rejected: {e}");
            let template = CategoryFormTemplate::new(admin.name(), Some(id), form, Some(e.to_string()));
            return Ok(Html(template.render()?).into_response());
        }
    };

    match state.api().categories().update(&update).await {
        Ok(_) => {
            tracing::info!("Category updated");
            set_flash(&session, Flash::success("Categoria atualizada com sucesso!")).await;
            Ok(Redirect::to("/categorias").into_response())
        }
        Err(e) => {
            tracing::error!("Failed to update category: {e}");
            let template =
                CategoryFormTemplate::new(admin.name(), Some(id), form, Some(SAVE_FAILED.to_string()));
            Ok(Html(template.render()?).into_response())
        }
    }
}

/// Delete a category and go back to the (re-fetched) list.
///
/// Whether a category that still has products can be deleted is up to the
/// API; a refusal shows up as an error flash.
///
/// POST /categorias/{id}/excluir
#[instrument(skip(state, session))]
async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<CategoryId>,
) -> Redirect {
    match state.api().categories().delete(id).await {
        Ok(()) => {
            tracing::info!("Category deleted");
            set_flash(&session, Flash::success("Categoria excluída com sucesso!")).await;
        }
        Err(e) => {
            tracing::error!("Failed to delete category: {e}");
            set_flash(&session, Flash::error("Não foi possível excluir a categoria.")).await;
        }
    }
    Redirect::to("/categorias")
}

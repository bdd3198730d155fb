//! In-process stand-in for the Leve&Bem REST API.
//!
//! Holds products, categories and users in memory, records every request it
//! receives, and can be switched into a failing mode where every endpoint,
//! or every path under a given prefix, answers `500`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use leve_bem_core::{
    Category, CategoryId, CategoryInput, CategoryUpdate, Product, ProductId, ProductInput,
    ProductUpdate, User, UserId, UserInput, UserUpdate,
};

use crate::fixtures;

/// A request as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
}

#[derive(Debug, Default)]
struct MockData {
    products: Vec<Product>,
    categories: Vec<Category>,
    users: Vec<User>,
    requests: Vec<RecordedRequest>,
    failing: bool,
    failing_prefixes: Vec<String>,
    next_id: i64,
}

impl MockData {
    fn fails(&self, path: &str) -> bool {
        self.failing || self.failing_prefixes.iter().any(|p| path.starts_with(p))
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Category as embedded in a product; unknown ids get an empty description.
    fn category(&self, id: CategoryId) -> Category {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or(Category {
                id,
                description: String::new(),
            })
    }
}

type Shared = Arc<Mutex<MockData>>;

fn lock(data: &Shared) -> MutexGuard<'_, MockData> {
    data.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a running mock API.
#[derive(Debug, Clone)]
pub struct MockApi {
    base_url: String,
    data: Shared,
}

impl MockApi {
    /// Start an empty mock.
    pub async fn start() -> Self {
        Self::start_with(Vec::new(), Vec::new()).await
    }

    /// Start a mock serving the sample menu and users.
    pub async fn with_sample_menu() -> Self {
        let api = Self::start_with(fixtures::categories(), fixtures::products()).await;
        lock(&api.data).users = fixtures::users();
        api
    }

    /// Start a mock serving `categories` and `products`.
    pub async fn start_with(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let data: Shared = Arc::new(Mutex::new(MockData {
            products,
            categories,
            next_id: 100,
            ..MockData::default()
        }));

        let base_url = crate::serve(router(data.clone())).await;
        Self { base_url, data }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.data).requests.clone()
    }

    /// Number of requests with `method` whose path starts with `prefix`.
    #[must_use]
    pub fn count(&self, method: &Method, prefix: &str) -> usize {
        lock(&self.data)
            .requests
            .iter()
            .filter(|r| r.method == method && r.path.starts_with(prefix))
            .count()
    }

    /// Current product list.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        lock(&self.data).products.clone()
    }

    /// Current category list.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        lock(&self.data).categories.clone()
    }

    /// Make every endpoint answer `500` (or stop doing so).
    pub fn set_failing(&self, failing: bool) {
        lock(&self.data).failing = failing;
    }

    /// Make only the paths starting with `prefix` answer `500`.
    pub fn fail_path(&self, prefix: &str) {
        lock(&self.data).failing_prefixes.push(prefix.to_string());
    }
}

fn router(data: Shared) -> Router {
    Router::new()
        .route("/alimentacao/all", get(list_products))
        .route(
            "/alimentacao/{id}",
            get(get_product).delete(delete_product),
        )
        .route("/alimentacao/nome/{name}", get(find_products))
        .route("/alimentacao/cadastrar", post(create_product))
        .route("/alimentacao/atualizar", put(update_product))
        .route("/alimentacao/recomendacao/{id}", get(recommend))
        .route("/categoria/all", get(list_categories))
        .route(
            "/categoria/{id}",
            get(get_category).delete(delete_category),
        )
        .route("/categoria/descricao/{text}", get(find_categories))
        .route("/categoria/cadastrar", post(create_category))
        .route("/categoria/atualizar", put(update_category))
        .route("/usuarios/all", get(list_users))
        .route("/usuarios/{id}", get(get_user).delete(delete_user))
        .route("/usuarios/cadastrar", post(create_user))
        .route("/usuarios/atualizar", put(update_user))
        .layer(axum::middleware::from_fn_with_state(data.clone(), record))
        .with_state(data)
}

/// Log the request, then either fail it or pass it on.
async fn record(State(data): State<Shared>, request: Request, next: Next) -> Response {
    let failing = {
        let mut data = lock(&data);
        let path = request.uri().path().to_string();
        let failing = data.fails(&path);
        data.requests.push(RecordedRequest {
            method: request.method().clone(),
            path,
        });
        failing
    };

    if failing {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock failure").into_response();
    }
    next.run(request).await
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

// =============================================================================
// Products
// =============================================================================

async fn list_products(State(data): State<Shared>) -> Json<Vec<Product>> {
    Json(lock(&data).products.clone())
}

async fn get_product(State(data): State<Shared>, Path(id): Path<ProductId>) -> Response {
    lock(&data)
        .products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map_or_else(not_found, |p| Json(p).into_response())
}

async fn find_products(State(data): State<Shared>, Path(name): Path<String>) -> Json<Vec<Product>> {
    let needle = name.to_lowercase();
    Json(
        lock(&data)
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

async fn create_product(
    State(data): State<Shared>,
    Json(input): Json<ProductInput>,
) -> impl IntoResponse {
    let mut data = lock(&data);
    let product = Product {
        id: ProductId::new(data.next_id()),
        name: input.name,
        price: input.price,
        ingredients: input.ingredients,
        calories: input.calories,
        photo: None,
        category: Some(data.category(input.category.id)),
        owner: None,
    };
    data.products.push(product.clone());
    (StatusCode::CREATED, Json(product))
}

async fn update_product(State(data): State<Shared>, Json(update): Json<ProductUpdate>) -> Response {
    let mut data = lock(&data);
    let category = data.category(update.input.category.id);
    let Some(product) = data.products.iter_mut().find(|p| p.id == update.id) else {
        return not_found();
    };

    product.name = update.input.name;
    product.price = update.input.price;
    product.ingredients = update.input.ingredients;
    product.calories = update.input.calories;
    product.category = Some(category);
    Json(product.clone()).into_response()
}

async fn delete_product(State(data): State<Shared>, Path(id): Path<ProductId>) -> StatusCode {
    let mut data = lock(&data);
    let before = data.products.len();
    data.products.retain(|p| p.id != id);
    if data.products.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Other products of the same category.
async fn recommend(State(data): State<Shared>, Path(id): Path<ProductId>) -> Response {
    let data = lock(&data);
    let Some(product) = data.products.iter().find(|p| p.id == id) else {
        return not_found();
    };
    let category = product.category_id();
    let related: Vec<Product> = data
        .products
        .iter()
        .filter(|p| p.id != id && p.category_id() == category)
        .cloned()
        .collect();
    Json(related).into_response()
}

// =============================================================================
// Categories
// =============================================================================

async fn list_categories(State(data): State<Shared>) -> Json<Vec<Category>> {
    Json(lock(&data).categories.clone())
}

async fn get_category(State(data): State<Shared>, Path(id): Path<CategoryId>) -> Response {
    lock(&data)
        .categories
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map_or_else(not_found, |c| Json(c).into_response())
}

async fn find_categories(
    State(data): State<Shared>,
    Path(text): Path<String>,
) -> Json<Vec<Category>> {
    let needle = text.to_lowercase();
    Json(
        lock(&data)
            .categories
            .iter()
            .filter(|c| c.description.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

async fn create_category(
    State(data): State<Shared>,
    Json(input): Json<CategoryInput>,
) -> impl IntoResponse {
    let mut data = lock(&data);
    let category = Category {
        id: CategoryId::new(data.next_id()),
        description: input.description,
    };
    data.categories.push(category.clone());
    (StatusCode::CREATED, Json(category))
}

async fn update_category(
    State(data): State<Shared>,
    Json(update): Json<CategoryUpdate>,
) -> Response {
    let mut data = lock(&data);
    let Some(category) = data.categories.iter_mut().find(|c| c.id == update.id) else {
        return not_found();
    };
    category.description = update.input.description;
    Json(category.clone()).into_response()
}

/// Refuses to delete a category that still has products.
async fn delete_category(State(data): State<Shared>, Path(id): Path<CategoryId>) -> StatusCode {
    let mut data = lock(&data);
    if data.products.iter().any(|p| p.category_id() == Some(id)) {
        return StatusCode::CONFLICT;
    }
    let before = data.categories.len();
    data.categories.retain(|c| c.id != id);
    if data.categories.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

// =============================================================================
// Users
// =============================================================================

async fn list_users(State(data): State<Shared>) -> Json<Vec<User>> {
    Json(lock(&data).users.clone())
}

async fn get_user(State(data): State<Shared>, Path(id): Path<UserId>) -> Response {
    lock(&data)
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .map_or_else(not_found, |u| Json(u).into_response())
}

async fn create_user(State(data): State<Shared>, Json(input): Json<UserInput>) -> impl IntoResponse {
    let mut data = lock(&data);
    let user = User {
        id: UserId::new(data.next_id()),
        name: Some(input.name),
        login: Some(input.login),
        photo: input.photo,
    };
    data.users.push(user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn update_user(State(data): State<Shared>, Json(update): Json<UserUpdate>) -> Response {
    let mut data = lock(&data);
    let Some(user) = data.users.iter_mut().find(|u| u.id == update.id) else {
        return not_found();
    };
    user.name = Some(update.input.name);
    user.login = Some(update.input.login);
    user.photo = update.input.photo;
    Json(user.clone()).into_response()
}

async fn delete_user(State(data): State<Shared>, Path(id): Path<UserId>) -> StatusCode {
    let mut data = lock(&data);
    let before = data.users.len();
    data.users.retain(|u| u.id != id);
    if data.users.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

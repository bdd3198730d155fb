//! `ApiClient` against the in-process mock API.

#![allow(clippy::unwrap_used)]

use leve_bem_core::api::{ApiClient, ApiError};
use leve_bem_core::{
    CategoryId, CategoryInput, EntityRef, ProductId, ProductInput, UserId,
};
use leve_bem_integration_tests::MockApi;
use leve_bem_integration_tests::fixtures::{BEBIDAS, LANCHES, SALADA, SUCO, WRAP};
use reqwest::Method;
use rust_decimal::Decimal;

fn client(api: &MockApi) -> ApiClient {
    ApiClient::new(api.base_url()).unwrap()
}

#[tokio::test]
async fn test_list_all_keeps_server_order() {
    let api = MockApi::with_sample_menu().await;

    let products = client(&api).products().list_all().await.unwrap();

    let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec![ProductId::new(WRAP), ProductId::new(SUCO), ProductId::new(SALADA)]
    );
    assert_eq!(products[0].price, Decimal::new(2250, 2));
    assert_eq!(products[0].category_id(), Some(CategoryId::new(LANCHES)));
}

#[tokio::test]
async fn test_get_by_id_maps_missing_to_not_found() {
    let api = MockApi::with_sample_menu().await;
    let client = client(&api);

    let wrap = client.products().get_by_id(ProductId::new(WRAP)).await.unwrap();
    assert_eq!(wrap.name, "Wrap");

    let missing = client.products().get_by_id(ProductId::new(999)).await;
    assert!(matches!(missing, Err(ApiError::NotFound(_))));

    let missing = client.categories().get_by_id(CategoryId::new(999)).await;
    assert!(matches!(missing, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_searches_encode_path_segment() {
    let api = MockApi::with_sample_menu().await;
    let client = client(&api);

    let found = client.products().find_by_name("suco verde").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, ProductId::new(SUCO));
    assert_eq!(
        api.requests().last().unwrap().path,
        "/alimentacao/nome/suco%20verde"
    );

    let found = client.categories().find_by_description("beb").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, CategoryId::new(BEBIDAS));
}

#[tokio::test]
async fn test_create_update_delete_product() {
    let api = MockApi::with_sample_menu().await;
    let client = client(&api);

    let input = ProductInput {
        name: "Tapioca".to_string(),
        price: Decimal::new(1500, 2),
        ingredients: "Goma, queijo".to_string(),
        calories: 250,
        category: EntityRef::new(CategoryId::new(LANCHES)),
        owner: EntityRef::new(UserId::new(1)),
    };
    let created = client.products().create(&input).await.unwrap();
    assert_eq!(created.name, "Tapioca");
    assert_eq!(api.count(&Method::POST, "/alimentacao/cadastrar"), 1);

    let renamed = ProductInput {
        name: "Tapioca recheada".to_string(),
        ..input
    };
    let updated = client
        .products()
        .update(&renamed.into_update(created.id))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Tapioca recheada");

    client.products().delete(created.id).await.unwrap();
    assert!(api.products().iter().all(|p| p.id != created.id));
    assert_eq!(api.products().len(), 3);
}

#[tokio::test]
async fn test_recommendations() {
    let api = MockApi::with_sample_menu().await;

    let related = client(&api)
        .products()
        .recommendations(ProductId::new(WRAP))
        .await
        .unwrap();

    let ids: Vec<ProductId> = related.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ProductId::new(SALADA)]);
}

#[tokio::test]
async fn test_category_crud() {
    let api = MockApi::with_sample_menu().await;
    let client = client(&api);

    let created = client
        .categories()
        .create(&CategoryInput {
            description: "Sobremesas".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(api.categories().len(), 3);

    let updated = client
        .categories()
        .update(
            &CategoryInput {
                description: "Doces".to_string(),
            }
            .into_update(created.id),
        )
        .await
        .unwrap();
    assert_eq!(updated.description, "Doces");

    client.categories().delete(created.id).await.unwrap();
    assert_eq!(api.categories().len(), 2);

    // Still has products
    let refused = client.categories().delete(CategoryId::new(LANCHES)).await;
    assert!(matches!(refused, Err(ApiError::Api { status: 409, .. })));
}

#[tokio::test]
async fn test_users() {
    let api = MockApi::with_sample_menu().await;
    let client = client(&api);

    let users = client.users().list_all().await.unwrap();
    assert_eq!(users.len(), 1);

    let user = client.users().get_by_id(UserId::new(1)).await.unwrap();
    assert_eq!(user.login.as_deref(), Some("contato@levebem.com.br"));

    client.users().delete(UserId::new(1)).await.unwrap();
    assert!(client.users().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let api = MockApi::with_sample_menu().await;
    api.set_failing(true);

    let result = client(&api).products().list_all().await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_transport_error_is_reported() {
    // Nothing listens on the discard port
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();

    let result = client.categories().list_all().await;

    assert!(matches!(result, Err(ApiError::Http(_))));
}

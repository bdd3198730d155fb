//! Storefront served on an ephemeral port, backed by the mock API.

#![allow(clippy::unwrap_used)]

use leve_bem_integration_tests::fixtures::{self, LANCHES, SUCO, WRAP};
use leve_bem_integration_tests::{MockApi, browser, start_storefront};
use reqwest::{Method, StatusCode, header};

/// Card titles in page order.
fn card_titles(html: &str) -> Vec<&str> {
    html.split("<h3>")
        .skip(1)
        .filter_map(|rest| rest.split_once("</h3>").map(|(title, _)| title))
        .collect()
}

async fn get_html(client: &reqwest::Client, url: &str) -> String {
    let response = client.get(url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {url}");
    response.text().await.unwrap()
}

#[tokio::test]
async fn test_catalog_lists_everything_in_server_order() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/")).await;

    assert_eq!(card_titles(&html), vec!["Wrap", "Suco Verde", "Salada"]);
    assert!(html.contains("R$ 22,50"));
    assert_eq!(api.count(&Method::GET, "/alimentacao/all"), 1);
    assert_eq!(api.count(&Method::GET, "/categoria/all"), 1);
}

#[tokio::test]
async fn test_category_filter() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/?categoria={LANCHES}")).await;

    assert_eq!(card_titles(&html), vec!["Wrap", "Salada"]);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/?busca=WR")).await;

    assert_eq!(card_titles(&html), vec!["Wrap"]);
}

#[tokio::test]
async fn test_search_without_match_shows_empty_state() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/?busca=pizza")).await;

    assert!(card_titles(&html).is_empty());
    assert!(html.contains("Nenhum prato encontrado"));
}

#[tokio::test]
async fn test_price_sort_orders_are_reverses() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;
    let client = browser();

    let asc = get_html(&client, &format!("{base}/?ordem=asc")).await;
    let desc = get_html(&client, &format!("{base}/?ordem=desc")).await;

    let asc = card_titles(&asc);
    let mut desc = card_titles(&desc);
    assert_eq!(asc, vec!["Suco Verde", "Salada", "Wrap"]);
    desc.reverse();
    assert_eq!(asc, desc);
}

#[tokio::test]
async fn test_api_failure_shows_banner() {
    let api = MockApi::with_sample_menu().await;
    api.set_failing(true);
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/")).await;

    assert!(html.contains("Não foi possível carregar o cardápio"));
    assert!(card_titles(&html).is_empty());
}

#[tokio::test]
async fn test_category_failure_alone_fails_the_catalog() {
    let api = MockApi::with_sample_menu().await;
    api.fail_path("/categoria/all");
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/")).await;

    assert!(html.contains("Não foi possível carregar o cardápio"));
    assert!(card_titles(&html).is_empty());
}

#[tokio::test]
async fn test_product_failure_alone_fails_the_catalog() {
    let api = MockApi::with_sample_menu().await;
    api.fail_path("/alimentacao/all");
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/?categoria={LANCHES}")).await;

    assert!(html.contains("Não foi possível carregar o cardápio"));
    assert!(card_titles(&html).is_empty());
    assert!(!html.contains("Lanches"));
}

#[tokio::test]
async fn test_catalog_counts_results_and_clears_filters() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;
    let client = browser();

    let html = get_html(&client, &format!("{base}/?categoria={LANCHES}&ordem=asc")).await;
    assert!(html.contains("2 pratos"));
    assert!(html.contains(r#"<a href="/" class="clear">Limpar</a>"#));

    let html = get_html(&client, &format!("{base}/")).await;
    assert!(html.contains("3 pratos"));
    assert!(!html.contains("Limpar"));
}

#[tokio::test]
async fn test_home_rows_split_the_menu() {
    let lanches = fixtures::category(LANCHES, "Lanches");
    let menu = (1..=8)
        .map(|id| fixtures::product(id, &format!("Prato {id}"), 1000 + id, &lanches))
        .collect();
    let api = MockApi::start_with(vec![lanches], menu).await;
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/inicio")).await;

    let (highlights, offers) = html.split_once(r#"id="ofertas""#).unwrap();
    assert_eq!(
        card_titles(highlights),
        vec!["Prato 1", "Prato 2", "Prato 3", "Prato 4", "Prato 5", "Prato 6"]
    );
    assert_eq!(card_titles(offers), vec!["Prato 7", "Prato 8"]);
    assert!(highlights.contains(&format!(r#"href="/?categoria={LANCHES}""#)));
}

#[tokio::test]
async fn test_home_offers_repeat_a_short_menu() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/inicio")).await;

    let (highlights, offers) = html.split_once(r#"id="ofertas""#).unwrap();
    assert_eq!(card_titles(highlights), vec!["Wrap", "Suco Verde", "Salada"]);
    assert_eq!(card_titles(offers), vec!["Wrap", "Suco Verde", "Salada"]);
}

#[tokio::test]
async fn test_home_buy_goes_straight_to_confirmation() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;
    let client = browser();

    let html = get_html(&client, &format!("{base}/inicio")).await;
    assert!(html.contains(r#"action="/comprar""#));

    let response = client
        .post(format!("{base}/comprar"))
        .form(&[("produto", SUCO.to_string())])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/pedido-confirmado"
    );

    let html = get_html(&client, &format!("{base}/pedido-confirmado")).await;
    assert!(html.contains("Pedido confirmado!"));
    // Suco Verde is alone in its category
    assert_eq!(card_titles(&html), vec!["Suco Verde"]);
    assert_eq!(api.count(&Method::GET, &format!("/alimentacao/{SUCO}")), 1);
}

#[tokio::test]
async fn test_home_buy_of_unknown_product_confirms_nothing() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;
    let client = browser();

    let response = client
        .post(format!("{base}/comprar"))
        .form(&[("produto", "999")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = client
        .get(format!("{base}/pedido-confirmado"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    assert_eq!(api.count(&Method::GET, "/alimentacao/recomendacao"), 0);
}

#[tokio::test]
async fn test_order_page_without_selection_redirects_home() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;

    let response = browser()
        .get(format!("{base}/pedido-confirmado"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_confirm_without_selection_renders_nothing() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;
    let client = browser();

    let response = client
        .post(format!("{base}/pedido-confirmado"))
        .form(&[("produto", WRAP.to_string())])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = client
        .get(format!("{base}/pedido-confirmado"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    assert_eq!(api.count(&Method::GET, "/alimentacao/recomendacao"), 0);
}

#[tokio::test]
async fn test_full_order_flow() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;
    let client = browser();

    // Buying opens the confirmation modal
    let html = get_html(&client, &format!("{base}/?comprar={WRAP}")).await;
    assert!(html.contains("Confirmar pedido"));
    assert!(html.contains(&format!(r#"name="produto" value="{WRAP}""#)));

    let response = client
        .post(format!("{base}/pedido-confirmado"))
        .form(&[("produto", WRAP.to_string())])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/pedido-confirmado"
    );

    let html = get_html(&client, &format!("{base}/pedido-confirmado")).await;
    assert!(html.contains("Pedido confirmado!"));
    // The ordered product, then its recommendation
    assert_eq!(card_titles(&html), vec!["Wrap", "Salada"]);
    assert!(html.contains("Adicionar"));
    assert_eq!(
        api.count(&Method::GET, &format!("/alimentacao/recomendacao/{WRAP}")),
        1
    );

    // One-shot: a refresh goes back to the catalog
    let response = client
        .get(format!("{base}/pedido-confirmado"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_categories_page_links_into_catalog() {
    let api = MockApi::with_sample_menu().await;
    let base = start_storefront(&api).await;

    let html = get_html(&browser(), &format!("{base}/categorias")).await;

    assert!(html.contains(&format!(r#"href="/?categoria={LANCHES}""#)));
    assert!(html.contains("Bebidas"));
}

#[tokio::test]
async fn test_unknown_path_renders_404() {
    let api = MockApi::start().await;
    let base = start_storefront(&api).await;

    let response = browser()
        .get(format!("{base}/nada-aqui"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

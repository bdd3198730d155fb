//! `lb-cli produtos ...`

use leve_bem_core::api::{ApiClient, ApiError};
use leve_bem_core::{CatalogQuery, Product, ProductId};

/// List products, filtered and sorted the same way the catalog page does.
pub async fn list(api: &ApiClient, query: &CatalogQuery) -> Result<(), ApiError> {
    let products = api.products().list_all().await?;
    let shown = query.apply(&products);
    tracing::debug!(total = products.len(), shown = shown.len(), "Filtered products");

    print_lines(shown.into_iter());
    Ok(())
}

/// Print one product in full.
pub async fn show(api: &ApiClient, id: ProductId) -> Result<(), ApiError> {
    let product = api.products().get_by_id(id).await?;
    println!("{}", details(&product));
    Ok(())
}

/// Server-side name search.
pub async fn search(api: &ApiClient, name: &str) -> Result<(), ApiError> {
    let products = api.products().find_by_name(name).await?;
    print_lines(products.iter());
    Ok(())
}

/// Products the server recommends alongside `id`.
pub async fn recommendations(api: &ApiClient, id: ProductId) -> Result<(), ApiError> {
    let products = api.products().recommendations(id).await?;
    print_lines(products.iter());
    Ok(())
}

pub async fn delete(api: &ApiClient, id: ProductId) -> Result<(), ApiError> {
    api.products().delete(id).await?;
    tracing::info!(%id, "Product deleted");
    println!("Produto {id} excluído");
    Ok(())
}

fn print_lines<'a>(products: impl Iterator<Item = &'a Product>) {
    let mut any = false;
    for product in products {
        any = true;
        println!("{}", line(product));
    }
    if !any {
        println!("Nenhum prato encontrado");
    }
}

/// `id  name  price  category`, tab-separated.
fn line(product: &Product) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        product.id,
        product.name,
        product.price().display(),
        category(product)
    )
}

fn details(product: &Product) -> String {
    format!(
        "id:           {}\n\
         nome:         {}\n\
         preço:        {}\n\
         calorias:     {} kcal\n\
         categoria:    {}\n\
         ingredientes: {}\n\
         foto:         {}",
        product.id,
        product.name,
        product.price().display(),
        product.calories,
        category(product),
        product.ingredients,
        product.photo.as_deref().unwrap_or("-"),
    )
}

fn category(product: &Product) -> &str {
    product
        .category
        .as_ref()
        .map_or("-", |c| c.description.as_str())
}

//! `lb-cli categorias ...`

use leve_bem_core::api::{ApiClient, ApiError};
use leve_bem_core::{Category, CategoryId};

pub async fn list(api: &ApiClient) -> Result<(), ApiError> {
    let categories = api.categories().list_all().await?;
    print_lines(&categories);
    Ok(())
}

pub async fn show(api: &ApiClient, id: CategoryId) -> Result<(), ApiError> {
    let category = api.categories().get_by_id(id).await?;
    println!("{}", line(&category));
    Ok(())
}

/// Server-side description search.
pub async fn search(api: &ApiClient, text: &str) -> Result<(), ApiError> {
    let categories = api.categories().find_by_description(text).await?;
    print_lines(&categories);
    Ok(())
}

/// Delete a category. The API decides what happens to its products.
pub async fn delete(api: &ApiClient, id: CategoryId) -> Result<(), ApiError> {
    api.categories().delete(id).await?;
    tracing::info!(%id, "Category deleted");
    println!("Categoria {id} excluída");
    Ok(())
}

fn print_lines(categories: &[Category]) {
    if categories.is_empty() {
        println!("Nenhuma categoria encontrada");
    }
    for category in categories {
        println!("{}", line(category));
    }
}

fn line(category: &Category) -> String {
    format!("{}\t{}", category.id, category.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line() {
        let category = Category {
            id: CategoryId::new(2),
            description: "Bebidas".to_string(),
        };
        assert_eq!(line(&category), "2\tBebidas");
    }
}

//! `lb-cli usuarios ...`

use leve_bem_core::api::{ApiClient, ApiError};
use leve_bem_core::{User, UserId};

pub async fn list(api: &ApiClient) -> Result<(), ApiError> {
    let users = api.users().list_all().await?;
    if users.is_empty() {
        println!("Nenhum usuário encontrado");
    }
    for user in &users {
        println!("{}", line(user));
    }
    Ok(())
}

pub async fn show(api: &ApiClient, id: UserId) -> Result<(), ApiError> {
    let user = api.users().get_by_id(id).await?;
    println!("{}", line(&user));
    Ok(())
}

pub async fn delete(api: &ApiClient, id: UserId) -> Result<(), ApiError> {
    api.users().delete(id).await?;
    tracing::info!(%id, "User deleted");
    println!("Usuário {id} excluído");
    Ok(())
}

/// `id  name  login`; missing fields print as `-`.
fn line(user: &User) -> String {
    format!(
        "{}\t{}\t{}",
        user.id,
        user.name.as_deref().unwrap_or("-"),
        user.login.as_deref().unwrap_or("-")
    )
}

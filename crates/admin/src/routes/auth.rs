//! Authentication route handlers for admin.
//!
//! The login is a placeholder: any non-empty user/password pair is accepted
//! and only the name is remembered. CRUD pages do not require it.

use askama::Template;
use axum::{
    Form, Router,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAdminAuth, clear_current_admin, set_current_admin};
use crate::models::{CurrentAdmin, Flash, LoginForm};
use crate::state::AppState;

/// Login page template.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub admin_name: Option<String>,
    pub current_path: &'static str,
    pub flash: Option<Flash>,
    /// Typed user name, kept on a failed attempt.
    pub usuario: String,
    pub error: Option<String>,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
}

/// Render the login page.
///
/// GET /login
async fn login_page(admin: OptionalAdminAuth) -> Result<Html<String>> {
    let template = LoginTemplate {
        admin_name: admin.name(),
        current_path: "/login",
        flash: None,
        usuario: String::new(),
        error: None,
    };
    Ok(Html(template.render()?))
}

/// Accept the credentials and remember the name.
///
/// POST /login
#[instrument(skip_all)]
async fn login(session: Session, Form(form): Form<LoginForm>) -> Result<Response> {
    let name = match form.validate() {
        Ok(name) => name,
        Err(e) => {
            tracing::info!("Login rejected: {e}");
            let template = LoginTemplate {
                admin_name: None,
                current_path: "/login",
                flash: None,
                usuario: form.usuario.trim().to_string(),
                error: Some(e.to_string()),
            };
            return Ok(Html(template.render()?).into_response());
        }
    };

    set_current_admin(&session, &CurrentAdmin { name: name.clone() }).await?;
    set_sentry_user(&name);
    tracing::info!(admin = %name, "Admin logged in");

    Ok(Redirect::to("/produtos").into_response())
}

/// Logout and clear session.
///
/// POST /logout
async fn logout(session: Session) -> Result<Redirect> {
    clear_current_admin(&session).await?;
    clear_sentry_user();
    Ok(Redirect::to("/login"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_template_shows_error() {
        let template = LoginTemplate {
            admin_name: None,
            current_path: "/login",
            flash: None,
            usuario: "ana".to_string(),
            error: Some("Preencha os campos!".to_string()),
        };
        let html = template.render().unwrap();

        assert!(html.contains("Preencha os campos!"));
        assert!(html.contains(r#"value="ana""#));
    }
}

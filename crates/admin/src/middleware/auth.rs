//! Current-admin extractor and session helpers.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Extractor that optionally gets the current admin.
///
/// Never rejects; pages render for anonymous visitors too.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalAdminAuth(admin): OptionalAdminAuth) -> impl IntoResponse {
///     match admin {
///         Some(a) => format!("Olá, {}!", a.name),
///         None => "Olá!".to_string(),
///     }
/// }
/// ```
pub struct OptionalAdminAuth(pub Option<CurrentAdmin>);

impl OptionalAdminAuth {
    /// Name to show in the header, if logged in.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.0.as_ref().map(|admin| admin.name.clone())
    }
}

impl<S> FromRequestParts<S> for OptionalAdminAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(admin))
    }
}

/// Helper to set the current admin in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    // New id on privilege change
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}

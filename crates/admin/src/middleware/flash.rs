//! One-shot flash messages carried across a redirect.

use tower_sessions::Session;

use crate::models::{Flash, session_keys};

/// Store a message for the next rendered page.
///
/// Failures are logged, not returned: losing a flash must not fail the
/// action that already succeeded.
pub async fn set_flash(session: &Session, flash: Flash) {
    if let Err(e) = session.insert(session_keys::FLASH, &flash).await {
        tracing::warn!("Failed to store flash message: {e}");
    }
}

/// Take the pending message, if any.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    session
        .remove::<Flash>(session_keys::FLASH)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to read flash message: {e}");
            None
        })
}

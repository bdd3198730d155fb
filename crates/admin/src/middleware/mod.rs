//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (recorded in the span, echoed in the response)
//! 4. Security headers
//! 5. Session layer (tower-sessions with in-memory store, `SameSite=Strict`)
//!
//! The CRUD pages are not behind a login guard; [`OptionalAdminAuth`] only
//! feeds the header's user name.

pub mod auth;
pub mod flash;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{OptionalAdminAuth, clear_current_admin, set_current_admin};
pub use flash::{set_flash, take_flash};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;

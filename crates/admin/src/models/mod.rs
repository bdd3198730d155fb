//! Session state and form models for admin.

pub mod forms;
pub mod session;

pub use forms::{CategoryForm, FormError, LoginForm, ProductForm};
pub use session::{CurrentAdmin, Flash, FlashKind, keys as session_keys};

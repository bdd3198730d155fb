//! Session-backed models for the storefront.

pub mod session;

pub use session::{confirm_pending_order, set_pending_order, take_confirmed_order};

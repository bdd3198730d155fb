//! Command implementations, one module per API resource.
//!
//! Each command prints plain tab-separated lines to stdout and returns API
//! failures to `main`, which logs them and exits with status 1.

// Command output is the product of this binary
#![allow(clippy::print_stdout)]

pub mod categories;
pub mod products;
pub mod users;

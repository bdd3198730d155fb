//! Leve&Bem Core - Shared types library.
//!
//! This crate provides common types used across all Leve&Bem components:
//! - `storefront` - Public catalog and order confirmation
//! - `admin` - Product and category management
//! - `cli` - Command-line access to the REST API
//!
//! # Architecture
//!
//! The types and the catalog filter have no I/O and can be used anywhere.
//! The HTTP client for the remote Leve&Bem REST API sits behind the `client`
//! feature so that type-only consumers do not pull in `reqwest`.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, and the product/category/user records
//! - [`catalog`] - Category filter, name search and price sort
//! - [`api`] - REST API client (feature `client`)

#![cfg_attr(not(test), forbid(unsafe_code))]

#[cfg(feature = "client")]
pub mod api;
pub mod catalog;
pub mod types;

pub use catalog::{CatalogQuery, PriceSort};
pub use types::*;

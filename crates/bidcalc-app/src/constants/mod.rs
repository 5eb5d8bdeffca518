//! Built-in pricing tables

pub mod catalog;

pub use catalog::{default_catalog, DEFAULT_CATALOG};

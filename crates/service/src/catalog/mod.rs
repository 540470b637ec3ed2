//! Catalog module: three-layer architecture (domain, repository, service).
//!
//! This module centralizes store/item business logic under the service crate.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CatalogService;

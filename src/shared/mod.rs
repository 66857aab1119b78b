//! Shared Module
//!
//! Types that do not depend on the UI: backend wire formats, the error
//! taxonomy of the HTTP layer and application configuration.
//!
//! # Overview
//!
//! Everything here is plain data that serializes to or from the catalog
//! backend's JSON, plus the configuration every other module reads.

/// Users and auth payloads
pub mod auth;

/// Products and categories
pub mod catalog;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use auth::{LoginData, LoginResponse, RegisterData, User, ADMIN_ROLE};
pub use catalog::{Category, CategoriesResponse, EntityRef, Product, ProductPayload, ProductsResponse};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{ApiError, CredentialStoreError};

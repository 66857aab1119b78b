//! Cafe Catalog - Main Library
//!
//! Desktop client for a cafe product catalog backend: users sign in or
//! register, browse the product list, create and edit products, upload a
//! product photo and (as admins) delete products.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the UI
//!   - Backend wire formats (users, products, categories)
//!   - HTTP and storage error types
//!   - Configuration loading
//!
//! - **`client`** - Native desktop app (egui/eframe)
//!   - HTTP client and credential storage
//!   - Session, product and category controllers
//!   - Navigation and screens
//!
//! # Usage
//!
//! ```rust,no_run
//! use cafe_catalog::client::{AppState, Config};
//!
//! let mut state = AppState::new(Config::new()).expect("startup");
//! state.start();
//! // Call `state.poll()` once per frame from the eframe app.
//! ```
//!
//! # Error Handling
//!
//! - [`shared::error::ApiError`] covers transport, status and decode failures
//! - Controllers wrap it in their own error enums (`SessionError`, `ProductsError`)
//! - Errors are logged with `tracing` and surfaced in the UI as alerts

pub mod client;
pub mod shared;

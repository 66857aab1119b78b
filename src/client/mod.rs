//! Desktop Client Module
//!
//! Native egui/eframe client for the cafe catalog backend.
//!
//! # Architecture
//!
//! - **`config`** - Resolved client configuration (server URL, token storage)
//! - **`credentials`** - Where the session token lives between runs
//! - **`api`** - HTTP client that attaches the token header to every request
//! - **`session`** - Authentication state machine and sign-in/sign-up flows
//! - **`products`** - Product cache, CRUD and image upload
//! - **`categories`** - Per-screen category query
//! - **`upload`** - Picked image to multipart form
//! - **`form`** - Controlled-input state for the screens
//! - **`navigation`** - Screen stack gated by the session status
//! - **`state`** - `AppState`, which bridges the async controllers to egui
//! - **`views`** - egui rendering
//! - **`theme`** - Colors and frame builders
//!
//! # Threading
//!
//! egui runs on the main thread. Network work is spawned on a tokio runtime
//! owned by [`AppState`]; results come back over `std::sync::mpsc` channels
//! and are folded into state by [`AppState::poll`] once per frame.

pub mod api;
pub mod categories;
pub mod config;
pub mod credentials;
pub mod form;
pub mod navigation;
pub mod products;
pub mod session;
pub mod state;
pub mod theme;
pub mod upload;
pub mod views;

pub use api::ApiClient;
pub use config::Config;
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use navigation::{Navigator, ProductRoute, Screen};
pub use products::{ProductsController, ProductsError};
pub use session::{AuthState, AuthStatus, SessionController, SessionError};
pub use state::AppState;

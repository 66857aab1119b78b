//! Theme Module
//!
//! Color constants and a few frame/button builders shared by the views.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cafe_catalog::client::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::content_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_SECONDARY, "Products");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;

//! Theme Module
//!
//! Color palette and styling helpers shared by the shell and the screens.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.label(styles::heading("Castle"));
//! });
//! ```

pub mod colors;
pub mod styles;

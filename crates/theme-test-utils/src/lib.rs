//! Shared test utilities for the theme-guard workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`theme`]: [`TestTheme`](theme::TestTheme) builder for a themes
//!   directory holding an installed theme and upgrade packages

pub mod theme;

pub use theme::{TestTheme, stylesheet};

//! JPM Console UI Components
//!
//! Dioxus components for the JPM management console:
//! - **Button**: the button primitive with named variants and sizes
//! - **ThemeProvider**: appearance-mode scope (dark/light/system) with
//!   preference persistence through [`ThemeStore`]
//!
//! Components never fail to render. Persistence problems are logged through
//! `tracing` and the component falls back to its configured defaults.

pub mod components;
pub mod error;
pub mod theme;

pub use components::*;
pub use error::UiError;
pub use theme::*;

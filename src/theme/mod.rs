//! Stylesheet for the console window.

mod styles;

pub use styles::GLOBAL_STYLES;

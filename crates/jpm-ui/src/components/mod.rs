//! Reusable UI components
//!
//! Styling is class-based; the matching CSS ships with the console binary.

mod button;

pub use button::*;

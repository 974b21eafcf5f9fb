//! Reusable UI components.

pub mod theme_provider;
pub mod theme_toggle;

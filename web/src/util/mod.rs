//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `palette` is pure data; `dark_mode` isolates every browser call so the
//! theme store can be exercised without a DOM.

pub mod dark_mode;
pub mod palette;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only shared state is the theme. It lives in a store injected at the
//! application root rather than in a global, so components receive it through
//! context and tests construct it directly.

pub mod theme;

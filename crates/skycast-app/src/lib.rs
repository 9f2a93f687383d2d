//! Dashboard state for Skycast
//!
//! The rendering shell consumes this crate: the theme engine (effective
//! dark mode, gradient and backdrop tokens) and the dashboard view-model
//! (search, geolocation, unit toggle, loading/error state).

pub mod dashboard;
pub mod theme;

mod error_mapping;

pub use dashboard::{Dashboard, ViewState};
pub use theme::{
    backdrop, gradient, resolve_is_dark, Gradient, SystemScheme, ThemeEngine, BACKDROP_FALLBACK,
};

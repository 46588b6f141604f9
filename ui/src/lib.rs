//! Shared UI crate for Tape-Out Crunch. The board, its engine and the
//! localized chrome live here; platform crates only supply routing.

use dioxus::prelude::*;

pub mod core;
pub mod crunch;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Unified theme, linked by the web crate and inlined by desktop.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;

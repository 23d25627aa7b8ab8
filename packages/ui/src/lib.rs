//! This crate contains all shared UI for the workspace: the service
//! providers, query hooks, charts and every page of the monitor.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod charts;
pub mod format;
pub mod markdown;
pub mod query;
mod timer;

#[cfg(test)]
mod testing;

mod session;
pub use session::{
    apply_theme, logout, toggle_theme, use_config, use_filters, use_session, use_theme,
    MonitorProvider, SessionState, StorageHandle, ThemeSignal,
};

mod sidebar;
pub use sidebar::{AppSidebar, NavItem, ThemeToggle};

pub mod views;

pub use components::COMPONENTS_CSS;

/// Base theme shared by every launcher.
pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

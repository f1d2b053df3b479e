//! Widget configuration: recognized settings, their defaults, and the
//! TOML loader.
//!
//! Absent or malformed configuration always degrades to the most
//! permissive defaults; only the explicit file loader is fallible.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{FilterConfig, InfoType, WidgetSettings};

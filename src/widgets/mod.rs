//! The overlay widgets built on the reducer core.

pub mod chat_feed;
pub mod latest_info;
pub mod supporters;

/// Display name substituted for gifters who are anonymous or unnamed.
pub const ANONYMOUS_NAME: &str = "Anonymous";

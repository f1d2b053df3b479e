//! Floating chat feed: every accepted message becomes a short-lived
//! entry with a sampled position, size and lifetime, swept once its
//! expiry instant passes.

mod reducer;
mod state;

pub use reducer::ChatFeedWidget;
pub use state::{ChatFeedState, ChatMessage, REMOVE_GRACE_MS};

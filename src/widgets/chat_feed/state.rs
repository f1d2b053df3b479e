use std::sync::Arc;

use serde::Serialize;

use crate::event::ChatNode;
use crate::widget::WidgetState;

/// Buffer past the sampled lifetime before an entry is swept, so expiry
/// is observed strictly after the visual duration has elapsed.
pub const REMOVE_GRACE_MS: u64 = 200;

/// One accepted chat message in the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub author_id: String,
    pub display_name: String,
    pub message: Vec<ChatNode>,
    /// Position across the display surface, as a fraction in `[0, 1)`.
    pub position: f64,
    /// Font size in pixels, sampled within the configured range.
    pub size: f64,
    /// Sampled visual lifetime in milliseconds.
    pub duration_ms: u64,
    /// Absolute instant at which the entry expires.
    pub remove_at: u64,
}

/// Feed state: the live entries, in arrival order.
///
/// The collection is `Arc`-backed. Reductions that do not change
/// membership return the same allocation, so the host can detect
/// "nothing changed" with `Arc::ptr_eq`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatFeedState {
    pub messages: Arc<[ChatMessage]>,
}

impl Default for ChatFeedState {
    fn default() -> Self {
        Self {
            messages: Vec::new().into(),
        }
    }
}

impl WidgetState for ChatFeedState {}

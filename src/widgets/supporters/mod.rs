//! Latest-supporter highlights: one slot per category (follow,
//! subscription, tip, gifted sub, resub), each holding the most recent
//! occurrence with a short animation window for "this just changed"
//! visual treatment.

mod reducer;
mod state;

pub use reducer::SupportersWidget;
pub use state::{
    GiftDetail, Highlight, ResubDetail, SupportersState, TipDetail, ANIMATION_WINDOW_MS,
};

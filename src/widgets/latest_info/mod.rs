//! Latest-info readout: a single configured fact (name, count or
//! amount) surfaced as one tagged value, replaced whenever a matching
//! event arrives.

mod reducer;
mod state;

pub use reducer::LatestInfoWidget;
pub use state::InfoValue;

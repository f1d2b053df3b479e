//! Best-effort snapshot of most-recent-known facts, supplied by the
//! host at widget activation so a newly displayed widget has something
//! to show before the first live event.

use serde::{Deserialize, Serialize};

/// Latest-known facts at activation time.
///
/// Every slot is optional; a missing fact hydrates to an empty slot,
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HydrationSnapshot {
    pub latest_follower: Option<FollowerFact>,
    pub latest_subscriber: Option<SubscriberFact>,
    pub latest_tip: Option<TipFact>,
}

/// The most recent channel follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerFact {
    pub display_name: String,
    pub followed_at: u64,
}

/// The most recent subscription start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberFact {
    pub display_name: String,
    pub timestamp: u64,
}

/// The most recent tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipFact {
    pub display_name: String,
    /// Smallest currency unit; no conversion is performed.
    pub amount_cents: i64,
    pub currency: String,
    pub timestamp: u64,
}

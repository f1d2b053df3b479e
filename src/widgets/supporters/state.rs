use std::sync::Arc;

use serde::Serialize;

use crate::widget::WidgetState;

/// How long a slot reports "this value just changed" after an update,
/// in milliseconds.
pub const ANIMATION_WINDOW_MS: u64 = 500;

/// A "latest event" record for one supporter category.
///
/// `is_animating` is derived from `animating_until` on every tick,
/// never advanced by elapsed-time accumulation, so irregular tick
/// cadence cannot drift it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight<E> {
    pub name: String,
    pub timestamp: u64,
    /// Absolute end of the animation window.
    pub animating_until: u64,
    pub is_animating: bool,
    pub detail: E,
}

/// Extra fields for the latest tip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipDetail {
    /// Smallest currency unit; no conversion is performed.
    pub amount_cents: i64,
    pub currency: String,
}

/// Extra fields for the latest gifted subscription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiftDetail {
    pub gift_count: u32,
    pub tier: String,
    /// Human-readable summary, e.g. "5 gifted".
    pub label: String,
}

/// Extra fields for the latest resubscription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResubDetail {
    pub months: u32,
    /// Human-readable summary, e.g. "12 months".
    pub label: String,
}

/// One slot per supporter category; each holds at most the latest
/// entity. Slots are `Arc`-backed so an unchanged slot survives a
/// reduction with its allocation intact (`Arc::ptr_eq` observable).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SupportersState {
    pub latest_follower: Option<Arc<Highlight<()>>>,
    pub latest_subscriber: Option<Arc<Highlight<()>>>,
    pub latest_tip: Option<Arc<Highlight<TipDetail>>>,
    pub latest_gift_sub: Option<Arc<Highlight<GiftDetail>>>,
    pub latest_resub: Option<Arc<Highlight<ResubDetail>>>,
}

impl WidgetState for SupportersState {}

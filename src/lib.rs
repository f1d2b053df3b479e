//! Deterministic, event-driven state reduction for stream overlay
//! widgets.
//!
//! Each widget owns one immutable state value, derives its initial
//! state from a hydration snapshot, and updates it exclusively through
//! a typed stream of platform events and periodic ticks:
//!
//! ```text
//! hydrate(snapshot) ──→ state₀
//! reduce(event, stateₙ) ──→ stateₙ₊₁ ──→ host render
//! ```
//!
//! The host delivers events one at a time and supplies the clock and
//! randomness through [`context::WidgetContext`], so every reduction is
//! exactly reproducible given the same inputs. A reduction that changes
//! nothing returns its input state with `Arc`-backed fields intact,
//! letting the host skip re-renders with a pointer comparison.

pub mod config;
pub mod context;
pub mod event;
pub mod snapshot;
pub mod widget;
pub mod widgets;

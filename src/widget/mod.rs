//! Widget architecture primitives.
//!
//! This module provides the base traits for implementing unidirectional
//! data flow in overlay widgets.
//!
//! # Architecture
//!
//! ```text
//! Event ──→ Widget::reduce ──→ State ──→ Host render
//!   ↑                                       │
//!   └───────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable representation of one widget's display state
//! - **Event**: platform activity or the synthetic periodic tick
//! - **Widget**: pure hydrate/reduce functions over state

mod reducer;
mod state;

pub use reducer::Widget;
pub use state::WidgetState;

//! Widget trait: hydrate once, then reduce per event.

use crate::context::WidgetContext;
use crate::event::DomainEvent;
use crate::snapshot::HydrationSnapshot;

use super::state::WidgetState;

/// A widget reduces the shared event stream into its own state value.
///
/// The reducer is the only place where state transitions happen. It
/// must be a pure function: `(event, state, context) -> state`.
///
/// An event the widget does not react to returns the input state
/// unchanged, so the host's change detection can skip re-rendering.
pub trait Widget {
    /// The state type this widget maintains.
    type State: WidgetState;

    /// Build the initial state from the host's best-effort snapshot.
    ///
    /// Missing snapshot facts produce empty or default slots, never
    /// errors.
    fn hydrate(ctx: &WidgetContext<'_>, snapshot: &HydrationSnapshot) -> Self::State;

    /// Process one event and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(event: &DomainEvent, state: Self::State, ctx: &WidgetContext<'_>) -> Self::State;
}

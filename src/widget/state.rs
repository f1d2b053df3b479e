//! Base trait for widget state values.

/// Marker trait for widget state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data the host needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait WidgetState: Clone + PartialEq + Default + Send + 'static {}

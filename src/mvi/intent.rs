//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User gestures (toggle a favorite, add to cart, move the cursor)
/// - Navigation events (switching tabs)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}

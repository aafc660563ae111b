//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (field edits, button presses)
/// - System events (API responses, precondition failures)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}

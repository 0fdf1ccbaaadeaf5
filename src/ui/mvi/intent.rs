//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are either user actions (go back, reload) or system events such
/// as a fetch settling. They may carry non-cloneable payloads like errors,
/// so only `Send + 'static` is required.
pub trait Intent: Send + 'static {}

//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No editor is mounted
    #[error("No product editor is active")]
    EditorNotActive,

    /// Network thread is gone
    #[error("Failed to dispatch network event: {0}")]
    DispatchFailed(String),

    /// Route parameter stream has no subscribers left
    #[error("Route parameter stream closed")]
    ParamsClosed,
}

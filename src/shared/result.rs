/// Crate-wide result type.
///
/// Named failures are `GraphError` values wrapped into `anyhow::Error`, so callers
/// can still `downcast_ref::<GraphError>()` when they need to branch on the kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

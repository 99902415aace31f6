/// Result alias used throughout the crate; errors are carried as `anyhow::Error`
/// so `SbomError` variants can be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Shared kernel - error types and result alias
pub mod error;
pub mod result;

pub use result::Result;

/// Shared kernel - error types and result alias used by every layer
pub mod error;
pub mod result;

pub use result::Result;

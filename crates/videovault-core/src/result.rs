//! Convenience result type alias for VideoVault.

use crate::error::AppError;

/// A specialized `Result` type for VideoVault operations.
pub type AppResult<T> = Result<T, AppError>;

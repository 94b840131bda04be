//! Error types for block range computation.

use super::RpcError;

/// Errors that can occur while constructing or resolving a block range.
#[derive(Debug, thiserror::Error)]
pub enum BlockRangeError {
    /// The range's start block is after its end block.
    #[error("Invalid block range: start {start} > end {end}")]
    InvalidRange {
        /// Requested start block
        start: u64,
        /// Requested end block
        end: u64,
    },

    /// Fetching the chain head failed while resolving a lookback window.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}

impl BlockRangeError {
    /// Create an `InvalidRange` error.
    pub fn invalid_range(start: u64, end: u64) -> Self {
        BlockRangeError::InvalidRange { start, end }
    }
}

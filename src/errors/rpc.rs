//! Shared RPC error types for chain data source operations.
//!
//! These errors capture the transient-fetch failure modes of the scan: a
//! block or receipt that could not be retrieved. The scanner treats every
//! variant as local to the unit of work that produced it.

use alloy_primitives::TxHash;

/// Errors that can occur while fetching chain data.
///
/// Includes context about what was being fetched to aid in debugging, since
/// the scanner only logs these and moves on.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Failed to fetch the current head block number.
    #[error("Failed to get current block number")]
    GetBlockNumberFailed {
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The RPC call to fetch a block failed.
    ///
    /// This is different from `BlockNotFound` - the call itself failed, not
    /// that the block doesn't exist.
    #[error("Failed to fetch block {block_number}")]
    GetBlockFailed {
        /// The block number we tried to fetch
        block_number: u64,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The data source returned no block at the requested number.
    ///
    /// Can occur beyond the chain tip, after a reorganization, or against a
    /// node that has not synced that block.
    #[error("Block not found: {block_number}")]
    BlockNotFound {
        /// The block number that wasn't found
        block_number: u64,
    },

    /// The RPC call to fetch a transaction receipt failed.
    #[error("Failed to fetch receipt for transaction {tx_hash}")]
    GetReceiptFailed {
        /// The transaction hash whose receipt we tried to fetch
        tx_hash: TxHash,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The data source returned no receipt for the transaction.
    #[error("Receipt not found for transaction: {tx_hash}")]
    ReceiptNotFound {
        /// The transaction hash whose receipt wasn't found
        tx_hash: TxHash,
    },
}

impl RpcError {
    /// Helper to create a `GetBlockNumberFailed` error from any error type.
    pub fn get_block_number_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetBlockFailed` error from any error type.
    pub fn get_block_failed(
        block_number: u64,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetBlockFailed {
            block_number,
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetReceiptFailed` error from any error type.
    pub fn get_receipt_failed(
        tx_hash: TxHash,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetReceiptFailed {
            tx_hash,
            source: Box::new(source),
        }
    }
}

//! Chain data source boundary
//!
//! The scanner consumes chain data through the [`BlockDataSource`] trait
//! rather than a concrete RPC client, for two reasons: the scan logic stays
//! unit-testable against in-memory fixtures, and every field of the loosely
//! typed RPC payloads is validated once, here, at the boundary - never deep
//! inside decoding logic. Fields that may legitimately be absent (the `to`
//! of a contract-creation transaction) are explicit `Option`s.

use alloy_primitives::{Address, BlockNumber, Bytes, Log, TxHash};
use async_trait::async_trait;

use crate::errors::RpcError;

mod rpc;

pub use rpc::RpcBlockSource;

/// A block and its transactions, owned transiently by the scanner for the
/// duration of one iteration.
#[derive(Debug, Clone)]
pub struct RawBlock {
    /// Block number
    pub number: BlockNumber,
    /// Transactions in block order
    pub transactions: Vec<RawTransaction>,
}

/// One transaction, reduced to the fields the scan needs.
#[derive(Debug, Clone)]
pub struct RawTransaction {
    /// Transaction hash
    pub hash: TxHash,
    /// Sender address
    pub from: Address,
    /// Destination address; `None` for contract creations, which are never
    /// matched
    pub to: Option<Address>,
    /// Full call input, selector included
    pub input: Bytes,
}

/// A transaction receipt, reduced to its hash and emitted logs.
///
/// Fetched lazily, only for matched transactions.
#[derive(Debug, Clone)]
pub struct RawReceipt {
    /// Hash of the transaction this receipt belongs to
    pub transaction_hash: TxHash,
    /// Emitted log entries, in emission order
    pub logs: Vec<Log>,
}

/// The collaborator interface the scanner fetches chain data through.
///
/// Implementations must validate payload shape before returning: a
/// [`RawBlock`] or [`RawReceipt`] handed to the scanner is trusted to be
/// well-formed at the record level (individual log entries may still be
/// semantically malformed and are handled leniently downstream).
#[async_trait]
pub trait BlockDataSource: Send + Sync {
    /// Current head block number.
    async fn latest_block_number(&self) -> Result<BlockNumber, RpcError>;

    /// Fetch a block with its full transactions.
    async fn block_by_number(&self, number: BlockNumber) -> Result<RawBlock, RpcError>;

    /// Fetch the receipt for a transaction.
    async fn transaction_receipt(&self, hash: TxHash) -> Result<RawReceipt, RpcError>;
}

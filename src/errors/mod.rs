//! Error types for the mintscan library.
//!
//! This module provides strongly-typed errors for all public APIs in
//! mintscan. It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`RegistryError`],
//!   [`CallDecodeError`], [`RpcError`], [`BlockRangeError`])
//! - **Unified error type** ([`MintscanError`]) for convenience when you
//!   don't need to distinguish between error sources
//!
//! # Error taxonomy
//!
//! The scan distinguishes four failure classes, each with a different blast
//! radius:
//!
//! - **Fatal configuration** ([`RegistryError`]) — an embedded schema fails
//!   to parse at startup. Nothing can proceed; the run aborts.
//! - **Transient fetch** ([`RpcError`]) — a single block or receipt fetch
//!   fails. Logged and skipped; the scan continues.
//! - **Decode mismatch** ([`CallDecodeError`]) — a matched transaction's
//!   byte layout doesn't decode. Logged; that transaction is skipped.
//! - **Malformed log shape** — handled without an error type at all: the
//!   event decoder silently skips individual log entries that don't have
//!   the expected shape.

mod blocks;
mod decode;
mod registry;
mod rpc;

pub use blocks::BlockRangeError;
pub use decode::CallDecodeError;
pub use registry::RegistryError;
pub use rpc::RpcError;

/// Unified error type for all mintscan operations.
///
/// All module-specific error types automatically convert to `MintscanError`
/// via `From` implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum MintscanError {
    /// Error from signature registry construction.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error from call-input decoding.
    #[error("Call decode error: {0}")]
    Decode(#[from] CallDecodeError),

    /// Error from chain data fetching.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from block range computation.
    #[error("Block range error: {0}")]
    Range(#[from] BlockRangeError),
}

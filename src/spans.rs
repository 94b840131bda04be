//! Span creation helpers for mintscan operations.
//!
//! Telemetry concerns are kept orthogonal to business logic: instead of
//! `#[instrument]` attributes on functions, each instrumented operation has
//! a corresponding span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! let span = spans::scan_block(number);
//! let _guard = span.enter();
//! // Business logic here
//! ```

use alloy_primitives::{BlockNumber, TxHash};
use tracing::Span;

/// Create span for one full scan over a block range.
///
/// Parent: None (root span for this operation)
/// Children: scan_block spans (one per block number)
#[inline]
pub(crate) fn scan_range(start_block: BlockNumber, end_block: BlockNumber) -> Span {
    tracing::info_span!(
        "mintscan.scan_range",
        start_block = start_block,
        end_block = end_block,
    )
}

/// Create span for processing a single block number.
///
/// Parent: scan_range span
/// Children: process_match spans (one per matched transaction)
#[inline]
pub(crate) fn scan_block(number: BlockNumber) -> Span {
    tracing::debug_span!("mintscan.scan_block", block = number)
}

/// Create span for decoding and correlating one matched transaction.
///
/// Parent: scan_block span
/// Children: RPC call for receipt retrieval
#[inline]
pub(crate) fn process_match(tx_hash: TxHash) -> Span {
    tracing::trace_span!("mintscan.process_match", tx_hash = %tx_hash)
}

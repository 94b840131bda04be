//! Block range and lookback window calculation
//!
//! Maps a rolling "last N days" window onto a concrete block range using an
//! assumed average block time. The assumption is deliberately configuration,
//! not something measured from the chain: the range is approximate by design
//! and must stay stable across runs for the audit trail to be comparable.

use std::time::Duration;

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

use crate::errors::BlockRangeError;
use crate::source::BlockDataSource;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// An inclusive block range, scanned from `end` down to `start`.
///
/// Immutable once computed; produced once per run from the chain head and
/// the configured lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    /// First block in the range (inclusive)
    pub start: BlockNumber,
    /// Last block in the range (inclusive)
    pub end: BlockNumber,
}

impl BlockRange {
    /// Creates a new block range.
    ///
    /// # Errors
    ///
    /// Fails when `start > end`.
    pub fn new(start: BlockNumber, end: BlockNumber) -> Result<Self, BlockRangeError> {
        if start > end {
            return Err(BlockRangeError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Number of blocks in this range (inclusive).
    pub fn block_count(&self) -> u64 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Iterate the range most-recent-first, from `end` down to `start`.
    pub fn iter_descending(&self) -> impl Iterator<Item = BlockNumber> {
        (self.start..=self.end).rev()
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// A rolling lookback window expressed in days and an assumed block time.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use mintscan::LookbackWindow;
///
/// let window = LookbackWindow::new(30, Duration::from_secs(30));
/// assert_eq!(window.block_count(), 86_400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackWindow {
    /// Window length in days
    pub days: u64,
    /// Assumed average block time
    pub block_time: Duration,
}

impl LookbackWindow {
    /// Creates a new lookback window.
    pub const fn new(days: u64, block_time: Duration) -> Self {
        Self { days, block_time }
    }

    /// Number of blocks this window spans at the assumed block time.
    pub fn block_count(&self) -> u64 {
        let blocks_per_day = SECONDS_PER_DAY / self.block_time.as_secs().max(1);
        self.days.saturating_mul(blocks_per_day)
    }

    /// Resolve this window against the chain head into a concrete range.
    ///
    /// The range runs from `head - block_count()` (saturating at genesis)
    /// up to the current head.
    pub async fn resolve<S: BlockDataSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<BlockRange, BlockRangeError> {
        let head = source.latest_block_number().await?;
        let start = head.saturating_sub(self.block_count());
        BlockRange::new(start, head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RpcError;
    use crate::source::{RawBlock, RawReceipt};
    use alloy_primitives::TxHash;
    use async_trait::async_trait;

    struct FixedHead(u64);

    #[async_trait]
    impl BlockDataSource for FixedHead {
        async fn latest_block_number(&self) -> Result<u64, RpcError> {
            Ok(self.0)
        }

        async fn block_by_number(&self, number: u64) -> Result<RawBlock, RpcError> {
            Err(RpcError::BlockNotFound {
                block_number: number,
            })
        }

        async fn transaction_receipt(&self, hash: TxHash) -> Result<RawReceipt, RpcError> {
            Err(RpcError::ReceiptNotFound { tx_hash: hash })
        }
    }

    #[test]
    fn test_range_invariant() {
        assert!(BlockRange::new(10, 10).is_ok());
        assert!(BlockRange::new(10, 20).is_ok());

        let err = BlockRange::new(20, 10).unwrap_err();
        assert!(err.to_string().contains("Invalid block range"));
    }

    #[test]
    fn test_block_count_is_inclusive() {
        assert_eq!(BlockRange::new(1000, 2000).unwrap().block_count(), 1001);
        assert_eq!(BlockRange::new(5, 5).unwrap().block_count(), 1);
        assert_eq!(
            BlockRange::new(u64::MAX - 100, u64::MAX).unwrap().block_count(),
            101
        );
    }

    #[test]
    fn test_iteration_is_descending() {
        let range = BlockRange::new(3, 5).unwrap();
        let order: Vec<u64> = range.iter_descending().collect();
        assert_eq!(order, vec![5, 4, 3]);
    }

    #[test]
    fn test_lookback_block_count() {
        // 30 days at one block per 30 seconds: 2880 blocks a day
        let window = LookbackWindow::new(30, Duration::from_secs(30));
        assert_eq!(window.block_count(), 86_400);

        let window = LookbackWindow::new(1, Duration::from_secs(12));
        assert_eq!(window.block_count(), 7_200);
    }

    #[test]
    fn test_zero_block_time_does_not_divide_by_zero() {
        let window = LookbackWindow::new(1, Duration::from_secs(0));
        assert_eq!(window.block_count(), SECONDS_PER_DAY);
    }

    #[tokio::test]
    async fn test_resolve_against_head() {
        let window = LookbackWindow::new(30, Duration::from_secs(30));
        let range = window.resolve(&FixedHead(1_000_000)).await.unwrap();
        assert_eq!(range.end, 1_000_000);
        assert_eq!(range.start, 1_000_000 - 86_400);
    }

    #[tokio::test]
    async fn test_resolve_saturates_at_genesis() {
        let window = LookbackWindow::new(30, Duration::from_secs(30));
        let range = window.resolve(&FixedHead(100)).await.unwrap();
        assert_eq!(range.start, 0);
        assert_eq!(range.end, 100);
    }
}

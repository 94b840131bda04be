//! Descending block scanner
//!
//! Walks a block range most-recent-first, matches transactions against the
//! watched contracts, and turns each match into an [`ActivityRecord`] by
//! decoding its call input and cross-referencing its receipt for Transfer
//! events.
//!
//! The scan is best-effort by design: a single unreachable block or receipt
//! must not abort a range that can span a month of chain history. Fetch and
//! decode failures are logged and confined to the unit of work that
//! produced them; no retries are performed.

use alloy_primitives::Address;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::blocks::BlockRange;
use crate::calls::SignatureRegistry;
use crate::config::{ScanConfig, WatchedContract};
use crate::events::extract_transfers;
use crate::source::{BlockDataSource, RawTransaction};
use crate::spans;

mod record;

pub use record::{ActivityRecord, RenderedRecord};

/// Scanner over a chain data source.
///
/// Holds the immutable signature registry and scan configuration; all
/// per-block data is created, used, and discarded within a single
/// iteration.
///
/// # Examples
///
/// ```rust,ignore
/// use mintscan::{BlockScanner, RpcBlockSource, ScanConfig, SignatureRegistry};
///
/// let config = ScanConfig::default();
/// let registry = SignatureRegistry::new(config.call_schemas())?;
/// let scanner = BlockScanner::new(RpcBlockSource::new(provider), registry, config);
///
/// let records = scanner.scan(range).await;
/// println!("{} matches", records.len());
/// ```
pub struct BlockScanner<S> {
    source: S,
    registry: SignatureRegistry,
    config: ScanConfig,
}

impl<S: BlockDataSource> BlockScanner<S> {
    /// Create a new scanner.
    pub fn new(source: S, registry: SignatureRegistry, config: ScanConfig) -> Self {
        Self {
            source,
            registry,
            config,
        }
    }

    /// Scan the range and collect every emitted record.
    ///
    /// Records come back in emission order: descending by block number,
    /// transaction order within a block.
    pub async fn scan(&self, range: BlockRange) -> Vec<ActivityRecord> {
        let mut records = Vec::new();
        self.scan_with_handler(range, |record| records.push(record))
            .await;
        records
    }

    /// Scan the range, passing each record to `emit` as it is produced.
    ///
    /// Blocks are visited from `range.end` down to `range.start`. A pacing
    /// delay (if configured) runs between block iterations, skipped after
    /// the final one.
    pub async fn scan_with_handler<F>(&self, range: BlockRange, mut emit: F)
    where
        F: FnMut(ActivityRecord),
    {
        let span = spans::scan_range(range.start, range.end);
        let _guard = span.enter();

        info!(
            start_block = range.start,
            end_block = range.end,
            block_count = range.block_count(),
            "Starting scan"
        );

        for number in range.iter_descending() {
            if self.config.progress_interval > 0 && number % self.config.progress_interval == 0 {
                info!(block = number, "Processing block");
            }

            self.process_block(number, &mut emit).await;

            if let Some(delay) = self.config.pacing_delay {
                if number > range.start {
                    sleep(delay).await;
                }
            }
        }

        info!(
            start_block = range.start,
            end_block = range.end,
            "Finished scan"
        );
    }

    async fn process_block<F>(&self, number: u64, emit: &mut F)
    where
        F: FnMut(ActivityRecord),
    {
        let span = spans::scan_block(number);
        let _guard = span.enter();

        let block = match self.source.block_by_number(number).await {
            Ok(block) => block,
            Err(e) => {
                warn!(block = number, error = %e, "Skipping unreachable block");
                return;
            }
        };

        for tx in &block.transactions {
            // Contract creations have no destination and are never matched
            let Some(to) = tx.to else { continue };
            let Some(rule) = self.match_rule(to, &tx.input) else {
                continue;
            };
            self.process_match(number, tx, rule, emit).await;
        }
    }

    async fn process_match<F>(
        &self,
        number: u64,
        tx: &RawTransaction,
        rule: &WatchedContract,
        emit: &mut F,
    ) where
        F: FnMut(ActivityRecord),
    {
        let span = spans::process_match(tx.hash);
        let _guard = span.enter();

        debug!(
            block = number,
            tx_hash = %tx.hash,
            action = %rule.schema.label,
            "Matched transaction"
        );

        let body = tx.input.get(4..).unwrap_or_default();
        let call = match self.registry.decode(rule.schema.selector, body) {
            Ok(call) => call,
            Err(e) => {
                warn!(tx_hash = %tx.hash, error = %e, "Skipping undecodable call input");
                return;
            }
        };

        let transfers = match self.source.transaction_receipt(tx.hash).await {
            Ok(receipt) => extract_transfers(&receipt, self.config.token_of_interest),
            Err(e) => {
                warn!(
                    tx_hash = %tx.hash,
                    error = %e,
                    "Receipt unavailable, emitting record without transfers"
                );
                Vec::new()
            }
        };

        emit(ActivityRecord {
            block_number: number,
            tx_hash: tx.hash,
            from: tx.from,
            to: rule.address,
            call,
            transfers,
        });
    }

    fn match_rule(&self, to: Address, input: &[u8]) -> Option<&WatchedContract> {
        let selector = input.get(..4)?;
        self.config
            .contracts
            .iter()
            .find(|contract| {
                contract.address == to && contract.schema.selector.as_slice() == selector
            })
    }
}

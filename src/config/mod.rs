//! Configuration for scan runs
//!
//! This module provides the configuration describing what the scanner
//! watches and how it paces itself. Use [`ScanConfigBuilder`] for a fluent
//! API to construct instances.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use mintscan::ScanConfig;
//!
//! // Watches the embedded mint and distribution contracts
//! let config = ScanConfig::default();
//! assert_eq!(config.contracts.len(), 2);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use std::time::Duration;
//! use mintscan::{ScanConfig, ScanConfigBuilder};
//!
//! let config = ScanConfigBuilder::with_defaults()
//!     .lookback_days(7)
//!     .pacing_delay(Duration::from_millis(100))
//!     .build();
//! assert_eq!(config.lookback.days, 7);
//! ```

use std::time::Duration;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::blocks::LookbackWindow;
use crate::calls::CallSchema;
use crate::types::DisplayScale;

pub mod constants;

/// One watched contract: a destination address paired with the single
/// action schema the scanner matches and decodes for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedContract {
    /// Destination address transactions must be sent to
    pub address: Address,
    /// The action matched by selector prefix and decoded on match
    pub schema: CallSchema,
}

/// Configuration for a scan run.
///
/// Immutable once the scanner is constructed. The defaults mirror the
/// deployment this tool was written to audit; every field can be overridden
/// through [`ScanConfigBuilder`].
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Contracts whose matching transactions are decoded and reported
    pub contracts: Vec<WatchedContract>,

    /// Token whose Transfer events are extracted from matched receipts
    pub token_of_interest: Address,

    /// Fixed display scale applied to every reported amount
    pub display_scale: DisplayScale,

    /// Rolling window the scan covers, resolved against the chain head
    pub lookback: LookbackWindow,

    /// Courtesy delay between block iterations; `None` disables pacing
    pub pacing_delay: Option<Duration>,

    /// Emit a progress log line every this many blocks; 0 disables
    pub progress_interval: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            contracts: default_contracts(),
            token_of_interest: constants::TOKEN_OF_INTEREST,
            display_scale: DisplayScale::MICRO,
            lookback: LookbackWindow::new(
                constants::DEFAULT_LOOKBACK_DAYS,
                constants::DEFAULT_BLOCK_TIME,
            ),
            pacing_delay: Some(constants::DEFAULT_PACING_DELAY),
            progress_interval: constants::DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ScanConfig {
    /// The call schemas of every watched contract, for registry
    /// construction.
    pub fn call_schemas(&self) -> Vec<CallSchema> {
        self.contracts
            .iter()
            .map(|contract| contract.schema.clone())
            .collect()
    }
}

fn default_contracts() -> Vec<WatchedContract> {
    vec![
        WatchedContract {
            address: constants::MINT_CONTRACT,
            schema: CallSchema {
                selector: constants::MINT_SELECTOR,
                label: constants::MINT_LABEL.to_string(),
                params: vec![
                    ("receiver".to_string(), "address".to_string()),
                    ("amount".to_string(), "uint256".to_string()),
                ],
            },
        },
        WatchedContract {
            address: constants::DISTRIBUTION_CONTRACT,
            schema: CallSchema {
                selector: constants::DEPOSIT_DISTRIBUTION_SELECTOR,
                label: constants::DEPOSIT_DISTRIBUTION_LABEL.to_string(),
                params: vec![("amount".to_string(), "uint256".to_string())],
            },
        },
    ]
}

/// Builder for [`ScanConfig`].
///
/// # Example
///
/// ```rust
/// use mintscan::ScanConfigBuilder;
///
/// let config = ScanConfigBuilder::with_defaults()
///     .no_pacing()
///     .build();
/// assert!(config.pacing_delay.is_none());
/// ```
pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl Default for ScanConfigBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ScanConfigBuilder {
    /// Start from the embedded deployment defaults.
    pub fn with_defaults() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Replace the watched contract set.
    pub fn contracts(mut self, contracts: Vec<WatchedContract>) -> Self {
        self.config.contracts = contracts;
        self
    }

    /// Add one watched contract.
    pub fn watch(mut self, contract: WatchedContract) -> Self {
        self.config.contracts.push(contract);
        self
    }

    /// Set the token whose Transfer events are cross-referenced.
    pub fn token_of_interest(mut self, token: Address) -> Self {
        self.config.token_of_interest = token;
        self
    }

    /// Set the display scale for reported amounts.
    pub fn display_scale(mut self, scale: DisplayScale) -> Self {
        self.config.display_scale = scale;
        self
    }

    /// Set the lookback window length in days.
    pub fn lookback_days(mut self, days: u64) -> Self {
        self.config.lookback.days = days;
        self
    }

    /// Set the assumed average block time.
    pub fn block_time(mut self, block_time: Duration) -> Self {
        self.config.lookback.block_time = block_time;
        self
    }

    /// Set the courtesy delay between block iterations.
    pub fn pacing_delay(mut self, delay: Duration) -> Self {
        self.config.pacing_delay = Some(delay);
        self
    }

    /// Disable pacing entirely.
    pub fn no_pacing(mut self) -> Self {
        self.config.pacing_delay = None;
        self
    }

    /// Set how many blocks apart progress log lines are emitted.
    pub fn progress_interval(mut self, interval: u64) -> Self {
        self.config.progress_interval = interval;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> ScanConfig {
        self.config
    }
}

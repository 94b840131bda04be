//! Well-known addresses, selectors, and scan defaults
//!
//! This module centralizes the constants describing the deployment the
//! scanner audits by default. Everything here feeds [`ScanConfig::default`];
//! none of it is read at decode time, so alternate deployments can be
//! configured without touching the decoders.
//!
//! [`ScanConfig::default`]: crate::ScanConfig::default

use std::time::Duration;

use alloy_primitives::{address, fixed_bytes, Address, Selector};

/// Token contract whose mint activity is audited
///
/// Contract: 0xE9df5b4b1134A3aadf693Db999786699B016239e
pub const MINT_CONTRACT: Address = address!("e9df5b4b1134a3aadf693db999786699b016239e");

/// Selector of `mint(address,uint256)`
pub const MINT_SELECTOR: Selector = fixed_bytes!("40c10f19");

/// Label used for mint records
pub const MINT_LABEL: &str = "Mint";

/// Distribution contract receiving token deposits
///
/// Contract: 0x7bAefF8996101048Ba905dB8695C8f77ae4e7631
pub const DISTRIBUTION_CONTRACT: Address = address!("7baeff8996101048ba905db8695c8f77ae4e7631");

/// Selector of `depositToken1Distribution(uint256)`
pub const DEPOSIT_DISTRIBUTION_SELECTOR: Selector = fixed_bytes!("0800ba03");

/// Label used for distribution deposit records
pub const DEPOSIT_DISTRIBUTION_LABEL: &str = "DepositToken1Distribution";

/// Token whose Transfer events are cross-referenced from receipts
///
/// Same contract as [`MINT_CONTRACT`]: the audited token mints from its own
/// address.
pub const TOKEN_OF_INTEREST: Address = address!("e9df5b4b1134a3aadf693db999786699b016239e");

/// Default lookback window length
pub const DEFAULT_LOOKBACK_DAYS: u64 = 30;

/// Assumed average block time used to size the lookback window
pub const DEFAULT_BLOCK_TIME: Duration = Duration::from_secs(30);

/// Courtesy delay between block iterations
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(50);

/// Blocks between coarse progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

//! Canonical ERC-20 Transfer event definition
//!
//! The `sol!` macro generates `SIGNATURE` (string) and `SIGNATURE_HASH`
//! (B256) constants alongside the decoder, so the Transfer topic used for
//! log matching is computed at compile time from the canonical event string
//! rather than embedded as a magic number.
//!
//! # Example
//!
//! ```rust,ignore
//! use mintscan::Transfer;
//! use alloy_sol_types::SolEvent;
//!
//! let event = Transfer::decode_log(&log)?;
//! println!("{} -> {}: {}", event.data.from, event.data.to, event.data.value);
//! ```

use std::fmt::Debug;

use alloy_sol_types::sol;

sol! {
    /// ERC-20 Transfer event
    ///
    /// Emitted when tokens move from one address to another, including
    /// mints (from = 0x0) and burns (to = 0x0). The `value` field is the
    /// raw on-chain amount, not adjusted for the display scale.
    event Transfer(address indexed from, address indexed to, uint256 value);
}

impl Debug for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transfer(from: {}, to: {}, value: {})",
            self.from, self.to, self.value
        )
    }
}

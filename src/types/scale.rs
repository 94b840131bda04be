//! Fixed display scale for token amounts

use serde::{Deserialize, Serialize};

/// Number of decimal places an on-chain integer amount is shifted by for
/// display.
///
/// The token tracked by this crate uses a fixed implicit scale of 10^6: a raw
/// amount of `1_000_000` represents `1.000000` tokens. This is a domain
/// constant supplied by configuration — it is deliberately never read from
/// on-chain token metadata, because changing it silently would change every
/// historical record the scanner has ever printed.
///
/// # Examples
///
/// ```
/// use mintscan::DisplayScale;
///
/// let scale = DisplayScale::default();
/// assert_eq!(scale.as_u8(), 6);
/// assert_eq!(scale.divisor(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayScale(u8);

impl DisplayScale {
    /// The scale used by the token of interest (10^6)
    pub const MICRO: Self = Self(6);

    /// Create a new display scale of 10^decimals
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// The divisor implied by this scale: 10^decimals
    pub fn divisor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self::MICRO
    }
}

impl From<u8> for DisplayScale {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for DisplayScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "10^{}", self.0)
    }
}

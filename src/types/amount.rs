//! Raw and display-scaled token amount types

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::ops::Add;

use super::scale::DisplayScale;

/// Raw token amount as it appears on-chain, in the token's smallest unit.
///
/// Decoders produce `TokenAmount` values unscaled so they stay lossless and
/// comparable; conversion to the human-readable form happens only at the
/// presentation boundary via [`scaled`](Self::scaled).
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use mintscan::{DisplayScale, TokenAmount};
///
/// let raw = TokenAmount::new(U256::from(2_000_000u64));
/// assert_eq!(raw.scaled(DisplayScale::MICRO).to_string(), "2.000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Shift this amount by the display scale: amount / 10^decimals.
    ///
    /// The conversion is exact for every representable `U256` input — no
    /// float rounding is involved.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use mintscan::{DisplayScale, TokenAmount};
    ///
    /// let raw = TokenAmount::new(U256::from(1u64));
    /// assert_eq!(raw.scaled(DisplayScale::MICRO).to_string(), "0.000001");
    /// ```
    pub fn scaled(&self, scale: DisplayScale) -> ScaledAmount {
        let digits = BigInt::from_bytes_be(Sign::Plus, &self.0.to_be_bytes::<32>());
        ScaledAmount(BigDecimal::new(digits, scale.as_u8() as i64))
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token amount shifted into display form by a [`DisplayScale`].
///
/// Rendering preserves the scale's full precision, so a raw `5_000_000` at
/// scale 10^6 displays as `5.000000`, never `5`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaledAmount(BigDecimal);

impl ScaledAmount {
    /// Get the inner decimal value
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl std::fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Error types for call-input decoding.

use alloy_primitives::Selector;

/// Errors that can occur when decoding a transaction's call input.
///
/// These are per-transaction failures: the scanner logs them and skips the
/// offending transaction, leaving the rest of the scan untouched.
///
/// # Examples
///
/// ```rust,ignore
/// match registry.decode(selector, body) {
///     Ok(call) => println!("{}", call.label),
///     Err(CallDecodeError::UnknownSelector { selector }) => {
///         eprintln!("no schema for {selector}");
///     }
///     Err(e) => eprintln!("decode failed: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CallDecodeError {
    /// The registry has no schema for the given selector.
    ///
    /// No partial result is produced.
    #[error("No schema registered for selector {selector}")]
    UnknownSelector {
        /// The selector that was looked up
        selector: Selector,
    },

    /// The call body's length or layout does not match the schema's
    /// expected ABI encoding.
    #[error("Malformed arguments for `{label}`")]
    MalformedArguments {
        /// Human label of the schema the body was decoded against
        label: String,
        /// The underlying ABI decoder error
        #[source]
        source: alloy_dyn_abi::Error,
    },
}

impl CallDecodeError {
    /// Create a `MalformedArguments` error for a schema.
    pub fn malformed_arguments(label: impl Into<String>, source: alloy_dyn_abi::Error) -> Self {
        CallDecodeError::MalformedArguments {
            label: label.into(),
            source,
        }
    }
}

//! Schema-driven ABI decoding of call arguments
//!
//! Given a call input body and a registered schema, produces one typed value
//! per schema entry, in schema order. Decoding is a pure function of its
//! inputs; amounts come out unscaled so they stay lossless and testable
//! independent of formatting.

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::Selector;

use crate::errors::CallDecodeError;

use super::registry::{CallSignature, SignatureRegistry};

/// One decoded call argument.
#[derive(Debug, Clone)]
pub struct DecodedArgument {
    /// Parameter name from the schema
    pub name: String,
    /// Decoded value (raw, unscaled)
    pub value: DynSolValue,
}

/// The typed result of decoding a matched transaction's call input.
///
/// Consumed immediately for rendering; never persisted.
#[derive(Debug, Clone)]
pub struct DecodedCall {
    /// Human label of the decoded action (e.g. "Mint")
    pub label: String,
    /// Decoded arguments, in schema order
    pub arguments: Vec<DecodedArgument>,
}

impl DecodedCall {
    /// Look up a decoded argument by its schema name.
    pub fn argument(&self, name: &str) -> Option<&DynSolValue> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

impl CallSignature {
    /// Decode a call body (input with the 4-byte selector already stripped)
    /// against this signature's schema.
    ///
    /// # Errors
    ///
    /// Returns [`CallDecodeError::MalformedArguments`] when the body's
    /// length or layout does not match the schema's expected ABI encoding.
    pub fn decode(&self, body: &[u8]) -> Result<DecodedCall, CallDecodeError> {
        let decoded = self
            .body_type
            .abi_decode_params(body)
            .map_err(|e| CallDecodeError::malformed_arguments(self.label.clone(), e))?;
        let values = match decoded {
            DynSolValue::Tuple(values) => values,
            single => vec![single],
        };

        let arguments = self
            .params
            .iter()
            .zip(values)
            .map(|(param, value)| DecodedArgument {
                name: param.name.clone(),
                value,
            })
            .collect();

        Ok(DecodedCall {
            label: self.label.clone(),
            arguments,
        })
    }
}

impl SignatureRegistry {
    /// Decode a call body against the schema registered for `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`CallDecodeError::UnknownSelector`] (with no partial result)
    /// when no schema is registered for the selector, or
    /// [`CallDecodeError::MalformedArguments`] when the body does not match
    /// the schema's encoding.
    pub fn decode(&self, selector: Selector, body: &[u8]) -> Result<DecodedCall, CallDecodeError> {
        let signature = self
            .get(selector)
            .ok_or(CallDecodeError::UnknownSelector { selector })?;
        signature.decode(body)
    }
}

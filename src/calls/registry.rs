//! Signature registry: selector-to-schema lookup for call decoding
//!
//! The registry is built once at startup from embedded schema definitions
//! and is read-only afterwards. It is an explicitly constructed value passed
//! into the scanner and decoders, so decoding can be unit tested without any
//! process-wide initialization order concerns.
//!
//! Construction is strict: an unparseable parameter type or a duplicate
//! selector aborts the whole run, since no decoding can proceed against a
//! broken schema set.

use std::collections::HashMap;

use alloy_dyn_abi::DynSolType;
use alloy_primitives::{Selector, B256};
use alloy_sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;
use crate::events::Transfer;

/// Raw, embeddable definition of one supported contract action.
///
/// Parameter types are Solidity type strings (`"address"`, `"uint256"`, ...)
/// parsed during registry construction.
///
/// # Examples
///
/// ```
/// use alloy_primitives::fixed_bytes;
/// use mintscan::CallSchema;
///
/// let mint = CallSchema {
///     selector: fixed_bytes!("40c10f19"),
///     label: "Mint".to_string(),
///     params: vec![
///         ("receiver".to_string(), "address".to_string()),
///         ("amount".to_string(), "uint256".to_string()),
///     ],
/// };
/// assert_eq!(mint.params.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSchema {
    /// First 4 bytes of the call input this schema decodes
    pub selector: Selector,
    /// Human label used in emitted records (e.g. "Mint")
    pub label: String,
    /// Ordered (name, solidity type) parameter declarations
    pub params: Vec<(String, String)>,
}

/// One parsed parameter of a [`CallSignature`].
#[derive(Debug, Clone)]
pub struct CallParam {
    /// Parameter name, used as the key in decoded output
    pub name: String,
    /// Parsed Solidity type
    pub ty: DynSolType,
}

/// A parsed, decodable call signature.
///
/// Produced from a [`CallSchema`] during registry construction; immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct CallSignature {
    /// The 4-byte selector identifying this action
    pub selector: Selector,
    /// Human label used in emitted records
    pub label: String,
    /// Ordered parameter declarations
    pub params: Vec<CallParam>,
    pub(crate) body_type: DynSolType,
}

impl CallSignature {
    /// Number of arguments this signature decodes to.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    fn from_schema(schema: CallSchema) -> Result<Self, RegistryError> {
        let mut params = Vec::with_capacity(schema.params.len());
        for (name, ty) in &schema.params {
            let parsed = DynSolType::parse(ty)
                .map_err(|e| RegistryError::schema_parse(schema.label.clone(), ty.clone(), e))?;
            params.push(CallParam {
                name: name.clone(),
                ty: parsed,
            });
        }
        let body_type = DynSolType::Tuple(params.iter().map(|p| p.ty.clone()).collect());
        Ok(Self {
            selector: schema.selector,
            label: schema.label,
            params,
            body_type,
        })
    }
}

/// Static mapping of 4-byte selectors to decoding schemas.
///
/// # Examples
///
/// ```
/// use mintscan::{ScanConfig, SignatureRegistry};
///
/// let registry = SignatureRegistry::new(ScanConfig::default().call_schemas()).unwrap();
/// assert!(registry.get(mintscan::config::constants::MINT_SELECTOR).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SignatureRegistry {
    by_selector: HashMap<Selector, CallSignature>,
}

impl SignatureRegistry {
    /// Topic hash identifying ERC-20 Transfer events, derived at compile
    /// time from the canonical event string
    /// `Transfer(address,address,uint256)`.
    pub const TRANSFER_TOPIC: B256 = Transfer::SIGNATURE_HASH;

    /// Build a registry from embedded schema definitions.
    ///
    /// # Errors
    ///
    /// Fails if any schema declares an unparseable parameter type or if two
    /// schemas share a selector. Both are fatal configuration errors: the
    /// surrounding program is expected to abort.
    pub fn new(schemas: impl IntoIterator<Item = CallSchema>) -> Result<Self, RegistryError> {
        let mut by_selector: HashMap<Selector, CallSignature> = HashMap::new();
        for schema in schemas {
            let signature = CallSignature::from_schema(schema)?;
            if let Some(existing) = by_selector.get(&signature.selector) {
                return Err(RegistryError::duplicate_selector(
                    signature.selector,
                    existing.label.clone(),
                    signature.label,
                ));
            }
            by_selector.insert(signature.selector, signature);
        }
        Ok(Self { by_selector })
    }

    /// Look up the signature for a selector, if one is registered.
    pub fn get(&self, selector: Selector) -> Option<&CallSignature> {
        self.by_selector.get(&selector)
    }

    /// The Transfer event topic hash.
    ///
    /// Instance form of [`Self::TRANSFER_TOPIC`] for callers holding a
    /// registry reference.
    pub const fn transfer_topic(&self) -> B256 {
        Self::TRANSFER_TOPIC
    }

    /// Number of registered signatures.
    pub fn len(&self) -> usize {
        self.by_selector.len()
    }

    /// Whether the registry has no signatures.
    pub fn is_empty(&self) -> bool {
        self.by_selector.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, fixed_bytes};

    fn mint_schema() -> CallSchema {
        CallSchema {
            selector: fixed_bytes!("40c10f19"),
            label: "Mint".to_string(),
            params: vec![
                ("receiver".to_string(), "address".to_string()),
                ("amount".to_string(), "uint256".to_string()),
            ],
        }
    }

    #[test]
    fn test_lookup_by_selector() {
        let registry = SignatureRegistry::new(vec![mint_schema()]).unwrap();

        let signature = registry.get(fixed_bytes!("40c10f19")).unwrap();
        assert_eq!(signature.label, "Mint");
        assert_eq!(signature.arity(), 2);
        assert_eq!(signature.params[0].name, "receiver");
        assert_eq!(signature.params[0].ty, DynSolType::Address);
        assert_eq!(signature.params[1].ty, DynSolType::Uint(256));
    }

    #[test]
    fn test_unknown_selector_is_absent() {
        let registry = SignatureRegistry::new(vec![mint_schema()]).unwrap();
        assert!(registry.get(fixed_bytes!("deadbeef")).is_none());
    }

    #[test]
    fn test_unparseable_type_fails_construction() {
        let mut schema = mint_schema();
        schema.params[1].1 = "uint257".to_string();

        let err = SignatureRegistry::new(vec![schema]).unwrap_err();
        assert!(matches!(err, RegistryError::SchemaParse { .. }));
        assert!(err.to_string().contains("uint257"));
    }

    #[test]
    fn test_duplicate_selector_fails_construction() {
        let mut second = mint_schema();
        second.label = "MintAgain".to_string();

        let err = SignatureRegistry::new(vec![mint_schema(), second]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateSelector { .. }));
    }

    #[test]
    fn test_transfer_topic_constant() {
        assert_eq!(
            SignatureRegistry::TRANSFER_TOPIC,
            b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = SignatureRegistry::new(vec![]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}

//! Error types for signature registry construction.
//!
//! Registry construction happens once at startup from embedded schema
//! definitions. Any failure here is fatal configuration: no decoding can
//! proceed without a valid registry, so these errors are expected to abort
//! the whole run.

use alloy_primitives::Selector;

/// Errors that can occur while building a [`SignatureRegistry`].
///
/// [`SignatureRegistry`]: crate::SignatureRegistry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// An embedded schema declares a parameter type that does not parse as a
    /// Solidity type.
    #[error("Schema `{label}` has unparseable parameter type `{ty}`")]
    SchemaParse {
        /// Human label of the schema that failed
        label: String,
        /// The offending type string
        ty: String,
        /// The underlying type-parser error
        #[source]
        source: alloy_dyn_abi::Error,
    },

    /// Two schemas declare the same 4-byte selector.
    ///
    /// Selectors are the registry's lookup key; a collision would make
    /// decoding ambiguous.
    #[error("Selector {selector} is declared by both `{first}` and `{second}`")]
    DuplicateSelector {
        /// The colliding selector
        selector: Selector,
        /// Label of the schema registered first
        first: String,
        /// Label of the schema that collided with it
        second: String,
    },
}

impl RegistryError {
    /// Create a `SchemaParse` error for a schema parameter.
    pub fn schema_parse(
        label: impl Into<String>,
        ty: impl Into<String>,
        source: alloy_dyn_abi::Error,
    ) -> Self {
        RegistryError::SchemaParse {
            label: label.into(),
            ty: ty.into(),
            source,
        }
    }

    /// Create a `DuplicateSelector` error.
    pub fn duplicate_selector(
        selector: Selector,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        RegistryError::DuplicateSelector {
            selector,
            first: first.into(),
            second: second.into(),
        }
    }
}

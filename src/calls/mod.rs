//! Call-side decoding: selector registry and argument decoder

mod decoder;
mod registry;

pub use decoder::{DecodedArgument, DecodedCall};
pub use registry::{CallParam, CallSchema, CallSignature, SignatureRegistry};

//! ERC-20 event definitions and receipt-side decoding

mod definitions;
mod transfers;

pub use definitions::Transfer;
pub use transfers::{extract_transfers, TransferEvent};

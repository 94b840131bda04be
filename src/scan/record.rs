//! Emitted audit records and their human-readable rendering
//!
//! A record carries raw decoded values; scaling to display form happens
//! only here, when a record is rendered with a [`DisplayScale`]. The
//! decoded data stays lossless until the last possible moment.

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, BlockNumber, TxHash};

use crate::calls::DecodedCall;
use crate::events::TransferEvent;
use crate::types::{DisplayScale, TokenAmount};

/// One matched transaction: its decoded call plus any Transfer events the
/// token of interest emitted in its receipt.
#[derive(Debug, Clone)]
pub struct ActivityRecord {
    /// Block the transaction was included in
    pub block_number: BlockNumber,
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Transaction sender
    pub from: Address,
    /// Watched contract the transaction was sent to
    pub to: Address,
    /// Decoded call name and arguments
    pub call: DecodedCall,
    /// Transfer events for the token of interest, in emission order
    pub transfers: Vec<TransferEvent>,
}

impl ActivityRecord {
    /// View this record in display form, with amounts shifted by `scale`.
    pub fn rendered(&self, scale: DisplayScale) -> RenderedRecord<'_> {
        RenderedRecord {
            record: self,
            scale,
        }
    }
}

/// Display adapter pairing a record with the scale its amounts are shown at.
#[derive(Debug, Clone, Copy)]
pub struct RenderedRecord<'a> {
    record: &'a ActivityRecord,
    scale: DisplayScale,
}

impl std::fmt::Display for RenderedRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let record = self.record;
        writeln!(f, "Transaction in block {}:", record.block_number)?;
        writeln!(f, "Hash: {}", record.tx_hash)?;
        writeln!(f, "From: {}", record.from)?;
        writeln!(f, "To: {}", record.to)?;

        write!(f, "{} -", record.call.label)?;
        for (i, argument) in record.call.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: ", title_case(&argument.name))?;
            fmt_value(f, &argument.value, self.scale)?;
        }
        writeln!(f)?;

        for transfer in &record.transfers {
            writeln!(
                f,
                "Token Transfer - From: {}, To: {}, Amount: {}",
                transfer.from,
                transfer.to,
                transfer.amount.scaled(self.scale)
            )?;
        }

        write!(f, "{}", "-".repeat(50))
    }
}

fn fmt_value(
    f: &mut std::fmt::Formatter<'_>,
    value: &DynSolValue,
    scale: DisplayScale,
) -> std::fmt::Result {
    match value {
        DynSolValue::Address(address) => write!(f, "{address}"),
        DynSolValue::Uint(raw, _) => write!(f, "{}", TokenAmount::new(*raw).scaled(scale)),
        other => write!(f, "{other:?}"),
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

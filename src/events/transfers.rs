//! Transfer event extraction from transaction receipts
//!
//! Pulls ERC-20 `Transfer` events emitted by one specific token out of a
//! receipt's logs. Extraction is deliberately lenient: partial or malformed
//! log entries are a normal occurrence across a large block range, so they
//! are skipped one at a time and never abort processing of the owning
//! receipt.

use alloy_primitives::{Address, Log};
use alloy_sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::source::RawReceipt;
use crate::types::TokenAmount;

use super::definitions::Transfer;

/// A decoded ERC-20 Transfer for the token of interest.
///
/// The amount is the raw on-chain integer; scaling to display form happens
/// at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    /// Address tokens were transferred from
    pub from: Address,
    /// Address tokens were transferred to
    pub to: Address,
    /// Raw transferred amount (unscaled)
    pub amount: TokenAmount,
}

/// Extract every Transfer event the given token emitted in this receipt.
///
/// A log entry contributes a [`TransferEvent`] when its emitting address
/// equals `token` and its first topic equals the Transfer signature hash.
/// Entries with fewer than 3 topics (signature plus two indexed addresses)
/// cannot be valid Transfers and are skipped, as is any entry whose data
/// word does not decode as a single unsigned integer. Indexed address
/// topics are taken from the low 20 bytes of the word; the high bytes are
/// not validated.
///
/// Never fails - the result is simply empty when nothing matches.
///
/// # Examples
///
/// ```rust,ignore
/// let transfers = extract_transfers(&receipt, token_of_interest);
/// for transfer in transfers {
///     println!("{} -> {}: {}", transfer.from, transfer.to, transfer.amount);
/// }
/// ```
pub fn extract_transfers(receipt: &RawReceipt, token: Address) -> Vec<TransferEvent> {
    receipt
        .logs
        .iter()
        .filter_map(|log| decode_transfer(log, token))
        .collect()
}

fn decode_transfer(log: &Log, token: Address) -> Option<TransferEvent> {
    if log.address != token {
        return None;
    }
    let topics = log.topics();
    if *topics.first()? != Transfer::SIGNATURE_HASH {
        return None;
    }
    if topics.len() < 3 {
        return None;
    }

    let decoded = Transfer::decode_log(log).ok()?;
    Some(TransferEvent {
        from: decoded.data.from,
        to: decoded.data.to,
        amount: TokenAmount::new(decoded.data.value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, Address, LogData, B256, U256};

    const TOKEN: Address = address!("e9df5b4b1134a3aadf693db999786699b016239e");

    fn transfer_log(emitter: Address, from: Address, to: Address, amount: u64) -> Log {
        Log {
            address: emitter,
            data: LogData::new(
                vec![
                    Transfer::SIGNATURE_HASH,
                    from.into_word(),
                    to.into_word(),
                ],
                U256::from(amount).to_be_bytes::<32>().to_vec().into(),
            )
            .unwrap(),
        }
    }

    fn receipt_with(logs: Vec<Log>) -> RawReceipt {
        RawReceipt {
            transaction_hash: B256::ZERO,
            logs,
        }
    }

    #[test]
    fn test_transfer_topic_is_canonical_keccak() {
        assert_eq!(
            Transfer::SIGNATURE_HASH,
            b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
        assert_eq!(Transfer::SIGNATURE, "Transfer(address,address,uint256)");
    }

    #[test]
    fn test_extracts_matching_transfer() {
        let from = address!("1111111111111111111111111111111111111111");
        let to = address!("2222222222222222222222222222222222222222");
        let receipt = receipt_with(vec![transfer_log(TOKEN, from, to, 1_000_000)]);

        let transfers = extract_transfers(&receipt, TOKEN);

        assert_eq!(
            transfers,
            vec![TransferEvent {
                from,
                to,
                amount: TokenAmount::from(1_000_000u64),
            }]
        );
    }

    #[test]
    fn test_skips_other_tokens() {
        let other = address!("3333333333333333333333333333333333333333");
        let from = address!("1111111111111111111111111111111111111111");
        let to = address!("2222222222222222222222222222222222222222");
        let receipt = receipt_with(vec![transfer_log(other, from, to, 500)]);

        assert!(extract_transfers(&receipt, TOKEN).is_empty());
    }

    #[test]
    fn test_skips_other_event_kinds() {
        let mut log = transfer_log(
            TOKEN,
            address!("1111111111111111111111111111111111111111"),
            address!("2222222222222222222222222222222222222222"),
            500,
        );
        let mut topics = log.data.topics().to_vec();
        topics[0] = B256::ZERO;
        log.data = LogData::new(topics, log.data.data.clone()).unwrap();
        let receipt = receipt_with(vec![log]);

        assert!(extract_transfers(&receipt, TOKEN).is_empty());
    }

    #[test]
    fn test_skips_logs_with_fewer_than_three_topics() {
        let log = Log {
            address: TOKEN,
            data: LogData::new(
                vec![Transfer::SIGNATURE_HASH],
                U256::from(1u64).to_be_bytes::<32>().to_vec().into(),
            )
            .unwrap(),
        };
        let receipt = receipt_with(vec![log]);

        assert!(extract_transfers(&receipt, TOKEN).is_empty());
    }

    #[test]
    fn test_skips_malformed_data_word() {
        let log = Log {
            address: TOKEN,
            data: LogData::new(
                vec![
                    Transfer::SIGNATURE_HASH,
                    Address::ZERO.into_word(),
                    Address::ZERO.into_word(),
                ],
                vec![0u8; 31].into(),
            )
            .unwrap(),
        };
        let receipt = receipt_with(vec![log]);

        assert!(extract_transfers(&receipt, TOKEN).is_empty());
    }

    #[test]
    fn test_dirty_high_bytes_still_decode_low_twenty() {
        let from = address!("1111111111111111111111111111111111111111");
        let to = address!("2222222222222222222222222222222222222222");
        let mut from_word = from.into_word();
        from_word.0[..12].fill(0xFF);
        let log = Log {
            address: TOKEN,
            data: LogData::new(
                vec![Transfer::SIGNATURE_HASH, from_word, to.into_word()],
                U256::from(42u64).to_be_bytes::<32>().to_vec().into(),
            )
            .unwrap(),
        };
        let receipt = receipt_with(vec![log]);

        let transfers = extract_transfers(&receipt, TOKEN);
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].from, from);
    }

    #[test]
    fn test_mixed_logs_keep_only_valid_transfers() {
        let from = address!("1111111111111111111111111111111111111111");
        let to = address!("2222222222222222222222222222222222222222");
        let short = Log {
            address: TOKEN,
            data: LogData::new(vec![Transfer::SIGNATURE_HASH], vec![].into()).unwrap(),
        };
        let receipt = receipt_with(vec![
            short,
            transfer_log(TOKEN, from, to, 7),
            transfer_log(address!("4444444444444444444444444444444444444444"), from, to, 9),
        ]);

        let transfers = extract_transfers(&receipt, TOKEN);
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].amount, TokenAmount::from(7u64));
    }

    #[test]
    fn test_empty_receipt_yields_no_transfers() {
        assert!(extract_transfers(&receipt_with(vec![]), TOKEN).is_empty());
    }
}

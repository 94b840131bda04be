//! Test helpers for mintscan integration tests
//!
//! Provides an in-memory [`BlockDataSource`] plus builders for encoded call
//! inputs and Transfer logs, so scanner behavior can be tested without a
//! real chain connection.

use std::collections::{HashMap, HashSet};
use std::io;

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, Bytes, Log, LogData, Selector, TxHash, B256, U256};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;

use mintscan::errors::RpcError;
use mintscan::{BlockDataSource, RawBlock, RawReceipt, RawTransaction, Transfer};

/// In-memory chain fixture.
///
/// Blocks and receipts are looked up from maps; numbers/hashes registered
/// as failing return an RPC-layer error instead, to exercise the scanner's
/// partial-failure tolerance.
///
/// # Example
///
/// ```rust,ignore
/// let chain = MockChain::new(100)
///     .with_block(block)
///     .with_failing_block(99);
/// ```
pub struct MockChain {
    latest: u64,
    blocks: HashMap<u64, RawBlock>,
    receipts: HashMap<TxHash, RawReceipt>,
    failing_blocks: HashSet<u64>,
    failing_receipts: HashSet<TxHash>,
}

impl MockChain {
    pub fn new(latest: u64) -> Self {
        Self {
            latest,
            blocks: HashMap::new(),
            receipts: HashMap::new(),
            failing_blocks: HashSet::new(),
            failing_receipts: HashSet::new(),
        }
    }

    pub fn with_block(mut self, block: RawBlock) -> Self {
        self.blocks.insert(block.number, block);
        self
    }

    pub fn with_receipt(mut self, receipt: RawReceipt) -> Self {
        self.receipts.insert(receipt.transaction_hash, receipt);
        self
    }

    pub fn with_failing_block(mut self, number: u64) -> Self {
        self.failing_blocks.insert(number);
        self
    }

    pub fn with_failing_receipt(mut self, hash: TxHash) -> Self {
        self.failing_receipts.insert(hash);
        self
    }
}

#[async_trait]
impl BlockDataSource for MockChain {
    async fn latest_block_number(&self) -> Result<u64, RpcError> {
        Ok(self.latest)
    }

    async fn block_by_number(&self, number: u64) -> Result<RawBlock, RpcError> {
        if self.failing_blocks.contains(&number) {
            return Err(RpcError::get_block_failed(
                number,
                io::Error::new(io::ErrorKind::ConnectionReset, "simulated outage"),
            ));
        }
        self.blocks
            .get(&number)
            .cloned()
            .ok_or(RpcError::BlockNotFound {
                block_number: number,
            })
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<RawReceipt, RpcError> {
        if self.failing_receipts.contains(&hash) {
            return Err(RpcError::get_receipt_failed(
                hash,
                io::Error::new(io::ErrorKind::ConnectionReset, "simulated outage"),
            ));
        }
        self.receipts
            .get(&hash)
            .cloned()
            .ok_or(RpcError::ReceiptNotFound { tx_hash: hash })
    }
}

/// A unique transaction hash from a small test index.
pub fn tx_hash(index: u8) -> TxHash {
    B256::repeat_byte(index)
}

/// ABI-encode a `mint(address,uint256)` call input, selector included.
pub fn mint_input(selector: Selector, receiver: Address, amount: u64) -> Bytes {
    let args = DynSolValue::Tuple(vec![
        DynSolValue::Address(receiver),
        DynSolValue::Uint(U256::from(amount), 256),
    ]);
    let mut input = selector.to_vec();
    input.extend(args.abi_encode_params());
    input.into()
}

/// ABI-encode a `depositToken1Distribution(uint256)` call input, selector
/// included.
pub fn deposit_input(selector: Selector, amount: u64) -> Bytes {
    let args = DynSolValue::Tuple(vec![DynSolValue::Uint(U256::from(amount), 256)]);
    let mut input = selector.to_vec();
    input.extend(args.abi_encode_params());
    input.into()
}

/// A well-formed ERC-20 Transfer log emitted by `token`.
pub fn transfer_log(token: Address, from: Address, to: Address, amount: u64) -> Log {
    Log {
        address: token,
        data: LogData::new(
            vec![Transfer::SIGNATURE_HASH, from.into_word(), to.into_word()],
            U256::from(amount).to_be_bytes::<32>().to_vec().into(),
        )
        .unwrap(),
    }
}

/// A single-transaction block addressed to `to`.
pub fn block_with_tx(number: u64, hash: TxHash, from: Address, to: Option<Address>, input: Bytes) -> RawBlock {
    RawBlock {
        number,
        transactions: vec![RawTransaction {
            hash,
            from,
            to,
            input,
        }],
    }
}

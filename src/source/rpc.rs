//! Alloy-provider-backed chain data source

use alloy_consensus::{Transaction as _, TxReceipt as _};
use alloy_primitives::{BlockNumber, TxHash};
use alloy_provider::Provider;
use async_trait::async_trait;

use crate::errors::RpcError;

use super::{BlockDataSource, RawBlock, RawReceipt, RawTransaction};

/// [`BlockDataSource`] implementation over an Alloy [`Provider`].
///
/// Converts provider responses into the crate's strongly-typed records at
/// this boundary; absent blocks and receipts surface as
/// [`RpcError::BlockNotFound`] / [`RpcError::ReceiptNotFound`] rather than
/// leaking `Option`s into the scan.
///
/// # Examples
///
/// ```rust,ignore
/// use alloy_provider::ProviderBuilder;
/// use mintscan::RpcBlockSource;
///
/// let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
/// let source = RpcBlockSource::new(provider);
/// let head = source.latest_block_number().await?;
/// ```
pub struct RpcBlockSource<P> {
    provider: P,
}

impl<P> RpcBlockSource<P> {
    /// Create a new source over the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: Provider> BlockDataSource for RpcBlockSource<P> {
    async fn latest_block_number(&self) -> Result<BlockNumber, RpcError> {
        self.provider
            .get_block_number()
            .await
            .map_err(RpcError::get_block_number_failed)
    }

    async fn block_by_number(&self, number: BlockNumber) -> Result<RawBlock, RpcError> {
        let block = self
            .provider
            .get_block_by_number(number.into())
            .full()
            .await
            .map_err(|e| RpcError::get_block_failed(number, e))?
            .ok_or(RpcError::BlockNotFound {
                block_number: number,
            })?;

        let transactions = block
            .transactions
            .into_transactions()
            .map(|tx| RawTransaction {
                hash: *tx.inner.tx_hash(),
                from: tx.inner.signer(),
                to: tx.to(),
                input: tx.input().clone(),
            })
            .collect();

        Ok(RawBlock {
            number,
            transactions,
        })
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<RawReceipt, RpcError> {
        let receipt = self
            .provider
            .get_transaction_receipt(hash)
            .await
            .map_err(|e| RpcError::get_receipt_failed(hash, e))?
            .ok_or(RpcError::ReceiptNotFound { tx_hash: hash })?;

        let logs = receipt
            .inner
            .logs()
            .iter()
            .map(|log| log.inner.clone())
            .collect();

        Ok(RawReceipt {
            transaction_hash: receipt.transaction_hash,
            logs,
        })
    }
}

//! Process setup and the main scan entry point

use alloy_provider::ProviderBuilder;
use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use url::Url;

use crate::calls::SignatureRegistry;
use crate::config::{ScanConfig, ScanConfigBuilder};
use crate::scan::BlockScanner;
use crate::source::RpcBlockSource;

/// Main entry point for the application.
///
/// Reads configuration from the environment, builds the provider and the
/// signature registry, resolves the lookback window against the chain head,
/// and runs the scan, printing one record per matched transaction.
///
/// Any error returned from here is fatal: a malformed embedded schema, a
/// missing or invalid `RPC_URL`, or an unreachable chain head. Transient
/// failures inside the scan itself never propagate this far.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let rpc_url = dotenvy::var("RPC_URL").context("RPC_URL must be set")?;
    let url: Url = rpc_url.parse().context("RPC_URL is not a valid URL")?;

    let config = config_from_env()?;
    let scale = config.display_scale;

    // A broken schema set means nothing can be decoded; fail before any RPC
    let registry =
        SignatureRegistry::new(config.call_schemas()).context("invalid embedded call schema")?;

    let provider = ProviderBuilder::new().connect_http(url);
    let source = RpcBlockSource::new(provider);

    let range = config
        .lookback
        .resolve(&source)
        .await
        .context("failed to resolve scan range against chain head")?;

    info!(
        start_block = range.start,
        end_block = range.end,
        lookback_days = config.lookback.days,
        "Resolved scan range"
    );
    println!("Searching from block {} to {}", range.start, range.end);

    let scanner = BlockScanner::new(source, registry, config);
    scanner
        .scan_with_handler(range, |record| {
            println!("\n{}", record.rendered(scale));
        })
        .await;

    Ok(())
}

fn config_from_env() -> anyhow::Result<ScanConfig> {
    let mut builder = ScanConfigBuilder::with_defaults();

    if let Ok(days) = dotenvy::var("LOOKBACK_DAYS") {
        let days = days.parse().context("LOOKBACK_DAYS must be an integer")?;
        builder = builder.lookback_days(days);
    }
    if let Ok(secs) = dotenvy::var("BLOCK_TIME_SECS") {
        let secs: u64 = secs.parse().context("BLOCK_TIME_SECS must be an integer")?;
        builder = builder.block_time(std::time::Duration::from_secs(secs));
    }

    Ok(builder.build())
}

//! `storefront-load`: run the storefront load test with goose.
//!
//! ```bash
//! # 50 users, 10 new users per second, five minutes, HTML report
//! storefront-load -u50 -r10 -t5m --report-file report.html
//!
//! # Point at another backend (flag wins over STOREFRONT_HOST)
//! storefront-load --host http://staging.internal:3000 -u10 -t30s
//! ```
//!
//! All command-line flags are goose's (`storefront-load --help`). Settings
//! of the simulated users come from `STOREFRONT_*` environment variables,
//! see [`storefront_load::config`].

use anyhow::Context;
use goose::prelude::*;
use storefront_load::attack;
use storefront_load::config::LoadTestConfig;
use storefront_load::logging::{self, LogConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging_with_config(&LogConfig::from_env())?;

    let config = LoadTestConfig::load().context("failed to load load-test configuration")?;
    let goose_attack = GooseAttack::initialize().context("failed to initialize goose")?;
    let metrics = attack::build_attack(goose_attack, &config)
        .context("failed to configure load test")?
        .execute()
        .await
        .context("load test failed")?;

    tracing::info!(endpoints = metrics.requests.len(), "load test finished");
    Ok(())
}

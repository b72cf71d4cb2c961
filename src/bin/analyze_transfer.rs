use anyhow::{Context, Result};
use lightcmp::config::ReportConfig;
use lightcmp::services::run_transfer_comparison;
use lightcmp::utils::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();

    let config = ReportConfig::from_env();
    let mut stdout = std::io::stdout();
    run_transfer_comparison(&config, &mut stdout)
        .await
        .context("transfer size comparison failed")?;

    Ok(())
}

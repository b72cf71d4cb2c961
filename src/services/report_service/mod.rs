// src/services/report_service/mod.rs

pub mod compare;
pub mod extract;
pub mod score_report;
pub mod transfer_report;

pub use compare::{compare_bytes, compare_timing};
pub use extract::{extract_network_metrics, extract_score_metrics};
pub use score_report::{render_score_report, summary_lines};
pub use transfer_report::render_transfer_report;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::models::AuditDocument;
use crate::utils::format_bytes;
use crate::utils::load_report;
use log::{debug, info};
use std::io::Write;

/// Loads the master report, then the optimized one.
pub async fn load_reports(config: &ReportConfig) -> Result<(AuditDocument, AuditDocument)> {
    info!("loading baseline report {}", config.master_path.display());
    let master = load_report(&config.master_path).await?;
    info!("loading candidate report {}", config.optimized_path.display());
    let optimized = load_report(&config.optimized_path).await?;
    Ok((master, optimized))
}

pub async fn run_score_comparison<W: Write>(config: &ReportConfig, out: &mut W) -> Result<()> {
    let (master, optimized) = load_reports(config).await?;
    let master_metrics = extract_score_metrics(&master)?;
    let optimized_metrics = extract_score_metrics(&optimized)?;
    debug!(
        "performance score {:.1} -> {:.1}",
        master_metrics.score, optimized_metrics.score
    );

    render_score_report(out, &master_metrics, &optimized_metrics)?;
    out.flush()?;
    Ok(())
}

pub async fn run_transfer_comparison<W: Write>(config: &ReportConfig, out: &mut W) -> Result<()> {
    let (master, optimized) = load_reports(config).await?;
    let master_metrics = extract_network_metrics(&master)?;
    let optimized_metrics = extract_network_metrics(&optimized)?;
    if let (Some(before), Some(after)) = (master_metrics.document_size, optimized_metrics.document_size) {
        debug!(
            "main document transfer size {} -> {}",
            format_bytes(before),
            format_bytes(after)
        );
    }

    render_transfer_report(out, &master_metrics, &optimized_metrics)?;
    out.flush()?;
    Ok(())
}

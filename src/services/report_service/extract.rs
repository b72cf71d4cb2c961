use crate::error::{ReportError, Result};
use crate::models::{AuditDocument, NetworkMetrics, ScoreMetrics, TimingMetric};
use log::debug;
use std::collections::HashMap;

const TOTAL_BYTE_WEIGHT: &str = "total-byte-weight";
const RESOURCE_SUMMARY: &str = "resource-summary";
const NETWORK_REQUESTS: &str = "network-requests";
const DOCUMENT_RESOURCE: &str = "Document";

/// Performance score and the six timing audits. Every value is required.
pub fn extract_score_metrics(report: &AuditDocument) -> Result<ScoreMetrics> {
    let score = report.performance_score()?;

    let mut timings = HashMap::new();
    for metric in TimingMetric::ALL {
        let value = report.required_numeric_value(metric.audit_id())?;
        timings.insert(metric, value);
    }

    Ok(ScoreMetrics { score, timings })
}

/// Transfer sizes and request counts. The three network audits are optional;
/// once an audit is present its fields are required.
pub fn extract_network_metrics(report: &AuditDocument) -> Result<NetworkMetrics> {
    let mut metrics = NetworkMetrics::default();

    match report.audit(TOTAL_BYTE_WEIGHT) {
        Some(audit) => {
            metrics.total_bytes = Some(audit.required_numeric_value(TOTAL_BYTE_WEIGHT)?);
        }
        None => debug!("{} audit not present", TOTAL_BYTE_WEIGHT),
    }

    match report.audit(RESOURCE_SUMMARY) {
        Some(audit) => {
            for (index, item) in audit.items(RESOURCE_SUMMARY)?.into_iter().enumerate() {
                let resource_type = item.resource_type.ok_or_else(|| {
                    ReportError::missing(format!(
                        "audits.{}.details.items[{}].resourceType",
                        RESOURCE_SUMMARY, index
                    ))
                })?;
                let transfer_size = item.transfer_size.ok_or_else(|| {
                    ReportError::missing(format!(
                        "audits.{}.details.items[{}].transferSize",
                        RESOURCE_SUMMARY, index
                    ))
                })?;
                // later rows replace earlier ones of the same type
                metrics.resource_sizes.insert(resource_type, transfer_size);
            }
        }
        None => debug!("{} audit not present", RESOURCE_SUMMARY),
    }

    match report.audit(NETWORK_REQUESTS) {
        Some(audit) => {
            let items = audit.items(NETWORK_REQUESTS)?;
            metrics.total_requests = Some(items.len());

            for (index, item) in items.iter().enumerate() {
                let resource_type = item.resource_type.as_deref().ok_or_else(|| {
                    ReportError::missing(format!(
                        "audits.{}.details.items[{}].resourceType",
                        NETWORK_REQUESTS, index
                    ))
                })?;
                if resource_type == DOCUMENT_RESOURCE {
                    metrics.document_size = Some(item.transfer_size.unwrap_or_default());
                    break;
                }
            }
        }
        None => debug!("{} audit not present", NETWORK_REQUESTS),
    }

    Ok(metrics)
}

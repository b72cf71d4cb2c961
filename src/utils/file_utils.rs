use crate::error::{ReportError, Result};
use crate::models::AuditDocument;
use log::debug;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Reads and parses one Lighthouse JSON report. The file handle is dropped
/// as soon as its contents are buffered.
pub async fn load_report(path: &Path) -> Result<AuditDocument> {
    let buffer = {
        let mut file = tokio::fs::File::open(path)
            .await
            .map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .await
            .map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    };
    debug!("read {} bytes from {}", buffer.len(), path.display());

    let report = serde_json::from_slice::<AuditDocument>(&buffer).map_err(|source| {
        ReportError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(
        "parsed {} audits from {}",
        report.audits.len(),
        path.display()
    );

    Ok(report)
}

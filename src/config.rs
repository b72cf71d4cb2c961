use dotenv::dotenv;
use std::path::{Path, PathBuf};

pub const MASTER_REPORT: &str = "lighthouse-master.json";
pub const OPTIMIZED_REPORT: &str = "lighthouse-optimized.json";

const REPORT_DIR_VAR: &str = "LIGHTHOUSE_REPORT_DIR";

/// Locations of the baseline and candidate reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub master_path: PathBuf,
    pub optimized_path: PathBuf,
}

impl ReportConfig {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        ReportConfig {
            master_path: dir.join(MASTER_REPORT),
            optimized_path: dir.join(OPTIMIZED_REPORT),
        }
    }

    /// Loads `.env` if present, then reads `LIGHTHOUSE_REPORT_DIR`.
    /// Falls back to the working directory.
    pub fn from_env() -> Self {
        dotenv().ok();

        match std::env::var(REPORT_DIR_VAR) {
            Ok(dir) if !dir.trim().is_empty() => Self::in_dir(dir),
            _ => Self::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            master_path: PathBuf::from(MASTER_REPORT),
            optimized_path: PathBuf::from(OPTIMIZED_REPORT),
        }
    }
}

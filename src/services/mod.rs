pub mod report_service;

pub use report_service::{load_reports, run_score_comparison, run_transfer_comparison};

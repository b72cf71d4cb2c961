pub mod audit;
pub mod category;
pub mod metrics;
pub mod report;

pub use audit::{Audit, AuditDetails, AuditItem};
pub use category::{Categories, Category};
pub use metrics::{NetworkMetrics, ScoreMetrics, TimingMetric};
pub use report::AuditDocument;

// src/models/mod.rs

pub mod lighthouse;

pub use lighthouse::{
    Audit, AuditDetails, AuditDocument, AuditItem, Categories, Category, NetworkMetrics,
    ScoreMetrics, TimingMetric,
};

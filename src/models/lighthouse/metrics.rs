use serde::Serialize;
use std::collections::HashMap;

/// Timing audits compared by the score report, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimingMetric {
    FirstContentfulPaint,
    LargestContentfulPaint,
    TotalBlockingTime,
    CumulativeLayoutShift,
    SpeedIndex,
    TimeToInteractive,
}

impl TimingMetric {
    pub const ALL: [TimingMetric; 6] = [
        TimingMetric::FirstContentfulPaint,
        TimingMetric::LargestContentfulPaint,
        TimingMetric::TotalBlockingTime,
        TimingMetric::CumulativeLayoutShift,
        TimingMetric::SpeedIndex,
        TimingMetric::TimeToInteractive,
    ];

    pub fn audit_id(self) -> &'static str {
        match self {
            TimingMetric::FirstContentfulPaint => "first-contentful-paint",
            TimingMetric::LargestContentfulPaint => "largest-contentful-paint",
            TimingMetric::TotalBlockingTime => "total-blocking-time",
            TimingMetric::CumulativeLayoutShift => "cumulative-layout-shift",
            TimingMetric::SpeedIndex => "speed-index",
            TimingMetric::TimeToInteractive => "interactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimingMetric::FirstContentfulPaint => "First Contentful Paint (FCP)",
            TimingMetric::LargestContentfulPaint => "Largest Contentful Paint (LCP)",
            TimingMetric::TotalBlockingTime => "Total Blocking Time (TBT)",
            TimingMetric::CumulativeLayoutShift => "Cumulative Layout Shift (CLS)",
            TimingMetric::SpeedIndex => "Speed Index",
            TimingMetric::TimeToInteractive => "Time to Interactive (TTI)",
        }
    }

    // CLS is unitless, everything else is reported in milliseconds
    pub fn unit(self) -> &'static str {
        match self {
            TimingMetric::CumulativeLayoutShift => "",
            _ => "ms",
        }
    }

    pub fn lower_is_better(self) -> bool {
        true
    }
}

// Values read by the score report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMetrics {
    pub score: f64,
    pub timings: HashMap<TimingMetric, f64>,
}

impl ScoreMetrics {
    pub fn timing(&self, metric: TimingMetric) -> f64 {
        self.timings.get(&metric).copied().unwrap_or_default()
    }
}

// Values read by the transfer report. Optional audits leave their fields unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkMetrics {
    pub total_bytes: Option<f64>,
    pub resource_sizes: HashMap<String, f64>, // resourceType -> transferSize
    pub total_requests: Option<usize>,
    pub document_size: Option<f64>,
}

impl NetworkMetrics {
    pub fn resource_size(&self, resource_type: &str) -> Option<f64> {
        self.resource_sizes.get(resource_type).copied()
    }
}

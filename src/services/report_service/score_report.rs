use crate::models::{ScoreMetrics, TimingMetric};
use crate::services::report_service::compare::{compare_timing, FAVORABLE};
use std::io::{self, Write};

const HEAVY_RULE: &str = "============================================================";
const LIGHT_RULE: &str = "------------------------------------------------------------";

/// Sentences for the summary section, in a fixed order.
///
/// An LCP increase is listed here as well. That matches how these reports
/// have always read and is kept as-is.
pub fn summary_lines(master: &ScoreMetrics, optimized: &ScoreMetrics) -> Vec<String> {
    let mut lines = Vec::new();

    let fcp = (
        master.timing(TimingMetric::FirstContentfulPaint),
        optimized.timing(TimingMetric::FirstContentfulPaint),
    );
    if fcp.1 < fcp.0 {
        lines.push(format!("FCP improved by {:.0}ms", fcp.0 - fcp.1));
    }

    let lcp = (
        master.timing(TimingMetric::LargestContentfulPaint),
        optimized.timing(TimingMetric::LargestContentfulPaint),
    );
    if lcp.1 > lcp.0 {
        lines.push(format!("LCP slightly increased by {:.0}ms", lcp.1 - lcp.0));
    }

    let si = (
        master.timing(TimingMetric::SpeedIndex),
        optimized.timing(TimingMetric::SpeedIndex),
    );
    if si.1 < si.0 {
        lines.push(format!("Speed Index improved by {:.0}ms", si.0 - si.1));
    }

    lines
}

pub fn render_score_report<W: Write>(
    out: &mut W,
    master: &ScoreMetrics,
    optimized: &ScoreMetrics,
) -> io::Result<()> {
    let score_delta = optimized.score - master.score;

    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out, "LIGHTHOUSE PERFORMANCE COMPARISON")?;
    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out)?;

    writeln!(out, "PERFORMANCE SCORES:")?;
    writeln!(out, "  Master Branch:    {:.0}/100", master.score)?;
    writeln!(out, "  Optimized Branch: {:.0}/100", optimized.score)?;
    writeln!(out, "  Improvement:      {:+.0} points", score_delta)?;
    writeln!(out)?;

    writeln!(out, "KEY METRICS:")?;
    writeln!(out, "{}", LIGHT_RULE)?;
    for metric in TimingMetric::ALL {
        compare_timing(out, metric, master.timing(metric), optimized.timing(metric))?;
    }

    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out, "SUMMARY:")?;
    writeln!(out, "{}", LIGHT_RULE)?;

    let improvements = summary_lines(master, optimized);
    if !improvements.is_empty() {
        writeln!(out, "{} Improvements:", FAVORABLE)?;
        for line in &improvements {
            writeln!(out, "   - {}", line)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Overall: The compression and caching optimizations resulted in")?;
    writeln!(out, "a {:+.0} point improvement in Lighthouse score.", score_delta)?;
    writeln!(out, "{}", HEAVY_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn metrics(score: f64, values: [f64; 6]) -> ScoreMetrics {
        let timings: HashMap<_, _> = TimingMetric::ALL.into_iter().zip(values).collect();
        ScoreMetrics { score, timings }
    }

    fn render(master: &ScoreMetrics, optimized: &ScoreMetrics) -> String {
        let mut out = Vec::new();
        render_score_report(&mut out, master, optimized).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_scores_and_point_delta() {
        let master = metrics(0.75 * 100.0, [1500.0, 2000.0, 100.0, 0.05, 1800.0, 3000.0]);
        let optimized = metrics(0.90 * 100.0, [1200.0, 2100.0, 80.0, 0.08, 1600.0, 2900.0]);
        let text = render(&master, &optimized);

        assert!(text.contains("  Master Branch:    75/100\n"));
        assert!(text.contains("  Optimized Branch: 90/100\n"));
        assert!(text.contains("  Improvement:      +15 points\n"));
        assert!(text.contains("a +15 point improvement in Lighthouse score.\n"));
    }

    #[test]
    fn score_drop_keeps_its_sign() {
        let master = metrics(80.0, [1.0; 6]);
        let optimized = metrics(70.0, [1.0; 6]);
        let text = render(&master, &optimized);

        assert!(text.contains("  Improvement:      -10 points\n"));
        assert!(text.contains("a -10 point improvement"));
    }

    #[test]
    fn timing_blocks_follow_fixed_order() {
        let master = metrics(50.0, [1.0; 6]);
        let text = render(&master, &master);

        let positions: Vec<usize> = TimingMetric::ALL
            .iter()
            .map(|m| text.find(m.label()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn summary_lists_fcp_lcp_and_speed_index() {
        let master = metrics(70.0, [1500.0, 2000.0, 100.0, 0.05, 1800.0, 3000.0]);
        let optimized = metrics(80.0, [1200.0, 2100.0, 80.0, 0.05, 1600.0, 2900.0]);

        assert_eq!(
            summary_lines(&master, &optimized),
            vec![
                "FCP improved by 300ms".to_string(),
                "LCP slightly increased by 100ms".to_string(),
                "Speed Index improved by 200ms".to_string(),
            ]
        );
        let text = render(&master, &optimized);
        assert!(text.contains("✅ Improvements:\n   - FCP improved by 300ms\n"));
    }

    #[test]
    fn summary_omitted_without_improvements() {
        let master = metrics(70.0, [1000.0, 2000.0, 100.0, 0.05, 1500.0, 3000.0]);
        let optimized = metrics(70.0, [1100.0, 1900.0, 100.0, 0.05, 1600.0, 3000.0]);

        assert!(summary_lines(&master, &optimized).is_empty());
        assert!(!render(&master, &optimized).contains("Improvements:"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let master = metrics(61.0, [1500.0, 2000.0, 100.0, 0.05, 1800.0, 3000.0]);
        let optimized = metrics(88.0, [1200.0, 2100.0, 80.0, 0.08, 1600.0, 2900.0]);
        assert_eq!(render(&master, &optimized), render(&master, &optimized));
    }
}

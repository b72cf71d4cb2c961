use crate::models::TimingMetric;
use crate::utils::format_bytes;
use std::io::{self, Write};

// Deltas at or below these are treated as noise and get no change line
pub const BYTE_THRESHOLD: f64 = 100.0;
pub const TIMING_THRESHOLD: f64 = 1.0;
pub const LAYOUT_SHIFT_THRESHOLD: f64 = 0.000001;

pub const FAVORABLE: &str = "✅";
pub const UNFAVORABLE: &str = "⚠️";

const BYTE_NAME_WIDTH: usize = 20;
const TIMING_NAME_WIDTH: usize = 30;

fn sign(diff: f64) -> &'static str {
    if diff > 0.0 {
        "+"
    } else {
        ""
    }
}

fn direction_glyph(diff: f64, lower_is_better: bool) -> &'static str {
    if (diff < 0.0 && lower_is_better) || (diff > 0.0 && !lower_is_better) {
        FAVORABLE
    } else if diff != 0.0 {
        UNFAVORABLE
    } else {
        ""
    }
}

/// Writes a byte comparison block. A zero baseline has no meaningful
/// percentage, so nothing is written for it.
pub fn compare_bytes<W: Write>(out: &mut W, name: &str, master: f64, optimized: f64) -> io::Result<()> {
    if master == 0.0 {
        return Ok(());
    }
    let diff = optimized - master;
    let pct = diff / master * 100.0;

    writeln!(
        out,
        "{:<w$} Master: {:>10}",
        name,
        format_bytes(master),
        w = BYTE_NAME_WIDTH
    )?;
    writeln!(
        out,
        "{:<w$} Optimized: {:>10}",
        "",
        format_bytes(optimized),
        w = BYTE_NAME_WIDTH
    )?;

    if diff.abs() > BYTE_THRESHOLD {
        let delta = if diff < 0.0 {
            format!("-{}", format_bytes(-diff))
        } else {
            format!("+{}", format_bytes(diff))
        };
        writeln!(
            out,
            "{:<w$} Change: {:>10} ({}{:.1}%) {}",
            "",
            delta,
            sign(diff),
            pct,
            direction_glyph(diff, true),
            w = BYTE_NAME_WIDTH
        )?;
    }
    writeln!(out)
}

/// Writes a timing comparison block. Unlike bytes, a zero baseline still
/// prints, with the percentage pinned to zero.
pub fn compare_timing<W: Write>(
    out: &mut W,
    metric: TimingMetric,
    master: f64,
    optimized: f64,
) -> io::Result<()> {
    let diff = optimized - master;
    let pct = if master != 0.0 {
        diff / master * 100.0
    } else {
        0.0
    };
    let name = metric.label();

    if metric == TimingMetric::CumulativeLayoutShift {
        writeln!(out, "{:<w$} Master: {:.6}", name, master, w = TIMING_NAME_WIDTH)?;
        writeln!(out, "{:<w$} Optimized: {:.6}", "", optimized, w = TIMING_NAME_WIDTH)?;
        if diff.abs() > LAYOUT_SHIFT_THRESHOLD {
            let glyph = if diff <= 0.0 { FAVORABLE } else { UNFAVORABLE };
            writeln!(
                out,
                "{:<w$} Change: {}{:.6} ({}{:.1}%) {}",
                "",
                sign(diff),
                diff,
                sign(diff),
                pct,
                glyph,
                w = TIMING_NAME_WIDTH
            )?;
        }
    } else {
        let unit = metric.unit();
        writeln!(out, "{:<w$} Master: {:.0}{}", name, master, unit, w = TIMING_NAME_WIDTH)?;
        writeln!(out, "{:<w$} Optimized: {:.0}{}", "", optimized, unit, w = TIMING_NAME_WIDTH)?;
        if diff.abs() > TIMING_THRESHOLD {
            writeln!(
                out,
                "{:<w$} Change: {}{:.0}{} ({}{:.1}%) {}",
                "",
                sign(diff),
                diff,
                unit,
                sign(diff),
                pct,
                direction_glyph(diff, metric.lower_is_better()),
                w = TIMING_NAME_WIDTH
            )?;
        }
    }
    writeln!(out)
}

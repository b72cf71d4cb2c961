use crate::models::NetworkMetrics;
use crate::services::report_service::compare::compare_bytes;
use std::io::{self, Write};

const HEAVY_RULE: &str = "============================================================";
const SECTION_RULE: &str = "----------------------------------------";

/// Resource types shown in the per-type section, in display order.
pub const RESOURCE_TYPES: [&str; 6] = ["Document", "Script", "Stylesheet", "Image", "Font", "Other"];

pub fn render_transfer_report<W: Write>(
    out: &mut W,
    master: &NetworkMetrics,
    optimized: &NetworkMetrics,
) -> io::Result<()> {
    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out, "NETWORK TRANSFER SIZE COMPARISON")?;
    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out)?;

    if let (Some(master_bytes), Some(optimized_bytes)) = (master.total_bytes, optimized.total_bytes) {
        writeln!(out, "TOTAL TRANSFER SIZE:")?;
        writeln!(out, "{}", SECTION_RULE)?;
        compare_bytes(out, "Total", master_bytes, optimized_bytes)?;
    }

    writeln!(out, "BY RESOURCE TYPE:")?;
    writeln!(out, "{}", SECTION_RULE)?;
    for resource_type in RESOURCE_TYPES {
        if let (Some(master_size), Some(optimized_size)) = (
            master.resource_size(resource_type),
            optimized.resource_size(resource_type),
        ) {
            compare_bytes(out, resource_type, master_size, optimized_size)?;
        }
    }

    if let (Some(master_count), Some(optimized_count)) = (master.total_requests, optimized.total_requests) {
        writeln!(out, "NETWORK REQUESTS:")?;
        writeln!(out, "{}", SECTION_RULE)?;
        writeln!(out, "Master:    {} requests", master_count)?;
        writeln!(out, "Optimized: {} requests", optimized_count)?;
        let diff = optimized_count as i64 - master_count as i64;
        if diff != 0 {
            writeln!(out, "Change:    {:+} requests", diff)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out, "NOTE: Local preview server may not show full compression")?;
    writeln!(out, "benefits. Production Cloudflare deployment will show better")?;
    writeln!(out, "compression ratios with Brotli serving from edge locations.")?;
    writeln!(out, "{}", HEAVY_RULE)
}

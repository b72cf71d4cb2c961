const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Human readable byte count: whole bytes below 1KB, one decimal for KB,
/// two decimals for MB.
pub fn format_bytes(bytes: f64) -> String {
    if bytes < KIB {
        format!("{:.0}B", bytes)
    } else if bytes < MIB {
        format!("{:.1}KB", bytes / KIB)
    } else {
        format!("{:.2}MB", bytes / MIB)
    }
}

//! Value formatting for the HTML report.

/// Format a millisecond duration as a human-readable string.
/// - under a minute: "XXs" (e.g. "42s")
/// - otherwise: "XminYs" (e.g. "2min5s")
pub fn format_duration_ms(ms: f64) -> String {
    let total_secs = (ms / 1000.0).round() as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    if mins == 0 {
        format!("{}s", secs)
    } else {
        format!("{}min{}s", mins, secs)
    }
}

/// Format a memory sample in megabytes.
pub fn format_memory(mb: f64) -> String {
    format!("{:.0}M", mb)
}

/// Parse the numeric prefix of a size-bucket label (e.g. "100M" -> 100).
///
/// Used as a sort key so "50M" orders before "100M"; labels without a numeric
/// prefix yield None and fall back to lexical ordering.
pub fn size_numeric_prefix(label: &str) -> Option<u64> {
    let digits: String = label.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

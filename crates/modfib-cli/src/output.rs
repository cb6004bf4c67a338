//! Summary formatting.

use modfib_core::LengthHistogram;

/// `"<n> sequences."`
#[must_use]
pub fn format_total(hist: &LengthHistogram) -> String {
    format!("{} sequences.", hist.total_orbits)
}

/// `"<count> of <length>"` per bucket, longest first, joined by `"; "`.
#[must_use]
pub fn format_histogram(hist: &LengthHistogram) -> String {
    hist.buckets
        .iter()
        .map(|b| format!("{} of {}", b.count, b.length))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pretty JSON rendering of the summary.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn format_json(hist: &LengthHistogram) -> serde_json::Result<String> {
    serde_json::to_string_pretty(hist)
}

/// Format a byte count for display.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

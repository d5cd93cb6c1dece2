//! Small shared utilities.

/// Format a byte rate as a human-readable speed, e.g. "2.31 MB/s".
pub fn format_bytes_per_sec(bytes_per_sec: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let rate = bytes_per_sec as f64;
    if rate >= MB {
        format!("{:.2} MB/s", rate / MB)
    } else if rate >= KB {
        format!("{:.1} KB/s", rate / KB)
    } else {
        format!("{} B/s", bytes_per_sec)
    }
}

/// Truncate a string to `max_chars`, appending an ellipsis when cut.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_megabytes() {
        assert_eq!(format_bytes_per_sec(2_422_210), "2.31 MB/s");
    }

    #[test]
    fn formats_kilobytes_and_bytes() {
        assert_eq!(format_bytes_per_sec(10_240), "10.0 KB/s");
        assert_eq!(format_bytes_per_sec(512), "512 B/s");
    }

    #[test]
    fn truncates_long_strings() {
        assert_eq!(truncate_str("hello world", 5), "hello...");
        assert_eq!(truncate_str("hi", 5), "hi");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_str("日本語テキスト", 3), "日本語...");
    }
}

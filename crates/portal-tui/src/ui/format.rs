use chrono::{DateTime, Utc};

/// Truncate string to a max length, adding an ellipsis when truncated.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let take = max_len - 3;
    let mut truncated: String = s.chars().take(take).collect();
    truncated.push_str("...");
    truncated
}

/// Format integer cents as a dollar amount, e.g. 45000 -> "$450.00".
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Invoice issue date as shown in the table, e.g. "Mar 04, 2026".
pub fn format_invoice_date(date: DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn truncates_long_strings_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Enterprise subscription", 10), "Enterpr...");
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "..");
        assert_eq!(truncate_with_ellipsis("abcdef", 0), "");
    }

    #[test]
    fn formats_cents_as_dollars() {
        assert_eq!(format_cents(45000), "$450.00");
        assert_eq!(format_cents(10050), "$100.50");
        assert_eq!(format_cents(5), "$0.05");
    }

    #[test]
    fn formats_invoice_dates() {
        let date = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        assert_eq!(format_invoice_date(date), "Mar 04, 2026");
    }
}

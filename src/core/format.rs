use chrono::NaiveDate;

pub const NOT_AVAILABLE: &str = "N/A";

/// Parse the date part of an ISO-8601 date or timestamp (`2025-05-11`,
/// `2025-05-11T14:30:00Z`, `2025-05-11 13:53`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// `11 May 2025`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Display form of a raw date string, or `N/A` when it doesn't parse.
pub fn display_raw_date(raw: &str) -> String {
    parse_date(raw)
        .map(display_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Whole units with thousands separators: `679,521`.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

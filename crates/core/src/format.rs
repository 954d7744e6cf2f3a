//! Display formatting for card numbers.
//!
//! Pure string concerns, kept apart from the numeric computation.

/// Groups a number's digits with thousands separators: 1234567 -> "1,234,567".
/// Negative values keep their native minus sign.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a day-over-day change: strictly positive values get a "+"
/// prefix; zero and negative values get none. The asymmetry is
/// intended, a change of exactly 0 renders as plain "0".
pub fn format_change(n: i64) -> String {
    if n > 0 {
        format!("+{}", group_thousands(n))
    } else {
        group_thousands(n)
    }
}

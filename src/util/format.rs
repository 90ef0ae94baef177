//! Display formatting for amounts and audience sizes.

/// Formats whole won the way `ko-KR` currency formatting does, e.g. `₩1,234,000`.
pub fn format_krw(amount: u64) -> String {
    format!("₩{}", group_thousands(amount))
}

/// Compact follower count: `1.2M`, `45.3K`, or the plain number below 1,000.
pub fn format_followers(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

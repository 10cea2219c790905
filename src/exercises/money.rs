//! Currency formatting for the car exercises.

/// Formats `amount` as US dollars with two decimals and `,` thousands
/// separators. Negative amounts put the `-` after the symbol.
///
/// ```
/// use pointfree::exercises::format_money;
///
/// assert_eq!(format_money(700_000.0), "$700,000.00");
/// assert_eq!(format_money(-1234.5), "$-1,234.50");
/// assert_eq!(format_money(0.004), "$0.00");
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "${sign}{}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

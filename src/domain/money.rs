// src/domain/money.rs

/// Parses a decimal-as-text amount.
///
/// Returns `None` for anything that is not a finite, non-negative number,
/// so callers pick their own fallback (exclusion when filtering, zero when
/// sorting or displaying).
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Display value: unparseable amounts show as zero.
pub fn amount_or_zero(text: &str) -> f64 {
    parse_amount(text).unwrap_or(0.0)
}

/// `4000000.5` -> `"KES 4,000,000.5"`. At most two decimals are kept.
pub fn format_kes(amount: f64) -> String {
    format!("KES {}", group_thousands(amount))
}

fn group_thousands(amount: f64) -> String {
    let amount = if amount.is_finite() && amount > 0.0 { amount } else { 0.0 };
    let cents = (amount * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if frac != 0 {
        let digits = format!("{frac:02}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

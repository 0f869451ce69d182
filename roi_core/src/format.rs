//! Display formatting for calculator figures.
//!
//! Formatting only happens at the edge; the engine keeps full precision.

/// Whole-dollar US currency with thousands separators.
///
/// Losses get a leading minus: `-1234.5` renders as `-$1,235`.
/// Non-finite input renders as `$0`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let rounded = amount.round();
    if rounded == 0.0 {
        return "$0".to_string();
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs()))
}

/// Day count, singular for exactly one day.
pub fn format_days(days: f64) -> String {
    let unit = if days == 1.0 { "day" } else { "days" };
    format!("{} {}", trim_number(days), unit)
}

/// Percentage with at most one decimal.
pub fn format_percent(percent: f64) -> String {
    format!("{}%", trim_number(percent))
}

/// Integer digits grouped by three. Expects a non-negative whole number.
fn group_thousands(whole: f64) -> String {
    let digits = format!("{:.0}", whole);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn trim_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let tenths = (value * 10.0).round() / 10.0;
    // -0.0 would print as "-0"
    let tenths = if tenths == 0.0 { 0.0 } else { tenths };
    if tenths.fract() == 0.0 {
        format!("{:.0}", tenths)
    } else {
        format!("{:.1}", tenths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(402_400.0), "$402,400");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(12_345.678), "$12,346");
    }

    #[test]
    fn currency_losses_and_edges() {
        assert_eq!(format_currency(-1234.5), "-$1,235");
        assert_eq!(format_currency(-0.4), "$0");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$0");
    }

    #[test]
    fn days_and_percent() {
        assert_eq!(format_days(25.0), "25 days");
        assert_eq!(format_days(1.0), "1 day");
        assert_eq!(format_days(-10.0), "-10 days");
        assert_eq!(format_days(2.5), "2.5 days");
        assert_eq!(format_percent(20.0), "20%");
        assert_eq!(format_percent(323.94), "323.9%");
    }

    #[test]
    fn tiny_negatives_render_as_zero() {
        assert_eq!(format_days(-0.04), "0 days");
        assert_eq!(format_days(-0.0), "0 days");
        assert_eq!(format_percent(-0.01), "0%");
        assert_eq!(format_days(-0.06), "-0.1 days");
    }
}

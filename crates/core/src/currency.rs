//! Brazilian currency display formatting.
//!
//! Kept as an explicit, pure function so shells never have to mutate
//! process-wide locale state to render totals.

/// Format a monetary value in the Brazilian convention: `R$ 1.234,56`.
///
/// Two decimal places, `.` thousands grouping, `,` decimal separator.
/// Negative values keep the sign after the currency symbol.
#[must_use]
pub fn format_brl(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    format!("R$ {},{frac_part}", group_thousands(int_part))
}

fn group_thousands(input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    let negative = chars.first() == Some(&'-');
    if negative {
        chars.remove(0);
    }

    let mut out = String::new();
    for (idx, ch) in chars.iter().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }

    let mut out: String = out.chars().rev().collect();
    if negative {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(9.9), "R$ 9,90");
        assert_eq!(format_brl(100.0), "R$ 100,00");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1_234_567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn test_rounding_to_two_places() {
        assert_eq!(format_brl(10.006), "R$ 10,01");
        assert_eq!(format_brl(0.004), "R$ 0,00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_brl(-1234.5), "R$ -1.234,50");
        assert_eq!(format_brl(-0.5), "R$ -0,50");
    }
}

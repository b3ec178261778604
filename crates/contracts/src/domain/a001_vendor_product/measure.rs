//! Numeric reading of unit-suffixed cells ("$1,234.50", "150 mm", "8.2 oz").
//!
//! Cells that do not start with a number read as `NaN`; callers keep the
//! `NaN` rather than dropping the value.

use super::schema::Column;

/// Literal unit marker carried by a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// `$` prefix and `,` thousands separators
    Currency,
    /// ` mm` suffix
    Millimeters,
    /// ` oz` suffix
    Ounces,
}

impl Unit {
    /// Removes every occurrence of the unit marker
    pub fn strip(self, raw: &str) -> String {
        match self {
            Unit::Currency => raw.replace(['$', ','], ""),
            Unit::Millimeters => raw.replace(" mm", ""),
            Unit::Ounces => raw.replace(" oz", ""),
        }
    }
}

impl Column {
    /// Unit marker for numeric columns, `None` for text columns
    pub fn unit(self) -> Option<Unit> {
        match self {
            Column::Pricing => Some(Unit::Currency),
            Column::Size => Some(Unit::Millimeters),
            Column::Weight => Some(Unit::Ounces),
            _ => None,
        }
    }
}

/// Strips the unit marker and reads the leading number of the cell
pub fn parse_measure(raw: &str, unit: Unit) -> f64 {
    parse_float_prefix(&unit.strip(raw))
}

/// Reads the longest decimal prefix of `input`.
///
/// Leading whitespace is skipped; an optional sign, integer digits, a
/// fraction and an exponent are accepted, as is `Infinity`. Trailing text is
/// ignored ("150mm" reads as 150). No digits at all yields `NaN`.
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_stripping() {
        assert_eq!(parse_measure("$1,234.50", Unit::Currency), 1234.5);
        assert_eq!(parse_measure("150 mm", Unit::Millimeters), 150.0);
        assert_eq!(parse_measure("8.2 oz", Unit::Ounces), 8.2);
    }

    #[test]
    fn test_every_thousands_separator_is_removed() {
        assert_eq!(parse_measure("$1,234,567.89", Unit::Currency), 1234567.89);
    }

    #[test]
    fn test_prefix_semantics() {
        assert_eq!(parse_float_prefix("  42abc"), 42.0);
        assert_eq!(parse_float_prefix("150mm"), 150.0);
        assert_eq!(parse_float_prefix("-3.5"), -3.5);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("5."), 5.0);
        assert_eq!(parse_float_prefix("1e3 units"), 1000.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix("2e+"), 2.0);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_unparseable_reads_nan() {
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("N/A").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_measure("TBD", Unit::Currency).is_nan());
        // unit marker not in the expected place is left alone
        assert!(parse_measure("mm 150", Unit::Millimeters).is_nan());
    }

    #[test]
    fn test_only_numeric_columns_have_units() {
        assert_eq!(Column::Pricing.unit(), Some(Unit::Currency));
        assert_eq!(Column::Size.unit(), Some(Unit::Millimeters));
        assert_eq!(Column::Weight.unit(), Some(Unit::Ounces));
        assert_eq!(Column::Vendor.unit(), None);
        assert_eq!(Column::BatteryLife.unit(), None);
    }
}

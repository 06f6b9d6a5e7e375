use std::fmt;

/// Formats a value as `mantissa e exponent`, e.g. `1.00e16`.
///
/// The mantissa uses the formatter's precision, two digits by default.
/// The exponent is the rounded decimal magnitude, so the mantissa lies
/// within roughly `[0.32, 3.2)`, which keeps round concentrations like
/// `1e16` and `2.5e15` readable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        let value = self.0;

        if value == 0.0 || !value.is_finite() {
            return write!(f, "{value:.precision$}e0");
        }

        let exponent = value.abs().log10().round() as i32;
        let mantissa = value / 10f64.powi(exponent);
        write!(f, "{mantissa:.precision$}e{exponent}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_concentrations() {
        assert_eq!(Scientific(1e16).to_string(), "1.00e16");
        assert_eq!(Scientific(2.5e15).to_string(), "2.50e15");
        assert_eq!(Scientific(5.196e18).to_string(), "0.52e19");
        assert_eq!(Scientific(-1.5e-3).to_string(), "-1.50e-3");
    }

    #[test]
    fn honours_precision() {
        assert_eq!(format!("{:.4}", Scientific(1.23456e10)), "1.2346e10");
        assert_eq!(format!("{:.0}", Scientific(1e16)), "1e16");
    }

    #[test]
    fn zero_and_non_finite() {
        assert_eq!(Scientific(0.0).to_string(), "0.00e0");
        assert_eq!(Scientific(f64::INFINITY).to_string(), "infe0");
    }
}

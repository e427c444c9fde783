//! Annual discounting for PPA cash flows
//!
//! Cash flows are discounted with end-of-year timing: the year-1 revenue is
//! already discounted by one full period.

use serde::{Deserialize, Serialize};

/// Flat annual discount curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountCurve {
    /// Annual discount rate as a decimal (0.05 for 5%)
    pub annual_rate: f64,
}

impl DiscountCurve {
    /// Create a curve from a decimal annual rate
    pub fn single_rate(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Create a curve from a rate quoted in percent
    pub fn from_percent(rate_pct: f64) -> Self {
        Self::single_rate(rate_pct / 100.0)
    }

    /// Present value of a single amount received at the end of `year`
    pub fn present_value(&self, amount: f64, year: u32) -> f64 {
        // powf keeps the exponent exact for any u32 year
        amount / (1.0 + self.annual_rate).powf(f64::from(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_percent() {
        let curve = DiscountCurve::from_percent(5.0);
        assert_relative_eq!(curve.annual_rate, 0.05);
        assert_relative_eq!(curve.present_value(105.0, 1), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_present_value_by_year() {
        let curve = DiscountCurve::single_rate(0.10);
        assert_relative_eq!(curve.present_value(100.0, 0), 100.0);
        assert_relative_eq!(curve.present_value(133.1, 3), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let curve = DiscountCurve::single_rate(0.0);
        assert_eq!(curve.present_value(1234.5, 17), 1234.5);
    }

    #[test]
    fn test_large_year_does_not_wrap() {
        // A year beyond i32::MAX must still discount, never compound
        let curve = DiscountCurve::single_rate(0.05);
        let pv = curve.present_value(1.0, u32::MAX);
        assert!(pv >= 0.0 && pv < 1.0);
    }
}

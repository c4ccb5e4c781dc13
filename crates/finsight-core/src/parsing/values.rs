use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A figure read from a financial data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Figure {
    Parsed(Decimal),
    /// The raw text was not a number and the figure counts as zero.
    Defaulted { raw: String },
    /// A number too large for a `Decimal`, clamped to the nearest bound.
    OutOfRange { raw: String, value: Decimal },
}

impl Figure {
    /// Returns the numeric value, zero for a defaulted figure.
    pub fn value(&self) -> Decimal {
        match self {
            Figure::Parsed(v) => *v,
            Figure::Defaulted { .. } => Decimal::ZERO,
            Figure::OutOfRange { value, .. } => *value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Figure::Defaulted { .. })
    }
}

/// Parse a figure string, defaulting to zero when it is not a number.
///
/// Handles formats like:
/// - "1000000" -> Parsed(1000000)
/// - "-4250.75" -> Parsed(-4250.75)
/// - "1.5e6" -> Parsed(1500000)
/// - "1e30" -> OutOfRange (value Decimal::MAX)
/// - "", "abc" or "1_000" -> Defaulted (value 0)
pub fn parse_figure(s: &str) -> Figure {
    let trimmed = s.trim();
    // Decimal::from_str skips underscores, a float parse does not
    if trimmed.is_empty() || trimmed.contains('_') {
        return Figure::Defaulted { raw: s.to_string() };
    }

    if let Ok(v) = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        return Figure::Parsed(v);
    }

    // Valid floats outside what Decimal accepts: huge magnitudes clamp,
    // tiny ones round through f64
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => match Decimal::from_f64(f) {
            Some(v) => Figure::Parsed(v),
            None => Figure::OutOfRange {
                raw: s.to_string(),
                value: if f.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                },
            },
        },
        _ => Figure::Defaulted { raw: s.to_string() },
    }
}

//! # Writing numbers
//!
//! Values in the tableau are floating point numbers, but for people following the simplex method
//! by hand, `1/3` reads better than `0.3333333333333333`. The formats here are only used to
//! display values; they never feed back into a computation.
use std::fmt;

/// A way of writing a number.
pub trait NumberFormat {
    /// Text for a value.
    fn format(&self, value: f64) -> String;
}

/// The shortest decimal text that reads back as the same value, like `0.1` or `13.8`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Decimal;

impl NumberFormat for Decimal {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            non_finite(value)
        } else if value == 0f64 {
            // Also for negative zero
            "0".to_string()
        } else {
            value.to_string()
        }
    }
}

/// Writes values as a simple fraction when one is close, like `2/3` or `69/5`.
///
/// Values are first compared against a few common fractions, then approximated with a
/// denominator of at most `MAX_DENOMINATOR`. When neither is close enough, integers are written as
/// they are and other values with three decimals.
#[derive(Copy, Clone, Debug, Default)]
pub struct Fraction;

/// Largest denominator tried when approximating a value with a fraction.
pub const MAX_DENOMINATOR: u32 = 24;
/// Largest absolute error accepted for an approximation by a fraction.
pub const APPROXIMATION_TOLERANCE: f64 = 0.006;
/// Largest absolute error accepted for a match with a common fraction.
const COMMON_TOLERANCE: f64 = 0.005;
/// Values closer to zero than this are written as zero.
const ZERO_TOLERANCE: f64 = 1e-12;

/// Checked in order, the first match is used.
const COMMON_FRACTIONS: [(f64, &str); 16] = [
    (0.5, "1/2"),
    (-0.5, "-1/2"),
    (0.25, "1/4"),
    (-0.25, "-1/4"),
    (0.75, "3/4"),
    (-0.75, "-3/4"),
    (1.5, "3/2"),
    (-1.5, "-3/2"),
    (0.3333333333, "1/3"),
    (-0.3333333333, "-1/3"),
    (0.6666666667, "2/3"),
    (-0.6666666667, "-2/3"),
    (0.2, "1/5"),
    (-0.2, "-1/5"),
    (0.1666666667, "1/6"),
    (-0.1666666667, "-1/6"),
];

impl NumberFormat for Fraction {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return non_finite(value);
        }
        if value.abs() < ZERO_TOLERANCE {
            return "0".to_string();
        }
        if value == 1f64 {
            return "1".to_string();
        }
        if value == -1f64 {
            return "-1".to_string();
        }

        if let Some((_, text)) = COMMON_FRACTIONS.iter()
            .find(|&&(common, _)| (value - common).abs() < COMMON_TOLERANCE) {
            return text.to_string();
        }

        if let Some(approximation) = approximate_fraction(value, MAX_DENOMINATOR, APPROXIMATION_TOLERANCE) {
            return approximation.to_string();
        }

        if value.fract() == 0f64 {
            value.to_string()
        } else {
            format!("{:.3}", value)
        }
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0f64 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/// A fraction `numerator / denominator`, not simplified to a mixed number.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Approximation {
    #[allow(missing_docs)]
    pub numerator: i64,
    #[allow(missing_docs)]
    pub denominator: u32,
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Find the fraction with the smallest error, trying every denominator up to a maximum.
///
/// For each denominator, the numerator is the rounded product with the value. Smaller denominators
/// win ties.
///
/// # Arguments
///
/// * `value`: Finite value to approximate.
/// * `max_denominator`: Largest denominator to try.
/// * `tolerance`: Largest absolute error that is accepted.
///
/// # Return value
///
/// The best fraction, if its error is within the tolerance. Values with a numerator that doesn't
/// fit an `i64` have none.
pub fn approximate_fraction(value: f64, max_denominator: u32, tolerance: f64) -> Option<Approximation> {
    if !value.is_finite() {
        return None;
    }

    let sign = if value < 0f64 { -1 } else { 1 };
    let magnitude = value.abs();

    let mut best = (0i64, 1u32, magnitude);
    for denominator in 1..=max_denominator {
        let numerator = (magnitude * f64::from(denominator)).round();
        if numerator >= i64::MAX as f64 {
            break;
        }
        let error = (magnitude - numerator / f64::from(denominator)).abs();
        if error < best.2 {
            best = (numerator as i64, denominator, error);
        }
    }

    let (numerator, denominator, error) = best;
    (error <= tolerance).then_some(Approximation { numerator: sign * numerator, denominator })
}

use crate::{Coefficients, sample::round_to};

/// Renders the coefficients as `<a-term><b-term><c-term> = 0`.
///
/// Zero coefficients are omitted. The leading term carries a bare `-` when
/// negative; later terms are joined with `" + "` or `" - "` and their absolute
/// value. The numeral is dropped for `x²` and `x` when its magnitude is one,
/// but the constant always prints it. All-zero coefficients render as `0 = 0`.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, print in exponent form
/// (`1e+21`, `2.5e-7`).
///
/// # Example
///
/// ```
/// use quadra_core::{Coefficients, format_equation};
///
/// let eq = format_equation(&Coefficients::new(1.0, -5.0, 6.0));
/// assert_eq!(eq, "x² - 5x + 6 = 0");
/// ```
#[must_use]
pub fn format_equation(coeffs: &Coefficients) -> String {
    let Coefficients { a, b, c } = *coeffs;

    let a_term = variable_term(a, "x²", true);
    let b_term = variable_term(b, "x", a == 0.0);
    let c_term = constant_term(c);

    if a_term.is_empty() && b_term.is_empty() && c_term.is_empty() {
        return "0 = 0".to_owned();
    }

    format!("{a_term}{b_term}{c_term} = 0")
}

fn variable_term(coef: f64, variable: &str, is_leading: bool) -> String {
    if coef == 0.0 {
        return String::new();
    }

    let sign = match (coef > 0.0, is_leading) {
        (true, true) => "",
        (true, false) => " + ",
        (false, true) => "-",
        (false, false) => " - ",
    };

    let magnitude = coef.abs();
    if magnitude == 1.0 {
        format!("{sign}{variable}")
    } else {
        format!("{sign}{}{variable}", number(magnitude))
    }
}

fn constant_term(coef: f64) -> String {
    if coef == 0.0 {
        String::new()
    } else if coef > 0.0 {
        format!(" + {}", number(coef))
    } else {
        format!(" - {}", number(coef.abs()))
    }
}

/// Shortest round-trip text, switching to exponent form for very large or
/// very small magnitudes.
fn number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// Formats a number with a fixed count of decimals, e.g. `fixed(2.5, 2) == "2.50"`.
///
/// Ties round half away from zero, so `fixed(0.125, 2) == "0.13"`. Negative
/// values that round to zero print as `0.00` rather than `-0.00`. Non-finite
/// values print as `NaN`, `Infinity`, or `-Infinity`.
#[must_use]
pub fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }

    // Scaling can overflow for huge values; those have no fraction to round.
    let rounded = i32::try_from(decimals)
        .ok()
        .map(|places| round_to(value, places))
        .filter(|rounded| rounded.is_finite())
        .unwrap_or(value);

    let text = format!("{rounded:.decimals$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|ch| ch == '0' || ch == '.') => rest.to_owned(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(a: f64, b: f64, c: f64) -> String {
        format_equation(&Coefficients::new(a, b, c))
    }

    #[test]
    fn all_zero() {
        assert_eq!(fmt(0.0, 0.0, 0.0), "0 = 0");
    }

    #[test]
    fn complete_equation() {
        assert_eq!(fmt(1.0, -5.0, 6.0), "x² - 5x + 6 = 0");
        assert_eq!(fmt(2.0, -4.0, -7.0), "2x² - 4x - 7 = 0");
    }

    #[test]
    fn unit_coefficients_drop_numeral() {
        assert_eq!(fmt(1.0, 1.0, 1.0), "x² + x + 1 = 0");
        assert_eq!(fmt(-1.0, -1.0, -1.0), "-x² - x - 1 = 0");
    }

    #[test]
    fn zero_terms_are_omitted() {
        assert_eq!(fmt(1.0, 0.0, -9.0), "x² - 9 = 0");
        assert_eq!(fmt(2.0, -32.0, 0.0), "2x² - 32x = 0");
        assert_eq!(fmt(3.0, 0.0, 0.0), "3x² = 0");
    }

    #[test]
    fn b_term_leads_when_a_is_zero() {
        assert_eq!(fmt(0.0, 2.0, -8.0), "2x - 8 = 0");
        assert_eq!(fmt(0.0, -1.0, 3.0), "-x + 3 = 0");
    }

    #[test]
    fn constant_alone_keeps_connective() {
        assert_eq!(fmt(0.0, 0.0, 5.0), " + 5 = 0");
        assert_eq!(fmt(0.0, 0.0, -1.0), " - 1 = 0");
    }

    #[test]
    fn fractional_coefficients() {
        assert_eq!(fmt(0.5, -2.5, 0.1), "0.5x² - 2.5x + 0.1 = 0");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(fmt(1e21, 0.0, 0.0), "1e+21x² = 0");
        assert_eq!(fmt(1.0, 1e-7, -2.5e-7), "x² + 1e-7x - 2.5e-7 = 0");
        assert_eq!(fmt(1e20, 0.000_001, 0.0), "100000000000000000000x² + 0.000001x = 0");
    }

    #[test]
    fn fixed_decimals() {
        assert_eq!(fixed(2.5, 2), "2.50");
        assert_eq!(fixed(-3.0, 2), "-3.00");
        assert_eq!(fixed(1.005, 1), "1.0");
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(-0.125, 2), "-0.13");
        assert_eq!(fixed(0.375, 2), "0.38");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(f64::MAX, 2), format!("{:.2}", f64::MAX));
        assert_eq!(fixed(-0.001, 2), "0.00");
        assert_eq!(fixed(-0.0, 2), "0.00");
        assert_eq!(fixed(f64::NAN, 2), "NaN");
        assert_eq!(fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }
}

//! # Linear expressions
//!
//! Reading expressions like `1.5x + 1.2y` or `-2a+b`. Each term is an optional sign, an optional
//! decimal number and exactly one letter. Every letter is its own variable, so `xy` are the two
//! terms `x` and `y`.
use std::collections::HashSet;

use crate::data::linear_program::elements::LinearExpression;
use crate::io::error::ParseError;

/// Read a linear expression.
///
/// Text that doesn't match a term is skipped, such that fully unreadable input results in an
/// empty expression. When a variable appears more than once, the last term wins: `x + 2x` is
/// `2x`, not `3x`.
pub fn parse(text: &str) -> LinearExpression {
    LinearExpression::new(terms(text))
}

/// Read a linear expression, rejecting variables that appear in more than one term.
///
/// # Errors
///
/// A `ParseError` naming the first variable that is repeated.
pub fn parse_strict(text: &str) -> Result<LinearExpression, ParseError> {
    let terms = terms(text);

    let mut seen = HashSet::new();
    if let Some((variable, _)) = terms.iter().find(|(variable, _)| !seen.insert(*variable)) {
        return Err(ParseError::new(format!(
            "Variable \"{}\" appears more than once in \"{}\"", variable, text.trim(),
        )));
    }

    Ok(LinearExpression::new(terms))
}

/// All `(variable, coefficient)` terms in order of appearance.
fn terms(text: &str) -> Vec<(char, f64)> {
    let trimmed = text.trim();
    let mut chars = Vec::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with(['+', '-']) {
        chars.push('+');
    }
    chars.extend(trimmed.chars());

    let mut terms = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        match match_term(&chars, start) {
            Some((end, coefficient, variable)) => {
                terms.push((variable, coefficient_value(&coefficient)));
                start = end;
            },
            None => start += 1,
        }
    }

    terms
}

/// Try to read a term starting exactly at `start`.
///
/// # Return value
///
/// The index after the term, the coefficient text with whitespace removed and the variable.
fn match_term(chars: &[char], start: usize) -> Option<(usize, String, char)> {
    let mut i = start;
    let mut coefficient = String::new();

    if let Some(&sign @ ('+' | '-')) = chars.get(i) {
        coefficient.push(sign);
        i += 1;
    }
    while chars.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }
    while let Some(&digit) = chars.get(i).filter(|c| c.is_ascii_digit()) {
        coefficient.push(digit);
        i += 1;
    }
    if chars.get(i) == Some(&'.') {
        coefficient.push('.');
        i += 1;
    }
    while let Some(&digit) = chars.get(i).filter(|c| c.is_ascii_digit()) {
        coefficient.push(digit);
        i += 1;
    }
    while chars.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }

    match chars.get(i) {
        Some(&variable) if variable.is_ascii_alphabetic() => Some((i + 1, coefficient, variable)),
        _ => None,
    }
}

/// A lone sign means a coefficient of magnitude one. A numeral without digits, like `.`, is not a
/// number.
fn coefficient_value(text: &str) -> f64 {
    match text {
        "" | "+" => 1f64,
        "-" => -1f64,
        numeral => numeral.parse().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::LinearExpression;
    use crate::io::expression::{parse, parse_strict};

    #[test]
    fn canonical_form() {
        assert_eq!(
            parse("2x + 3y - 1.5z"),
            LinearExpression::new(vec![('x', 2f64), ('y', 3f64), ('z', -1.5f64)]),
        );
    }

    #[test]
    fn implicit_coefficients() {
        assert_eq!(
            parse("-2a+b"),
            LinearExpression::new(vec![('a', -2f64), ('b', 1f64)]),
        );
        assert_eq!(
            parse("x - y + -z"),
            LinearExpression::new(vec![('x', 1f64), ('y', -1f64), ('z', -1f64)]),
        );
        assert_eq!(parse("  1.5x + 1.2y "), LinearExpression::new(vec![('x', 1.5), ('y', 1.2)]));
    }

    #[test]
    fn whitespace_between_sign_and_number() {
        assert_eq!(parse("x -   4 y"), LinearExpression::new(vec![('x', 1f64), ('y', -4f64)]));
        assert_eq!(parse("3 x"), LinearExpression::new(vec![('x', 3f64)]));
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(parse(".5x + 2.y"), LinearExpression::new(vec![('x', 0.5), ('y', 2f64)]));
        assert!(parse("+.x").coefficient('x').is_nan());
    }

    #[test]
    fn last_term_wins() {
        assert_eq!(parse("x + 2y + 5x"), LinearExpression::new(vec![('x', 5f64), ('y', 2f64)]));
    }

    #[test]
    fn letters_are_separate_variables() {
        assert_eq!(
            parse("3xy"),
            LinearExpression::new(vec![('x', 3f64), ('y', 1f64)]),
        );
        // A trailing number without a letter is not a term.
        assert_eq!(parse("s1"), LinearExpression::new(vec![('s', 1f64)]));
    }

    #[test]
    fn unreadable() {
        assert!(parse("").is_empty());
        assert!(parse("1 + 2 = 3").is_empty());
        assert!(parse("  ").is_empty());
    }

    #[test]
    fn strict() {
        assert!(parse_strict("x + y").is_ok());
        let error = parse_strict("x + 2x").unwrap_err();
        assert!(error.to_string().contains("\"x\""));
    }
}

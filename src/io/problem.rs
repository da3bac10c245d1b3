//! # Problem text
//!
//! A problem is written as an objective function to maximize, followed by one constraint per
//! line:
//!
//! ```text
//! # Comments start with a hash
//! max: 1.5x + 1.2y
//! 2x + 3y <= 24
//! 6x + 3y <= 48
//! ```
//!
//! Reading happens in two stages. First, the text is split into the objective and the parts of
//! each constraint row, without interpreting them. Then, rows are converted into constraints:
//! rows without an expression or without a numeric right hand side are left out, like a form
//! that was only partially filled in.
use crate::data::linear_program::elements::{Constraint, ConstraintType, LinearExpression};
use crate::io::error::ParseError;
use crate::io::expression;

/// Prefixes of the objective line that are ignored.
const OBJECTIVE_PREFIXES: [&str; 2] = ["maximize:", "max:"];
/// Characters a relation symbol consists of.
const RELATION_CHARACTERS: [char; 3] = ['<', '>', '='];

/// A problem as text, split in its parts but not yet interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemText {
    /// Expression of the objective function, without the `max:` prefix.
    pub objective: String,
    /// All constraint lines, in order.
    pub rows: Vec<ConstraintRow>,
}

/// A constraint as text.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintRow {
    /// Left hand side.
    pub expression: String,
    /// Relation symbol, like `<=`.
    pub relation: String,
    /// Right hand side.
    pub rhs: String,
}

impl ConstraintRow {
    /// Split a line like `2x + 3y <= 24` at its relation symbol.
    ///
    /// The relation is the first run of `<`, `>` and `=` characters. It is not validated here.
    ///
    /// # Errors
    ///
    /// If the line contains no relation symbol.
    pub fn from_line(line_number: usize, line: &str) -> Result<Self, ParseError> {
        let start = line.find(RELATION_CHARACTERS)
            .ok_or_else(|| ParseError::with_file_location(
                "Constraint has no relation, expected one of \"<=\", \">=\" or \"=\"",
                (line_number, line),
            ))?;
        let length = line[start..].find(|c| !RELATION_CHARACTERS.contains(&c))
            .unwrap_or(line.len() - start);

        Ok(Self {
            expression: line[..start].trim().to_string(),
            relation: line[start..start + length].to_string(),
            rhs: line[start + length..].trim().to_string(),
        })
    }

    /// Interpret the row.
    ///
    /// # Return value
    ///
    /// `None` if the expression is empty or the right hand side doesn't start with a number.
    ///
    /// # Errors
    ///
    /// If the relation symbol is not known.
    pub fn to_constraint(&self) -> Result<Option<Constraint>, ParseError> {
        let rhs = match leading_number(&self.rhs) {
            Some(rhs) if !self.expression.is_empty() => rhs,
            _ => {
                log::debug!("Skipping constraint row \"{} {} {}\"", self.expression, self.relation, self.rhs);
                return Ok(None);
            },
        };
        let relation = self.relation.parse::<ConstraintType>()?;

        Ok(Some(Constraint { expression: expression::parse(&self.expression), relation, rhs }))
    }
}

impl ProblemText {
    /// Interpret the objective and all rows.
    ///
    /// # Errors
    ///
    /// If a row that is not skipped has an unknown relation.
    pub fn into_program(self) -> Result<(LinearExpression, Vec<Constraint>), ParseError> {
        let objective = expression::parse(&self.objective);

        let mut constraints = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let constraint = row.to_constraint()
                .map_err(|error| ParseError::with_cause(format!("Invalid constraint {}", i + 1), error))?;
            constraints.extend(constraint);
        }

        Ok((objective, constraints))
    }
}

/// Split a problem text into its objective and constraint rows.
///
/// Everything after a `#` is a comment. The first line that is not empty is the objective, and
/// may be prefixed by `max:` or `maximize:`.
///
/// # Errors
///
/// If there is no objective line, or when a constraint line has no relation.
pub fn parse(text: &str) -> Result<ProblemText, ParseError> {
    let mut lines = text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, strip_comment(line).trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, objective_line) = lines.next()
        .ok_or_else(|| ParseError::new("Problem has no objective function"))?;
    let objective = strip_objective_prefix(objective_line).trim().to_string();

    let rows = lines
        .map(|(line_number, line)| ConstraintRow::from_line(line_number, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProblemText { objective, rows })
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or(line)
}

fn strip_objective_prefix(line: &str) -> &str {
    OBJECTIVE_PREFIXES.iter()
        .find(|prefix| line.get(..prefix.len()).is_some_and(|start| start.eq_ignore_ascii_case(prefix)))
        .map_or(line, |prefix| &line[prefix.len()..])
}

/// Read the longest prefix of the text that is a decimal number.
///
/// Trailing text is ignored, so `"24 units"` reads as `24`.
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(bytes.first().is_some_and(|&b| b == b'+' || b == b'-'));
    let integer = digits(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return None;
    }
    if bytes.get(end).is_some_and(|&b| b == b'e' || b == b'E') {
        let sign = usize::from(bytes.get(end + 1).is_some_and(|&b| b == b'+' || b == b'-'));
        let exponent = digits(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::ConstraintType;
    use crate::io::problem::{leading_number, parse, ConstraintRow, ProblemText};

    fn row(expression: &str, relation: &str, rhs: &str) -> ConstraintRow {
        ConstraintRow { expression: expression.to_string(), relation: relation.to_string(), rhs: rhs.to_string() }
    }

    #[test]
    fn split_lines() {
        assert_eq!(ConstraintRow::from_line(1, "2x + 3y <= 24").unwrap(), row("2x + 3y", "<=", "24"));
        assert_eq!(ConstraintRow::from_line(1, "x>=1").unwrap(), row("x", ">=", "1"));
        assert_eq!(ConstraintRow::from_line(1, "x + y = 5").unwrap(), row("x + y", "=", "5"));
        assert_eq!(ConstraintRow::from_line(1, "x < 5").unwrap(), row("x", "<", "5"));
        assert_eq!(ConstraintRow::from_line(1, "<= 5").unwrap(), row("", "<=", "5"));
        assert!(ConstraintRow::from_line(3, "2x + 3y 24").is_err());
    }

    #[test]
    fn objective_prefix() {
        let text = parse("MAXIMIZE: 3x\nx <= 1").unwrap();
        assert_eq!(text.objective, "3x");
        let text = parse("\n  3x + y  # profit\n").unwrap();
        assert_eq!(text, ProblemText { objective: "3x + y".to_string(), rows: vec![] });
    }

    #[test]
    fn missing_objective() {
        assert!(parse("").is_err());
        assert!(parse("# only a comment\n\n").is_err());
    }

    #[test]
    fn line_number_in_error() {
        let error = parse("max: x\n\nx 4").unwrap_err();
        assert!(error.to_string().contains("line\t3:\tx 4"));
    }

    #[test]
    fn rows_are_skipped() {
        let text = ProblemText {
            objective: "x + y".to_string(),
            rows: vec![row("x", "<=", "4"), row("", "<=", "3"), row("y", "<=", "many"), row("x + y", ">=", "1.5")],
        };
        let (objective, constraints) = text.into_program().unwrap();
        assert_eq!(objective.len(), 2);
        assert_eq!(constraints.len(), 2);
        assert_eq!(constraints[0].rhs, 4f64);
        assert_eq!(constraints[1].relation, ConstraintType::Greater);
        assert_eq!(constraints[1].rhs, 1.5f64);
    }

    #[test]
    fn unknown_relation() {
        let text = ProblemText { objective: "x".to_string(), rows: vec![row("x", "<", "4")] };
        let error = text.into_program().unwrap_err();
        assert_eq!(error.description(), "Invalid constraint 1");
        assert!(error.to_string().contains("Unknown relation \"<\""));

        // Skipped before the relation is looked at.
        let text = ProblemText { objective: "x".to_string(), rows: vec![row("", "=<", "4")] };
        assert!(text.into_program().unwrap().1.is_empty());
    }

    #[test]
    fn numbers() {
        assert_eq!(leading_number("24"), Some(24f64));
        assert_eq!(leading_number(" -1.5 units"), Some(-1.5f64));
        assert_eq!(leading_number(".5"), Some(0.5f64));
        assert_eq!(leading_number("3."), Some(3f64));
        assert_eq!(leading_number("2e3"), Some(2000f64));
        assert_eq!(leading_number("2e"), Some(2f64));
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number(""), None);
    }
}

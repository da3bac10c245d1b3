//! # Writing a solve as text
//!
//! Shows the model, every tableau with the decisions that were made and the arithmetic of each
//! pivot, and finally the solution with a check by substitution. All values are written through a
//! `NumberFormat`.
use std::fmt::{self, Display, Formatter};

use itertools::{repeat_n, Itertools};

use crate::algorithm::simplex::SolveResult;
use crate::algorithm::simplex::trace::{IterationSnapshot, PivotStep};
use crate::data::linear_program::elements::{Constraint, LinearExpression, Variable};
use crate::data::linear_program::verification::{Product, Verification};
use crate::io::format::NumberFormat;

/// Terms with a coefficient this small are left out of expressions.
const COEFFICIENT_TOLERANCE: f64 = 1e-9;
/// Marks the pivot row in the ratio column.
const SMALLEST_RATIO: &str = "← smallest ratio";

/// Text of an expression, like `3/2x - y`.
///
/// Coefficients of one are not written. An expression without terms is written as `0`.
pub fn expression_text(expression: &LinearExpression, format: &impl NumberFormat) -> String {
    let mut text = String::new();
    for (variable, coefficient) in expression.iter() {
        if coefficient.abs() < COEFFICIENT_TOLERANCE {
            continue;
        }

        let sign = match (text.is_empty(), coefficient < 0f64) {
            (true, false) => "",
            (true, true) => "-",
            (false, false) => " + ",
            (false, true) => " - ",
        };
        text.push_str(sign);
        text.push_str(&term(coefficient.abs(), variable, format));
    }

    if text.is_empty() {
        "0".to_string()
    } else {
        text
    }
}

fn term(magnitude: f64, variable: impl Display, format: &impl NumberFormat) -> String {
    if magnitude == 1f64 {
        variable.to_string()
    } else {
        format!("{}{}", format.format(magnitude), variable)
    }
}

/// The problem, and the same problem with slacks: `z - 3/2x - 6/5y = 0` and `2x + 3y + s1 = 24`.
pub struct Model<'a, NF> {
    objective: &'a LinearExpression,
    constraints: &'a [Constraint],
    variables: &'a [char],
    format: &'a NF,
}

impl<'a, NF: NumberFormat> Model<'a, NF> {
    /// Create a new instance.
    pub fn new(
        objective: &'a LinearExpression,
        constraints: &'a [Constraint],
        variables: &'a [char],
        format: &'a NF,
    ) -> Self {
        Self { objective, constraints, variables, format }
    }
}

impl<NF: NumberFormat> Display for Model<'_, NF> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "LP model")?;

        write!(f, "Z = {} --> z", expression_text(self.objective, self.format))?;
        for (variable, coefficient) in self.objective.iter() {
            if coefficient != 0f64 {
                let sign = if coefficient > 0f64 { "-" } else { "+" };
                write!(f, " {} {}", sign, term(coefficient.abs(), variable, self.format))?;
            }
        }
        writeln!(f, " = 0")?;

        for (i, constraint) in self.constraints.iter().enumerate() {
            let expression = expression_text(&constraint.expression, self.format);
            let rhs = self.format.format(constraint.rhs);
            writeln!(
                f,
                "{} {} {} --> {} + {} = {}",
                expression, constraint.relation, rhs, expression, Variable::Slack(i), rhs,
            )?;
        }

        let decision = self.variables.iter().join(", ");
        let all = self.variables.iter().map(char::to_string)
            .chain((0..self.constraints.len()).map(|i| Variable::Slack(i).to_string()))
            .join(", ");
        writeln!(f, "{} >= 0 --> {} >= 0", decision, all)
    }
}

/// One tableau of the trace, with the ratio test and the elimination if it was pivoted on.
pub struct Snapshot<'a, NF> {
    snapshot: &'a IterationSnapshot,
    format: &'a NF,
}

impl<'a, NF: NumberFormat> Snapshot<'a, NF> {
    /// Create a new instance.
    pub fn new(snapshot: &'a IterationSnapshot, format: &'a NF) -> Self {
        Self { snapshot, format }
    }

    fn write_tableau(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tableau = &self.snapshot.tableau;
        let step = self.snapshot.step.as_ref();
        let pivot = step.map(|step| (step.pivot.row, step.pivot.column));

        let mut header = vec!["Basic".to_string()];
        header.extend(tableau.columns().iter().map(Variable::to_string));
        header.push("RHS".to_string());
        if step.is_some() {
            header.push("Ratio".to_string());
        }

        let mut rows = vec![header];
        for (i, basic) in tableau.basis().iter().enumerate() {
            let mut row = vec![basic.to_string()];
            for j in 0..=tableau.nr_columns() {
                let value = self.format.format(tableau.entry(i, j));
                row.push(if pivot == Some((i, j)) { format!("[{}]", value) } else { value });
            }
            if let Some(step) = step {
                let ratio = step.ratios[i].as_ref().map_or(String::new(), |ratio| {
                    let text = ratio.render(self.format);
                    if ratio.is_minimum { format!("{}  {}", text, SMALLEST_RATIO) } else { text }
                });
                row.push(ratio);
            }
            rows.push(row);
        }

        write_table(f, &rows)
    }

    fn write_pivot(&self, f: &mut Formatter<'_>, step: &PivotStep) -> fmt::Result {
        let leaving = step.pivot.leaving;
        let pivot = self.format.format(step.pivot.value);

        writeln!(f, "Pivot column: most negative in Z-row: {}", step.pivot.entering)?;
        writeln!(f, "Pivot row: smallest positive ratio: {}", leaving)?;
        writeln!(f, "Pivot element: {}", pivot)?;
        writeln!(f, "Pivot operation: P_{} = 1/k = 1/{}", leaving, pivot)?;
        writeln!(f)?;

        writeln!(f, "Pivotal elimination steps")?;
        let entering = step.pivot.entering;
        let mut header = vec![format!("{}(P_{}) = {}", leaving, leaving, entering)];
        header.extend(step.elimination.other_rows.iter().map(|row| {
            format!("{} - {}(P_{}) = {}", row.basic, entering, row.basic, row.basic)
        }));

        let mut rows = vec![header];
        for (j, cell) in step.elimination.pivot_row.iter().enumerate() {
            let mut row = vec![cell.render(self.format)];
            row.extend(step.elimination.other_rows.iter().map(|other| other.steps[j].render(self.format)));
            rows.push(row);
        }

        write_table(f, &rows)
    }
}

impl<NF: NumberFormat> Display for Snapshot<'_, NF> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tableau {}", self.snapshot.number)?;
        self.write_tableau(f)?;

        match &self.snapshot.step {
            Some(step) => {
                writeln!(f)?;
                self.write_pivot(f, step)
            },
            None => writeln!(f, "All entries of the Z-row are non negative, the tableau is optimal."),
        }
    }
}

/// The solution and its check by substitution.
pub struct Check<'a, NF> {
    result: &'a SolveResult,
    verification: Verification,
    format: &'a NF,
}

impl<'a, NF: NumberFormat> Check<'a, NF> {
    /// Create a new instance, substituting the solution.
    pub fn new(result: &'a SolveResult, format: &'a NF) -> Self {
        Self { result, verification: result.verify(), format }
    }

    fn write_substitution(&self, f: &mut Formatter<'_>, products: &[Product]) -> fmt::Result {
        let multiplications = products.iter()
            .map(|product| format!("{}({})", self.format.format(product.coefficient), self.format.format(product.value)))
            .join(" + ");
        let results = products.iter()
            .map(|product| self.format.format(product.result()))
            .join(" + ");

        writeln!(f, "{}", multiplications)?;
        writeln!(f, "{}", results)
    }
}

fn verdict(holds: bool) -> &'static str {
    if holds { "✔ True" } else { "✘ False" }
}

impl<NF: NumberFormat> Display for Check<'_, NF> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let solution = &self.result.solution;
        let values = solution.values().iter()
            .map(|&(variable, value)| format!("{} = {}", variable, self.format.format(value)))
            .chain(std::iter::once(format!("Z = {}", self.format.format(solution.objective_value()))))
            .join(", ");
        writeln!(f, "Optimal solution: {}", values)?;
        writeln!(f)?;

        writeln!(f, "Constraint validation")?;
        for (constraint, check) in self.result.constraints.iter().zip(&self.verification.constraints) {
            let rhs = self.format.format(check.rhs);
            writeln!(f, "{} {} {}", expression_text(&constraint.expression, self.format), check.relation, rhs)?;
            self.write_substitution(f, &check.products)?;
            writeln!(f, "{} {} {} {}", self.format.format(check.total), check.relation, rhs, verdict(check.holds))?;
            writeln!(f)?;
        }

        let check = &self.verification.objective;
        writeln!(f, "Objective function check")?;
        writeln!(f, "Z = {}", expression_text(&self.result.objective, self.format))?;
        self.write_substitution(f, &check.products)?;
        writeln!(
            f, "{} = {} {}",
            self.format.format(check.total), self.format.format(check.objective_value), verdict(check.holds),
        )
    }
}

/// Everything about a solve: the model, all tableaus and the check of the solution.
pub struct Report<'a, NF> {
    result: &'a SolveResult,
    format: &'a NF,
}

impl<'a, NF: NumberFormat> Report<'a, NF> {
    /// Create a new instance.
    pub fn new(result: &'a SolveResult, format: &'a NF) -> Self {
        Self { result, format }
    }
}

impl<NF: NumberFormat> Display for Report<'_, NF> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let result = self.result;
        write!(f, "{}", Model::new(&result.objective, &result.constraints, &result.variable_list, self.format))?;

        for snapshot in result.trace.snapshots() {
            writeln!(f)?;
            write!(f, "{}", Snapshot::new(snapshot, self.format))?;
        }

        writeln!(f)?;
        write!(f, "{}", Check::new(result, self.format))
    }
}

/// Write cells in left aligned columns, with a line below the first row.
fn write_table(f: &mut Formatter<'_>, rows: &[Vec<String>]) -> fmt::Result {
    let nr_columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths = (0..nr_columns)
        .map(|j| rows.iter().filter_map(|row| row.get(j)).map(|cell| cell.chars().count()).max().unwrap_or(0))
        .collect::<Vec<_>>();

    for (i, row) in rows.iter().enumerate() {
        let line = row.iter().zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .join(" | ");
        writeln!(f, "{}", line.trim_end())?;

        if i == 0 {
            let length = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
            writeln!(f, "{}", repeat_n("-", length).collect::<String>())?;
        }
    }

    Ok(())
}

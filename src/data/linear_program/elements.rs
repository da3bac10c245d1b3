//! # Building blocks to describe linear programs.
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Serialize, Serializer};

use crate::io::error::ParseError;

/// A `Constraint` is a type of (in)equality.
///
/// Only `Less` constraints are fully supported by the tableau: the other two are accepted, but no
/// surplus or artificial variables are introduced for them.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// Textual symbols, as they are written in problem descriptions.
    pub fn symbols() -> EnumMap<ConstraintType, &'static str> {
        enum_map! {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        }
    }

    /// The symbol of this constraint type.
    pub fn symbol(self) -> &'static str {
        Self::symbols()[self]
    }

    /// Whether `left (type) right` holds, allowing for an absolute error of `tolerance`.
    pub fn holds(self, left: f64, right: f64, tolerance: f64) -> bool {
        match self {
            ConstraintType::Less => left <= right + tolerance,
            ConstraintType::Greater => left >= right - tolerance,
            ConstraintType::Equal => (left - right).abs() < tolerance,
        }
    }
}

impl FromStr for ConstraintType {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        Self::symbols()
            .iter()
            .find(|&(_, &symbol)| symbol == text)
            .map(|(constraint_type, _)| constraint_type)
            .ok_or_else(|| ParseError::new(format!(
                "Unknown relation \"{}\", expected one of \"<=\", \">=\" or \"=\"", text,
            )))
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for ConstraintType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// A column or row label of the tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Variable {
    /// Variable as it appears in the problem, named by a single letter.
    Decision(char),
    /// Slack of the constraint with this (zero based) index, displayed one based.
    Slack(usize),
    /// Label of the objective row.
    Objective,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Decision(name) => write!(f, "{}", name),
            Variable::Slack(index) => write!(f, "s{}", index + 1),
            Variable::Objective => f.write_str("Z"),
        }
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Linear combination of variables, each variable named by a single letter.
///
/// Variables that are absent have coefficient zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LinearExpression {
    terms: BTreeMap<char, f64>,
}

impl LinearExpression {
    /// Create an expression from `(variable, coefficient)` pairs.
    ///
    /// A later pair with the same variable replaces an earlier one.
    pub fn new(terms: impl IntoIterator<Item = (char, f64)>) -> Self {
        Self { terms: terms.into_iter().collect() }
    }

    /// Coefficient of a variable, zero if it doesn't appear.
    pub fn coefficient(&self, variable: char) -> f64 {
        self.terms.get(&variable).copied().unwrap_or(0f64)
    }

    /// Iterate over the variables that appear, sorted by name.
    pub fn variables(&self) -> impl Iterator<Item = char> + '_ {
        self.terms.keys().copied()
    }

    /// Iterate over `(variable, coefficient)` pairs, sorted by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.terms.iter().map(|(&variable, &coefficient)| (variable, coefficient))
    }

    /// Number of variables that appear.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no variable appears.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A linear (in)equality `expression (relation) rhs`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Constraint {
    /// Left hand side.
    pub expression: LinearExpression,
    /// Direction of the inequality, or equality.
    pub relation: ConstraintType,
    /// Right hand side.
    pub rhs: f64,
}

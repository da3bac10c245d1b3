use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use env_logger::Builder;
use serde::Serialize;

use relp_steps::algorithm::simplex::{solve, SolveResult, SolverOptions, MAX_ITERATIONS};
use relp_steps::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;
use relp_steps::data::linear_program::verification::Verification;
use relp_steps::io::format::{Decimal, Fraction};
use relp_steps::io::import;
use relp_steps::io::problem::{ConstraintRow, ProblemText};
use relp_steps::io::render::Report;

/// Solves a linear program with the tableau simplex method, showing every pivot.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description (`.lp` or `.txt`)
    problem_file: Option<PathBuf>,
    /// Objective function to maximize, instead of a problem file
    #[arg(short, long, conflicts_with = "problem_file")]
    objective: Option<String>,
    /// A constraint like "2x + 3y <= 24", may be repeated
    #[arg(short, long = "constraint", requires = "objective")]
    constraints: Vec<String>,
    /// Number of pivots after which the solve is abandoned
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,
    /// How the entering variable is chosen
    #[arg(long, value_enum, default_value_t = Rule::Dantzig)]
    pivot_rule: Rule,
    /// Output format
    #[arg(long, value_enum, default_value_t = Output::Text)]
    format: Output,
    /// How values are written in text output
    #[arg(long, value_enum, default_value_t = Numbers::Fraction)]
    numbers: Numbers,
    #[command(flatten)]
    verbose: Verbosity,
}

#[derive(Copy, Clone, ValueEnum)]
enum Rule {
    /// Most negative entry of the objective row
    Dantzig,
    /// First negative entry of the objective row
    FirstProfitable,
}

impl From<Rule> for PivotRuleKind {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Dantzig => PivotRuleKind::Dantzig,
            Rule::FirstProfitable => PivotRuleKind::FirstProfitable,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Output {
    Text,
    Json,
}

#[derive(Copy, Clone, ValueEnum)]
enum Numbers {
    Fraction,
    Decimal,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a SolveResult,
    verification: Verification,
}

fn problem_text(opts: &Opts) -> Result<ProblemText> {
    match (&opts.problem_file, &opts.objective) {
        (Some(path), _) => {
            log::info!("Reading problem file: \"{}\"", path.to_string_lossy());
            import(path).with_context(|| format!("Reading problem file {:?}", path))
        },
        (None, Some(objective)) => {
            let rows = opts.constraints.iter()
                .enumerate()
                .map(|(i, line)| ConstraintRow::from_line(i + 1, line))
                .collect::<Result<Vec<_>, _>>()
                .context("Reading constraints")?;
            Ok(ProblemText { objective: objective.clone(), rows })
        },
        (None, None) => bail!("Provide a problem file, or an objective with --objective"),
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    let (objective, constraints) = problem_text(&opts)?
        .into_program()
        .context("Interpreting the problem")?;

    let options = SolverOptions {
        max_iterations: opts.max_iterations,
        pivot_rule: opts.pivot_rule.into(),
        ..SolverOptions::default()
    };
    let result = solve(objective, constraints, &options).context("Solving")?;

    match opts.format {
        Output::Text => match opts.numbers {
            Numbers::Fraction => print!("{}", Report::new(&result, &Fraction)),
            Numbers::Decimal => print!("{}", Report::new(&result, &Decimal)),
        },
        Output::Json => {
            let output = JsonOutput { result: &result, verification: result.verify() };
            println!("{}", serde_json::to_string_pretty(&output).context("Writing JSON")?);
        },
    }

    Ok(())
}

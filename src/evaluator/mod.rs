// Formula evaluator - recursive descent over the formula grammar
//
//   S -> M | M S | "(" S ")" [N] | "(" S ")" [N] S
//   M -> E [N]
//   N -> digit+
//   E -> known 1-letter or 2-letter element symbol
mod error;
mod helpers;
mod rules;

// Public exports
pub use error::{FailureKind, ParseFailure};

use crate::elements::ElementTable;
use crate::limits::EvaluatorLimits;
use crate::report::Report;

/// Molecular weight of one formula, computed on construction.
#[derive(Debug, Clone)]
pub struct FormulaEvaluator {
    formula: String,
    outcome: Result<f64, ParseFailure>,
}

impl FormulaEvaluator {
    pub fn new(formula: &str) -> Self {
        Self::with_limits(formula, &EvaluatorLimits::default())
    }

    pub fn with_limits(formula: &str, limits: &EvaluatorLimits) -> Self {
        let outcome = Parser::new(formula, ElementTable::global(), limits).evaluate();

        match &outcome {
            Ok(weight) => tracing::debug!(formula, weight, "evaluated"),
            Err(failure) => tracing::debug!(formula, %failure, "evaluation failed"),
        }

        Self {
            formula: formula.to_string(),
            outcome,
        }
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The total weight, or the failure that prevented computing it
    pub fn weight(&self) -> Result<f64, ParseFailure> {
        self.outcome
    }

    pub fn failure(&self) -> Option<&ParseFailure> {
        self.outcome.as_ref().err()
    }

    /// Human readable outcome, weights printed with `significant_digits`
    pub fn report(&self, significant_digits: usize) -> Report<'_> {
        match self.outcome {
            Ok(weight) => Report::weight(weight, significant_digits),
            Err(failure) => Report::Failure {
                formula: &self.formula,
                offset: failure.offset,
            },
        }
    }
}

// Single-use parser state: input characters and a forward-only cursor
pub(crate) struct Parser<'a> {
    chars: Vec<char>,
    current: usize,
    table: &'a ElementTable,
    limits: &'a EvaluatorLimits,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(formula: &str, table: &'a ElementTable, limits: &'a EvaluatorLimits) -> Self {
        Self {
            chars: formula.chars().collect(),
            current: 0,
            table,
            limits,
        }
    }

    // Main parsing entry point
    fn evaluate(mut self) -> Result<f64, ParseFailure> {
        if self.chars.len() > self.limits.max_formula_length {
            return Err(ParseFailure::new(
                FailureKind::InputTooLarge,
                self.limits.max_formula_length,
            ));
        }

        let total = self.parse_sequence(0)?;

        // The top-level sequence only stops early on a stray ')'
        if self.peek().is_some() {
            return Err(self.fail(FailureKind::UnmatchedClose));
        }
        if !total.is_finite() {
            return Err(self.fail(FailureKind::CountOverflow));
        }
        if total <= 0.0 {
            return Err(self.fail(FailureKind::ZeroWeight));
        }
        Ok(total)
    }
}

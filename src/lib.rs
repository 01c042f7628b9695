pub mod elements;
pub mod evaluator;
pub mod limits;
pub mod report;

pub use evaluator::{FailureKind, FormulaEvaluator, ParseFailure};

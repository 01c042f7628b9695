mod cli;

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use molweight::FormulaEvaluator;
use molweight::elements::ElementTable;
use molweight::limits::EvaluatorLimits;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: cli::Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if cli.list_elements {
        for (symbol, weight) in ElementTable::global().iter() {
            println!("{:<2} {}", symbol, weight);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let limits = EvaluatorLimits::from_project_toml(&cli.config)?;
    limits.validate()?;

    let formula = match cli.formula {
        Some(formula) => formula,
        None => read_formula(io::stdin().lock())?,
    };

    let evaluator = FormulaEvaluator::with_limits(&formula, &limits);
    let report = evaluator.report(cli.digits as usize);

    if report.is_failure() {
        eprintln!("{}", report);
        if cli.strict {
            return Ok(ExitCode::FAILURE);
        }
    } else {
        println!("{}", report);
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read a single line, without its line terminator
fn read_formula<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_formula_strips_terminator() {
        assert_eq!(read_formula("H2O\n".as_bytes()).unwrap(), "H2O");
        assert_eq!(read_formula("H2O\r\n".as_bytes()).unwrap(), "H2O");
        assert_eq!(read_formula("H2O".as_bytes()).unwrap(), "H2O");
    }

    #[test]
    fn test_read_formula_first_line_only() {
        assert_eq!(read_formula("NaCl\nKCl\n".as_bytes()).unwrap(), "NaCl");
    }

    #[test]
    fn test_read_formula_at_eof() {
        assert_eq!(read_formula("".as_bytes()).unwrap(), "");
    }
}

use std::fmt;

// Width of "Failed to parse ", the caret line is indented past it
const FAILURE_PREFIX: &str = "Failed to parse ";

/// Printable outcome of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Report<'a> {
    Weight(String),
    Failure { formula: &'a str, offset: usize },
}

impl Report<'_> {
    pub fn weight(weight: f64, significant_digits: usize) -> Self {
        Report::Weight(format_weight(weight, significant_digits))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Report::Failure { .. })
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Report::Weight(text) => write!(f, "{}", text),
            Report::Failure { formula, offset } => {
                writeln!(f, "{}{}", FAILURE_PREFIX, formula)?;
                let indent = FAILURE_PREFIX.len() + offset;
                write!(f, "{:indent$}^ from here", "")
            }
        }
    }
}

/// Format like printf's `%g`: at most `significant_digits` digits, no trailing zeros,
/// exponent notation for very large or very small weights
pub fn format_weight(weight: f64, significant_digits: usize) -> String {
    let precision = significant_digits.max(1);

    // Exponent after rounding to `precision` digits, e.g. "1.20100e6"
    let scientific = format!("{:.*e}", precision - 1, weight);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, weight)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

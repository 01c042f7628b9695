use super::error::{FailureKind, ParseFailure};
use super::Parser;

// Grammar rules. Each one commits to a production after a single peek,
// so a failure is returned straight up the call stack.
impl<'a> Parser<'a> {
    /// S -> M | M S | "(" S ")" [N] | "(" S ")" [N] S
    ///
    /// Concatenation is iterative, only groups recurse.
    pub(super) fn parse_sequence(&mut self, depth: usize) -> Result<f64, ParseFailure> {
        self.check_depth(depth)?;

        let mut total = 0.0;
        loop {
            total += match self.peek() {
                Some(c) if c.is_ascii_alphabetic() => self.parse_monomer()?,
                Some('(') => self.parse_group(depth)?,
                Some(c) => return Err(self.fail(FailureKind::UnexpectedCharacter(c))),
                None => return Err(self.fail(FailureKind::UnexpectedEnd)),
            };

            if self.at_sequence_end() {
                return Ok(total);
            }
        }
    }

    /// "(" S ")" [N]
    fn parse_group(&mut self, depth: usize) -> Result<f64, ParseFailure> {
        self.advance(1); // '('
        let inner = self.parse_sequence(depth + 1)?;

        if !self.peek_is(')') {
            return Err(self.fail(FailureKind::UnclosedGroup));
        }
        self.advance(1);

        if self.peek_is_digit() {
            Ok(inner * self.parse_number()?)
        } else {
            Ok(inner)
        }
    }

    /// M -> E [N]
    pub(super) fn parse_monomer(&mut self) -> Result<f64, ParseFailure> {
        let weight = self.parse_element()?;
        if self.peek_is_digit() {
            Ok(weight * self.parse_number()?)
        } else {
            Ok(weight)
        }
    }

    /// N -> digit+
    pub(super) fn parse_number(&mut self) -> Result<f64, ParseFailure> {
        let start = self.current;
        let digits: String = self.chars[start..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .collect();

        if digits.is_empty() {
            return Err(self.fail(FailureKind::ExpectedCount));
        }

        let count = match digits.parse::<u64>() {
            Ok(count) if count <= self.limits.max_count => count,
            _ => return Err(self.fail(FailureKind::CountOverflow)),
        };

        self.advance(digits.len());
        tracing::trace!(offset = start, count, "count");
        Ok(count as f64)
    }

    /// E -> known element symbol, two-letter symbols take precedence
    pub(super) fn parse_element(&mut self) -> Result<f64, ParseFailure> {
        for width in [2, 1] {
            let Some(symbol) = self.lookahead(width) else {
                continue;
            };
            if let Some(weight) = self.table.weight(&symbol) {
                tracing::trace!(offset = self.current, symbol = %symbol, weight, "element");
                self.advance(width);
                return Ok(weight);
            }
        }
        Err(self.fail(FailureKind::UnknownElement))
    }
}

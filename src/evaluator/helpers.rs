use super::error::{FailureKind, ParseFailure};

// Cursor primitives shared by the grammar rules
impl<'a> super::Parser<'a> {
    /// Character at the cursor, `None` at end of input
    pub(super) fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    pub(super) fn peek_is(&self, expected: char) -> bool {
        self.peek() == Some(expected)
    }

    pub(super) fn peek_is_digit(&self) -> bool {
        self.peek().is_some_and(|c| c.is_ascii_digit())
    }

    /// A sequence ends at end of input or before a closing parenthesis
    pub(super) fn at_sequence_end(&self) -> bool {
        matches!(self.peek(), None | Some(')'))
    }

    /// Up to `width` characters starting at the cursor, `None` if fewer remain
    pub(super) fn lookahead(&self, width: usize) -> Option<String> {
        self.chars
            .get(self.current..self.current + width)
            .map(|run| run.iter().collect())
    }

    /// Move the cursor forward; it never moves back
    pub(super) fn advance(&mut self, count: usize) {
        debug_assert!(self.current + count <= self.chars.len());
        self.current = (self.current + count).min(self.chars.len());
    }

    pub(super) fn fail(&self, kind: FailureKind) -> ParseFailure {
        ParseFailure::new(kind, self.current)
    }

    pub(super) fn check_depth(&self, depth: usize) -> Result<(), ParseFailure> {
        if depth >= self.limits.max_recursion_depth {
            return Err(self.fail(FailureKind::NestingTooDeep));
        }
        Ok(())
    }
}

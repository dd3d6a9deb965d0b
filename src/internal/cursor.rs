//! A cursor over one line of input.
//!
//! The cursor only moves forward. Keyword recognition goes through [`Cursor::eat_token`], which
//! succeeds only when the literal is followed by a token boundary, i.e. the end of the line,
//! whitespace or an opening parenthesis.

/// A forward-only cursor over a line of text.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'l> {
    line: &'l str,
    pos: usize,
}

impl<'l> Cursor<'l> {
    /// Create a cursor at the start of the given line.
    pub(crate) fn new(line: &'l str) -> Self {
        Self { line, pos: 0 }
    }

    /// The byte offset of the cursor within the line.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// The text from the cursor to the end of the line.
    #[inline]
    pub(crate) fn rest(&self) -> &'l str {
        &self.line[self.pos..]
    }

    /// The character under the cursor.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the character under the cursor and return it.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance while the predicate holds.
    pub(crate) fn bump_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.bump_while(char::is_whitespace);
    }

    /// Move to the end of the line.
    pub(crate) fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Attempts to advance past `literal` as a whole token.
    ///
    /// Returns true if it did. Otherwise returns false and leaves the cursor where it was.
    pub(crate) fn eat_token(&mut self, literal: &str) -> bool {
        let rest = self.rest();
        if !rest.starts_with(literal) {
            return false;
        }
        let at_boundary = match rest[literal.len()..].chars().next() {
            None => true,
            Some(next) => next.is_whitespace() || next == '(',
        };
        if at_boundary {
            self.pos += literal.len();
        }
        at_boundary
    }

    /// Tries each literal in order and advances past the first one that matches as a token.
    pub(crate) fn eat_any_token<'a>(&mut self, literals: &[&'a str]) -> Option<&'a str> {
        literals
            .iter()
            .copied()
            .find(|literal| self.eat_token(literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_token_requires_boundary() {
        let mut cursor = Cursor::new("classify x");
        assert!(!cursor.eat_token("class"));
        assert_eq!(cursor.offset(), 0);

        let mut cursor = Cursor::new("end_of_input");
        assert!(!cursor.eat_token("end"));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_eat_token_accepts_boundaries() {
        let mut cursor = Cursor::new("class Foo");
        assert!(cursor.eat_token("class"));
        assert_eq!(cursor.rest(), " Foo");

        let mut cursor = Cursor::new("function(x)");
        assert!(cursor.eat_token("function"));
        assert_eq!(cursor.rest(), "(x)");

        let mut cursor = Cursor::new("end");
        assert!(cursor.eat_token("end"));
        assert!(cursor.rest().is_empty());

        let mut cursor = Cursor::new("do\tx");
        assert!(cursor.eat_token("do"));
        assert_eq!(cursor.peek(), Some('\t'));
    }

    #[test]
    fn test_eat_token_rejects_mismatch() {
        let mut cursor = Cursor::new("en");
        assert!(!cursor.eat_token("end"));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_eat_any_token_first_match_wins() {
        let mut cursor = Cursor::new("while true");
        assert_eq!(cursor.eat_any_token(&["if", "while", "for"]), Some("while"));
        assert_eq!(cursor.rest(), " true");

        let mut cursor = Cursor::new("iffy");
        assert_eq!(cursor.eat_any_token(&["if", "while"]), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_bump_handles_multibyte_characters() {
        let mut cursor = Cursor::new("σx");
        assert_eq!(cursor.bump(), Some('σ'));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.bump(), Some('x'));
        assert_eq!(cursor.bump(), None);
    }
}

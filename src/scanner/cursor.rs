use winnow::stream::{LocatingSlice, Location, Stream};

type Input<'a> = LocatingSlice<&'a str>;

/// Read position over the source plus the bookkeeping for the lexeme
/// being scanned.
///
/// Offsets are byte offsets into `source`. `start <= current()` holds
/// between calls, and `line` never decreases.
pub(crate) struct Cursor<'src> {
    source: &'src str,
    input: Input<'src>,
    start: usize,
    line: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            input: LocatingSlice::new(source),
            start: 0,
            line: 1,
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.input.current_token_start()
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Begin a new lexeme at the cursor.
    pub(crate) fn mark_start(&mut self) {
        self.start = self.current();
    }

    pub(crate) fn new_line(&mut self) {
        self.line += 1;
    }

    /// Consume one character; `None` once the input is exhausted.
    pub(crate) fn advance(&mut self) -> Option<char> {
        self.input.next_token()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.input.chars().next()
    }

    /// Look `n` characters past the cursor without consuming.
    pub(crate) fn peek_next(&self, n: usize) -> Option<char> {
        self.input.chars().nth(n)
    }

    /// Consume the next character only if it is `expected`.
    pub(crate) fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.input.next_token();
            true
        } else {
            false
        }
    }

    /// Consume the longest run of characters satisfying `pred`. Does not
    /// touch `line`, so `pred` must reject `'\n'`.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        let len = self
            .input
            .offset_for(|c| !pred(c))
            .unwrap_or_else(|| self.input.eof_offset());
        self.input.next_slice(len);
    }

    /// Source text of the lexeme scanned so far.
    pub(crate) fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn peek_past_end_is_none() {
        let mut cursor = Cursor::new("a");
        assert_eq!(cursor.peek_next(1), None);
        assert_eq!(cursor.peek_next(5), None);
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn match_char_only_consumes_on_success() {
        let mut cursor = Cursor::new("<=");
        cursor.advance();
        assert!(!cursor.match_char('<'));
        assert_eq!(cursor.current(), 1);
        assert!(cursor.match_char('='));
        assert_eq!(cursor.current(), 2);
        assert!(!cursor.match_char('='));
    }

    #[test]
    fn eat_while_stops_before_mismatch() {
        let mut cursor = Cursor::new("123abc");
        cursor.mark_start();
        cursor.eat_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.lexeme(), "123");
        assert_eq!(cursor.peek(), Some('a'));
    }

    #[test]
    fn eat_while_runs_to_end() {
        let mut cursor = Cursor::new("abc");
        cursor.mark_start();
        cursor.eat_while(char::is_alphabetic);
        assert_eq!(cursor.lexeme(), "abc");
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn offsets_are_bytes() {
        let mut cursor = Cursor::new("é1");
        cursor.advance();
        assert_eq!(cursor.current(), 2);
        cursor.mark_start();
        cursor.advance();
        assert_eq!(cursor.lexeme(), "1");
    }
}

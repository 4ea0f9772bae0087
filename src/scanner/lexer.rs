use tracing::{debug, trace};

use crate::config::{Dialect, ScanConfig};
use crate::error::ScanError;
use crate::scanner::cursor::Cursor;
use crate::scanner::keywords::KeywordTable;
use crate::scanner::token::{Token, TokenKind};

/// Single-use scanner over one source text.
///
/// Build one per source, call [`Scanner::tokenize`] once. The keyword
/// table is only borrowed, so many scanners can share it.
pub struct Scanner<'src, 'kw> {
    cursor: Cursor<'src>,
    keywords: &'kw KeywordTable,
    config: ScanConfig,
    tokens: Vec<Token>,
}

impl<'src, 'kw> Scanner<'src, 'kw> {
    pub fn new(source: &'src str, keywords: &'kw KeywordTable) -> Self {
        Self::with_config(source, keywords, ScanConfig::default())
    }

    pub fn with_config(
        source: &'src str,
        keywords: &'kw KeywordTable,
        config: ScanConfig,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            config,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input. The first error aborts the scan.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ScanError> {
        debug!(dialect = ?self.config.dialect, "scan started");
        loop {
            self.cursor.mark_start();
            let Some(c) = self.cursor.advance() else {
                break;
            };
            if let Err(err) = self.scan_token(c) {
                debug!(%err, tokens = self.tokens.len(), "scan aborted");
                return Err(err);
            }
        }
        debug!(
            tokens = self.tokens.len(),
            lines = self.cursor.line(),
            "scan finished"
        );
        Ok(self.tokens)
    }

    /// Dispatch on the first character of a lexeme, already consumed.
    fn scan_token(&mut self, c: char) -> Result<(), ScanError> {
        match c {
            '\n' => self.cursor.new_line(),
            ' ' | '\t' | '\r' => {}
            '#' if self.config.dialect == Dialect::Hash => self.skip_line_comment(),
            '(' => self.add_token(TokenKind::LParen),
            ')' => self.add_token(TokenKind::RParen),
            '{' => self.add_token(TokenKind::LCurly),
            '}' => self.add_token(TokenKind::RCurly),
            '[' => self.add_token(TokenKind::LSquar),
            ']' => self.add_token(TokenKind::RSquar),
            '.' => self.add_token(TokenKind::Dot),
            ',' => self.add_token(TokenKind::Comma),
            '+' => self.add_token(TokenKind::Plus),
            '-' => {
                if self.config.dialect == Dialect::Pinky && self.cursor.match_char('-') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Minus);
                }
            }
            '*' => self.add_token(TokenKind::Star),
            '^' => self.add_token(TokenKind::Caret),
            '/' => self.add_token(TokenKind::Slash),
            ';' => self.add_token(TokenKind::Semicolon),
            '?' => self.add_token(TokenKind::Question),
            '%' => self.add_token(TokenKind::Mod),
            '=' => {
                if !self.cursor.match_char('=') {
                    return Err(ScanError::malformed_operator(
                        self.cursor.lexeme(),
                        self.cursor.line(),
                        self.cursor.start(),
                    ));
                }
                self.add_token(TokenKind::Eq);
            }
            '~' => self.add_either('=', TokenKind::Ne, TokenKind::Not),
            '<' => self.add_either('=', TokenKind::Le, TokenKind::Lt),
            '>' => self.add_either('=', TokenKind::Ge, TokenKind::Gt),
            ':' => self.add_either('=', TokenKind::Assign, TokenKind::Colon),
            c if self.config.dialect.scans_literals() && c.is_ascii_digit() => self.scan_number(),
            '"' | '\'' if self.config.dialect.scans_literals() => self.scan_string(c)?,
            c if self.config.dialect.scans_literals() && (c.is_alphabetic() || c == '_') => {
                self.scan_identifier_or_keyword()
            }
            other => {
                return Err(ScanError::unrecognized_character(
                    other,
                    self.cursor.line(),
                    self.cursor.start(),
                ));
            }
        }
        Ok(())
    }

    /// Two-character operator when the next char is `second`, otherwise
    /// the one-character fallback.
    fn add_either(&mut self, second: char, double: TokenKind, single: TokenKind) {
        let kind = if self.cursor.match_char(second) {
            double
        } else {
            single
        };
        self.add_token(kind);
    }

    /// Skip to the next newline, leaving it for the main loop to count.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    fn scan_number(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let fractional = self.cursor.peek() == Some('.')
            && self.cursor.peek_next(1).is_some_and(|c| c.is_ascii_digit());
        if fractional {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            self.add_token(TokenKind::Float);
        } else {
            self.add_token(TokenKind::Integer);
        }
    }

    fn scan_string(&mut self, quote: char) -> Result<(), ScanError> {
        let opening_line = self.cursor.line();
        loop {
            match self.cursor.peek() {
                Some(c) if c == quote => break,
                Some('\n') if self.config.multiline_strings => {
                    self.cursor.advance();
                    self.cursor.new_line();
                }
                Some(c) if c != '\n' => {
                    self.cursor.advance();
                }
                _ => {
                    let len = self.cursor.current() - self.cursor.start();
                    return Err(ScanError::unterminated_string(
                        opening_line,
                        self.cursor.start(),
                        len,
                    ));
                }
            }
        }
        self.cursor.advance();
        self.add_token_at(TokenKind::String, opening_line);
        Ok(())
    }

    fn scan_identifier_or_keyword(&mut self) {
        self.cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
        let kind = self
            .keywords
            .get(self.cursor.lexeme())
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_at(kind, self.cursor.line());
    }

    fn add_token_at(&mut self, kind: TokenKind, line: usize) {
        let lexeme = self.cursor.lexeme();
        trace!(?kind, lexeme, line, "token");
        self.tokens.push(Token::new(kind, lexeme, line));
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::AsRefStr)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    // Single-character tokens
    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = "{")]
    LCurly,
    #[strum(serialize = "}")]
    RCurly,
    #[strum(serialize = "[")]
    LSquar,
    #[strum(serialize = "]")]
    RSquar,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Star,
    #[strum(serialize = "^")]
    Caret,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = "?")]
    Question,
    #[strum(serialize = "%")]
    Mod,

    // One or two character tokens
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "~=")]
    Ne,
    #[strum(serialize = "~")]
    Not,
    #[strum(serialize = "<=")]
    Le,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">=")]
    Ge,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = ":=")]
    Assign,
    #[strum(serialize = ":")]
    Colon,

    // Literals
    #[strum(serialize = "INTEGER")]
    Integer,
    #[strum(serialize = "FLOAT")]
    Float,
    #[strum(serialize = "STRING")]
    String,
    #[strum(serialize = "IDENTIFIER")]
    Identifier,

    // Keywords
    #[strum(serialize = "if")]
    If,
    #[strum(serialize = "then")]
    Then,
    #[strum(serialize = "else")]
    Else,
    #[strum(serialize = "true")]
    True,
    #[strum(serialize = "false")]
    False,
    #[strum(serialize = "and")]
    And,
    #[strum(serialize = "or")]
    Or,
    #[strum(serialize = "while")]
    While,
    #[strum(serialize = "do")]
    Do,
    #[strum(serialize = "for")]
    For,
    #[strum(serialize = "func")]
    Func,
    #[strum(serialize = "null")]
    Null,
    #[strum(serialize = "end")]
    End,
    #[strum(serialize = "print")]
    Print,
    #[strum(serialize = "println")]
    Println,
    #[strum(serialize = "ret")]
    Ret,
}

impl TokenKind {
    /// True for the kinds a keyword table may map a spelling to.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::If
                | Self::Then
                | Self::Else
                | Self::True
                | Self::False
                | Self::And
                | Self::Or
                | Self::While
                | Self::Do
                | Self::For
                | Self::Func
                | Self::Null
                | Self::End
                | Self::Print
                | Self::Println
                | Self::Ret
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based line of the lexeme's first character.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' line {}", self.kind, self.lexeme, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_source_spelling() {
        assert_eq!(TokenKind::LCurly.to_string(), "{");
        assert_eq!(TokenKind::Ne.to_string(), "~=");
        assert_eq!(TokenKind::Assign.to_string(), ":=");
        assert_eq!(TokenKind::Float.to_string(), "FLOAT");
        assert_eq!(TokenKind::Println.to_string(), "println");
    }

    #[test]
    fn serde_names_are_upper_case() {
        let json = serde_json::to_string(&TokenKind::LSquar).expect("serialize");
        assert_eq!(json, "\"LSQUAR\"");
        let kind: TokenKind = serde_json::from_str("\"PRINTLN\"").expect("deserialize");
        assert_eq!(kind, TokenKind::Println);
    }

    #[test]
    fn keyword_kinds() {
        assert!(TokenKind::Ret.is_keyword());
        assert!(TokenKind::Null.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Assign.is_keyword());
    }

    #[test]
    fn token_display() {
        let token = Token::new(TokenKind::Identifier, "x", 3);
        assert_eq!(token.to_string(), "Identifier 'x' line 3");
    }
}

//! Reserved-word lookup handed to the scanner.
//!
//! A [`KeywordTable`] is built once and only read afterwards, so a single
//! table can be borrowed by any number of scanners.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::scanner::token::TokenKind;

const PINKY_KEYWORDS: &[(&str, TokenKind)] = &[
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("for", TokenKind::For),
    ("func", TokenKind::Func),
    ("null", TokenKind::Null),
    ("end", TokenKind::End),
    ("print", TokenKind::Print),
    ("println", TokenKind::Println),
    ("ret", TokenKind::Ret),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    words: HashMap<String, TokenKind>,
}

impl KeywordTable {
    /// The reserved words of Pinky.
    pub fn pinky() -> Self {
        PINKY_KEYWORDS.iter().copied().collect()
    }

    /// Load a table from a JSON object mapping spellings to keyword kinds,
    /// e.g. `{"si": "IF", "fin": "END"}`.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, TokenKind> = serde_json::from_str(text)?;
        let mut words = HashMap::with_capacity(raw.len());
        for (spelling, kind) in raw {
            if !is_identifier(&spelling) {
                return Err(ConfigError::InvalidSpelling(spelling));
            }
            if !kind.is_keyword() {
                return Err(ConfigError::NotAKeyword { spelling, kind });
            }
            words.insert(spelling, kind);
        }
        Ok(Self { words })
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, spelling: &str) -> Option<TokenKind> {
        self.words.get(spelling).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, TokenKind)> for KeywordTable {
    fn from_iter<T: IntoIterator<Item = (S, TokenKind)>>(iter: T) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|(spelling, kind)| (spelling.into(), kind))
                .collect(),
        }
    }
}

/// Whether the identifier sub-scanner could ever produce `spelling`.
fn is_identifier(spelling: &str) -> bool {
    let mut chars = spelling.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinky_table_has_all_reserved_words() {
        let table = KeywordTable::pinky();
        assert_eq!(table.len(), 16);
        assert_eq!(table.get("println"), Some(TokenKind::Println));
        assert_eq!(table.get("ret"), Some(TokenKind::Ret));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = KeywordTable::pinky();
        assert_eq!(table.get("if"), Some(TokenKind::If));
        assert_eq!(table.get("If"), None);
        assert_eq!(table.get("IF"), None);
    }

    #[test]
    fn from_json_accepts_keyword_kinds() {
        let table = KeywordTable::from_json(r#"{"si": "IF", "fin": "END"}"#)
            .expect("valid table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("si"), Some(TokenKind::If));
        assert_eq!(table.get("if"), None);
    }

    #[test]
    fn from_json_rejects_non_keyword_kind() {
        let err = KeywordTable::from_json(r#"{"plus": "PLUS"}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotAKeyword {
                kind: TokenKind::Plus,
                ..
            }
        ));
    }

    #[test]
    fn from_json_rejects_unscannable_spelling() {
        let err = KeywordTable::from_json(r#"{"9lives": "IF"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpelling(s) if s == "9lives"));
    }

    #[test]
    fn from_json_rejects_malformed_json() {
        let err = KeywordTable::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn collects_from_pairs() {
        let table: KeywordTable = [("loop", TokenKind::While)].into_iter().collect();
        assert_eq!(table.get("loop"), Some(TokenKind::While));
        assert!(!table.is_empty());
    }
}

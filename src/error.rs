use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::token::TokenKind;

// ============= Scan errors (with miette diagnostics) =============

#[derive(Error, Debug, Diagnostic)]
pub enum ScanError {
    #[error("[line {line}] unterminated string")]
    #[diagnostic(code(pinky::scan::unterminated_string))]
    UnterminatedString {
        line: usize,
        #[label("string starts here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("[line {line}] unrecognized character '{ch}'")]
    #[diagnostic(code(pinky::scan::unrecognized_character))]
    UnrecognizedCharacter {
        ch: char,
        line: usize,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("[line {line}] malformed operator '{lexeme}'")]
    #[diagnostic(
        code(pinky::scan::malformed_operator),
        help("equality is written '==' and assignment ':='")
    )]
    MalformedOperator {
        lexeme: String,
        line: usize,
        #[label("expected '=' after this")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl ScanError {
    pub fn unterminated_string(line: usize, offset: usize, len: usize) -> Self {
        Self::UnterminatedString {
            line,
            span: SourceSpan::new(offset.into(), len),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    pub fn unrecognized_character(ch: char, line: usize, offset: usize) -> Self {
        Self::UnrecognizedCharacter {
            ch,
            line,
            span: SourceSpan::new(offset.into(), ch.len_utf8()),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    pub fn malformed_operator(lexeme: impl Into<String>, line: usize, offset: usize) -> Self {
        let lexeme = lexeme.into();
        let len = lexeme.len();
        Self::MalformedOperator {
            lexeme,
            line,
            span: SourceSpan::new(offset.into(), len),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    /// Line the offending lexeme started on.
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::UnrecognizedCharacter { line, .. }
            | Self::MalformedOperator { line, .. } => *line,
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        let named = miette::NamedSource::new(name.into(), source.into());
        match &mut self {
            Self::UnterminatedString { src, .. }
            | Self::UnrecognizedCharacter { src, .. }
            | Self::MalformedOperator { src, .. } => *src = named,
        }
        self
    }
}

// ============= Configuration errors (simple, no miette) =============

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{spelling}' maps to {kind:?}, which is not a keyword kind")]
    NotAKeyword { spelling: String, kind: TokenKind },

    #[error("'{0}' can never be scanned as an identifier")]
    InvalidSpelling(String),
}

// ============= Tests =============

pub mod config;
pub mod error;
pub mod repl;
pub mod scanner;

// Re-export the common entry points for convenience
pub use config::{Dialect, ScanConfig};
pub use error::{ConfigError, ScanError};
pub use scanner::keywords::KeywordTable;
pub use scanner::lexer::Scanner;
pub use scanner::token::{Token, TokenKind};

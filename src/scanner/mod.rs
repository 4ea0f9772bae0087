mod cursor;
pub mod keywords;
pub mod lexer;
pub mod token;

use crate::config::ScanConfig;
use crate::error::ScanError;
use keywords::KeywordTable;
use lexer::Scanner;
use token::Token;

/// Scan Pinky source with the default keyword table and configuration.
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    scan_with(source, &KeywordTable::pinky(), ScanConfig::default())
}

/// Scan source with an explicit keyword table and configuration.
pub fn scan_with(
    source: &str,
    keywords: &KeywordTable,
    config: ScanConfig,
) -> Result<Vec<Token>, ScanError> {
    Scanner::with_config(source, keywords, config).tokenize()
}

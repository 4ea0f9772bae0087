use std::io::{self, BufRead, Write};

use crate::config::ScanConfig;
use crate::scanner::keywords::KeywordTable;
use crate::scanner::lexer::Scanner;

/// Run the interactive token dump. Each line is scanned on its own.
pub fn run_repl(keywords: &KeywordTable, config: ScanConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    repl_loop(
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        keywords,
        config,
    )
}

fn repl_loop<R: BufRead, W: Write, E: Write>(
    mut input: R,
    out: &mut W,
    err: &mut E,
    keywords: &KeywordTable,
    config: ScanConfig,
) -> io::Result<()> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // Ctrl-D / EOF
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.trim().is_empty() {
            continue;
        }

        match Scanner::with_config(trimmed, keywords, config).tokenize() {
            Ok(tokens) => {
                for token in &tokens {
                    writeln!(out, "{token}")?;
                }
            }
            Err(e) => writeln!(err, "{e}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (String, String) {
        let keywords = KeywordTable::pinky();
        let mut out = Vec::new();
        let mut err = Vec::new();
        repl_loop(
            input.as_bytes(),
            &mut out,
            &mut err,
            &keywords,
            ScanConfig::default(),
        )
        .expect("repl io");
        (
            String::from_utf8(out).expect("utf8"),
            String::from_utf8(err).expect("utf8"),
        )
    }

    #[test]
    fn prints_tokens_per_line() {
        let (out, err) = run("x := 1\nprint x\n");
        assert!(err.is_empty());
        assert!(out.contains("Identifier 'x' line 1"));
        assert!(out.contains("Assign ':=' line 1"));
        assert!(out.contains("Print 'print' line 1"));
    }

    #[test]
    fn reports_errors_and_keeps_going() {
        let (out, err) = run("x = 1\ny\n");
        assert_eq!(err, "[line 1] malformed operator '='\n");
        assert!(out.contains("Identifier 'y' line 1"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (out, _) = run("\n   \n");
        assert_eq!(out, "> > > ");
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pinky_scanner::config::{Dialect, ScanConfig};
use pinky_scanner::scanner::keywords::KeywordTable;
use pinky_scanner::scanner::token::Token;
use pinky_scanner::{repl, scanner};

#[derive(Parser, Debug)]
#[command(name = "pinky-scan", about = "Tokenize Pinky source code")]
struct Cli {
    /// Pinky source file to scan (omit for REPL)
    file: Option<PathBuf>,

    /// Comment style and feature set
    #[arg(long, value_enum)]
    dialect: Option<Dialect>,

    /// Reject newlines inside string literals
    #[arg(long)]
    single_line_strings: bool,

    /// JSON keyword table replacing the built-in Pinky keywords
    #[arg(long, value_name = "FILE")]
    keywords: Option<PathBuf>,

    /// JSON scanner configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("initialize logging")
}

fn load_config(cli: &Cli) -> Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };
    if let Some(dialect) = cli.dialect {
        config = config.with_dialect(dialect);
    }
    if cli.single_line_strings {
        config = config.with_multiline_strings(false);
    }
    Ok(config)
}

fn load_keywords(path: Option<&Path>) -> Result<KeywordTable> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read keyword table '{}'", path.display()))?;
            KeywordTable::from_json(&text)
                .with_context(|| format!("load keyword table '{}'", path.display()))
        }
        None => Ok(KeywordTable::pinky()),
    }
}

fn print_tokens(tokens: &[Token], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for token in tokens {
                println!("{token}");
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(tokens).context("serialize tokens to JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(&cli)?;
    let keywords = load_keywords(cli.keywords.as_deref())?;

    let Some(path) = &cli.file else {
        repl::run_repl(&keywords, config).context("run REPL")?;
        return Ok(());
    };

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;
    tracing::debug!(file = %path.display(), bytes = source.len(), "scanning");

    match scanner::scan_with(&source, &keywords, config) {
        Ok(tokens) => print_tokens(&tokens, cli.format),
        Err(e) => {
            let report =
                miette::Report::new(e.with_source_code(path.display().to_string(), source));
            eprintln!("{report:?}");
            anyhow::bail!("scan failed");
        }
    }
}

//! Rill Language CLI
//!
//! Prints the token trace of a Rill program.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use rill_lang::trace::{TraceLine, SAMPLE_SOURCE};
use rill_lang::{Diagnostic, Scanner, Token, VERSION};

#[derive(Parser)]
#[command(name = "rill")]
#[command(author, version = VERSION, about = "Token trace for the Rill language", long_about = None)]
struct Cli {
    /// Source file to scan (defaults to the built-in sample program)
    #[arg(conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Scan the given source text instead of a file
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Render each lexical error with source context on stderr
    #[arg(long)]
    diagnostics: bool,

    /// Exit with a failure status if any lexical error was found
    #[arg(long)]
    deny_errors: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(0) => {}
        Ok(errors) => {
            if cli.deny_errors {
                eprintln!("{}: {} lexical error(s)", "error".red().bold(), errors);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

/// Trace the selected source and return the number of error tokens
fn run(cli: &Cli) -> Result<usize> {
    let source = load_source(cli)?;
    let tokens: Vec<Token<'_>> = Scanner::new(&source).tokens().collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in &tokens {
        writeln!(out, "{}", TraceLine(token)).context("Failed to write trace")?;
    }

    let errors: Vec<Diagnostic<'_>> = tokens
        .iter()
        .filter_map(|token| Diagnostic::for_token(token, &source))
        .collect();
    log::debug!("{} tokens, {} lexical errors", tokens.len(), errors.len());

    if cli.diagnostics {
        for diagnostic in &errors {
            eprint!("{}", diagnostic);
        }
    }

    Ok(errors.len())
}

fn load_source(cli: &Cli) -> Result<String> {
    if let Some(source) = &cli.eval {
        return Ok(source.clone());
    }
    match &cli.file {
        Some(path) => {
            log::info!("Scanning {:?}", path);
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file '{}'", path.display()))
        }
        None => Ok(SAMPLE_SOURCE.to_string()),
    }
}

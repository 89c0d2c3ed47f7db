//! levenshtein - Levenshtein distance between a source and candidate strings
//!
//! Prints raw distances, the candidates within a cutoff, or the best matches.

use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use levenshtein::cli::{init_tracing, render_usage};
use levenshtein::interpreter::{Completion, InterpretError, Interpreter};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<OsString> = env::args_os().collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "levenshtein".to_string());

    match run(args) {
        Ok(Completion::Finished) => ExitCode::SUCCESS,
        Ok(Completion::Help) => {
            print!("{}", render_usage(&program));
            ExitCode::SUCCESS
        }
        Err(e) => {
            let usage_error = e
                .downcast_ref::<InterpretError>()
                .is_some_and(InterpretError::is_usage_error);
            if usage_error {
                eprint!("{}", render_usage(&program));
            }
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<OsString>) -> Result<Completion> {
    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(BufWriter::new(stdout.lock()));

    let outcome = interpreter.run(args);

    // Whatever was emitted before an error still reaches stdout.
    interpreter
        .into_inner()
        .flush()
        .context("Failed to flush standard output")?;

    Ok(outcome?)
}

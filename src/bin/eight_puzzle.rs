use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle::command::Session;
use std::io::{self, Write};
use std::path::PathBuf;

/// Runs eight-puzzle commands from a file, or interactively when no file is given.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File with one command per line (`#` starts a comment)
    command_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command_file {
        Some(path) => {
            let failures = session
                .run_file(path, &mut out)
                .with_context(|| format!("Failed to run commands from {}", path.display()))?;
            out.flush()?;
            if failures > 0 {
                eprintln!("[eight_puzzle] {} command(s) failed", failures);
            }
        }
        None => {
            let stdin = io::stdin();
            session
                .run_interactive(stdin.lock(), &mut out)
                .context("Interactive session aborted")?;
        }
    }
    Ok(())
}

//! Workspace quality checks.
//!
//! Single entry point for the checks CI runs:
//!
//! - `cargo xtask check` - formatting, clippy, docs
//! - `cargo xtask test` - the full test suite
//! - `cargo xtask ci` - everything, in CI order

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Quality checks for the workspace", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run formatting, clippy, and doc checks
    Check,
    /// Run the test suite
    Test,
    /// Run the full CI suite
    Ci,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => check(),
        Commands::Test => test(),
        Commands::Ci => {
            check()?;
            test()
        }
    }
}

fn check() -> Result<()> {
    cargo(&["fmt", "--all", "--", "--check"])?;
    cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])?;
    cargo(&["doc", "--workspace", "--no-deps", "--all-features"])
}

fn test() -> Result<()> {
    cargo(&["test", "--workspace", "--all-features"])
}

fn cargo(args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("cargo {} failed", args.join(" "));
    }
    Ok(())
}

use anyhow::{Context, Result};
use colored::Colorize;

use check_coverage::{cli::parse_args, evaluate, Outcome};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let outcome = match parse_args(std::env::args_os()) {
        Some(cli) => evaluate(&cli.report_path, cli.min_percent),
        None => Outcome::usage(),
    };

    let stdout = std::io::stdout();
    outcome
        .write_to(&mut stdout.lock())
        .context("Failed to write coverage summary")?;

    Ok(outcome.exit_code())
}

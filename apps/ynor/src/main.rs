use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ynor")]
#[command(about = "Build and check tooling for Ynor projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate the import graph of the project entry file
    Check(ynor_check::Config),
    /// Build the HTML shell and report dependency stats
    Build(ynor_build::Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Check(cfg) => {
            let report = ynor_check::run_check(&cfg)?;
            debug!("Report has {} errors", report.errors.len());

            if cfg.json {
                ynor_check::print_json(&mut stdout, &report)?;
                if !report.valid {
                    std::process::exit(1);
                }
                return Ok(());
            }

            let elapsed_ms = start.elapsed().as_millis();

            if report.valid {
                info!("No dependency issues");
                ynor_check::print_valid_message(&mut stdout, &report)?;
                writeln!(
                    stdout,
                    "\n{} Finished in {}ms on {} files.",
                    "●".bright_blue(),
                    elapsed_ms.to_string().cyan(),
                    report.visited.len().to_string().cyan()
                )?;
                stdout.flush()?;
            } else {
                ynor_check::print_report(&mut stdout, &report)?;
                writeln!(
                    stdout,
                    "\n{} Finished in {}ms on {} files.",
                    "●".bright_blue(),
                    elapsed_ms.to_string().cyan(),
                    report.visited.len().to_string().cyan()
                )?;
                stdout.flush()?;

                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
        Commands::Build(cfg) => {
            info!("Running build");
            let summary = ynor_build::run_build(&cfg)?;

            let elapsed_ms = start.elapsed().as_millis();

            writeln!(
                stdout,
                "{} Build completed: {} dependencies, {} errors",
                "✓".green().bold(),
                summary.dependencies.to_string().cyan(),
                summary.dependency_errors.to_string().yellow()
            )?;
            writeln!(
                stdout,
                "{} Finished in {}ms. Output: {}",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                summary.output.display().to_string().blue()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}

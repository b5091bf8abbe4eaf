use colored::Colorize;
use log::debug;
use std::io::{self, Write};

use ynor_deps::DependencyReport;

/// Print every broken edge with the file it was found in.
pub fn print_report<W: Write>(writer: &mut W, report: &DependencyReport) -> io::Result<()> {
    debug!("Printing {} dependency errors", report.errors.len());
    writeln!(writer, "{} Dependency check found issues:", "⚠".yellow().bold())?;

    for err in &report.errors {
        writeln!(
            writer,
            "{} {}: {}",
            "•".red(),
            err.file.display().to_string().blue(),
            err.message
        )?;
        if let Some(import) = &err.import {
            writeln!(writer, "  {} Import: {}", "→".dimmed(), import)?;
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn print_valid_message<W: Write>(
    writer: &mut W,
    report: &DependencyReport,
) -> io::Result<()> {
    writeln!(writer, "{} All dependencies are valid", "✓".green().bold())?;
    writeln!(writer, "{} Checked {} files", "✓".green().bold(), report.visited.len())?;
    writer.flush()?;
    Ok(())
}

/// Write the full report as pretty JSON, matching the original report shape.
pub fn print_json<W: Write>(writer: &mut W, report: &DependencyReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

use std::io::{BufWriter, Write};

use colored::Colorize;

use crate::check::FileReport;

/// Takes the per-file reports and displays them. Diagnostics go to the
/// given writer, file-level errors to stderr.
pub trait Emitter {
    fn emit<W: Write>(&self, writer: &mut W, reports: &[FileReport]) -> anyhow::Result<()>;
}

/// One diagnostic per line, followed by a short summary.
pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(&self, writer: &mut W, reports: &[FileReport]) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);

        // First, print all read and parse errors.
        let mut had_errors = false;
        for report in reports {
            if let Some(err) = &report.error {
                had_errors = true;
                eprintln!("{}: {err}", "Error".red().bold());
            }
        }

        // Then, print the diagnostics, already ordered per file.
        let mut total_diagnostics = 0usize;
        for report in reports {
            for diagnostic in &report.diagnostics {
                writeln!(writer, "{diagnostic}")?;
                total_diagnostics += 1;
            }
        }
        writer.flush()?;

        if total_diagnostics > 0 {
            if total_diagnostics > 1 {
                println!("\nFound {total_diagnostics} errors.");
            } else {
                println!("\nFound 1 error.");
            }
        } else if !had_errors {
            println!("All checks passed!");
        }

        Ok(())
    }
}

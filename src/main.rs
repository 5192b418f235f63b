use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use pystyle::check::{check_file, FileReport};
use pystyle::discovery::discover_python_files;
use pystyle::logging;
use pystyle::output::{ConciseEmitter, Emitter};

/// Python style checker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File or directory to check
    path: PathBuf,

    /// Print the time taken by the whole run
    #[arg(long)]
    with_timing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

enum ExitStatus {
    /// No diagnostics and no errors.
    Success,
    /// Diagnostics were reported.
    Failure,
    /// At least one file could not be read or parsed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    match run(&args) {
        Ok(status) => status.into(),
        Err(err) => {
            use std::io::Write;

            // Use `writeln` instead of `eprintln` to avoid panicking when
            // the stderr pipe is broken.
            let mut stderr = std::io::stderr().lock();
            writeln!(stderr, "pystyle failed").ok();
            for cause in err.chain() {
                writeln!(stderr, "  Cause: {cause}").ok();
            }

            ExitStatus::Error.into()
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitStatus> {
    let start = args.with_timing.then(Instant::now);

    let paths = discover_python_files(&args.path)?;
    if paths.is_empty() {
        println!(
            "{}: {}",
            "Warning".yellow().bold(),
            "No Python files found under the given path."
        );
        return Ok(ExitStatus::Success);
    }

    // One file at a time, in sorted order; no state is carried across files.
    let reports: Vec<FileReport> = paths.iter().map(|path| check_file(path)).collect();

    let mut stdout = std::io::stdout();
    ConciseEmitter.emit(&mut stdout, &reports)?;

    if let Some(start) = start {
        println!("\nChecked {} file(s) in: {:?}", reports.len(), start.elapsed());
    }

    if reports.iter().any(|r| r.error.is_some()) {
        return Ok(ExitStatus::Error);
    }
    if reports.iter().any(|r| !r.diagnostics.is_empty()) {
        return Ok(ExitStatus::Failure);
    }
    Ok(ExitStatus::Success)
}

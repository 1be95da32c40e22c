mod checker;
mod classify;
mod diagnostics;
mod error;
mod report;
mod resolver;
mod scanner;
mod types;
mod walker;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

/// Find relative links in markdown that point at files which do not exist.
#[derive(Parser)]
#[command(name = "linkcheck", about = "Find broken relative links in markdown documents")]
struct Cli {
    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Directory to check. Defaults to the parent of the directory holding this executable.
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    return match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::from(report::EXIT_FATAL)
        },
    };
}

/// Check the whole tree, print the report, and return the exit status.
///
/// # Errors
///
/// Returns fatal traversal, read, or root-location errors. Nothing is printed
/// to stdout in that case.
fn run(cli: &Cli) -> Result<u8, error::Error> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => default_root()?,
    };

    let summary = checker::run(&root)?;
    let rendered = if cli.json {
        report::render_json(&summary)?
    } else {
        report::render_text(&summary)
    };
    print!("{rendered}");

    return Ok(report::exit_status(&summary));
}

/// The tool lives one directory below the tree it checks, e.g. `<repo>/scripts/linkcheck`.
///
/// # Errors
///
/// Returns `Error::RootUnavailable` if the executable path cannot be determined
/// or has no grandparent directory.
fn default_root() -> Result<PathBuf, error::Error> {
    let exe = std::env::current_exe().map_err(|e| {
        return error::Error::RootUnavailable { reason: format!("executable path unknown: {e}") };
    })?;
    let Some(root) = root_for(&exe) else {
        return Err(error::Error::RootUnavailable {
            reason: format!("{} has no parent directory to check", exe.display()),
        });
    };
    return Ok(root.to_path_buf());
}

/// Grandparent of the executable path: `<repo>/scripts/linkcheck` checks `<repo>`.
fn root_for(exe: &Path) -> Option<&Path> {
    return exe.parent().and_then(Path::parent);
}

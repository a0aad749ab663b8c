// Console output for the non-interactive commands, plus logging setup.
// Results go to stdout with println!; logs go to stderr or a file.

use colored::Colorize as _;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log records are written.
#[derive(Debug)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Drop everything; used while the alternate screen is active.
    Discard,
}

fn filter(verbose: u8) -> EnvFilter {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_logging(verbose: u8, target: LogTarget<'_>) {
    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter(verbose))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && let Err(err) = fs_err::create_dir_all(parent)
            {
                eprintln!("{} {}", "warning:".yellow().bold(), err);
                return;
            }
            match fs_err::OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => tracing_subscriber::fmt()
                    .with_env_filter(filter(verbose))
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .try_init(),
                Err(err) => {
                    eprintln!("{} {}", "warning:".yellow().bold(), err);
                    return;
                },
            }
        },
        LogTarget::Discard => return,
    };

    if result.is_err() {
        tracing::debug!("A global subscriber is already installed");
    }
}

pub fn print_ok(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_field_error(field: &str, message: &str) {
    println!("{} {}: {}", "✗".red().bold(), field.bold(), message);
}

pub fn print_language(current: bool, tag: &str, label: &str) {
    let marker = if current { "*" } else { " " };
    println!("{} {}\t{}", marker, tag, label);
}

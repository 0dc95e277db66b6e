// src/cli/handlers.rs
use crate::analysis::{analyze, sample, Engine};
use crate::cli::args::CheckArgs;
use crate::config::{self, Config, OutputFormat};
use crate::discovery;
use crate::error::CscanError;
use crate::exit::CscanExit;
use crate::reporting;
use crate::types::SkipReason;
use anyhow::Result;
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};

const STDIN_NAME: &str = "<stdin>";

fn get_work_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn load_config(verbose: bool) -> Config {
    let mut config = Config::new();
    config.verbose = verbose;
    config.load_local_config(&get_work_dir());
    config
}

/// Handles the check command.
///
/// # Errors
/// Returns error if discovery fails, stdin cannot be read, or stdin input is too large.
pub fn handle_check(args: &CheckArgs, verbose: bool) -> Result<CscanExit> {
    let config = load_config(verbose);
    let format = args.format.unwrap_or(config.preferences.format);
    let strict = args.strict || config.preferences.strict;

    if args.stdin {
        return check_stdin(config, format, strict);
    }

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };
    let files = discovery::discover(&roots, &config)?;
    if files.is_empty() {
        eprintln!("No files to scan.");
        return Ok(CscanExit::InvalidInput);
    }
    if config.verbose {
        eprintln!("INFO: scanning {} files", files.len());
    }

    let engine = Engine::new(config);
    let report = engine.scan(files);
    reporting::print_scan(&report, format)?;

    Ok(verdict(report.has_errors(), strict))
}

fn check_stdin(config: Config, format: OutputFormat, strict: bool) -> Result<CscanExit> {
    // One byte past the limit is enough to trip the oversize path.
    let cap = config.limits.max_input_bytes.saturating_add(1);
    let mut bytes = Vec::new();
    std::io::stdin().take(cap).read_to_end(&mut bytes)?;

    let engine = Engine::new(config);
    let file = engine.analyze_bytes(Path::new(STDIN_NAME), &bytes);
    match (file.report, file.skipped) {
        (Some(report), _) => {
            reporting::print_analysis(&report, format)?;
            Ok(verdict(!report.is_clean(), strict))
        }
        (None, Some(SkipReason::TooLarge { size, limit })) => Err(CscanError::InputTooLarge {
            path: PathBuf::from(STDIN_NAME),
            size,
            limit,
        }
        .into()),
        (None, _) => {
            if engine.config().verbose {
                eprintln!("INFO: stdin carries cscan:ignore, nothing analyzed");
            }
            Ok(CscanExit::Success)
        }
    }
}

fn verdict(has_diagnostics: bool, strict: bool) -> CscanExit {
    if strict && has_diagnostics {
        CscanExit::CheckFailed
    } else {
        CscanExit::Success
    }
}

/// Handles the demo command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_demo(format: Option<OutputFormat>) -> Result<CscanExit> {
    let format = format.unwrap_or_default();
    if format == OutputFormat::Text {
        println!("{}", "Sample program:".cyan().bold());
        for (i, line) in sample::SAMPLE_PROGRAM.lines().enumerate() {
            println!("{:>4} | {line}", i + 1);
        }
        println!();
    }
    reporting::print_analysis(&analyze(sample::SAMPLE_PROGRAM), format)?;
    Ok(CscanExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if `cscan.toml` already exists or cannot be written.
pub fn handle_init() -> Result<CscanExit> {
    let dir = get_work_dir();
    config::init(&dir)?;
    println!(
        "{} {}",
        "Created".green().bold(),
        dir.join(config::io::CONFIG_FILE).display()
    );
    Ok(CscanExit::Success)
}

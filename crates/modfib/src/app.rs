//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, info};

use modfib_cli::output::format_bytes;
use modfib_cli::{ui, Alphabet, CLIPresenter, OrbitRenderer};
use modfib_core::memory_budget::{parse_memory_limit, MemoryEstimate};
use modfib_core::{group_by_length, modulo_fibonacci};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Message printed when the base is zero or negative.
pub const NON_POSITIVE_BASE: &str = "Base must be positive.";

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        modfib_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_cli(config, &mut out) {
        Err(e) if is_broken_pipe(&e) => Ok(()),
        other => other,
    }
}

/// Enumerate, group and present the orbits for `config`, writing to `out`.
pub fn run_cli(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let base = config.base();
    if base <= 0 {
        writeln!(out, "{NON_POSITIVE_BASE}")?;
        return Ok(());
    }

    // Memory budget check
    let limit = parse_memory_limit(&config.memory_limit).map_err(AppError::Config)?;
    let estimate = MemoryEstimate::estimate(base)?;
    debug!(
        base,
        bitmap = %format_bytes(estimate.bitmap_bytes),
        total = %format_bytes(estimate.total_bytes),
        "memory estimate"
    );
    estimate.check(limit)?;

    let orbits = modulo_fibonacci(base)?;
    let alphabet = Alphabet::new(orbits.base())?;
    let grouped = group_by_length(orbits);
    info!(
        base,
        orbits = grouped.total_orbits(),
        lengths = grouped.iter().count(),
        "enumeration finished"
    );

    let colored = ui::use_color(config.no_color);
    if config.verbose && !config.json {
        ui::write_header(out, &format!("Fibonacci orbits modulo {base}"), colored)?;
    }

    let renderer = OrbitRenderer::new(alphabet, colored);
    let presenter = CLIPresenter::new(renderer, config.stats_only, config.json, config.verbose);
    presenter.present(&grouped, out)?;
    out.flush()?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_with(args: &[&str]) -> Result<String> {
        let argv = std::iter::once("modfib").chain(args.iter().copied());
        let config = AppConfig::try_parse_from(argv).unwrap();
        let mut buf = Vec::new();
        run_cli(&config, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn non_positive_base_exits_cleanly() {
        assert_eq!(run_with(&["0"]).unwrap(), "Base must be positive.\n");
        assert_eq!(run_with(&["-12"]).unwrap(), "Base must be positive.\n");
    }

    #[test]
    fn unparseable_base_defaults_to_ten() {
        let out = run_with(&["--no-color", "-s", "ten"]).unwrap();
        assert!(out.starts_with("6 sequences.\n"));
    }

    #[test]
    fn base_two_plain_output() {
        let out = run_with(&["--no-color", "2"]).unwrap();
        assert_eq!(out, "110\n0\n2 sequences.\n1 of 3; 1 of 1\n");
    }

    #[test]
    fn memory_limit_enforced() {
        let err = run_with(&["--memory-limit", "1K", "100"]).unwrap_err();
        assert!(err.downcast_ref::<modfib_core::OrbitError>().is_some());
        assert_eq!(crate::errors::exit_code(&err), 4);
    }

    #[test]
    fn bad_memory_limit_is_config_error() {
        let err = run_with(&["--memory-limit", "lots", "10"]).unwrap_err();
        assert!(err.downcast_ref::<AppError>().is_some());
    }

    #[test]
    fn base_beyond_index_space_rejected() {
        let err = run_with(&["-s", "9999999999"]).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 4);
    }

    #[test]
    fn verbose_header_goes_to_writer() {
        let out = run_with(&["-v", "--no-color", "-s", "3"]).unwrap();
        assert!(out.starts_with("=== Fibonacci orbits modulo 3 ===\n"));
        assert!(out.ends_with("2 sequences.\n1 of 8; 1 of 1\n"));
    }

    #[test]
    fn json_mode_has_no_header() {
        let out = run_with(&["-v", "--json", "3"]).unwrap();
        assert!(!out.contains("==="));
        assert!(out.trim_start().starts_with('{'));
    }

    #[test]
    fn allocation_failure_is_config_error() {
        let err = run_with(&["-s", "1000000000"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<modfib_core::OrbitError>(),
            Some(modfib_core::OrbitError::Allocation { .. })
        ));
        assert_eq!(crate::errors::exit_code(&err), 4);
    }

    #[test]
    fn broken_pipe_detection() {
        let err = anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(is_broken_pipe(&err));
        assert!(!is_broken_pipe(&anyhow::anyhow!("other")));
    }
}

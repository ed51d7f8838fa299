//! auditpack CLI - fail-closed forensic audit and evidence bundler
//!
//! Usage: auditpack [OPTIONS] [COMMAND]
//!
//! Commands:
//!   audit      Full pipeline (default)
//!   inventory  Required-file check only
//!   verify     Hash re-calculation only
//!   lock-sync  Primary/mirror lock comparison only

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use auditpack::AuditError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use ui::json::emit_event;
use ui::json::events::ErrorEvent;
use ui::primitives::icon::Icon;
use ui::primitives::text::ColoredText;

/// Exit code for I/O, parse and configuration failures
const EXIT_FATAL: u8 = 2;

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "warn,auditpack=debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.clone().unwrap_or(Commands::Audit);
    let result = match &command {
        Commands::Audit => commands::cmd_audit(&cli),
        Commands::Inventory => commands::cmd_inventory(&cli),
        Commands::Verify { lock } => commands::cmd_verify(&cli, lock.as_deref()),
        Commands::LockSync => commands::cmd_lock_sync(&cli),
    };

    match result {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(EXIT_FATAL)),
        Err(err) => {
            report_error(&cli, command.name(), &err);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn report_error(cli: &Cli, command: &str, err: &anyhow::Error) {
    let code = err
        .downcast_ref::<AuditError>()
        .or_else(|| err.chain().find_map(|e| e.downcast_ref::<AuditError>()))
        .map(AuditError::code)
        .unwrap_or("ERROR");

    if cli.json {
        let _ = emit_event(&ErrorEvent::new(command, code, format!("{:#}", err)));
        return;
    }

    let color = match cli.color {
        Some(cli::ColorWhen::Never) => false,
        Some(cli::ColorWhen::Always) => true,
        Some(cli::ColorWhen::Auto) | None => ui::terminal::detect_capabilities().supports_color,
    };
    let unicode = ui::terminal::detect_capabilities().supports_unicode;

    eprintln!(
        "{} {} {}",
        Icon::Error.colored(color, unicode),
        ColoredText::error(format!("Error [{}]:", code))
            .bold()
            .render(color),
        err
    );
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", Icon::Arrow.colored(color, unicode), cause);
    }
}

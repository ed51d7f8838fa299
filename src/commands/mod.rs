//! Command handlers
//!
//! Each handler returns the process exit code; fatal errors bubble up as
//! `anyhow::Error` and are mapped to exit code 2 by `main`.

mod audit;
mod inventory;
mod lock_sync;
mod verify;

pub use audit::cmd_audit;
pub use inventory::cmd_inventory;
pub use lock_sync::cmd_lock_sync;
pub use verify::cmd_verify;

use anyhow::{Context, Result};
use auditpack::domain::ports::AuditEventSink;
use auditpack::{AuditPipeline, AuditPlan, Config};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::audit::{ConsoleAuditSink, JsonAuditSink};

/// Resolved configuration, plan and output settings for one invocation
pub(crate) struct Session {
    pub pipeline: AuditPipeline,
    pub ui: UiContext,
}

impl Session {
    pub fn root_display(&self) -> String {
        self.pipeline.root().display().to_string()
    }

    /// Event sink matching the output mode
    pub fn sink(&self, command: &'static str) -> Box<dyn AuditEventSink> {
        if self.ui.json {
            Box::new(JsonAuditSink::stdout(command))
        } else {
            Box::new(ConsoleAuditSink::stdout(self.ui))
        }
    }
}

pub(crate) fn prepare(cli: &Cli) -> Result<Session> {
    let loaded = Config::resolve(&cli.root, cli.config.as_deref())
        .context("failed to load configuration")?;
    let config = loaded.config;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    print_config_warnings(&loaded.warnings, &ui);

    if let Some(source) = &loaded.source {
        tracing::info!(config = %source.display(), "using config file");
    }

    let plan = AuditPlan::from_config(&config)
        .context("invalid audit configuration")?
        .with_ignored_lock_fields(cli.ignore_lock_fields.iter().cloned());

    Ok(Session {
        pipeline: AuditPipeline::new(cli.root.clone(), plan),
        ui,
    })
}

use anyhow::{Context, Result};
use auditpack::LockSyncStatus;
use serde::Serialize;

use crate::cli::Cli;
use crate::commands::prepare;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::audit::render_audit_header;
use crate::ui::views::report::render_lock_sync_summary;

#[derive(Serialize)]
struct LockSyncComplete<'a> {
    status: LockSyncStatus,
    ignored_fields: &'a [String],
}

pub fn cmd_lock_sync(cli: &Cli) -> Result<i32> {
    let session = prepare(cli)?;
    let ui = session.ui;
    let plan = session.pipeline.plan();

    if ui.json {
        emit_event(&StartEvent::new("lock-sync", session.root_display()))?;
    } else {
        print!(
            "{}",
            render_audit_header(
                "auditpack lock-sync",
                &session.root_display(),
                &plan.audit_mode,
                &plan.bundle_version,
                ui.color,
                ui.unicode,
            )
        );
    }

    let sink = session.sink("lock-sync");
    let report = session
        .pipeline
        .lock_sync(sink.as_ref())
        .context("lock comparison failed")?;
    let exit_code = match report.status {
        LockSyncStatus::Synced => 0,
        LockSyncStatus::Drift => 1,
    };

    if ui.json {
        emit_event(&CompleteEvent::new(
            "lock-sync",
            exit_code,
            LockSyncComplete {
                status: report.status,
                ignored_fields: &plan.ignore_lock_fields,
            },
        ))?;
    } else {
        println!();
        print!(
            "{}",
            render_lock_sync_summary(&report, ui.color, ui.unicode)
        );
    }

    Ok(exit_code)
}

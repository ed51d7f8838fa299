use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::Cli;
use crate::commands::prepare;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::audit::render_audit_header;
use crate::ui::views::report::render_inventory_summary;

#[derive(Serialize)]
struct InventoryComplete {
    present: usize,
    missing: usize,
    optional_present: usize,
}

pub fn cmd_inventory(cli: &Cli) -> Result<i32> {
    let session = prepare(cli)?;
    let ui = session.ui;

    if ui.json {
        emit_event(&StartEvent::new("inventory", session.root_display()))?;
    } else {
        let plan = session.pipeline.plan();
        print!(
            "{}",
            render_audit_header(
                "auditpack inventory",
                &session.root_display(),
                &plan.audit_mode,
                &plan.bundle_version,
                ui.color,
                ui.unicode,
            )
        );
    }

    let sink = session.sink("inventory");
    let report = session
        .pipeline
        .inventory(sink.as_ref())
        .context("inventory failed")?;
    let exit_code = if report.all_present() { 0 } else { 1 };

    if ui.json {
        emit_event(&CompleteEvent::new(
            "inventory",
            exit_code,
            InventoryComplete {
                present: report.present,
                missing: report.missing.len(),
                optional_present: report.optional_present.len(),
            },
        ))?;
    } else {
        println!();
        print!(
            "{}",
            render_inventory_summary(&report, ui.color, ui.unicode)
        );
    }

    Ok(exit_code)
}

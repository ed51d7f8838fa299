use anyhow::{Context, Result};
use auditpack::AuditOutcome;
use serde::Serialize;

use crate::cli::Cli;
use crate::commands::prepare;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::audit::render_audit_header;
use crate::ui::views::report::{render_abort_report, render_final_report};

#[derive(Serialize)]
struct AuditComplete<'a> {
    verdict: Option<&'a str>,
    deployment_ready: bool,
    readiness_score: u8,
    missing_files: usize,
    hash_mismatches: usize,
    manifest: Option<String>,
    bundle: Option<String>,
}

pub fn cmd_audit(cli: &Cli) -> Result<i32> {
    let session = prepare(cli)?;
    let ui = session.ui;
    let plan = session.pipeline.plan();

    if ui.json {
        emit_event(&StartEvent::new("audit", session.root_display()))?;
    } else {
        print!(
            "{}",
            render_audit_header(
                "auditpack audit",
                &session.root_display(),
                &plan.audit_mode,
                &plan.bundle_version,
                ui.color,
                ui.unicode,
            )
        );
    }

    let sink = session.sink("audit");
    let outcome = session
        .pipeline
        .run(sink.as_ref())
        .context("audit failed")?;
    let exit_code = outcome.exit_code();

    match &outcome {
        AuditOutcome::Aborted { missing } => {
            if ui.json {
                emit_event(&CompleteEvent::new(
                    "audit",
                    exit_code,
                    AuditComplete {
                        verdict: None,
                        deployment_ready: false,
                        readiness_score: 0,
                        missing_files: missing.len(),
                        hash_mismatches: 0,
                        manifest: None,
                        bundle: None,
                    },
                ))?;
            } else {
                println!();
                print!("{}", render_abort_report(missing, ui.color, ui.unicode));
            }
        }
        AuditOutcome::Completed(run) => {
            let manifest = &run.manifest;
            if ui.json {
                emit_event(&CompleteEvent::new(
                    "audit",
                    exit_code,
                    AuditComplete {
                        verdict: Some(manifest.verdict.as_str()),
                        deployment_ready: manifest.deployment_ready,
                        readiness_score: manifest.readiness_score(),
                        missing_files: manifest.validation_results.missing_files_count,
                        hash_mismatches: manifest.validation_results.hash_mismatches_count,
                        manifest: Some(run.manifest_path.display().to_string()),
                        bundle: Some(run.bundle.path.display().to_string()),
                    },
                ))?;
            } else {
                println!();
                print!(
                    "{}",
                    render_final_report(manifest, &run.bundle, ui.color, ui.unicode)
                );
            }
        }
    }

    Ok(exit_code)
}

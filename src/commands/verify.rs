use anyhow::{anyhow, Context, Result};
use auditpack::domain::value_objects::AssetPath;
use auditpack::{AuditPipeline, HashStatus};
use serde::Serialize;

use crate::cli::Cli;
use crate::commands::prepare;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::audit::render_audit_header;
use crate::ui::views::report::render_hash_summary;

#[derive(Serialize)]
struct VerifyComplete<'a> {
    lock: &'a str,
    status: HashStatus,
    passed: usize,
    failed: usize,
}

pub fn cmd_verify(cli: &Cli, lock: Option<&str>) -> Result<i32> {
    let mut session = prepare(cli)?;
    let ui = session.ui;

    if let Some(raw) = lock {
        let path = AssetPath::new(raw).map_err(|e| anyhow!("invalid lock path '{}': {}", raw, e))?;
        let mut plan = session.pipeline.plan().clone();
        plan.primary_lock = path;
        session.pipeline = AuditPipeline::new(session.pipeline.root().to_path_buf(), plan);
    }
    let lock_path = session.pipeline.plan().primary_lock.clone();

    if ui.json {
        emit_event(&StartEvent::new("verify", session.root_display()))?;
    } else {
        let plan = session.pipeline.plan();
        print!(
            "{}",
            render_audit_header(
                "auditpack verify",
                &session.root_display(),
                &plan.audit_mode,
                &plan.bundle_version,
                ui.color,
                ui.unicode,
            )
        );
    }

    let sink = session.sink("verify");
    let report = session
        .pipeline
        .verify(sink.as_ref())
        .with_context(|| format!("hash verification against {} failed", lock_path))?;
    let exit_code = match report.status {
        HashStatus::Pass => 0,
        HashStatus::Fail => 1,
    };

    if ui.json {
        emit_event(&CompleteEvent::new(
            "verify",
            exit_code,
            VerifyComplete {
                lock: lock_path.as_str(),
                status: report.status,
                passed: report.passed,
                failed: report.failed,
            },
        ))?;
    } else {
        println!();
        print!("{}", render_hash_summary(&report, ui.color, ui.unicode));
    }

    Ok(exit_code)
}

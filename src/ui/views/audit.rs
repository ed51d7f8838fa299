//! Audit progress rendering
//!
//! Two `AuditEventSink` implementations: sectioned human output and an
//! NDJSON stream for CI. Both write through a mutex-guarded writer so tests
//! can capture output.

use std::io::{self, Write};
use std::sync::Mutex;

use auditpack::domain::ports::{AuditEvent, AuditEventSink, HashCheck};
use auditpack::{LockSyncStatus, Verdict};

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_audit_header(
    title: &str,
    root: &str,
    mode: &str,
    bundle_version: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Audit, title);
    header.add("Root", root);
    header.add("Mode", mode);
    header.add("Bundle", format!("v{}", bundle_version));
    header.render(supports_color, supports_unicode)
}

fn kib(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn annotate(ui: &UiContext, out: &mut String, level: AnnotationLevel, msg: &str, file: &str) {
    if ui.annotations {
        out.push_str(&github_actions_annotation(level, msg, Some(file), None));
        out.push('\n');
    }
}

/// Human-readable lines for one event (empty when the event is silent)
pub fn render_event(ui: &UiContext, event: &AuditEvent) -> String {
    let (color, unicode) = (ui.color, ui.unicode);
    let verbose = ui.verbose > 0;
    let mut out = String::new();

    match event {
        AuditEvent::StageStarted { stage } => {
            let title = ColoredText::info(stage.title()).bold().render(color);
            out.push_str(&format!("\n{}\n", title));
        }

        AuditEvent::CategoryStarted { name, file_count } => {
            out.push_str(&format!(
                "  {} {}\n",
                name,
                ColoredText::dim(format!("({} files)", file_count)).render(color)
            ));
        }

        AuditEvent::RequiredChecked {
            path,
            category,
            present,
        } => {
            if *present {
                out.push_str(&CheckItem::new(CheckStatus::Pass, path).render(4, color, unicode));
            } else {
                out.push_str(
                    &CheckItem::new(CheckStatus::Error, path)
                        .note("MISSING")
                        .render(4, color, unicode),
                );
                annotate(
                    ui,
                    &mut out,
                    AnnotationLevel::Error,
                    &format!("Required file missing ({})", category),
                    path,
                );
            }
        }

        AuditEvent::OptionalChecked { path, present } => {
            let item = if *present {
                CheckItem::new(CheckStatus::Pass, path).note("optional")
            } else {
                CheckItem::new(CheckStatus::Skipped, path).note("optional, absent")
            };
            out.push_str(&item.render(4, color, unicode));
        }

        AuditEvent::LockLoaded {
            path,
            version,
            algorithm,
            entries,
        } => {
            out.push_str(&format!(
                "  {} {} ({} entries, version {}, {})\n",
                Icon::Lock.colored(color, unicode),
                path,
                entries,
                version.as_deref().unwrap_or("unset"),
                algorithm.as_deref().unwrap_or("sha256"),
            ));
        }

        AuditEvent::HashChecked { file, result, .. } => match result {
            HashCheck::Match => {
                out.push_str(&CheckItem::new(CheckStatus::Pass, file).render(4, color, unicode));
            }
            HashCheck::Mismatch | HashCheck::Missing => {
                let note = if *result == HashCheck::Missing {
                    "MISSING"
                } else {
                    "MISMATCH"
                };
                out.push_str(
                    &CheckItem::new(CheckStatus::Error, file)
                        .note(note)
                        .render(4, color, unicode),
                );
                annotate(
                    ui,
                    &mut out,
                    AnnotationLevel::Warning,
                    &format!("Hash {} against lock", note.to_lowercase()),
                    file,
                );
            }
        },

        AuditEvent::HashSummary {
            status,
            passed,
            failed,
        } => {
            let label = status.as_str().to_uppercase();
            let label = if *failed == 0 {
                ColoredText::success(label)
            } else {
                ColoredText::warning(label)
            };
            out.push_str(&format!(
                "  Hash integrity: {} ({} passed, {} failed)\n",
                label.bold().render(color),
                passed,
                failed
            ));
        }

        AuditEvent::LockCompared {
            primary,
            mirror,
            status,
        } => {
            let (item_status, label) = match status {
                LockSyncStatus::Synced => (CheckStatus::Pass, "SYNCED"),
                LockSyncStatus::Drift => (CheckStatus::Warning, "DRIFT"),
            };
            out.push_str(
                &CheckItem::new(item_status, format!("{} vs {}", primary, mirror))
                    .note(label)
                    .render(2, color, unicode),
            );
            if *status == LockSyncStatus::Drift {
                annotate(
                    ui,
                    &mut out,
                    AnnotationLevel::Warning,
                    &format!("Lock drift: {} differs from {}", mirror, primary),
                    mirror,
                );
            }
        }

        AuditEvent::ManifestWritten {
            path,
            deployment_ready,
            verdict,
        } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            out.push_str(
                &CheckItem::new(CheckStatus::Pass, format!("Generated {}", name))
                    .render(2, color, unicode),
            );
            out.push_str(&format!("    Deployment ready: {}\n", deployment_ready));
            out.push_str(&format!("    Verdict: {}\n", verdict_text(*verdict, color)));
        }

        AuditEvent::BundleEntryAdded { name } => {
            if verbose {
                out.push_str(&format!(
                    "    {} {}\n",
                    Icon::Added.colored(color, unicode),
                    name
                ));
            }
        }

        AuditEvent::BundleCreated {
            path,
            entries,
            size_bytes,
        } => {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Bundle.colored(color, unicode),
                path.display()
            ));
            out.push_str(&format!(
                "    {} files, {}\n",
                entries,
                kib(*size_bytes)
            ));
        }

        AuditEvent::Aborted { missing_count } => {
            out.push_str(&format!(
                "\n{} {}\n",
                Icon::Error.colored(color, unicode),
                ColoredText::error(format!(
                    "FAIL-CLOSED: {} required file(s) missing; no manifest or bundle written",
                    missing_count
                ))
                .bold()
                .render(color)
            ));
        }
    }

    out
}

pub fn verdict_text(verdict: Verdict, supports_color: bool) -> String {
    let text = match verdict {
        Verdict::ReadyForRuntime => ColoredText::success(verdict.as_str()),
        Verdict::ReadyWithWarnings => ColoredText::warning(verdict.as_str()),
        Verdict::NotReady => ColoredText::error(verdict.as_str()),
    };
    text.bold().render(supports_color)
}

/// Sectioned terminal output
pub struct ConsoleAuditSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleAuditSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl AuditEventSink for ConsoleAuditSink {
    fn on_event(&self, event: AuditEvent) {
        let rendered = render_event(&self.ui, &event);
        if rendered.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(rendered.as_bytes());
            let _ = writer.flush();
        }
    }
}

/// NDJSON representation of one event
pub fn event_json(command: &str, event: &AuditEvent) -> serde_json::Value {
    use serde_json::json;

    match event {
        AuditEvent::StageStarted { stage } => json!({
            "event": "stage",
            "command": command,
            "stage": stage.as_str(),
        }),
        AuditEvent::CategoryStarted { name, file_count } => json!({
            "event": "category",
            "command": command,
            "category": name,
            "file_count": file_count,
        }),
        AuditEvent::RequiredChecked {
            path,
            category,
            present,
        } => json!({
            "event": "file",
            "command": command,
            "path": path,
            "category": category,
            "present": present,
        }),
        AuditEvent::OptionalChecked { path, present } => json!({
            "event": "optional",
            "command": command,
            "path": path,
            "present": present,
        }),
        AuditEvent::LockLoaded {
            path,
            version,
            algorithm,
            entries,
        } => json!({
            "event": "lock",
            "command": command,
            "path": path,
            "version": version,
            "algorithm": algorithm,
            "entries": entries,
        }),
        AuditEvent::HashChecked { id, file, result } => json!({
            "event": "hash",
            "command": command,
            "id": id,
            "file": file,
            "result": match result {
                HashCheck::Match => "match",
                HashCheck::Mismatch => "mismatch",
                HashCheck::Missing => "missing",
            },
        }),
        AuditEvent::HashSummary {
            status,
            passed,
            failed,
        } => json!({
            "event": "hash_summary",
            "command": command,
            "status": status,
            "passed": passed,
            "failed": failed,
        }),
        AuditEvent::LockCompared {
            primary,
            mirror,
            status,
        } => json!({
            "event": "lock_sync",
            "command": command,
            "primary": primary,
            "mirror": mirror,
            "status": status,
        }),
        AuditEvent::ManifestWritten {
            path,
            deployment_ready,
            verdict,
        } => json!({
            "event": "manifest",
            "command": command,
            "path": path.display().to_string(),
            "deployment_ready": deployment_ready,
            "verdict": verdict,
        }),
        AuditEvent::BundleEntryAdded { name } => json!({
            "event": "bundle_entry",
            "command": command,
            "name": name,
        }),
        AuditEvent::BundleCreated {
            path,
            entries,
            size_bytes,
        } => json!({
            "event": "bundle",
            "command": command,
            "path": path.display().to_string(),
            "entries": entries,
            "size_bytes": size_bytes,
        }),
        AuditEvent::Aborted { missing_count } => json!({
            "event": "aborted",
            "command": command,
            "reason": "missing_required_files",
            "missing_count": missing_count,
        }),
    }
}

/// NDJSON event stream for CI
pub struct JsonAuditSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonAuditSink {
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl AuditEventSink for JsonAuditSink {
    fn on_event(&self, event: AuditEvent) {
        let json = event_json(self.command, &event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", json);
            let _ = writer.flush();
        }
    }
}

//! End-of-run reports

use auditpack::application::{BundleSummary, HashReport, InventoryReport, LockSyncReport};
use auditpack::domain::entities::{AuditManifest, MissingFileRecord};
use auditpack::{HashStatus, LockSyncStatus};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::audit::verdict_text;
use crate::ui::widgets::panel::{Panel, PanelStyle};

const LABEL_WIDTH: usize = 22;

fn kib(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Full report printed after a completed audit
pub fn render_final_report(
    manifest: &AuditManifest,
    bundle: &BundleSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let style = if manifest.deployment_ready {
        PanelStyle::Success
    } else {
        PanelStyle::Warning
    };
    let title = format!(
        "{} {}",
        Icon::Audit.colored(supports_color, supports_unicode),
        ColoredText::info("FORENSIC AUDIT REPORT")
            .bold()
            .render(supports_color)
    );
    let mut panel = Panel::with_title(title).style(style).min_width(56);

    let meta = &manifest.audit_metadata;
    let counts = &manifest.inventory;
    let results = &manifest.validation_results;

    panel.add_empty();
    panel.add_field("Repository Version", LABEL_WIDTH, &meta.repository_version);
    panel.add_field("Timestamp", LABEL_WIDTH, &meta.timestamp_utc);
    panel.add_field("Mode", LABEL_WIDTH, &meta.audit_mode);

    panel.add_empty();
    panel.add_field("Domains", LABEL_WIDTH, counts.total_domains.to_string());
    panel.add_field("Archetypes", LABEL_WIDTH, counts.total_archetypes.to_string());
    panel.add_field("Prompts", LABEL_WIDTH, counts.total_prompts.to_string());
    panel.add_field("CI Workflows", LABEL_WIDTH, counts.ci_workflows_count.to_string());
    panel.add_field("GPT Configs", LABEL_WIDTH, counts.gpt_config_count.to_string());
    panel.add_field(
        "Required Files",
        LABEL_WIDTH,
        counts.total_required_files.to_string(),
    );

    panel.add_empty();
    let hash = results.hash_integrity_status.as_str().to_uppercase();
    let hash = if results.hash_integrity_status == HashStatus::Pass {
        ColoredText::success(hash)
    } else {
        ColoredText::warning(hash)
    };
    panel.add_field("Hash Integrity", LABEL_WIDTH, hash.render(supports_color));
    let lock = results.lock_sync_status.as_str().to_uppercase();
    let lock = if results.lock_sync_status == LockSyncStatus::Synced {
        ColoredText::success(lock)
    } else {
        ColoredText::warning(lock)
    };
    panel.add_field("Lock Sync", LABEL_WIDTH, lock.render(supports_color));
    panel.add_field(
        "Missing Files",
        LABEL_WIDTH,
        results.missing_files_count.to_string(),
    );
    panel.add_field(
        "Hash Mismatches",
        LABEL_WIDTH,
        results.hash_mismatches_count.to_string(),
    );

    panel.add_empty();
    panel.add_field(
        "Deployment Ready",
        LABEL_WIDTH,
        manifest.deployment_ready.to_string(),
    );
    panel.add_field(
        "Readiness Score",
        LABEL_WIDTH,
        format!("{}/100", manifest.readiness_score()),
    );

    panel.add_empty();
    let bundle_name = bundle
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| bundle.path.display().to_string());
    panel.add_field("Bundle", LABEL_WIDTH, bundle_name);
    panel.add_field("Bundle Size", LABEL_WIDTH, kib(bundle.size_bytes));

    panel.add_empty();
    panel.add_field(
        "FINAL VERDICT",
        LABEL_WIDTH,
        verdict_text(manifest.verdict, supports_color),
    );

    panel.add_empty();
    let issues = &manifest.issues;
    if issues.missing_files.is_empty() && issues.hash_mismatches.is_empty() {
        panel.add_line(format!(
            "{} No blocking issues found.",
            Icon::Success.colored(supports_color, supports_unicode)
        ));
    } else {
        for missing in &issues.missing_files {
            panel.add_line(format!(
                "{} MISSING: {} ({})",
                Icon::Error.colored(supports_color, supports_unicode),
                missing.path,
                missing.category
            ));
        }
        for mismatch in &issues.hash_mismatches {
            panel.add_line(format!(
                "{} HASH MISMATCH: {}",
                Icon::Warning.colored(supports_color, supports_unicode),
                mismatch.file
            ));
        }
    }

    panel.render(supports_color, supports_unicode)
}

/// Report printed when the fail-closed gate stops the run
pub fn render_abort_report(
    missing: &[MissingFileRecord],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::failure("AUDIT ABORTED (FAIL-CLOSED)");
    summary.add_stat("required file(s) missing", missing.len());
    for record in missing {
        summary.add_error(format!("MISSING: {} ({})", record.path, record.category));
    }
    summary.with_next_step("restore the missing files and re-run the audit");
    summary.render(supports_color, supports_unicode)
}

pub fn render_inventory_summary(
    report: &InventoryReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.all_present() {
        ResultSummary::success("Inventory complete")
    } else {
        ResultSummary::failure("Inventory incomplete")
    };
    summary.add_stat("required files present", report.present);
    summary.add_stat("required files missing", report.missing.len());
    summary.add_stat("optional files present", report.optional_present.len());
    for record in &report.missing {
        summary.add_error(format!("MISSING: {} ({})", record.path, record.category));
    }
    summary.render(supports_color, supports_unicode)
}

pub fn render_hash_summary(
    report: &HashReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = match report.status {
        HashStatus::Pass => ResultSummary::success("Hash integrity: PASS"),
        HashStatus::Fail => ResultSummary::partial("Hash integrity: FAIL"),
    };
    summary.add_stat("hashes matched", report.passed);
    summary.add_stat("hashes failed", report.failed);
    for mismatch in &report.mismatches {
        if mismatch.is_missing_file() {
            summary.add_warning(format!("FILE NOT FOUND: {}", mismatch.file));
        } else {
            summary.add_warning(format!("HASH MISMATCH: {}", mismatch.file));
        }
    }
    summary.render(supports_color, supports_unicode)
}

pub fn render_lock_sync_summary(
    report: &LockSyncReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = match report.status {
        LockSyncStatus::Synced => ResultSummary::success("Lock sync: SYNCED"),
        LockSyncStatus::Drift => ResultSummary::partial("Lock sync: DRIFT"),
    };
    if report.status == LockSyncStatus::Drift {
        for (label, meta) in [("primary", &report.primary), ("mirror", &report.mirror)] {
            summary.add_error(format!(
                "{}: version {}, generated {}",
                label,
                meta.version.as_deref().unwrap_or("unset"),
                meta.generated.as_deref().unwrap_or("unset")
            ));
        }
        summary.with_next_step("copy the primary lock over the mirror, or pass --ignore-lock-field");
    }
    summary.render(supports_color, supports_unicode)
}

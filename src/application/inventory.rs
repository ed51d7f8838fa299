//! Inventory check
//!
//! First audit stage: confirm every declared required file exists under the
//! audit root. A directory or other non-file at a declared path counts as
//! missing. Missing files are findings, not errors; only unexpected I/O
//! failures abort with an `AuditError`.

use std::path::Path;

use crate::domain::entities::{MissingFileRecord, RequiredFiles};
use crate::domain::ports::{AuditEvent, AuditEventSink, AuditStage};
use crate::domain::value_objects::AssetPath;
use crate::error::AuditResult;
use crate::infrastructure::LocalFs;

/// Result of the inventory stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryReport {
    /// Required files found
    pub present: usize,
    /// Required files absent, in table order
    pub missing: Vec<MissingFileRecord>,
    /// Optional files found, in table order
    pub optional_present: Vec<AssetPath>,
}

impl InventoryReport {
    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check every required and optional path under `root`
pub fn check_inventory(
    root: &Path,
    required: &RequiredFiles,
    sink: &dyn AuditEventSink,
) -> AuditResult<InventoryReport> {
    let fs = LocalFs::new();
    let mut report = InventoryReport::default();

    sink.on_event(AuditEvent::StageStarted {
        stage: AuditStage::Inventory,
    });

    for category in required.categories() {
        sink.on_event(AuditEvent::CategoryStarted {
            name: category.name().to_string(),
            file_count: category.files().len(),
        });

        for path in category.files() {
            let present = fs.is_file(&path.under(root))?;
            if present {
                report.present += 1;
            } else {
                tracing::debug!(path = %path, category = category.name(), "required file missing");
                report
                    .missing
                    .push(MissingFileRecord::blocking(path.as_str(), category.name()));
            }
            sink.on_event(AuditEvent::RequiredChecked {
                path: path.to_string(),
                category: category.name().to_string(),
                present,
            });
        }
    }

    for path in required.optional() {
        let present = fs.is_file(&path.under(root))?;
        if present {
            report.optional_present.push(path.clone());
        }
        sink.on_event(AuditEvent::OptionalChecked {
            path: path.to_string(),
            present,
        });
    }

    tracing::info!(
        present = report.present,
        missing = report.missing.len(),
        optional = report.optional_present.len(),
        "inventory complete"
    );

    Ok(report)
}

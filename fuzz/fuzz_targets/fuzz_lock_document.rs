#![no_main]

use libfuzzer_sys::fuzz_target;

use auditpack::domain::entities::LockDocument;
use auditpack::domain::services::{canonical_form, compare_locks};
use auditpack::domain::value_objects::AssetPath;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(value) = serde_json::from_str::<serde_json::Value>(content) else {
        return;
    };

    // Canonicalization is deterministic and self-consistent
    assert_eq!(canonical_form(&value, &[]), canonical_form(&value, &[]));
    assert_eq!(
        compare_locks(&value, &value, &[]),
        auditpack::LockSyncStatus::Synced
    );

    // Lock parsing and entry path validation must never panic
    if let Ok(doc) = LockDocument::from_value(value) {
        for (_, entry) in doc.entries() {
            let _ = AssetPath::new(&entry.file);
        }
    }
});

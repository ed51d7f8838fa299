#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // TOML config parsing and plan construction must never panic
        if let Ok(config) = toml::from_str::<auditpack::Config>(content) {
            let _ = auditpack::AuditPlan::from_config(&config);
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing must never panic, and any parsed config yields a policy
        if let Ok(config) = toml::from_str::<ageguard::Config>(content) {
            let _ = config.policy.policy().unwrap_or_default();
        }
    }
});

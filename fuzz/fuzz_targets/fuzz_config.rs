#![no_main]

use libfuzzer_sys::fuzz_target;
use regform::FormConfig;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(config) = FormConfig::from_yaml(&s) {
        assert!(config.validate().is_ok());
    }
});

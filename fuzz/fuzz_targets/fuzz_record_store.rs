#![no_main]

use libfuzzer_sys::fuzz_target;
use regform::store::{KeyValueStore, MemoryStore, RecordStore};

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let mut store = MemoryStore::new();
    if store.set_item("registrationData", &s).is_err() {
        return;
    }
    let records = RecordStore::new(store, "registrationData");
    let Ok(loaded) = records.load() else {
        return;
    };

    // Whatever decodes must survive being written back and read again.
    let text = serde_json::to_string(&loaded).expect("records encode");
    let mut store = MemoryStore::new();
    store.set_item("registrationData", &text).expect("memory store");
    let reloaded = RecordStore::new(store, "registrationData")
        .load()
        .expect("re-encoded list decodes");
    assert_eq!(reloaded, loaded);
});

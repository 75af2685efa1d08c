#![no_main]

use libfuzzer_sys::fuzz_target;
use place_html::config::MarkersConfig;
use place_html::{find_block, splice};

fuzz_target!(|data: &[u8]| {
    if let Ok(document) = std::str::from_utf8(data) {
        let markers = MarkersConfig::default();
        // Locating and replacing a block must never panic on arbitrary scripts
        let _ = find_block(document, &markers);
        let block = format!("{}\n/*\nfuzz\n*/\n{}", markers.start, markers.end);
        let _ = splice(document, &block, &markers);
    }
});

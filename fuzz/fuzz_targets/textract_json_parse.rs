//! Fuzz target for Textract JSON parsing.
//!
//! Feeds arbitrary byte sequences to the detection reader and then runs
//! the region selector over whatever parsed, checking for panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use reviewmark::detection::io_textract::from_textract_slice;
use reviewmark::select::{select_polygons, SelectOptions};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(result) = from_textract_slice(data) {
        let _ = select_polygons(&result, &SelectOptions::default());
    }
});

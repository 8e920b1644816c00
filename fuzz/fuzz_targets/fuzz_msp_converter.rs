#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Conversion is total over text input and must never panic
    let text = String::from_utf8_lossy(data);
    let converter = msp2mgf::MspToMgfConverter::new().with_progress_interval(0);

    let mut sink = Vec::new();
    let stats = converter
        .convert_to_writer(&text, &mut sink)
        .expect("writing to memory cannot fail");

    assert!(stats.entries_converted >= 1);
    assert_eq!(stats.bytes_written, sink.len() as u64);
});

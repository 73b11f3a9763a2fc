#![no_main]

use libfuzzer_sys::fuzz_target;
use rle_decoder::{DecoderEvent, StreamingDecoder};

// Fuzz target: the event stream always ends with exactly one `End`, and
// nothing follows it.
fuzz_target!(|data: &[u8]| {
    let events: Vec<DecoderEvent> = StreamingDecoder::new(data)
        .collect::<Result<_, _>>()
        .expect("in-memory input cannot fail without max_run");
    let ends = events
        .iter()
        .filter(|e| matches!(e, DecoderEvent::End(_)))
        .count();
    assert_eq!(ends, 1);
    assert!(matches!(events.last(), Some(DecoderEvent::End(_))));
    assert!(events.iter().all(|e| match e {
        DecoderEvent::Run(run) => run.count >= 1,
        _ => true,
    }));
});

#![no_main]
use libfuzzer_sys::{fuzz_target, Corpus};
use tinyday::fuzzing::{run_fuzz_instant, Data};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_instant(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});

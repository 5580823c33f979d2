#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = anymap_pnm::PnmDecoder::new(data);
    let _ = decoder.decode();
});

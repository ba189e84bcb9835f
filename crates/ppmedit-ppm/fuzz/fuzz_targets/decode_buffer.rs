#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use ppmedit_ppm::ppmedit_core::options::DecoderOptions;

    // strict mode keeps bogus headers from zero filling huge buffers
    let options = DecoderOptions::default()
        .set_max_width(4096)
        .set_max_height(4096)
        .set_strict_mode(true);

    let mut decoder = ppmedit_ppm::PPMDecoder::new_with_options(options, data);
    let _ = decoder.decode();
});

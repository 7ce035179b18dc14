//! Decode fuzz target: arbitrary bytes as single values and as one FDATA record.
//! Decoding must not panic; it returns values or a CodecError.
//! Build with: cargo fuzz run decode_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    use dlis_frames::{
        decode_value, parse_storage_label, Cursor, FormatSpec, FrameDecoder, FrameRecord,
        RepresentationCode, Warnings,
    };

    if data.is_empty() {
        return;
    }
    // first byte picks a representation code for the single-value pass
    if let Some(code) = RepresentationCode::from_wire(data[0] % 27 + 1) {
        let mut cursor = Cursor::new(&data[1..]);
        while !cursor.is_empty() {
            if decode_value(code, &mut cursor).is_err() {
                break;
            }
        }
    }

    let mut warnings = Warnings::new();
    let _ = parse_storage_label(data, &mut warnings);

    if let Ok(spec) = FormatSpec::parse("o", "fSsjoOAb", "") {
        let decoder = FrameDecoder::new(spec).with_text_capacity(8);
        let records = vec![FrameRecord::implicit(data[1..].to_vec())];
        let _ = decoder.decode_all(&records, &[0], &mut warnings);
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run decode_fuzz");
}

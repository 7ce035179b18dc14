//! Benchmark: decode synthetic FDATA records with a numeric frame ("fFDl") and one with
//! reference-slot channels ("fSo") to compare fixed-slot and handle-slot writes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dlis_frames::{FormatSpec, FrameDecoder, FrameRecord, Warnings};

const RECORDS: usize = 10_000;

fn uvari(v: u32, out: &mut Vec<u8>) {
    if v < 0x80 {
        out.push(v as u8);
    } else if v < 0x4000 {
        out.extend_from_slice(&((v as u16) | 0x8000).to_be_bytes());
    } else {
        out.extend_from_slice(&(v | 0xC000_0000).to_be_bytes());
    }
}

fn header(out: &mut Vec<u8>) {
    out.extend_from_slice(&[0x01, 0x00, 0x04]);
    out.extend_from_slice(b"MAIN");
}

fn numeric_records() -> Vec<FrameRecord> {
    (1..=RECORDS as u32)
        .map(|frameno| {
            let mut data = Vec::new();
            header(&mut data);
            uvari(frameno, &mut data);
            data.extend_from_slice(&(frameno as f32 * 0.5).to_be_bytes());
            data.extend_from_slice(&(frameno as f64 * 0.25).to_be_bytes());
            data.extend_from_slice(&(-(frameno as i16)).to_be_bytes());
            data.extend_from_slice(&(frameno as i32 * 3).to_be_bytes());
            FrameRecord::implicit(data)
        })
        .collect()
}

fn reference_records() -> Vec<FrameRecord> {
    (1..=RECORDS as u32)
        .map(|frameno| {
            let mut data = Vec::new();
            header(&mut data);
            uvari(frameno, &mut data);
            data.extend_from_slice(&(frameno as f32).to_be_bytes());
            let comment = format!("sample {}", frameno);
            uvari(comment.len() as u32, &mut data);
            data.extend_from_slice(comment.as_bytes());
            data.extend_from_slice(&[0x02, 0x00, 0x05]);
            data.extend_from_slice(b"DEPTH");
            FrameRecord::implicit(data)
        })
        .collect()
}

fn bench_decode_frames(c: &mut Criterion) {
    let indices: Vec<usize> = (0..RECORDS).collect();

    let numeric = numeric_records();
    let decoder = FrameDecoder::new(FormatSpec::parse("o", "fFDl", "").expect("format"));
    let mut buffer = decoder.allocate(RECORDS);
    c.bench_function("decode_fdata_numeric", |b| {
        b.iter(|| {
            let mut warnings = Warnings::new();
            let rows = decoder
                .decode(black_box(&numeric), &indices, &mut buffer, &mut warnings)
                .expect("decode");
            assert_eq!(rows, RECORDS);
        })
    });

    let references = reference_records();
    let decoder = FrameDecoder::new(FormatSpec::parse("o", "fSo", "").expect("format"));
    let mut buffer = decoder.allocate(RECORDS);
    c.bench_function("decode_fdata_references", |b| {
        b.iter(|| {
            let mut warnings = Warnings::new();
            let rows = decoder
                .decode(black_box(&references), &indices, &mut buffer, &mut warnings)
                .expect("decode");
            assert_eq!(rows, RECORDS);
        })
    });
}

criterion_group!(benches, bench_decode_frames);
criterion_main!(benches);

//! Byte builders for test records. The crate only decodes, so fixtures are assembled here.

#![allow(dead_code)]

use dlis_frames::FrameRecord;

/// UVARI in its shortest form.
pub fn uvari(v: u32) -> Vec<u8> {
    if v < 0x80 {
        vec![v as u8]
    } else if v < 0x4000 {
        ((v as u16) | 0x8000).to_be_bytes().to_vec()
    } else {
        (v | 0xC000_0000).to_be_bytes().to_vec()
    }
}

/// UVARI forced to `len` bytes (1, 2 or 4); `v` must fit.
pub fn uvari_with_len(v: u32, len: usize) -> Vec<u8> {
    match len {
        1 => vec![v as u8],
        2 => ((v as u16) | 0x8000).to_be_bytes().to_vec(),
        _ => (v | 0xC000_0000).to_be_bytes().to_vec(),
    }
}

pub fn ident(s: &[u8]) -> Vec<u8> {
    let mut out = vec![s.len() as u8];
    out.extend_from_slice(s);
    out
}

pub fn ascii(s: &[u8]) -> Vec<u8> {
    let mut out = uvari(s.len() as u32);
    out.extend_from_slice(s);
    out
}

pub fn obname(origin: u32, copy: u8, id: &str) -> Vec<u8> {
    let mut out = uvari(origin);
    out.push(copy);
    out.extend(ident(id.as_bytes()));
    out
}

/// Record holding an OBNAME header and, for each frame, its number and channel bytes.
pub fn fdata(frames: &[(u32, Vec<u8>)]) -> FrameRecord {
    let mut data = obname(1, 0, "MAIN");
    for (frameno, body) in frames {
        data.extend(uvari(*frameno));
        data.extend_from_slice(body);
    }
    FrameRecord::implicit(data)
}

pub fn fsingl(v: f32) -> Vec<u8> {
    v.to_be_bytes().to_vec()
}

pub fn snorm(v: i16) -> Vec<u8> {
    v.to_be_bytes().to_vec()
}

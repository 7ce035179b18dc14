//! Decode functions for every representation code.
//!
//! Each `decode_*` function takes a [`Cursor`] positioned at the start of an encoded value,
//! consumes exactly the bytes the code defines and returns the host value. All multi-byte
//! quantities are big-endian on the wire. Reads go through [`Cursor::advance`], so a value
//! whose declared length runs past the record fails with [`CodecError::CorruptedRecord`].

use crate::cursor::Cursor;
use crate::objref::{AttributeReference, ObjectName, ObjectReference};
use crate::reprc::RepresentationCode;
use crate::text::recover_text;
use crate::value::{Complex, DateTime, DecodedValue, TimeZone};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("corrupted record: {0}")]
    CorruptedRecord(String),
    #[error("not implemented: {0}")]
    UnsupportedFeature(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unexpected value: {0}")]
    UnexpectedValue(String),
    #[error("format string: {0}")]
    Format(String),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}

pub fn decode_sshort(c: &mut Cursor) -> Result<i8, CodecError> {
    Ok(c.read_u8()? as i8)
}

pub fn decode_snorm(c: &mut Cursor) -> Result<i16, CodecError> {
    Ok(BigEndian::read_i16(c.advance(2)?))
}

pub fn decode_slong(c: &mut Cursor) -> Result<i32, CodecError> {
    Ok(BigEndian::read_i32(c.advance(4)?))
}

pub fn decode_ushort(c: &mut Cursor) -> Result<u8, CodecError> {
    c.read_u8()
}

pub fn decode_unorm(c: &mut Cursor) -> Result<u16, CodecError> {
    Ok(BigEndian::read_u16(c.advance(2)?))
}

pub fn decode_ulong(c: &mut Cursor) -> Result<u32, CodecError> {
    Ok(BigEndian::read_u32(c.advance(4)?))
}

/// FSHORT: 12-bit two's complement fraction followed by a 4-bit unsigned exponent.
pub fn decode_fshort(c: &mut Cursor) -> Result<f32, CodecError> {
    let v = BigEndian::read_u16(c.advance(2)?);
    // arithmetic shift sign-extends the fraction
    let fraction = ((v as i16) >> 4) as f32 / 2048.0;
    let exponent = (v & 0x000F) as i32;
    Ok(fraction * 2f32.powi(exponent))
}

pub fn decode_fsingl(c: &mut Cursor) -> Result<f32, CodecError> {
    Ok(BigEndian::read_f32(c.advance(4)?))
}

pub fn decode_fdoubl(c: &mut Cursor) -> Result<f64, CodecError> {
    Ok(BigEndian::read_f64(c.advance(8)?))
}

/// ISINGL: IBM System/360 single; base-16 exponent excess 64, 24-bit fraction.
pub fn decode_isingl(c: &mut Cursor) -> Result<f32, CodecError> {
    let v = BigEndian::read_u32(c.advance(4)?);
    let sign = if v & 0x8000_0000 != 0 { -1.0 } else { 1.0 };
    let exponent = ((v >> 24) & 0x7F) as i32 - 64;
    let fraction = (v & 0x00FF_FFFF) as f64 / (1u64 << 24) as f64;
    Ok((sign * fraction * 16f64.powi(exponent)) as f32)
}

/// VSINGL: VAX F-floating. The two 16-bit halves are little-endian words, high word first.
pub fn decode_vsingl(c: &mut Cursor) -> Result<f32, CodecError> {
    let b = c.advance(4)?;
    let high = LittleEndian::read_u16(&b[0..2]) as u32;
    let low = LittleEndian::read_u16(&b[2..4]) as u32;
    let v = (high << 16) | low;
    let negative = v & 0x8000_0000 != 0;
    let exponent = ((v >> 23) & 0xFF) as i32;
    if exponent == 0 {
        // sign set with zero exponent is the VAX reserved operand
        return Ok(if negative { f32::NAN } else { 0.0 });
    }
    let fraction = ((v & 0x007F_FFFF) | 0x0080_0000) as f64 / (1u64 << 24) as f64;
    let value = fraction * 2f64.powi(exponent - 128);
    Ok((if negative { -value } else { value }) as f32)
}

pub fn decode_fsing1(c: &mut Cursor) -> Result<(f32, f32), CodecError> {
    Ok((decode_fsingl(c)?, decode_fsingl(c)?))
}

pub fn decode_fsing2(c: &mut Cursor) -> Result<(f32, f32, f32), CodecError> {
    Ok((decode_fsingl(c)?, decode_fsingl(c)?, decode_fsingl(c)?))
}

pub fn decode_fdoub1(c: &mut Cursor) -> Result<(f64, f64), CodecError> {
    Ok((decode_fdoubl(c)?, decode_fdoubl(c)?))
}

pub fn decode_fdoub2(c: &mut Cursor) -> Result<(f64, f64, f64), CodecError> {
    Ok((decode_fdoubl(c)?, decode_fdoubl(c)?, decode_fdoubl(c)?))
}

pub fn decode_csingl(c: &mut Cursor) -> Result<Complex<f32>, CodecError> {
    Ok(Complex { re: decode_fsingl(c)?, im: decode_fsingl(c)? })
}

pub fn decode_cdoubl(c: &mut Cursor) -> Result<Complex<f64>, CodecError> {
    Ok(Complex { re: decode_fdoubl(c)?, im: decode_fdoubl(c)? })
}

/// UVARI: 1, 2 or 4 bytes; the top bits of the first byte give the length.
///
/// `0xxxxxxx` is one byte, `10xxxxxx` two bytes, `11xxxxxx` four bytes. The length bits are
/// masked out of the value.
pub fn decode_uvari(c: &mut Cursor) -> Result<u32, CodecError> {
    let first = c.peek_u8()?;
    match first >> 6 {
        0 | 1 => Ok((c.read_u8()? & 0x7F) as u32),
        2 => Ok((BigEndian::read_u16(c.advance(2)?) & 0x3FFF) as u32),
        _ => Ok(BigEndian::read_u32(c.advance(4)?) & 0x3FFF_FFFF),
    }
}

pub fn decode_origin(c: &mut Cursor) -> Result<u32, CodecError> {
    decode_uvari(c)
}

/// IDENT: one length byte, then that many raw bytes.
pub fn decode_ident<'a>(c: &mut Cursor<'a>) -> Result<&'a [u8], CodecError> {
    let len = c.read_u8()? as usize;
    c.advance(len)
}

pub fn decode_units<'a>(c: &mut Cursor<'a>) -> Result<&'a [u8], CodecError> {
    decode_ident(c)
}

/// ASCII: UVARI length, then that many raw bytes.
pub fn decode_ascii<'a>(c: &mut Cursor<'a>) -> Result<&'a [u8], CodecError> {
    let len = decode_uvari(c)? as usize;
    c.advance(len)
}

/// DTIME: year-1900, tz/month nibbles, day, hour, minute, second, u16 milliseconds.
pub fn decode_dtime(c: &mut Cursor) -> Result<DateTime, CodecError> {
    let b = c.advance(8)?;
    Ok(DateTime {
        year: b[0] as i32 + DateTime::YEAR_OFFSET,
        tz: TimeZone::from_nibble(b[1] >> 4),
        month: b[1] & 0x0F,
        day: b[2],
        hour: b[3],
        minute: b[4],
        second: b[5],
        millisecond: BigEndian::read_u16(&b[6..8]),
    })
}

/// STATUS: one byte; any non-zero value is `true`.
pub fn decode_status(c: &mut Cursor) -> Result<bool, CodecError> {
    Ok(c.read_u8()? != 0)
}

fn ident_string(bytes: &[u8]) -> String {
    recover_text(bytes).to_string()
}

pub fn decode_obname(c: &mut Cursor) -> Result<ObjectName, CodecError> {
    let origin = decode_origin(c)?;
    let copy = decode_ushort(c)?;
    let id = decode_ident(c)?;
    // origin is at most 30 bits, always fits
    Ok(ObjectName::from_parts(origin as i32, copy, ident_string(id)))
}

pub fn decode_objref(c: &mut Cursor) -> Result<ObjectReference, CodecError> {
    let type_ = ident_string(decode_ident(c)?);
    let name = decode_obname(c)?;
    Ok(ObjectReference::new(type_, name))
}

pub fn decode_attref(c: &mut Cursor) -> Result<AttributeReference, CodecError> {
    let reference = decode_objref(c)?;
    let label = ident_string(decode_ident(c)?);
    Ok(AttributeReference::new(reference, label))
}

/// Decode one value of representation code `code`.
pub fn decode_value(code: RepresentationCode, c: &mut Cursor) -> Result<DecodedValue, CodecError> {
    use RepresentationCode as R;
    Ok(match code {
        R::Fshort => DecodedValue::Float(decode_fshort(c)?),
        R::Fsingl => DecodedValue::Float(decode_fsingl(c)?),
        R::Isingl => DecodedValue::Float(decode_isingl(c)?),
        R::Vsingl => DecodedValue::Float(decode_vsingl(c)?),
        R::Fdoubl => DecodedValue::Double(decode_fdoubl(c)?),
        R::Fsing1 => {
            let (v, a) = decode_fsing1(c)?;
            DecodedValue::FloatPair(v, a)
        }
        R::Fsing2 => {
            let (v, a, b) = decode_fsing2(c)?;
            DecodedValue::FloatTriple(v, a, b)
        }
        R::Fdoub1 => {
            let (v, a) = decode_fdoub1(c)?;
            DecodedValue::DoublePair(v, a)
        }
        R::Fdoub2 => {
            let (v, a, b) = decode_fdoub2(c)?;
            DecodedValue::DoubleTriple(v, a, b)
        }
        R::Csingl => DecodedValue::ComplexFloat(decode_csingl(c)?),
        R::Cdoubl => DecodedValue::ComplexDouble(decode_cdoubl(c)?),
        R::Sshort => DecodedValue::Signed(decode_sshort(c)? as i64),
        R::Snorm => DecodedValue::Signed(decode_snorm(c)? as i64),
        R::Slong => DecodedValue::Signed(decode_slong(c)? as i64),
        R::Ushort => DecodedValue::Unsigned(decode_ushort(c)? as u64),
        R::Unorm => DecodedValue::Unsigned(decode_unorm(c)? as u64),
        R::Ulong => DecodedValue::Unsigned(decode_ulong(c)? as u64),
        R::Uvari | R::Origin => DecodedValue::Unsigned(decode_uvari(c)? as u64),
        R::Ident | R::Units => DecodedValue::Text(recover_text(decode_ident(c)?)),
        R::Ascii => DecodedValue::Text(recover_text(decode_ascii(c)?)),
        R::Dtime => DecodedValue::DateTime(decode_dtime(c)?),
        R::Obname => DecodedValue::ObjectName(decode_obname(c)?),
        R::Objref => DecodedValue::ObjectReference(decode_objref(c)?),
        R::Attref => DecodedValue::AttributeReference(decode_attref(c)?),
        R::Status => DecodedValue::Status(decode_status(c)?),
    })
}

/// Skip over the values of `codes` without materializing them.
pub fn skip_values(codes: &[RepresentationCode], c: &mut Cursor) -> Result<(), CodecError> {
    for &code in codes {
        match code.fixed_size() {
            Some(n) => {
                c.advance(n)?;
            }
            None => match code {
                RepresentationCode::Uvari | RepresentationCode::Origin => {
                    decode_uvari(c)?;
                }
                RepresentationCode::Ident | RepresentationCode::Units => {
                    decode_ident(c)?;
                }
                RepresentationCode::Ascii => {
                    decode_ascii(c)?;
                }
                _ => {
                    decode_value(code, c)?;
                }
            },
        }
    }
    Ok(())
}

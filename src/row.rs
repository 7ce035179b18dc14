//! Output rows for frame data.
//!
//! A [`RowLayout`] is compiled once from the channel codes of a frame. Every column gets one of
//! two kinds of slot:
//!
//! - **Fixed** slots live in the row's byte area at a constant offset. Integers, floats, tuples,
//!   complex numbers and STATUS are stored little-endian at their host width, tuple members and
//!   real/imaginary parts in wire order. IDENT/UNITS are bounded text: `capacity` code points,
//!   each a little-endian `u32`, zero padded.
//! - **Reference** slots hold an owned handle (`Arc<DecodedValue>`) for ASCII, DTIME and the
//!   compound identifiers. A fresh buffer fills them with an absent handle.
//!
//! Writing a reference slot swaps the new handle in and then releases the old one; a slot is
//! never left without a handle. Bounded text longer than its capacity is cut at the capacity
//! and reported as [`Warning::TruncatedText`].

use crate::codec::CodecError;
use crate::reprc::RepresentationCode;
use crate::text::Text;
use crate::value::{Complex, DecodedValue};
use crate::warning::{Warning, Warnings};
use byteorder::{ByteOrder, LittleEndian};
use std::sync::Arc;

/// Code points reserved for an IDENT/UNITS column (the longest possible IDENT).
pub const IDENT_CAPACITY: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Fixed { offset: usize, width: usize },
    Reference { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub code: RepresentationCode,
    pub slot: Slot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    columns: Vec<Column>,
    stride: usize,
    references: usize,
    text_capacity: usize,
}

fn fixed_width(code: RepresentationCode, text_capacity: usize) -> Option<usize> {
    use RepresentationCode as R;
    match code {
        R::Sshort | R::Ushort | R::Status => Some(1),
        R::Snorm | R::Unorm => Some(2),
        R::Slong | R::Ulong | R::Uvari | R::Origin => Some(4),
        R::Fshort | R::Fsingl | R::Isingl | R::Vsingl => Some(4),
        R::Fdoubl | R::Fsing1 | R::Csingl => Some(8),
        R::Fsing2 => Some(12),
        R::Fdoub1 | R::Cdoubl => Some(16),
        R::Fdoub2 => Some(24),
        R::Ident | R::Units => Some(text_capacity * 4),
        R::Ascii | R::Dtime | R::Obname | R::Objref | R::Attref => None,
    }
}

impl RowLayout {
    pub fn new(channels: &[RepresentationCode]) -> Self {
        Self::with_text_capacity(channels, IDENT_CAPACITY)
    }

    /// Layout with IDENT/UNITS columns holding `text_capacity` code points.
    pub fn with_text_capacity(channels: &[RepresentationCode], text_capacity: usize) -> Self {
        let mut columns = Vec::with_capacity(channels.len());
        let mut stride = 0;
        let mut references = 0;
        for &code in channels {
            let slot = match fixed_width(code, text_capacity) {
                Some(width) => {
                    let slot = Slot::Fixed { offset: stride, width };
                    stride += width;
                    slot
                }
                None => {
                    let slot = Slot::Reference { index: references };
                    references += 1;
                    slot
                }
            };
            columns.push(Column { code, slot });
        }
        RowLayout { columns, stride, references, text_capacity }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Bytes of fixed-slot data per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Reference slots per row.
    pub fn references(&self) -> usize {
        self.references
    }

    pub fn text_capacity(&self) -> usize {
        self.text_capacity
    }
}

/// Pre-allocated rows: a fixed-stride byte area plus one handle array per row.
#[derive(Debug)]
pub struct FrameBuffer {
    layout: RowLayout,
    rows: usize,
    bytes: Vec<u8>,
    handles: Vec<Arc<DecodedValue>>,
}

impl FrameBuffer {
    pub fn new(layout: RowLayout, rows: usize) -> Self {
        let absent = Arc::new(DecodedValue::Absent);
        let bytes = vec![0u8; layout.stride * rows];
        let handles = vec![absent; layout.references * rows];
        FrameBuffer { layout, rows, bytes, handles }
    }

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Drop rows past `rows`; their handles are released.
    pub fn truncate(&mut self, rows: usize) {
        if rows < self.rows {
            self.rows = rows;
            self.bytes.truncate(rows * self.layout.stride);
            self.handles.truncate(rows * self.layout.references);
        }
    }

    /// Raw byte area of all rows, `rows * stride` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes of a fixed slot, or `None` for reference columns and out-of-range positions.
    pub fn fixed_bytes(&self, row: usize, column: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        match self.layout.columns.get(column)?.slot {
            Slot::Fixed { offset, width } => {
                let start = row * self.layout.stride + offset;
                Some(&self.bytes[start..start + width])
            }
            Slot::Reference { .. } => None,
        }
    }

    /// The handle in a reference slot.
    pub fn handle(&self, row: usize, column: usize) -> Option<&Arc<DecodedValue>> {
        if row >= self.rows {
            return None;
        }
        match self.layout.columns.get(column)?.slot {
            Slot::Reference { index } => self.handles.get(row * self.layout.references + index),
            Slot::Fixed { .. } => None,
        }
    }

    /// Read a slot back as a value.
    ///
    /// Bounded text comes back without its trailing zero padding, so an IDENT that itself ends in
    /// NUL characters loses them.
    pub fn get(&self, row: usize, column: usize) -> Option<DecodedValue> {
        let col = *self.layout.columns.get(column)?;
        match col.slot {
            Slot::Reference { .. } => self.handle(row, column).map(|h| (**h).clone()),
            Slot::Fixed { .. } => self.fixed_bytes(row, column).map(|b| read_fixed(col.code, b)),
        }
    }

    /// Writer for `row`, positioned at its first column.
    pub fn row_writer(&mut self, row: usize) -> Result<FrameRowWriter<'_>, CodecError> {
        if row >= self.rows {
            return Err(CodecError::InvalidArgument(format!(
                "destination buffer too small: row {} requested, buffer holds {} rows",
                row, self.rows
            )));
        }
        let stride = self.layout.stride;
        let refs = self.layout.references;
        Ok(FrameRowWriter {
            layout: &self.layout,
            row,
            column: 0,
            bytes: &mut self.bytes[row * stride..(row + 1) * stride],
            handles: &mut self.handles[row * refs..(row + 1) * refs],
        })
    }
}

fn read_fixed(code: RepresentationCode, b: &[u8]) -> DecodedValue {
    use RepresentationCode as R;
    match code {
        R::Sshort => DecodedValue::Signed(b[0] as i8 as i64),
        R::Ushort => DecodedValue::Unsigned(b[0] as u64),
        R::Status => DecodedValue::Status(b[0] != 0),
        R::Snorm => DecodedValue::Signed(LittleEndian::read_i16(b) as i64),
        R::Unorm => DecodedValue::Unsigned(LittleEndian::read_u16(b) as u64),
        R::Slong => DecodedValue::Signed(LittleEndian::read_i32(b) as i64),
        R::Ulong | R::Uvari | R::Origin => {
            DecodedValue::Unsigned(LittleEndian::read_u32(b) as u64)
        }
        R::Fshort | R::Fsingl | R::Isingl | R::Vsingl => {
            DecodedValue::Float(LittleEndian::read_f32(b))
        }
        R::Fdoubl => DecodedValue::Double(LittleEndian::read_f64(b)),
        R::Fsing1 => DecodedValue::FloatPair(f32_at(b, 0), f32_at(b, 1)),
        R::Fsing2 => DecodedValue::FloatTriple(f32_at(b, 0), f32_at(b, 1), f32_at(b, 2)),
        R::Fdoub1 => DecodedValue::DoublePair(f64_at(b, 0), f64_at(b, 1)),
        R::Fdoub2 => DecodedValue::DoubleTriple(f64_at(b, 0), f64_at(b, 1), f64_at(b, 2)),
        R::Csingl => DecodedValue::ComplexFloat(Complex { re: f32_at(b, 0), im: f32_at(b, 1) }),
        R::Cdoubl => DecodedValue::ComplexDouble(Complex { re: f64_at(b, 0), im: f64_at(b, 1) }),
        R::Ident | R::Units => {
            let mut points: Vec<u32> = b.chunks_exact(4).map(LittleEndian::read_u32).collect();
            // only the trailing zeros are padding
            let len = points.iter().rposition(|&cp| cp != 0).map_or(0, |i| i + 1);
            points.truncate(len);
            let text: String = points
                .into_iter()
                .map(|cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect();
            DecodedValue::Text(Text::Utf8(text))
        }
        R::Ascii | R::Dtime | R::Obname | R::Objref | R::Attref => DecodedValue::Absent,
    }
}

fn f32_at(b: &[u8], i: usize) -> f32 {
    LittleEndian::read_f32(&b[i * 4..i * 4 + 4])
}

fn f64_at(b: &[u8], i: usize) -> f64 {
    LittleEndian::read_f64(&b[i * 8..i * 8 + 8])
}

fn write_f32s(dst: &mut [u8], values: &[f32]) {
    LittleEndian::write_f32_into(values, &mut dst[..values.len() * 4]);
}

fn write_f64s(dst: &mut [u8], values: &[f64]) {
    LittleEndian::write_f64_into(values, &mut dst[..values.len() * 8]);
}

/// Writes one row, column by column.
#[derive(Debug)]
pub struct FrameRowWriter<'a> {
    layout: &'a RowLayout,
    row: usize,
    column: usize,
    bytes: &'a mut [u8],
    handles: &'a mut [Arc<DecodedValue>],
}

impl<'a> FrameRowWriter<'a> {
    /// Index of the next column to be written.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Write `value` into the current column and move to the next one.
    pub fn write(
        &mut self,
        value: DecodedValue,
        warnings: &mut Warnings,
    ) -> Result<(), CodecError> {
        let col = *self.layout.columns.get(self.column).ok_or_else(|| {
            CodecError::InvalidArgument(format!(
                "row has {} columns, write to column {}",
                self.layout.columns.len(),
                self.column
            ))
        })?;
        match col.slot {
            Slot::Fixed { offset, width } => {
                let dst = &mut self.bytes[offset..offset + width];
                let capacity = self.layout.text_capacity;
                if let Some(length) = write_fixed(col.code, &value, dst, capacity)? {
                    warnings.push(Warning::TruncatedText {
                        row: self.row,
                        column: self.column,
                        length,
                        capacity: self.layout.text_capacity,
                    });
                }
            }
            Slot::Reference { index } => self.install(index, Arc::new(value)),
        }
        self.column += 1;
        Ok(())
    }

    fn install(&mut self, index: usize, handle: Arc<DecodedValue>) {
        let previous = std::mem::replace(&mut self.handles[index], handle);
        drop(previous);
    }
}

fn mismatch(code: RepresentationCode, value: &DecodedValue) -> CodecError {
    CodecError::InvalidArgument(format!("cannot store {:?} in a {} column", value, code))
}

fn narrow<T: TryFrom<i64>>(
    code: RepresentationCode,
    value: &DecodedValue,
) -> Result<T, CodecError> {
    value
        .as_i64()
        .and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| mismatch(code, value))
}

/// Encode `value` into a fixed slot. Returns the original length when text was truncated.
fn write_fixed(
    code: RepresentationCode,
    value: &DecodedValue,
    dst: &mut [u8],
    text_capacity: usize,
) -> Result<Option<usize>, CodecError> {
    use RepresentationCode as R;
    match (code, value) {
        (R::Sshort, _) => dst[0] = narrow::<i8>(code, value)? as u8,
        (R::Ushort, _) => dst[0] = narrow::<u8>(code, value)?,
        (R::Status, DecodedValue::Status(b)) => dst[0] = *b as u8,
        (R::Snorm, _) => LittleEndian::write_i16(dst, narrow(code, value)?),
        (R::Unorm, _) => LittleEndian::write_u16(dst, narrow(code, value)?),
        (R::Slong, _) => LittleEndian::write_i32(dst, narrow(code, value)?),
        (R::Ulong | R::Uvari | R::Origin, _) => LittleEndian::write_u32(dst, narrow(code, value)?),
        (R::Fshort | R::Fsingl | R::Isingl | R::Vsingl, DecodedValue::Float(x)) => {
            LittleEndian::write_f32(dst, *x)
        }
        (R::Fdoubl, DecodedValue::Double(x)) => LittleEndian::write_f64(dst, *x),
        (R::Fsing1, DecodedValue::FloatPair(v, a)) => write_f32s(dst, &[*v, *a]),
        (R::Fsing2, DecodedValue::FloatTriple(v, a, b)) => write_f32s(dst, &[*v, *a, *b]),
        (R::Fdoub1, DecodedValue::DoublePair(v, a)) => write_f64s(dst, &[*v, *a]),
        (R::Fdoub2, DecodedValue::DoubleTriple(v, a, b)) => write_f64s(dst, &[*v, *a, *b]),
        (R::Csingl, DecodedValue::ComplexFloat(z)) => write_f32s(dst, &[z.re, z.im]),
        (R::Cdoubl, DecodedValue::ComplexDouble(z)) => write_f64s(dst, &[z.re, z.im]),
        (R::Ident | R::Units, DecodedValue::Text(text)) => {
            let points = text.code_points();
            dst.fill(0);
            for (i, cp) in points.iter().take(text_capacity).enumerate() {
                LittleEndian::write_u32(&mut dst[i * 4..i * 4 + 4], *cp);
            }
            if points.len() > text_capacity {
                return Ok(Some(points.len()));
            }
        }
        _ => return Err(mismatch(code, value)),
    }
    Ok(None)
}

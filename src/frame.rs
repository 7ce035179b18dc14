//! Frame data: decode FDATA records into rows of a [`FrameBuffer`].
//!
//! An FDATA record starts with the frame's identifying header (the `pre` codes of the
//! [`FormatSpec`], normally one OBNAME), followed by a UVARI frame number, one value per
//! channel, and the `post` codes. Frame numbers are expected to count up from 1 across the
//! records of a frame type; a gap is reported as a warning, not an error, since real files
//! skip numbers.
//!
//! One record holds exactly one frame. A record with bytes left after the first frame fails
//! with [`CodecError::UnsupportedFeature`].

use crate::codec::{decode_uvari, decode_value, skip_values, CodecError};
use crate::cursor::Cursor;
use crate::format::FormatSpec;
use crate::row::{FrameBuffer, RowLayout};
use crate::warning::{Warning, Warnings};
use std::borrow::Cow;

/// A logical record as handed over by the record layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameRecord {
    pub data: Vec<u8>,
    /// Logical record type byte from the segment header.
    pub record_type: u8,
    pub explicit: bool,
    pub encrypted: bool,
    /// False when the segment headers of the record disagreed with each other.
    pub consistent: bool,
}

impl FrameRecord {
    /// An implicit, unencrypted, consistent record.
    pub fn implicit(data: Vec<u8>) -> Self {
        FrameRecord { data, record_type: 0, explicit: false, encrypted: false, consistent: true }
    }
}

/// Random access to records by index.
pub trait RecordSource {
    fn record(&self, index: usize) -> Result<Cow<'_, FrameRecord>, CodecError>;
}

impl RecordSource for [FrameRecord] {
    fn record(&self, index: usize) -> Result<Cow<'_, FrameRecord>, CodecError> {
        self.get(index).map(Cow::Borrowed).ok_or_else(|| {
            CodecError::InvalidArgument(format!(
                "record index {} out of range ({} records)",
                index,
                self.len()
            ))
        })
    }
}

impl RecordSource for Vec<FrameRecord> {
    fn record(&self, index: usize) -> Result<Cow<'_, FrameRecord>, CodecError> {
        self.as_slice().record(index)
    }
}

/// Decode the records at `indices` into consecutive rows of `buffer`, starting at row 0.
///
/// Returns the number of rows written. On error the rows written so far stay in the buffer.
pub fn decode_frame_rows<S: RecordSource + ?Sized>(
    spec: &FormatSpec,
    source: &S,
    indices: &[usize],
    buffer: &mut FrameBuffer,
    warnings: &mut Warnings,
) -> Result<usize, CodecError> {
    decode_frame_rows_from(spec, source, indices, buffer, 0, warnings)
}

/// Like [`decode_frame_rows`], but the first frame goes to row `first_row`.
///
/// Separate index ranges can fill disjoint row ranges of one buffer. The frame counter starts
/// at 1 for every call.
pub fn decode_frame_rows_from<S: RecordSource + ?Sized>(
    spec: &FormatSpec,
    source: &S,
    indices: &[usize],
    buffer: &mut FrameBuffer,
    first_row: usize,
    warnings: &mut Warnings,
) -> Result<usize, CodecError> {
    let layout_codes = buffer.layout().columns().iter().map(|c| c.code);
    if !layout_codes.eq(spec.channels.iter().copied()) {
        return Err(CodecError::InvalidArgument(format!(
            "destination rows do not match channel format {}",
            spec.channel_fmtstr()
        )));
    }

    let mut row = first_row;
    let mut expected_frameno: u32 = 1;
    for &index in indices {
        let record = source.record(index)?;
        if record.encrypted {
            return Err(CodecError::UnsupportedFeature("encrypted FDATA record".to_string()));
        }

        let mut cursor = Cursor::new(&record.data);
        skip_values(&spec.pre, &mut cursor)?;

        while !cursor.is_empty() {
            let frameno = decode_uvari(&mut cursor)?;
            if frameno != expected_frameno {
                warnings.push(Warning::FrameNumberOutOfSequence {
                    record: index,
                    expected: expected_frameno,
                    found: frameno,
                });
            }

            let mut writer = buffer.row_writer(row)?;
            for &code in &spec.channels {
                let value = decode_value(code, &mut cursor)?;
                writer.write(value, warnings)?;
            }
            expected_frameno = frameno.wrapping_add(1);
            row += 1;

            skip_values(&spec.post, &mut cursor)?;

            if !cursor.is_empty() {
                return Err(CodecError::UnsupportedFeature(format!(
                    "multiple frames in one FDATA record ({} bytes left in record {})",
                    cursor.remaining().len(),
                    index
                )));
            }
        }
        tracing::trace!(target: "dlis", record = index, row, "decoded fdata record");
    }
    Ok(row - first_row)
}

/// A frame format together with its compiled row layout.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    spec: FormatSpec,
    layout: RowLayout,
}

impl FrameDecoder {
    pub fn new(spec: FormatSpec) -> Self {
        let layout = RowLayout::new(&spec.channels);
        FrameDecoder { spec, layout }
    }

    /// Store IDENT/UNITS channels with room for `capacity` code points instead of 255.
    pub fn with_text_capacity(mut self, capacity: usize) -> Self {
        self.layout = RowLayout::with_text_capacity(&self.spec.channels, capacity);
        self
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    pub fn allocate(&self, rows: usize) -> FrameBuffer {
        FrameBuffer::new(self.layout.clone(), rows)
    }

    pub fn decode<S: RecordSource + ?Sized>(
        &self,
        source: &S,
        indices: &[usize],
        buffer: &mut FrameBuffer,
        warnings: &mut Warnings,
    ) -> Result<usize, CodecError> {
        let _span = tracing::debug_span!(
            target: "dlis",
            "fdata",
            fmt = %self.spec.channel_fmtstr(),
            records = indices.len()
        )
        .entered();
        decode_frame_rows(&self.spec, source, indices, buffer, warnings)
    }

    /// Allocate one row per record, decode, and shrink the buffer to the rows written.
    pub fn decode_all<S: RecordSource + ?Sized>(
        &self,
        source: &S,
        indices: &[usize],
        warnings: &mut Warnings,
    ) -> Result<FrameBuffer, CodecError> {
        let mut buffer = self.allocate(indices.len());
        let rows = self.decode(source, indices, &mut buffer, warnings)?;
        buffer.truncate(rows);
        Ok(buffer)
    }
}

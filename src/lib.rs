//! # dlis-frames — DLIS representation codes and frame data
//!
//! Decoding for the binary value encoding of RP66 v1 (DLIS) well-log files: every
//! representation code, compound object identifiers, frame data rows, and the storage unit
//! label at the start of a file.
//!
//! ## Pieces
//!
//! - [`Cursor`]: bounds-checked reader; every decode goes through it.
//! - [`codec`]: one `decode_*` function per [`RepresentationCode`], and [`decode_value`].
//! - [`ObjectName`], [`ObjectReference`], [`AttributeReference`] and [`fingerprint`].
//! - [`recover_text`]: UTF-8 with a repair for Latin-1 degree signs.
//! - [`FrameDecoder`] / [`decode_frame_rows`]: FDATA records into a [`FrameBuffer`].
//! - [`parse_storage_label`]: the 80-byte storage unit label.
//!
//! Non-fatal findings (out-of-sequence frame numbers, an unexpected label version, truncated
//! text) are collected in [`Warnings`] and logged with `tracing`.
//!
//! ## Example
//!
//! ```
//! use dlis_frames::{FormatSpec, FrameDecoder, FrameRecord, Warnings};
//!
//! // OBNAME header, frame number 1, one FSINGL channel
//! let record = FrameRecord::implicit(vec![
//!     0x01, 0x00, 0x01, b'F', // obname
//!     0x01,                   // frame number
//!     0x43, 0x19, 0x00, 0x00, // 153.0
//! ]);
//! let decoder = FrameDecoder::new(FormatSpec::parse("o", "f", "").unwrap());
//! let mut warnings = Warnings::new();
//! let rows = decoder.decode_all(&vec![record], &[0], &mut warnings).unwrap();
//! assert_eq!(rows.get(0, 0).and_then(|v| v.as_f64()), Some(153.0));
//! ```

pub mod codec;
pub mod cursor;
pub mod format;
pub mod frame;
pub mod label;
pub mod objref;
pub mod parser;
pub mod reprc;
pub mod row;
pub mod text;
pub mod value;
pub mod warning;

pub use codec::{decode_value, CodecError};
pub use cursor::Cursor;
pub use format::FormatSpec;
pub use frame::{
    decode_frame_rows, decode_frame_rows_from, FrameDecoder, FrameRecord, RecordSource,
};
pub use label::{parse_storage_label, read_storage_label, Layout, StorageLabel, STORAGE_LABEL_SIZE};
pub use objref::{fingerprint, AttributeReference, ObjectName, ObjectReference};
pub use reprc::RepresentationCode;
pub use row::{FrameBuffer, FrameRowWriter, RowLayout, Slot, IDENT_CAPACITY};
pub use text::{recover_text, Text};
pub use value::{Complex, DateTime, DecodedValue, TimeZone};
pub use warning::{Warning, Warnings};

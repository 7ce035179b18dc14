//! Storage unit label: the 80-byte header at the start of a DLIS file.
//!
//! | bytes  | field                                     |
//! |--------|-------------------------------------------|
//! | 0..4   | storage unit sequence number, ASCII digits |
//! | 4..9   | DLIS version, `V1.00`                      |
//! | 9..15  | storage unit structure, `RECORD`           |
//! | 15..20 | maximum record length, ASCII digits        |
//! | 20..80 | storage set identifier, space padded       |

use crate::codec::CodecError;
use crate::text::recover_text;
use crate::warning::{Warning, Warnings};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const STORAGE_LABEL_SIZE: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Record,
    Unknown,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Record => f.write_str("record"),
            Layout::Unknown => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLabel {
    pub sequence: u32,
    pub major: u32,
    pub minor: u32,
    pub layout: Layout,
    pub maxlen: i64,
    /// Storage set identifier, all 60 bytes including padding.
    pub id: String,
}

impl StorageLabel {
    /// `"{major}.{minor}"`, e.g. `"1.0"`.
    pub fn version(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    pub fn id_trimmed(&self) -> &str {
        self.id.trim_end_matches(' ')
    }
}

fn unexpected(what: &str, bytes: &[u8]) -> CodecError {
    CodecError::UnexpectedValue(format!(
        "unable to parse storage label: {} {:?}",
        what,
        String::from_utf8_lossy(bytes)
    ))
}

fn parse_number<T: std::str::FromStr>(what: &str, bytes: &[u8]) -> Result<T, CodecError> {
    std::str::from_utf8(bytes)
        .ok()
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| unexpected(what, bytes))
}

/// `V<major>.<minor>` with a two-digit minor.
fn parse_version(bytes: &[u8]) -> Result<(u32, u32), CodecError> {
    let rest = bytes.strip_prefix(b"V").ok_or_else(|| unexpected("version", bytes))?;
    let dot = rest.iter().position(|&b| b == b'.').ok_or_else(|| unexpected("version", bytes))?;
    let major = parse_number("version", &rest[..dot])?;
    let minor = parse_number("version", &rest[dot + 1..])?;
    Ok((major, minor))
}

/// Parse the storage unit label at the start of `buf`.
///
/// A label that parses but does not claim DLIS v1.0 is reported as
/// [`Warning::InconsistentStorageLabel`] and read as v1.0.
pub fn parse_storage_label(
    buf: &[u8],
    warnings: &mut Warnings,
) -> Result<StorageLabel, CodecError> {
    if buf.len() < STORAGE_LABEL_SIZE {
        return Err(CodecError::UnexpectedValue(format!(
            "buffer too small for storage label: {} < {}",
            buf.len(),
            STORAGE_LABEL_SIZE
        )));
    }

    let sequence = parse_number("sequence number", &buf[0..4])?;
    let (mut major, mut minor) = parse_version(&buf[4..9])?;
    let layout = if &buf[9..15] == b"RECORD" { Layout::Record } else { Layout::Unknown };
    let maxlen = parse_number("maximum record length", &buf[15..20])?;
    let id = recover_text(&buf[20..80]).to_string();

    if (major, minor) != (1, 0) {
        warnings.push(Warning::InconsistentStorageLabel { found: format!("{}.{}", major, minor) });
        major = 1;
        minor = 0;
    }

    Ok(StorageLabel { sequence, major, minor, layout, maxlen, id })
}

/// Read and parse the storage unit label at the start of the file at `path`.
pub fn read_storage_label(
    path: impl AsRef<Path>,
    warnings: &mut Warnings,
) -> Result<StorageLabel, CodecError> {
    let mut buf = Vec::with_capacity(STORAGE_LABEL_SIZE);
    File::open(path)?.take(STORAGE_LABEL_SIZE as u64).read_to_end(&mut buf)?;
    parse_storage_label(&buf, warnings)
}

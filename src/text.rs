//! Turning raw string bytes from the wire into text.
//!
//! RP66 does not pin down an encoding. Files are mostly ASCII/UTF-8, but a degree sign
//! written as a lone Latin-1 byte (0xB0) shows up often enough in units to be worth
//! repairing. Anything else that is not valid UTF-8 is handed back as raw bytes.

use std::fmt;

const DEGREE: u8 = 0xB0;
const UTF8_LEAD: u8 = 0xC2;

/// Decoded string: valid text, or the original bytes when no decode succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Text {
    Utf8(String),
    Raw(Vec<u8>),
}

impl Text {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Text::Utf8(s) => Some(s),
            Text::Raw(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Text::Utf8(s) => s.as_bytes(),
            Text::Raw(b) => b,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Text::Raw(_))
    }

    /// Code points of the text. Raw bytes are widened one byte per code point (Latin-1).
    pub fn code_points(&self) -> Vec<u32> {
        match self {
            Text::Utf8(s) => s.chars().map(u32::from).collect(),
            Text::Raw(b) => b.iter().map(|&x| x as u32).collect(),
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::Utf8(s.to_string())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Text::Utf8(s) => f.write_str(s),
            Text::Raw(b) => write!(f, "{}", String::from_utf8_lossy(b)),
        }
    }
}

/// Decode `bytes` as UTF-8, patching mis-encoded degree signs if that is what broke it.
///
/// Never fails; the fallback is [`Text::Raw`] holding the unpatched input.
pub fn recover_text(bytes: &[u8]) -> Text {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Text::Utf8(s.to_string());
    }

    let degrees = bytecount(bytes, DEGREE);
    if degrees == 0 {
        return Text::Raw(bytes.to_vec());
    }

    let mut patched = Vec::with_capacity(bytes.len() + degrees);
    for &b in bytes {
        if b == DEGREE {
            patched.push(UTF8_LEAD);
        }
        patched.push(b);
    }

    match String::from_utf8(patched) {
        Ok(s) => Text::Utf8(s),
        Err(_) => Text::Raw(bytes.to_vec()),
    }
}

fn bytecount(bytes: &[u8], needle: u8) -> usize {
    bytes.iter().filter(|&&b| b == needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_passes_through() {
        assert_eq!(recover_text(b"DEPTH"), Text::Utf8("DEPTH".into()));
        assert_eq!(recover_text("°C".as_bytes()), Text::Utf8("°C".into()));
        assert_eq!(recover_text(b""), Text::Utf8(String::new()));
    }

    #[test]
    fn lone_degree_bytes_are_patched() {
        assert_eq!(recover_text(b"\xB0C"), Text::Utf8("°C".into()));
        assert_eq!(recover_text(b"\xB0/\xB0"), Text::Utf8("°/°".into()));
    }

    #[test]
    fn invalid_without_degree_is_raw() {
        assert_eq!(recover_text(b"ab\xFF"), Text::Raw(b"ab\xFF".to_vec()));
    }

    #[test]
    fn failed_patch_returns_original_bytes() {
        let input = b"\xB0\xFF";
        assert_eq!(recover_text(input), Text::Raw(input.to_vec()));
    }

    #[test]
    fn raw_code_points_widen_bytes() {
        assert_eq!(Text::Raw(vec![0x41, 0xFF]).code_points(), vec![0x41, 0xFF]);
    }
}

//! Storage unit label parsing.

use dlis_frames::{parse_storage_label, read_storage_label, CodecError, Layout, Warning, Warnings};
use std::io::Write;

fn label(seq: &str, version: &str, structure: &str, maxlen: &str, id: &str) -> Vec<u8> {
    let s = format!("{:>4}{}{:<6}{:>5}{:<60}", seq, version, structure, maxlen, id);
    assert_eq!(s.len(), 80);
    s.into_bytes()
}

#[test]
fn parses_a_v1_label() {
    let buf = label("1", "V1.00", "RECORD", "8192", "Default Storage Set");
    let mut warnings = Warnings::new();
    let sul = parse_storage_label(&buf, &mut warnings).expect("parse");
    assert_eq!(sul.sequence, 1);
    assert_eq!(sul.version(), "1.0");
    assert_eq!(sul.layout, Layout::Record);
    assert_eq!(sul.layout.to_string(), "record");
    assert_eq!(sul.maxlen, 8192);
    assert_eq!(sul.id.len(), 60);
    assert_eq!(sul.id_trimmed(), "Default Storage Set");
    assert!(warnings.is_empty());
}

#[test]
fn unknown_structure_is_not_an_error() {
    let buf = label("2", "V1.00", "FIXREC", "512", "");
    let sul = parse_storage_label(&buf, &mut Warnings::new()).expect("parse");
    assert_eq!(sul.layout, Layout::Unknown);
    assert_eq!(sul.layout.to_string(), "unknown");
}

#[test]
fn short_buffer_is_unexpected_value() {
    let buf = label("1", "V1.00", "RECORD", "8192", "x");
    let err = parse_storage_label(&buf[..79], &mut Warnings::new()).unwrap_err();
    assert!(matches!(err, CodecError::UnexpectedValue(_)));
}

#[test]
fn garbage_fields_are_unexpected_value() {
    for buf in [
        label("AB", "V1.00", "RECORD", "8192", ""),
        label("1", "X1.00", "RECORD", "8192", ""),
        label("1", "V1-00", "RECORD", "8192", ""),
        label("1", "V1.00", "RECORD", "lots", ""),
    ] {
        let err = parse_storage_label(&buf, &mut Warnings::new()).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedValue(_)), "{:?}", err);
    }
}

#[test]
fn other_versions_warn_and_fall_back_to_v1() {
    let buf = label("1", "V2.01", "RECORD", "8192", "");
    let mut warnings = Warnings::new();
    let sul = parse_storage_label(&buf, &mut warnings).expect("parse");
    assert_eq!(sul.version(), "1.0");
    assert_eq!(
        warnings.into_vec(),
        vec![Warning::InconsistentStorageLabel { found: "2.1".to_string() }]
    );
}

#[test]
fn reads_label_from_file_prefix() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(&label("3", "V1.00", "RECORD", "16384", "SET")).unwrap();
    file.write_all(&[0xFF, 0x01, 0x80, 0x00]).unwrap();
    file.flush().unwrap();

    let sul = read_storage_label(file.path(), &mut Warnings::new()).expect("read");
    assert_eq!(sul.sequence, 3);
    assert_eq!(sul.maxlen, 16384);
    assert_eq!(sul.id_trimmed(), "SET");
}

#[test]
fn truncated_file_is_unexpected_value() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"   1V1.00").unwrap();
    file.flush().unwrap();
    let err = read_storage_label(file.path(), &mut Warnings::new()).unwrap_err();
    assert!(matches!(err, CodecError::UnexpectedValue(_)));
}

//! Object names, references and fingerprints.

use dlis_frames::{fingerprint, AttributeReference, CodecError, ObjectName, ObjectReference};

#[test]
fn fingerprint_is_stable() {
    let a = fingerprint("CHANNEL", "DEPTH", 2, 0).unwrap();
    let b = fingerprint("CHANNEL", "DEPTH", 2, 0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, "T.CHANNEL-I.DEPTH-O.2-C.0");
}

#[test]
fn fingerprint_changes_with_every_argument() {
    let base = fingerprint("CHANNEL", "DEPTH", 2, 0).unwrap();
    for other in [
        fingerprint("FRAME", "DEPTH", 2, 0),
        fingerprint("CHANNEL", "TDEP", 2, 0),
        fingerprint("CHANNEL", "DEPTH", 3, 0),
        fingerprint("CHANNEL", "DEPTH", 2, 1),
    ] {
        assert_ne!(other.unwrap(), base);
    }
}

#[test]
fn fingerprint_copy_range() {
    assert!(fingerprint("CHANNEL", "DEPTH", 2, 255).is_ok());
    assert!(matches!(fingerprint("CHANNEL", "DEPTH", 2, 256), Err(CodecError::InvalidArgument(_))));
    assert!(matches!(fingerprint("CHANNEL", "DEPTH", 2, -1), Err(CodecError::InvalidArgument(_))));
}

#[test]
fn object_name_validates_copy_at_construction() {
    assert!(ObjectName::new(0, 255, "X").is_ok());
    assert!(matches!(ObjectName::new(0, 256, "X"), Err(CodecError::InvalidArgument(_))));
}

#[test]
fn structural_equality_and_tuples() {
    let name = ObjectName::new(10, 2, "GR").unwrap();
    assert_eq!(name, ObjectName::new(10, 2, "GR").unwrap());
    assert_ne!(name, ObjectName::new(10, 3, "GR").unwrap());
    assert_eq!(name, (10, 2, "GR"));
    assert_eq!((name.origin(), name.copy(), name.id()), (10, 2, "GR"));

    let reference = ObjectReference::new("CHANNEL", name.clone());
    assert_eq!(reference, ("CHANNEL", (10, 2, "GR")));
    assert_eq!(reference.name(), &name);
    assert_eq!(reference.fingerprint(), name.fingerprint("CHANNEL"));

    let attribute = AttributeReference::new(reference.clone(), "UNITS");
    assert_eq!(attribute, ("CHANNEL", (10, 2, "GR"), "UNITS"));
    assert_eq!(attribute.type_(), "CHANNEL");
    assert_eq!(attribute.label(), "UNITS");
    assert_eq!(attribute.object(), &reference);
}

#[test]
fn equal_references_have_equal_fingerprints() {
    let built = ObjectReference::new("FRAME", ObjectName::new(2, 0, "800T").unwrap());
    let from_fn = fingerprint("FRAME", "800T", 2, 0).unwrap();
    assert_eq!(built.fingerprint(), from_fn);
    assert_eq!(built.to_string(), format!("objref(fingerprint={})", from_fn));
}

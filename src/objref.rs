//! Compound identifiers: object names, object references and attribute references.
//!
//! An object in a logical file is identified by `(origin, copy, id)`. References add the
//! object's set type and, for attributes, the attribute label. A fingerprint is a string that
//! identifies a typed object name across the whole logical file.

use crate::codec::CodecError;
use std::fmt;

/// Canonical fingerprint of the object `id` of set type `type_`.
///
/// `copy` is taken wider than a byte so out-of-range values can be rejected here.
pub fn fingerprint(type_: &str, id: &str, origin: i32, copy: i32) -> Result<String, CodecError> {
    let copy = checked_copy(copy)?;
    Ok(fingerprint_unchecked(type_, id, origin, copy))
}

fn fingerprint_unchecked(type_: &str, id: &str, origin: i32, copy: u8) -> String {
    format!("T.{}-I.{}-O.{}-C.{}", type_, id, origin, copy)
}

fn checked_copy(copy: i32) -> Result<u8, CodecError> {
    u8::try_from(copy).map_err(|_| {
        CodecError::InvalidArgument(format!("copy number {} out of range [0, 255]", copy))
    })
}

/// OBNAME: origin, copy number and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName {
    origin: i32,
    copy: u8,
    id: String,
}

impl ObjectName {
    pub fn new(origin: i32, copy: i32, id: impl Into<String>) -> Result<Self, CodecError> {
        Ok(ObjectName { origin, copy: checked_copy(copy)?, id: id.into() })
    }

    pub(crate) fn from_parts(origin: i32, copy: u8, id: String) -> Self {
        ObjectName { origin, copy, id }
    }

    pub fn origin(&self) -> i32 {
        self.origin
    }

    pub fn copy(&self) -> u8 {
        self.copy
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fingerprint of this name when it belongs to a set of type `type_`.
    pub fn fingerprint(&self, type_: &str) -> String {
        fingerprint_unchecked(type_, &self.id, self.origin, self.copy)
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obname(id='{}', origin={}, copynum={})", self.id, self.origin, self.copy)
    }
}

impl PartialEq<(i32, u8, &str)> for ObjectName {
    fn eq(&self, other: &(i32, u8, &str)) -> bool {
        self.origin == other.0 && self.copy == other.1 && self.id == other.2
    }
}

/// OBJREF: set type plus object name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectReference {
    type_: String,
    name: ObjectName,
}

impl ObjectReference {
    pub fn new(type_: impl Into<String>, name: ObjectName) -> Self {
        ObjectReference { type_: type_.into(), name }
    }

    pub fn type_(&self) -> &str {
        &self.type_
    }

    pub fn name(&self) -> &ObjectName {
        &self.name
    }

    pub fn fingerprint(&self) -> String {
        self.name.fingerprint(&self.type_)
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "objref(fingerprint={})", self.fingerprint())
    }
}

impl PartialEq<(&str, (i32, u8, &str))> for ObjectReference {
    fn eq(&self, other: &(&str, (i32, u8, &str))) -> bool {
        self.type_ == other.0 && self.name == other.1
    }
}

/// ATTREF: set type, object name and attribute label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeReference {
    reference: ObjectReference,
    label: String,
}

impl AttributeReference {
    pub fn new(reference: ObjectReference, label: impl Into<String>) -> Self {
        AttributeReference { reference, label: label.into() }
    }

    pub fn type_(&self) -> &str {
        self.reference.type_()
    }

    pub fn name(&self) -> &ObjectName {
        self.reference.name()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn object(&self) -> &ObjectReference {
        &self.reference
    }

    /// Fingerprint of the referenced object; the label is not part of it.
    pub fn fingerprint(&self) -> String {
        self.reference.fingerprint()
    }
}

impl fmt::Display for AttributeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        write!(
            f,
            "attref(id='{}', origin={}, copynum={}, type={}, label={})",
            name.id, name.origin, name.copy, self.type_(), self.label
        )
    }
}

impl PartialEq<(&str, (i32, u8, &str), &str)> for AttributeReference {
    fn eq(&self, other: &(&str, (i32, u8, &str), &str)) -> bool {
        self.reference == (other.0, other.1) && self.label == other.2
    }
}

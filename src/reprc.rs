//! Representation codes: the closed set of RP66 v1 wire types.

use std::fmt;

/// A representation code. Discriminants are the wire numbers from RP66 v1 appendix B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RepresentationCode {
    Fshort = 1,
    Fsingl = 2,
    Fsing1 = 3,
    Fsing2 = 4,
    Isingl = 5,
    Vsingl = 6,
    Fdoubl = 7,
    Fdoub1 = 8,
    Fdoub2 = 9,
    Csingl = 10,
    Cdoubl = 11,
    Sshort = 12,
    Snorm = 13,
    Slong = 14,
    Ushort = 15,
    Unorm = 16,
    Ulong = 17,
    Uvari = 18,
    Ident = 19,
    Ascii = 20,
    Dtime = 21,
    Origin = 22,
    Obname = 23,
    Objref = 24,
    Attref = 25,
    Status = 26,
    Units = 27,
}

use RepresentationCode::*;

const ALL: [RepresentationCode; 27] = [
    Fshort, Fsingl, Fsing1, Fsing2, Isingl, Vsingl, Fdoubl, Fdoub1, Fdoub2, Csingl, Cdoubl, Sshort,
    Snorm, Slong, Ushort, Unorm, Ulong, Uvari, Ident, Ascii, Dtime, Origin, Obname, Objref, Attref,
    Status, Units,
];

impl RepresentationCode {
    pub fn all() -> &'static [RepresentationCode] {
        &ALL
    }

    pub fn from_wire(code: u8) -> Option<Self> {
        match code {
            1..=27 => Some(ALL[code as usize - 1]),
            _ => None,
        }
    }

    pub fn wire(self) -> u8 {
        self as u8
    }

    /// Lowercase mnemonic as used in RP66 (`fsingl`, `obname`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Fshort => "fshort",
            Fsingl => "fsingl",
            Fsing1 => "fsing1",
            Fsing2 => "fsing2",
            Isingl => "isingl",
            Vsingl => "vsingl",
            Fdoubl => "fdoubl",
            Fdoub1 => "fdoub1",
            Fdoub2 => "fdoub2",
            Csingl => "csingl",
            Cdoubl => "cdoubl",
            Sshort => "sshort",
            Snorm => "snorm",
            Slong => "slong",
            Ushort => "ushort",
            Unorm => "unorm",
            Ulong => "ulong",
            Uvari => "uvari",
            Ident => "ident",
            Ascii => "ascii",
            Dtime => "dtime",
            Origin => "origin",
            Obname => "obname",
            Objref => "objref",
            Attref => "attref",
            Status => "status",
            Units => "units",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Single-character code used in compact format strings (`"fDDD"`).
    pub fn fmt_char(self) -> char {
        match self {
            Fshort => 'r',
            Fsingl => 'f',
            Fsing1 => 'b',
            Fsing2 => 'B',
            Isingl => 'x',
            Vsingl => 'V',
            Fdoubl => 'F',
            Fdoub1 => 'z',
            Fdoub2 => 'Z',
            Csingl => 'c',
            Cdoubl => 'C',
            Sshort => 'd',
            Snorm => 'D',
            Slong => 'l',
            Ushort => 'u',
            Unorm => 'U',
            Ulong => 'L',
            Uvari => 'i',
            Ident => 's',
            Ascii => 'S',
            Dtime => 'j',
            Origin => 'J',
            Obname => 'o',
            Objref => 'O',
            Attref => 'A',
            Status => 'q',
            Units => 'Q',
        }
    }

    pub fn from_fmt_char(c: char) -> Option<Self> {
        ALL.iter().copied().find(|code| code.fmt_char() == c)
    }

    /// Encoded width in bytes, or `None` when the width depends on the data.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            Sshort | Ushort | Status => Some(1),
            Fshort | Snorm | Unorm => Some(2),
            Fsingl | Isingl | Vsingl | Slong | Ulong => Some(4),
            Fsing1 | Fdoubl | Csingl | Dtime => Some(8),
            Fsing2 => Some(12),
            Fdoub1 | Cdoubl => Some(16),
            Fdoub2 => Some(24),
            Uvari | Origin | Ident | Ascii | Units | Obname | Objref | Attref => None,
        }
    }
}

impl fmt::Display for RepresentationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

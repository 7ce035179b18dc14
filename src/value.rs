//! Decoded values (one variant per kind of representation code).

use crate::objref::{AttributeReference, ObjectName, ObjectReference};
use crate::text::Text;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Complex number as stored by CSINGL/CDOUBL: real part first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Timezone nibble of a DTIME value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeZone {
    LocalStandard,
    LocalDaylightSavings,
    Gmt,
    /// Values 3..=15 are not assigned by RP66 but still decode.
    Other(u8),
}

impl TimeZone {
    pub fn from_nibble(tz: u8) -> Self {
        match tz {
            0 => TimeZone::LocalStandard,
            1 => TimeZone::LocalDaylightSavings,
            2 => TimeZone::Gmt,
            n => TimeZone::Other(n),
        }
    }
}

/// DTIME: calendar fields as stored on the wire, year already corrected to a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub year: i32,
    pub tz: TimeZone,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl DateTime {
    /// Offset added to the stored year byte.
    pub const YEAR_OFFSET: i32 = 1900;

    /// The timezone-less date-time, or `None` if the fields do not form a valid one.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)?.and_hms_milli_opt(
            self.hour as u32,
            self.minute as u32,
            self.second as u32,
            self.millisecond as u32,
        )
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// A single decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Signed(i64),
    Unsigned(u64),
    Float(f32),
    Double(f64),
    FloatPair(f32, f32),
    DoublePair(f64, f64),
    FloatTriple(f32, f32, f32),
    DoubleTriple(f64, f64, f64),
    ComplexFloat(Complex<f32>),
    ComplexDouble(Complex<f64>),
    Text(Text),
    DateTime(DateTime),
    ObjectName(ObjectName),
    ObjectReference(ObjectReference),
    AttributeReference(AttributeReference),
    Status(bool),
    Absent,
}

impl DecodedValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            DecodedValue::Unsigned(x) => Some(*x),
            DecodedValue::Signed(x) => u64::try_from(*x).ok(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DecodedValue::Signed(x) => Some(*x),
            DecodedValue::Unsigned(x) => i64::try_from(*x).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DecodedValue::Float(x) => Some(*x as f64),
            DecodedValue::Double(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            DecodedValue::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_text().and_then(Text::as_str)
    }

    pub fn as_object_name(&self) -> Option<&ObjectName> {
        match self {
            DecodedValue::ObjectName(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DecodedValue::Absent)
    }
}

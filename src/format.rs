//! Frame layouts: which representation codes make up one frame.

use crate::parser::parse_codes;
use crate::reprc::RepresentationCode;
use crate::codec::CodecError;

/// Codes read for every frame.
///
/// `pre` is read once per record before the first frame (the FDATA header, normally one
/// OBNAME). `channels` is read once per frame and written to the output row; `post` follows the
/// channels and is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatSpec {
    pub pre: Vec<RepresentationCode>,
    pub channels: Vec<RepresentationCode>,
    pub post: Vec<RepresentationCode>,
}

impl FormatSpec {
    pub fn new(
        pre: Vec<RepresentationCode>,
        channels: Vec<RepresentationCode>,
        post: Vec<RepresentationCode>,
    ) -> Self {
        FormatSpec { pre, channels, post }
    }

    /// The usual FDATA layout: an OBNAME header, then the given channels.
    pub fn fdata(channels: Vec<RepresentationCode>) -> Self {
        FormatSpec { pre: vec![RepresentationCode::Obname], channels, post: Vec::new() }
    }

    /// Build from three format strings, each compact (`"fDDD"`) or long form (`"fsingl, snorm"`).
    pub fn parse(pre: &str, channels: &str, post: &str) -> Result<Self, CodecError> {
        Ok(FormatSpec {
            pre: parse_codes(pre)?,
            channels: parse_codes(channels)?,
            post: parse_codes(post)?,
        })
    }

    /// Compact format string for the channel codes.
    pub fn channel_fmtstr(&self) -> String {
        self.channels.iter().map(|c| c.fmt_char()).collect()
    }
}

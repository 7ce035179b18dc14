//! Parse format strings into representation codes using PEST.

use crate::codec::CodecError;
use crate::reprc::RepresentationCode;
use pest::Parser;
use pest_derive::Parser as PestParser;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct FormatParser;

/// Parse a compact (`"fDDD"`) or long-form (`"fsingl, snorm"`) format string.
pub fn parse_codes(source: &str) -> Result<Vec<RepresentationCode>, CodecError> {
    let pairs = FormatParser::parse(Rule::format, source)
        .map_err(|e| CodecError::Format(format!("{}", e)))?;
    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| CodecError::Format("empty parse".to_string()))?;

    let mut codes = Vec::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::long_form => {
                for name in inner.into_inner() {
                    let code = RepresentationCode::from_name(name.as_str()).ok_or_else(|| {
                        CodecError::Format(format!("unknown code {}", name.as_str()))
                    })?;
                    codes.push(code);
                }
            }
            Rule::compact_form => {
                for ch in inner.into_inner() {
                    let c = ch.as_str().chars().next().unwrap_or_default();
                    let code = RepresentationCode::from_fmt_char(c).ok_or_else(|| {
                        CodecError::Format(format!("unknown code character {:?}", c))
                    })?;
                    codes.push(code);
                }
            }
            _ => {}
        }
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use RepresentationCode::*;

    #[test]
    fn compact_and_long_forms_agree() {
        assert_eq!(parse_codes("fDDD").unwrap(), vec![Fsingl, Snorm, Snorm, Snorm]);
        assert_eq!(parse_codes("fsingl, snorm ,snorm").unwrap(), vec![Fsingl, Snorm, Snorm]);
        assert_eq!(parse_codes("o").unwrap(), vec![Obname]);
        assert_eq!(parse_codes("obname").unwrap(), vec![Obname]);
    }

    #[test]
    fn empty_is_no_codes() {
        assert!(parse_codes("").unwrap().is_empty());
        assert!(parse_codes("  ").unwrap().is_empty());
    }

    #[test]
    fn unknown_characters_fail() {
        assert!(matches!(parse_codes("fX"), Err(CodecError::Format(_))));
        assert!(matches!(parse_codes("float"), Err(CodecError::Format(_))));
    }
}

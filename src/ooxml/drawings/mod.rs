//! DrawingML (DML) readers.
//!
//! Each reader takes an [`Element`](crate::ooxml::element::Element) from a
//! slide part and extracts one kind of property. Missing or malformed
//! values read as `None` rather than failing.

pub mod blip;
pub mod fill;
pub mod text;
pub mod xfrm;

/// Parse a decimal integer attribute such as an EMU coordinate.
#[inline]
pub(crate) fn parse_i64(value: &str) -> Option<i64> {
    atoi_simd::parse::<i64>(value.trim().as_bytes()).ok()
}

/// Parse an `xsd:boolean` attribute.
#[inline]
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

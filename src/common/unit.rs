//! Unit conversion utilities.
//!
//! DrawingML stores every offset and extent in EMUs (English Metric Units)
//! and font sizes in hundredths of a point. Records exposed to callers use
//! inches and points, so all conversions go through here.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Font sizes in `a:rPr/@sz` are expressed in 1/100 pt.
pub const FONT_SIZE_UNITS_PER_PT: f64 = 100.0;

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

#[inline]
pub fn emu_to_cm(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_CM as f64
}

/// Convert a raw `sz` attribute value to points.
#[inline]
pub fn font_size_to_pt(raw: i64) -> f64 {
    raw as f64 / FONT_SIZE_UNITS_PER_PT
}

//! The encoded polyline algorithm format.
//!
//! Coordinates are rounded to 1e-5 degrees and stored as deltas from the
//! previous point. Each delta is zig-zag encoded, split into 5-bit chunks
//! (low bits first) with `0x20` marking continuation, and offset by 63 into
//! printable ASCII `?`..`~`.

use crate::error::{CodecError, Result};
use crate::geometry::GeoPoint;

const PRECISION: f64 = 1e5;
const CHAR_OFFSET: u8 = 63;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION: u64 = 0x20;
/// Shift of the thirteenth and last chunk a 64-bit value can hold.
const MAX_SHIFT: u32 = 60;
/// Fixed-point coordinates are clamped to this magnitude so that the delta
/// between any two of them still fits in an `i64`.
const MAX_FIXED: i64 = (1 << 62) - 1;

/// Encodes `path` into an encoded polyline string.
///
/// Coordinates beyond roughly ±4.6e13 degrees are clamped to that bound,
/// and NaN encodes as zero.
#[must_use]
pub fn encode<P: AsRef<GeoPoint>>(path: &[P]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    let mut last_lat = 0_i64;
    let mut last_lng = 0_i64;
    for point in path {
        let point = point.as_ref();
        let lat = to_fixed(point.latitude());
        let lng = to_fixed(point.longitude());
        encode_value(lat - last_lat, &mut out);
        encode_value(lng - last_lng, &mut out);
        last_lat = lat;
        last_lng = lng;
    }
    out
}

/// Decodes an encoded polyline string.
///
/// # Errors
///
/// Returns `CodecError::InvalidCharacter` for a byte outside `?`..`~`,
/// `CodecError::Truncated` if the input ends inside a value, and
/// `CodecError::Overflow` if a value does not fit in 64 bits or the running
/// coordinate sum leaves the `i64` range.
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint>> {
    let bytes = encoded.as_bytes();
    let mut path = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut lat = 0_i64;
    let mut lng = 0_i64;
    while index < bytes.len() {
        let next = decode_pair(bytes, &mut index).and_then(|(d_lat, d_lng)| {
            match (lat.checked_add(d_lat), lng.checked_add(d_lng)) {
                (Some(lat), Some(lng)) => Ok((lat, lng)),
                _ => Err(CodecError::Overflow { index }),
            }
        });
        match next {
            Ok((next_lat, next_lng)) => {
                lat = next_lat;
                lng = next_lng;
            }
            Err(err) => {
                tracing::debug!(%err, "rejected encoded polyline");
                return Err(err.into());
            }
        }
        path.push(GeoPoint::new(from_fixed(lat), from_fixed(lng)));
    }
    Ok(path)
}

/// Rounds degrees to the nearest 1e-5, halves rounding up.
#[allow(clippy::cast_possible_truncation)]
fn to_fixed(degrees: f64) -> i64 {
    ((degrees * PRECISION + 0.5).floor() as i64).clamp(-MAX_FIXED, MAX_FIXED)
}

#[allow(clippy::cast_precision_loss)]
fn from_fixed(value: i64) -> f64 {
    value as f64 * 1e-5
}

/// Zig-zag maps `value` onto `u64`, so every `i64` gets a complete chunk run.
#[allow(clippy::cast_sign_loss)]
fn encode_value(value: i64, out: &mut String) {
    let mut v = ((value as u64) << 1) ^ ((value >> 63) as u64);
    while v >= CONTINUATION {
        out.push(to_char(CONTINUATION | (v & CHUNK_MASK)));
        v >>= 5;
    }
    out.push(to_char(v));
}

/// `chunk` is always below 64 here.
#[allow(clippy::cast_possible_truncation)]
fn to_char(chunk: u64) -> char {
    char::from(chunk as u8 + CHAR_OFFSET)
}

fn decode_pair(bytes: &[u8], index: &mut usize) -> std::result::Result<(i64, i64), CodecError> {
    let d_lat = decode_value(bytes, index)?;
    let d_lng = decode_value(bytes, index)?;
    Ok((d_lat, d_lng))
}

#[allow(clippy::cast_possible_wrap)]
fn decode_value(bytes: &[u8], index: &mut usize) -> std::result::Result<i64, CodecError> {
    let mut result = 0_u64;
    let mut shift = 0_u32;
    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(CodecError::Truncated { index: *index });
        };
        if !(CHAR_OFFSET..=b'~').contains(&byte) {
            return Err(CodecError::InvalidCharacter {
                index: *index,
                byte,
            });
        }
        let chunk = u64::from(byte - CHAR_OFFSET);
        // The last chunk has room for four bits and no continuation.
        if shift > MAX_SHIFT || (shift == MAX_SHIFT && chunk > 0xf) {
            return Err(CodecError::Overflow { index: *index });
        }
        *index += 1;
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        if chunk < CONTINUATION {
            break;
        }
    }
    Ok(((result >> 1) as i64) ^ -((result & 1) as i64))
}

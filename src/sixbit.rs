/*
Copyright 2025

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Bit-level codec primitives for the 6-bit-ASCII armored AIS payload.
//!
//! An AIVDM payload character in range `[48, 119]` encodes six data bits:
//! the value is `ch - 48`, corrected by `-8` when the intermediate exceeds
//! 40 (ITU-R M.1371 Annex 8 armoring). [`payload_to_bits`] performs that
//! conversion once, validating every character, and the `pick_*` readers
//! extract typed fields from the resulting bit buffer with strict bounds
//! checking. All readers are pure functions over an immutable buffer and
//! are safe to use concurrently across independent payloads.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::ParseError;

/// Bit buffer holding an unarmored AIS payload, MSB-first.
pub type BitVec = bitvec::vec::BitVec<u8, bitvec::order::Msb0>;

/// ITU-R M.1371 6-bit ASCII character table. Value 0 is `@`, which
/// decodes to a space in string fields (see [`pick_string`]).
const SIXBIT_CHARSET: &[u8; 64] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

/// Widest bit field any ITU-R M.1371 message defines.
const MAX_FIELD_BITS: usize = 32;

// -------------------------------------------------------------------------------------------------

/// Unarmor a 6-bit-ASCII payload into a bit buffer.
///
/// Every character must lie in `[48, 119]`; anything else fails with
/// `InvalidBitfield` before a single field is read. `fill_bits` padding
/// bits (0-5, taken from the final sentence of the group) are truncated
/// from the tail so that downstream length arithmetic sees data bits only.
pub fn payload_to_bits(payload: &str, fill_bits: u8) -> Result<BitVec, ParseError> {
    if payload.is_empty() {
        return Err(ParseError::NullInput);
    }
    if fill_bits > 5 {
        return Err(ParseError::InvalidBitfield(format!(
            "fill bit count {} exceeds 5",
            fill_bits
        )));
    }

    let mut bv = BitVec::with_capacity(payload.len() * 6);
    for ch in payload.bytes() {
        if !(48..=119).contains(&ch) {
            return Err(ParseError::InvalidBitfield(format!(
                "invalid 6-bit character {:?} in payload",
                ch as char
            )));
        }
        let mut value = ch - 48;
        if value > 40 {
            value -= 8;
        }
        for shift in (0..6).rev() {
            bv.push(value & (1 << shift) != 0);
        }
    }

    // A non-empty payload always carries at least six bits, so the
    // validated fill count (at most five) can never exhaust it.
    bv.truncate(bv.len() - usize::from(fill_bits));
    Ok(bv)
}

// -------------------------------------------------------------------------------------------------

/// Extract an unsigned integer of `len` bits (1-32), MSB-first.
pub fn pick_u64(bv: &BitVec, index: usize, len: usize) -> Result<u64, ParseError> {
    if len == 0 || len > MAX_FIELD_BITS {
        return Err(ParseError::InvalidBitfield(format!(
            "bit field length {} outside 1-{}",
            len, MAX_FIELD_BITS
        )));
    }
    let end = index.checked_add(len).ok_or_else(|| {
        ParseError::InvalidBitfield("bit field offset overflow".to_string())
    })?;
    if end > bv.len() {
        return Err(ParseError::TooShort(format!(
            "field [{}..{}) exceeds payload of {} bits",
            index,
            end,
            bv.len()
        )));
    }

    let mut value = 0u64;
    for i in index..end {
        value = (value << 1) | u64::from(bv[i]);
    }
    Ok(value)
}

/// Extract a signed integer of `len` bits with two's-complement sign
/// extension over the field width.
pub fn pick_i64(bv: &BitVec, index: usize, len: usize) -> Result<i64, ParseError> {
    let mut value = pick_u64(bv, index, len)?;
    if value & (1 << (len - 1)) != 0 {
        value |= !0u64 << len;
    }
    Ok(value as i64)
}

/// Extract a signed integer and divide by `scale`.
pub fn pick_f64(bv: &BitVec, index: usize, len: usize, scale: f64) -> Result<f64, ParseError> {
    if scale == 0.0 {
        return Err(ParseError::InvalidBitfield(
            "zero scale divisor".to_string(),
        ));
    }
    Ok(pick_i64(bv, index, len)? as f64 / scale)
}

/// Extract a single bit as a flag.
pub fn pick_bool(bv: &BitVec, index: usize) -> Result<bool, ParseError> {
    Ok(pick_u64(bv, index, 1)? != 0)
}

/// Extract a 27-bit latitude in 1/600000 degree units.
pub fn pick_lat(bv: &BitVec, index: usize) -> Result<f64, ParseError> {
    Ok(pick_i64(bv, index, 27)? as f64 / 600000.0)
}

/// Extract a 28-bit longitude in 1/600000 degree units.
pub fn pick_lon(bv: &BitVec, index: usize) -> Result<f64, ParseError> {
    Ok(pick_i64(bv, index, 28)? as f64 / 600000.0)
}

/// Extract a 10-bit speed over ground in tenths of a knot.
///
/// Raw value 1023 is the wire-level "not available" marker and maps to
/// -1.0; it must never surface as 102.3 knots.
pub fn pick_speed(bv: &BitVec, index: usize) -> Result<f64, ParseError> {
    let raw = pick_u64(bv, index, 10)?;
    if raw == 1023 {
        Ok(-1.0)
    } else {
        Ok(raw as f64 / 10.0)
    }
}

/// Extract a 9-bit true heading in degrees. Raw 511 means "not
/// available" and maps to -1.0.
pub fn pick_heading(bv: &BitVec, index: usize) -> Result<f64, ParseError> {
    let raw = pick_u64(bv, index, 9)?;
    if raw == 511 {
        Ok(-1.0)
    } else {
        Ok(raw as f64)
    }
}

/// Extract a 6-bit ASCII string field of `len` bits.
///
/// Each 6-bit group indexes the ITU-R character table; value 0 decodes to
/// a space. Trailing spaces are trimmed from the result.
pub fn pick_string(bv: &BitVec, index: usize, len: usize) -> Result<String, ParseError> {
    if len == 0 || len % 6 != 0 {
        return Err(ParseError::StringDecodeFailure(format!(
            "string field of {} bits is not a multiple of 6",
            len
        )));
    }
    let end = index.checked_add(len).ok_or_else(|| {
        ParseError::InvalidBitfield("bit field offset overflow".to_string())
    })?;
    if end > bv.len() {
        return Err(ParseError::TooShort(format!(
            "string field [{}..{}) exceeds payload of {} bits",
            index,
            end,
            bv.len()
        )));
    }

    let mut out = String::with_capacity(len / 6);
    let mut offset = index;
    while offset < end {
        let group = pick_u64(bv, offset, 6)? as usize;
        out.push(if group == 0 {
            ' '
        } else {
            SIXBIT_CHARSET[group] as char
        });
        offset += 6;
    }
    while out.ends_with(' ') {
        out.pop();
    }
    Ok(out)
}

/// Extract a binary application blob starting at `index`.
///
/// Bytes are packed from consecutive 8-bit groups; a trailing fraction of
/// a byte is dropped per the fill-bits convention, so the result holds
/// `len_bits / 8` bytes.
pub fn pick_bytes(bv: &BitVec, index: usize, len_bits: usize) -> Result<Vec<u8>, ParseError> {
    let end = index.checked_add(len_bits).ok_or_else(|| {
        ParseError::InvalidBitfield("bit field offset overflow".to_string())
    })?;
    if end > bv.len() {
        return Err(ParseError::TooShort(format!(
            "binary field [{}..{}) exceeds payload of {} bits",
            index,
            end,
            bv.len()
        )));
    }

    let count = len_bits / 8;
    let mut data = Vec::with_capacity(count);
    for i in 0..count {
        data.push(pick_u64(bv, index + i * 8, 8)? as u8);
    }
    Ok(data)
}

// -------------------------------------------------------------------------------------------------

/// Test-only helpers for composing armored payloads from bit layouts.
#[cfg(test)]
pub(crate) mod testkit {
    use super::*;

    /// Pack `(value, width)` pairs MSB-first into a bit buffer. Widths
    /// beyond 64 bits are zero-filled above the value.
    pub(crate) fn pack(fields: &[(u64, usize)]) -> BitVec {
        let mut bv = BitVec::new();
        for &(value, width) in fields {
            for shift in (0..width).rev() {
                bv.push(shift < 64 && value & (1 << shift) != 0);
            }
        }
        bv
    }

    /// Append a space-padded 6-bit ASCII string field of `bits` width.
    pub(crate) fn pack_str(bv: &mut BitVec, text: &str, bits: usize) {
        assert_eq!(bits % 6, 0);
        let padded: String = {
            let mut s = String::from(text);
            while s.len() < bits / 6 {
                s.push(' ');
            }
            s
        };
        for ch in padded.bytes() {
            let group = SIXBIT_CHARSET
                .iter()
                .position(|&c| c == ch)
                .expect("character not in 6-bit charset") as u64;
            for shift in (0..6).rev() {
                bv.push(group & (1 << shift) != 0);
            }
        }
    }

    /// Armor a bit buffer into payload characters, zero-padding the final
    /// group. Returns the payload and its fill bit count.
    pub(crate) fn armor(bv: &BitVec) -> (String, u8) {
        let fill = (6 - bv.len() % 6) % 6;
        let mut padded = bv.clone();
        for _ in 0..fill {
            padded.push(false);
        }
        let mut payload = String::with_capacity(padded.len() / 6);
        for chunk in padded.chunks(6) {
            let mut value = 0u8;
            for bit in chunk {
                value = (value << 1) | u8::from(*bit);
            }
            payload.push(if value < 40 {
                (value + 48) as char
            } else {
                (value + 56) as char
            });
        }
        (payload, fill as u8)
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::testkit::*;
    use super::*;

    #[test]
    fn test_armor_decoding_identity() {
        // Every valid payload character decodes to its documented value.
        for ch in 48u8..=119 {
            let payload = String::from_utf8(alloc::vec![ch]).unwrap();
            let bv = payload_to_bits(&payload, 0).unwrap();
            let expected = if ch - 48 > 40 { ch - 56 } else { ch - 48 };
            assert_eq!(pick_u64(&bv, 0, 6).unwrap(), u64::from(expected));
        }
    }

    #[test]
    fn test_invalid_payload_characters() {
        for ch in [0x00u8, 0x20, 0x2F, 0x78, 0xFF] {
            let payload: String = (ch as char).to_string();
            match payload_to_bits(&payload, 0) {
                Err(ParseError::InvalidBitfield(_)) => {}
                other => panic!("expected InvalidBitfield, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(payload_to_bits("", 0), Err(ParseError::NullInput));
    }

    #[test]
    fn test_fill_bits_truncated() {
        let bv = payload_to_bits("w0", 2).unwrap();
        assert_eq!(bv.len(), 10);
        assert!(matches!(
            payload_to_bits("w", 6),
            Err(ParseError::InvalidBitfield(_))
        ));
    }

    #[test]
    fn test_pick_u64_across_character_boundaries() {
        // 'w' unarmors to 63 (111111), '0' to 0 (000000).
        let bv = payload_to_bits("w0w", 0).unwrap();
        assert_eq!(pick_u64(&bv, 0, 6).unwrap(), 63);
        assert_eq!(pick_u64(&bv, 3, 6).unwrap(), 0b111000);
        assert_eq!(pick_u64(&bv, 9, 6).unwrap(), 0b000111);
        assert_eq!(pick_u64(&bv, 0, 18).unwrap(), 0b111111_000000_111111);
    }

    #[test]
    fn test_pick_u64_bounds() {
        let bv = payload_to_bits("00", 0).unwrap();
        assert!(matches!(
            pick_u64(&bv, 8, 6),
            Err(ParseError::TooShort(_))
        ));
        assert!(matches!(
            pick_u64(&bv, 0, 0),
            Err(ParseError::InvalidBitfield(_))
        ));
        assert!(matches!(
            pick_u64(&bv, 0, 33),
            Err(ParseError::InvalidBitfield(_))
        ));
    }

    #[test]
    fn test_pick_i64_round_trip() {
        // Sign-extended reads must round-trip the encoded two's-complement
        // pattern for every width.
        for width in 1..=32usize {
            let values: &[i64] = &[
                0,
                -1,
                -(1i64 << (width - 1)),
                (1i64 << (width - 1)) - 1,
            ];
            for &value in values {
                let raw = (value as u64) & (!0u64 >> (64 - width));
                let bv = pack(&[(raw, width)]);
                assert_eq!(
                    pick_i64(&bv, 0, width).unwrap(),
                    value,
                    "width {} value {}",
                    width,
                    value
                );
            }
        }
    }

    #[test]
    fn test_pick_f64_zero_scale() {
        let bv = payload_to_bits("0", 0).unwrap();
        assert!(matches!(
            pick_f64(&bv, 0, 6, 0.0),
            Err(ParseError::InvalidBitfield(_))
        ));
        assert_eq!(pick_f64(&bv, 0, 6, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_pick_speed_sentinel() {
        let bv = pack(&[(1023, 10)]);
        assert_eq!(pick_speed(&bv, 0).unwrap(), -1.0);
        let bv = pack(&[(512, 10)]);
        assert_eq!(pick_speed(&bv, 0).unwrap(), 51.2);
        let bv = pack(&[(0, 10)]);
        assert_eq!(pick_speed(&bv, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_pick_heading_sentinel() {
        let bv = pack(&[(511, 9)]);
        assert_eq!(pick_heading(&bv, 0).unwrap(), -1.0);
        let bv = pack(&[(180, 9)]);
        assert_eq!(pick_heading(&bv, 0).unwrap(), 180.0);
    }

    #[test]
    fn test_pick_string() {
        let mut bv = BitVec::new();
        pack_str(&mut bv, "HELLO", 60);
        assert_eq!(pick_string(&bv, 0, 60).unwrap(), "HELLO");
    }

    #[test]
    fn test_pick_string_at_decodes_to_trimmed_space() {
        // '@' (value 0) decodes to a space, which is then trimmed from the
        // tail of the field.
        let bv = pack(&[(8, 6), (9, 6), (0, 6), (0, 6)]);
        assert_eq!(pick_string(&bv, 0, 24).unwrap(), "HI");
    }

    #[test]
    fn test_pick_string_misaligned_length() {
        let bv = payload_to_bits("0000", 0).unwrap();
        assert!(matches!(
            pick_string(&bv, 0, 10),
            Err(ParseError::StringDecodeFailure(_))
        ));
    }

    #[test]
    fn test_pick_string_overrun() {
        let bv = payload_to_bits("00", 0).unwrap();
        assert!(matches!(
            pick_string(&bv, 0, 18),
            Err(ParseError::TooShort(_))
        ));
    }

    #[test]
    fn test_pick_bytes_truncates_partial_byte() {
        let bv = pack(&[(0xAB, 8), (0xCD, 8), (0x3, 4)]);
        // 20 bits yield two whole bytes; the trailing nibble is dropped.
        assert_eq!(pick_bytes(&bv, 0, 20).unwrap(), alloc::vec![0xAB, 0xCD]);
        assert!(matches!(
            pick_bytes(&bv, 0, 24),
            Err(ParseError::TooShort(_))
        ));
    }

    #[test]
    fn test_armor_pack_round_trip() {
        let bv = pack(&[(5, 6), (123456789, 30), (3, 2)]);
        let (payload, fill) = armor(&bv);
        let decoded = payload_to_bits(&payload, fill).unwrap();
        assert_eq!(decoded, bv);
    }
}

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

//! NMEA 0183 sentence tokenization and checksum validation.
//!
//! Splits a raw `!AIVDM,...*hh` line into its seven mandatory fields and
//! verifies the XOR checksum before any payload work happens. Sentence
//! structure is never trusted: field counts, fragment numbering, fill
//! bits and the checksum delimiter position are all validated here.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::ParseError;

/// Longest sentence accepted, including the `!` prefix and checksum.
pub const MAX_SENTENCE_LEN: usize = 1024;

/// Tokenized fields of one `!AIVDM`/`!AIVDO` sentence.
///
/// Produced per physical sentence and consumed immediately by the
/// fragment layer; the invariant `total >= num >= 1` is enforced at
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SentenceFields {
    /// Talker identifier, e.g. `AI`.
    pub talker: String,
    /// Sentence formatter, `VDM` or `VDO`.
    pub formatter: String,
    /// Total number of fragments in the group.
    pub total: u8,
    /// This fragment's number, 1-based.
    pub num: u8,
    /// Sequential message id shared by all fragments of a group.
    pub seq_id: Option<char>,
    /// VHF radio channel, usually `A` or `B`.
    pub channel: Option<char>,
    /// 6-bit armored payload substring.
    pub payload: String,
    /// Padding bits in the final payload character (0-5).
    pub fill_bits: u8,
}

/// XOR checksum over NMEA sentence bytes.
pub(crate) fn checksum(data: &str) -> u8 {
    data.bytes().fold(0u8, |acc, b| acc ^ b)
}

/// Tokenize one sentence and verify its checksum.
///
/// The line must start with `!` and carry a `*hh` suffix whose
/// case-insensitive hex value matches the XOR of every byte strictly
/// between `!` and `*`. A mismatch discards the sentence with
/// `ChecksumMismatch`; no field is inspected afterwards.
pub fn parse_sentence_fields(line: &str) -> Result<SentenceFields, ParseError> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    if line.is_empty() {
        return Err(ParseError::NullInput);
    }
    if !line.starts_with('!') {
        return Err(ParseError::MalformedSentence(
            "sentence must start with '!'".to_string(),
        ));
    }

    let star = match line.rfind('*') {
        Some(pos) => pos,
        None => {
            return Err(ParseError::MalformedSentence(
                "missing '*' checksum delimiter".to_string(),
            ))
        }
    };
    if star > MAX_SENTENCE_LEN - 3 {
        return Err(ParseError::MalformedSentence(
            "sentence exceeds maximum length".to_string(),
        ));
    }

    let hex = &line[star + 1..];
    if hex.len() < 2 || !hex.is_char_boundary(2) {
        return Err(ParseError::MalformedSentence(
            "truncated checksum".to_string(),
        ));
    }
    let expected = u8::from_str_radix(&hex[..2], 16).map_err(|_| {
        ParseError::MalformedSentence("invalid checksum digits".to_string())
    })?;
    let computed = checksum(&line[1..star]);
    if computed != expected {
        return Err(ParseError::ChecksumMismatch(alloc::format!(
            "expected {:02X}, computed {:02X}",
            expected,
            computed
        )));
    }

    let tokens: Vec<&str> = line[1..star].split(',').collect();
    if tokens.len() < 7 {
        return Err(ParseError::MalformedSentence(alloc::format!(
            "expected 7 fields, found {}",
            tokens.len()
        )));
    }

    let tag = tokens[0];
    if tag.len() != 5 || !tag.is_ascii() {
        return Err(ParseError::MalformedSentence(alloc::format!(
            "unrecognized sentence tag {:?}",
            tag
        )));
    }
    let talker = tag[..2].to_string();
    let formatter = tag[2..].to_string();
    if formatter != "VDM" && formatter != "VDO" {
        return Err(ParseError::MalformedSentence(alloc::format!(
            "unsupported sentence formatter {:?}",
            formatter
        )));
    }

    let total = tokens[1].parse::<u8>().map_err(|_| {
        ParseError::MalformedSentence("invalid fragment count".to_string())
    })?;
    let num = tokens[2].parse::<u8>().map_err(|_| {
        ParseError::MalformedSentence("invalid fragment number".to_string())
    })?;
    if total == 0 || num == 0 || num > total {
        return Err(ParseError::MalformedSentence(alloc::format!(
            "fragment numbering out of range: {} of {}",
            num,
            total
        )));
    }

    let fill_bits = tokens[6].parse::<u8>().map_err(|_| {
        ParseError::MalformedSentence("invalid fill bit count".to_string())
    })?;
    if fill_bits > 5 {
        return Err(ParseError::MalformedSentence(alloc::format!(
            "fill bit count {} exceeds 5",
            fill_bits
        )));
    }

    Ok(SentenceFields {
        talker,
        formatter,
        total,
        num,
        seq_id: tokens[3].chars().next(),
        channel: tokens[4].chars().next(),
        payload: tokens[5].to_string(),
        fill_bits,
    })
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    const SENTENCE: &str = "!AIVDM,1,1,,A,13aG?P0P00PD;88MD5MTDww@2D0T,0*11";

    #[test]
    fn test_tokenize_valid_sentence() {
        let fields = parse_sentence_fields(SENTENCE).unwrap();
        assert_eq!(fields.talker, "AI");
        assert_eq!(fields.formatter, "VDM");
        assert_eq!(fields.total, 1);
        assert_eq!(fields.num, 1);
        assert_eq!(fields.seq_id, None);
        assert_eq!(fields.channel, Some('A'));
        assert_eq!(fields.payload, "13aG?P0P00PD;88MD5MTDww@2D0T");
        assert_eq!(fields.fill_bits, 0);
    }

    #[test]
    fn test_tokenize_vdo_and_crlf() {
        let fields =
            parse_sentence_fields("!AIVDO,1,1,,B,13aG?P0P00PD;88MD5MTDww@2D0T,0*1D\r\n")
                .unwrap();
        assert_eq!(fields.formatter, "VDO");
        assert_eq!(fields.channel, Some('B'));
    }

    #[test]
    fn test_single_byte_corruption_fails() {
        // Flipping the low bit of any byte between '!' and '*' must be
        // caught, either by the checksum or by field validation.
        let star = SENTENCE.rfind('*').unwrap();
        for i in 1..star {
            let mut bytes = SENTENCE.as_bytes().to_vec();
            bytes[i] ^= 0x01;
            let mutated = String::from_utf8(bytes).unwrap();
            assert!(
                parse_sentence_fields(&mutated).is_err(),
                "corruption at byte {} went undetected",
                i
            );
        }
    }

    #[test]
    fn test_checksum_case_insensitive() {
        // Channel J makes the checksum 0x1A, which has a letter digit.
        let body = "AIVDM,1,1,,J,13aG?P0P00PD;88MD5MTDww@2D0T,0";
        assert_eq!(checksum(body), 0x1A);
        let lower = alloc::format!("!{}*1a", body);
        assert!(parse_sentence_fields(&lower).is_ok());
        let upper = alloc::format!("!{}*1A", body);
        assert!(parse_sentence_fields(&upper).is_ok());
    }

    #[test]
    fn test_missing_checksum_delimiter() {
        assert!(matches!(
            parse_sentence_fields("!AIVDM,1,1,,A,13aG?P0P,0"),
            Err(ParseError::MalformedSentence(_))
        ));
    }

    #[test]
    fn test_truncated_checksum() {
        assert!(matches!(
            parse_sentence_fields("!AIVDM,1,1,,A,13aG?P0P,0*1"),
            Err(ParseError::MalformedSentence(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_sentence_fields(""), Err(ParseError::NullInput));
        assert_eq!(parse_sentence_fields("\r\n"), Err(ParseError::NullInput));
    }

    #[test]
    fn test_wrong_prefix() {
        assert!(matches!(
            parse_sentence_fields("$GPGGA,123519,4807.038,N*40"),
            Err(ParseError::MalformedSentence(_))
        ));
    }

    #[test]
    fn test_too_few_fields() {
        let body = "AIVDM,1,1";
        let line = alloc::format!("!{}*{:02X}", body, checksum(body));
        assert!(matches!(
            parse_sentence_fields(&line),
            Err(ParseError::MalformedSentence(_))
        ));
    }

    #[test]
    fn test_fragment_numbering_invariant() {
        for body in [
            "AIVDM,0,1,,A,13aG?P0P,0",
            "AIVDM,1,0,,A,13aG?P0P,0",
            "AIVDM,2,3,5,A,13aG?P0P,0",
        ] {
            let line = alloc::format!("!{}*{:02X}", body, checksum(body));
            assert!(
                matches!(
                    parse_sentence_fields(&line),
                    Err(ParseError::MalformedSentence(_))
                ),
                "accepted {:?}",
                body
            );
        }
    }

    #[test]
    fn test_fill_bits_out_of_range() {
        let body = "AIVDM,1,1,,A,13aG?P0P,6";
        let line = alloc::format!("!{}*{:02X}", body, checksum(body));
        assert!(matches!(
            parse_sentence_fields(&line),
            Err(ParseError::MalformedSentence(_))
        ));
    }

    #[test]
    fn test_oversized_sentence_rejected() {
        let mut body = String::from("AIVDM,1,1,,A,");
        for _ in 0..MAX_SENTENCE_LEN {
            body.push('0');
        }
        body.push_str(",0");
        let line = alloc::format!("!{}*{:02X}", body, checksum(&body));
        assert!(matches!(
            parse_sentence_fields(&line),
            Err(ParseError::MalformedSentence(_))
        ));
    }

    #[test]
    fn test_unsupported_formatter() {
        let body = "AIGGA,1,1,,A,13aG?P0P,0";
        let line = alloc::format!("!{}*{:02X}", body, checksum(body));
        assert!(matches!(
            parse_sentence_fields(&line),
            Err(ParseError::MalformedSentence(_))
        ));
    }
}

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

//! NMEA 4.10 tag block handling.
//!
//! Shore-side feeds often prefix sentences with a backslash-delimited tag
//! block carrying relay metadata, e.g.
//! `\g:1-2-73874,s:r003669945,c:1241544035*4A\!AIVDM,...`. The block has
//! its own XOR checksum over the fields between the backslashes. This
//! module validates and strips such a prefix before sentence
//! tokenization; the decoded metadata is available to callers that track
//! sources or groups.

use alloc::string::{String, ToString};

use crate::error::ParseError;
use crate::sentence::checksum;

/// Sentence grouping from the `g` tag field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SentenceGrouping {
    /// Sentence number in the group, 1-based.
    pub sentence_number: u32,
    /// Total number of sentences in the group.
    pub total_sentences: u32,
    /// Group identifier.
    pub group_id: u32,
}

/// Parsed NMEA 4.10 tag block.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TagBlock {
    /// UNIX timestamp, seconds or milliseconds (`c` field).
    pub timestamp: Option<u64>,
    /// Destination identifier (`d` field), at most 15 characters.
    pub destination: Option<String>,
    /// Sentence grouping (`g` field).
    pub grouping: Option<SentenceGrouping>,
    /// Line count (`n` field).
    pub line_count: Option<u32>,
    /// Relative time (`r` field).
    pub relative_time: Option<u32>,
    /// Source or station identifier (`s` field).
    pub source: Option<String>,
    /// Free text (`t`/`i` field), at most 15 characters.
    pub text: Option<String>,
}

impl TagBlock {
    /// Parse a tag block, including its delimiting backslashes.
    pub fn parse(block: &str) -> Result<TagBlock, ParseError> {
        if block.len() < 2 || !block.starts_with('\\') || !block.ends_with('\\') {
            return Err(ParseError::MalformedSentence(
                "tag block must be delimited by backslashes".to_string(),
            ));
        }
        let content = &block[1..block.len() - 1];

        let star = content.rfind('*').ok_or_else(|| {
            ParseError::MalformedSentence("tag block missing checksum".to_string())
        })?;
        let hex = &content[star + 1..];
        if hex.len() != 2 {
            return Err(ParseError::MalformedSentence(
                "tag block checksum must be two hex digits".to_string(),
            ));
        }
        let expected = u8::from_str_radix(hex, 16).map_err(|_| {
            ParseError::MalformedSentence("invalid tag block checksum digits".to_string())
        })?;
        let fields = &content[..star];
        let computed = checksum(fields);
        if computed != expected {
            return Err(ParseError::ChecksumMismatch(alloc::format!(
                "tag block: expected {:02X}, computed {:02X}",
                expected,
                computed
            )));
        }

        let mut tag_block = TagBlock::default();
        for field in fields.split(',') {
            let (key, value) = match field.split_once(':') {
                Some(pair) => pair,
                None => continue,
            };
            match key {
                "c" => tag_block.timestamp = value.parse().ok(),
                "d" if value.len() <= 15 => {
                    tag_block.destination = Some(value.to_string())
                }
                "g" => tag_block.grouping = parse_grouping(value),
                "n" => tag_block.line_count = value.parse().ok(),
                "r" => tag_block.relative_time = value.parse().ok(),
                "s" => tag_block.source = Some(value.to_string()),
                "t" | "i" if value.len() <= 15 => {
                    tag_block.text = Some(value.to_string())
                }
                // Unknown field types are ignored for forward compatibility.
                _ => {}
            }
        }
        Ok(tag_block)
    }
}

/// Split a leading tag block off `line`, validating it when present.
///
/// Returns the parsed block (if any) and the remainder of the line.
pub(crate) fn strip(line: &str) -> Result<(Option<TagBlock>, &str), ParseError> {
    if !line.starts_with('\\') {
        return Ok((None, line));
    }
    let end = line[1..].find('\\').ok_or_else(|| {
        ParseError::MalformedSentence("unterminated tag block".to_string())
    })? + 1;
    let block = TagBlock::parse(&line[..=end])?;
    Ok((Some(block), &line[end + 1..]))
}

/// Parse the `g` field value, e.g. `1-2-73874`.
fn parse_grouping(value: &str) -> Option<SentenceGrouping> {
    let mut parts = value.split('-');
    let sentence_number = parts.next()?.parse().ok()?;
    let total_sentences = parts.next()?.parse().ok()?;
    let group_id = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(SentenceGrouping {
        sentence_number,
        total_sentences,
        group_id,
    })
}

// -------------------------------------------------------------------------------------------------

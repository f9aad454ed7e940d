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

//! Error types returned by the sentence, fragment and payload layers.

use alloc::string::String;
use thiserror::Error;

/// Failure modes of AIS sentence and payload decoding.
///
/// Every variant carries a diagnostic message describing the offending
/// input. All failures are recovered at the point of origin and surfaced
/// through `Result`; none abort the process. A pending multi-part
/// reassembly is not an error — it is reported as
/// [`ParsedMessage::Incomplete`](crate::ParsedMessage::Incomplete).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input line or payload was empty.
    #[error("null or empty input")]
    NullInput,

    /// The sentence checksum did not match the transmitted value.
    #[error("checksum mismatch: {0}")]
    ChecksumMismatch(String),

    /// The sentence structure was invalid (bad prefix, wrong token count,
    /// fragment numbering out of range).
    #[error("malformed sentence: {0}")]
    MalformedSentence(String),

    /// A bit-field read extended past the end of the payload.
    #[error("payload too short: {0}")]
    TooShort(String),

    /// An illegal 6-bit character or invalid extraction parameters.
    #[error("invalid bitfield: {0}")]
    InvalidBitfield(String),

    /// A 6-bit ASCII string field could not be decoded.
    #[error("string decode failure: {0}")]
    StringDecodeFailure(String),

    /// The 6-bit message type code is not one of the 27 recognized types.
    #[error("unsupported message type: {0}")]
    UnsupportedType(String),
}

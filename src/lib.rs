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

//! # AIS AIVDM/AIVDO decoder
//!
//! Decoder for AIS (Automatic Identification System) maritime tracking
//! messages transmitted as NMEA 0183 `!AIVDM`/`!AIVDO` sentences with a
//! 6-bit-packed binary payload per ITU-R M.1371. Sentence structure,
//! payload length and bit-field boundaries are never trusted: every
//! stage validates its input and returns a typed error instead of
//! panicking.
//!
//! The pipeline is: raw line → tag-block strip → tokenizer/checksum →
//! fragment reassembly → message type dispatch → per-type decoder →
//! field normalization → [`ParsedMessage`].
//!
//! ```
//! use ais_parser::{NmeaParser, ParsedMessage};
//!
//! let mut parser = NmeaParser::new();
//! match parser.parse_sentence("!AIVDM,1,1,,A,13aG?P0P00PD;88MD5MTDww@2D0T,0*11") {
//!     Ok(ParsedMessage::PositionReport(report)) => {
//!         assert_eq!(report.mmsi, 244699008);
//!     }
//!     other => panic!("expected a position report, got {:?}", other),
//! }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod ais;
pub mod error;
pub mod fragment;
pub mod metrics;
pub mod sentence;
pub mod sixbit;
pub mod tag_block;

use alloc::boxed::Box;
use alloc::string::ToString;
use hashbrown::HashMap;

pub use crate::ais::{
    fix_type_to_str, maneuver_to_str, ship_type_to_str, AckTarget, Acknowledgement,
    AddressedSafetyMessage, AidToNavigationReport, ApplicationId, AssignmentModeCommand,
    AssignmentTarget, BaseStationReport, BinaryAddressedMessage, BinaryBroadcastMessage,
    ChannelManagement, DataLinkManagement, DgnssBroadcastMessage, ExtendedClassBReport,
    GroupAssignmentCommand, Interrogation, InterrogationRequest, LongRangePositionReport,
    MultipleSlotBinaryMessage, NavigationStatus, PositionReport, SafetyBroadcastMessage,
    SarAircraftPositionReport, SingleSlotBinaryMessage, SlotReservation, StandardClassBReport,
    StaticAndVoyageData, StaticDataPart, StaticDataReport, Station, UtcDateInquiry,
};
pub use crate::error::ParseError;
pub use crate::fragment::{Fragment, FragmentBuffer, MAX_PARTS};
pub use crate::metrics::{MetricsSink, NullMetrics};
pub use crate::sentence::SentenceFields;
pub use crate::tag_block::{SentenceGrouping, TagBlock};

// -------------------------------------------------------------------------------------------------

/// One decoded AIS message, or the pending marker while a multi-part
/// group is still collecting.
///
/// The enum is closed over the 27 ITU-R M.1371 message types, so adding
/// or removing a type is a compile-checked change for every consumer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ParsedMessage {
    /// Types 1-3: Class A position report.
    PositionReport(PositionReport),
    /// Types 4 and 11: base station report / UTC date response.
    BaseStationReport(BaseStationReport),
    /// Type 5: static and voyage related data.
    StaticAndVoyageData(StaticAndVoyageData),
    /// Type 6: binary addressed message.
    BinaryAddressedMessage(BinaryAddressedMessage),
    /// Type 7: binary acknowledgement.
    BinaryAcknowledge(Acknowledgement),
    /// Type 8: binary broadcast message.
    BinaryBroadcastMessage(BinaryBroadcastMessage),
    /// Type 9: SAR aircraft position report.
    SarAircraftPositionReport(SarAircraftPositionReport),
    /// Type 10: UTC/date inquiry.
    UtcDateInquiry(UtcDateInquiry),
    /// Type 12: addressed safety-related message.
    AddressedSafetyMessage(AddressedSafetyMessage),
    /// Type 13: safety-related acknowledgement.
    SafetyAcknowledge(Acknowledgement),
    /// Type 14: safety-related broadcast message.
    SafetyBroadcastMessage(SafetyBroadcastMessage),
    /// Type 15: interrogation.
    Interrogation(Interrogation),
    /// Type 16: assignment mode command.
    AssignmentModeCommand(AssignmentModeCommand),
    /// Type 17: DGNSS broadcast binary message.
    DgnssBroadcastMessage(DgnssBroadcastMessage),
    /// Type 18: standard Class B position report.
    StandardClassBReport(StandardClassBReport),
    /// Type 19: extended Class B position report.
    ExtendedClassBReport(ExtendedClassBReport),
    /// Type 20: data link management.
    DataLinkManagement(DataLinkManagement),
    /// Type 21: aid-to-navigation report.
    AidToNavigationReport(AidToNavigationReport),
    /// Type 22: channel management.
    ChannelManagement(ChannelManagement),
    /// Type 23: group assignment command.
    GroupAssignmentCommand(GroupAssignmentCommand),
    /// Type 24: static data report (part A or B).
    StaticDataReport(StaticDataReport),
    /// Type 25: single slot binary message.
    SingleSlotBinaryMessage(SingleSlotBinaryMessage),
    /// Type 26: multiple slot binary message.
    MultipleSlotBinaryMessage(MultipleSlotBinaryMessage),
    /// Type 27: long range broadcast position report.
    LongRangePositionReport(LongRangePositionReport),
    /// A multi-part group is still waiting for fragments. Not an error;
    /// feed the remaining sentences to receive the decoded message.
    Incomplete,
}

/// Read access to a decoded position, with canonical "not available"
/// markers mapped to `None`.
///
/// Geometry consumers must use these accessors rather than the raw
/// fields so that sentinel-carrying positions never become coordinates.
pub trait LatLon {
    /// Latitude in decimal degrees, if available.
    fn latitude(&self) -> Option<f64>;
    /// Longitude in decimal degrees, if available.
    fn longitude(&self) -> Option<f64>;
}

// -------------------------------------------------------------------------------------------------

/// Fragment groups are correlated by sequential message id and channel.
type GroupKey = (char, char);

/// Stateful AIS sentence parser.
///
/// Owns the fragment buffers for multi-part messages; everything below
/// it is pure. Use one parser per ingesting connection and serialize
/// access to it — fragment delivery for the same logical message must
/// not race.
pub struct NmeaParser {
    buffers: HashMap<GroupKey, FragmentBuffer>,
    metrics: Box<dyn MetricsSink>,
}

impl Default for NmeaParser {
    fn default() -> NmeaParser {
        NmeaParser::new()
    }
}

impl core::fmt::Debug for NmeaParser {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("NmeaParser")
            .field("pending_groups", &self.buffers.len())
            .finish()
    }
}

impl NmeaParser {
    /// Create a parser with the no-op metrics sink.
    pub fn new() -> NmeaParser {
        NmeaParser::with_metrics(Box::new(NullMetrics))
    }

    /// Create a parser notifying the given sink about decode and
    /// reassembly outcomes.
    pub fn with_metrics(metrics: Box<dyn MetricsSink>) -> NmeaParser {
        NmeaParser {
            buffers: HashMap::new(),
            metrics,
        }
    }

    /// Parse one sentence, buffering multi-part fragments.
    ///
    /// Returns the decoded message once all fragments of its group have
    /// arrived, [`ParsedMessage::Incomplete`] while more are pending, or
    /// a [`ParseError`] describing why the input was discarded.
    pub fn parse_sentence(&mut self, line: &str) -> Result<ParsedMessage, ParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(ParseError::NullInput);
        }

        let (tag_block, rest) = tag_block::strip(trimmed)?;
        if let Some(grouping) = tag_block.as_ref().and_then(|block| block.grouping.as_ref()) {
            log::debug!(
                "tag block group {}: sentence {} of {}",
                grouping.group_id,
                grouping.sentence_number,
                grouping.total_sentences
            );
        }

        let fields = sentence::parse_sentence_fields(rest)?;
        let station = Station::from_talker(&fields.talker);
        let own_vessel = fields.formatter == "VDO";

        if fields.total == 1 {
            let result = decode_payload(&fields.payload, fields.fill_bits, station, own_vessel);
            self.metrics.record_parse_result(result.is_ok());
            return result;
        }

        // Multi-part: collect into the buffer for this group.
        let seq_id = fields.seq_id.ok_or_else(|| {
            ParseError::MalformedSentence(
                "multi-part sentence without sequential message id".to_string(),
            )
        })?;
        let key = (seq_id, fields.channel.unwrap_or(' '));
        let buffer = self.buffers.entry(key).or_insert_with(FragmentBuffer::new);
        if buffer
            .expected_total()
            .map_or(false, |total| total != fields.total)
        {
            // The group changed size under us; the old fragments can
            // never complete.
            log::debug!("abandoning stale fragment group {:?}", key);
            buffer.reset();
        }
        buffer.insert(Fragment {
            payload: fields.payload,
            fill_bits: fields.fill_bits,
            total: fields.total,
            num: fields.num,
            raw: rest.to_string(),
        })?;

        match buffer.take_joined() {
            Some((payload, fill_bits)) => {
                self.buffers.remove(&key);
                let result = decode_payload(&payload, fill_bits, station, own_vessel);
                self.metrics.record_reassembly_attempt(result.is_ok());
                self.metrics.record_parse_result(result.is_ok());
                result
            }
            None => Ok(ParsedMessage::Incomplete),
        }
    }

    /// Number of fragment groups still waiting for sentences.
    pub fn pending_groups(&self) -> usize {
        self.buffers.len()
    }

    /// Drop every pending fragment group.
    ///
    /// The parser holds no clock; callers enforce their own timeout
    /// policy for abandoned reassemblies by invoking this.
    pub fn reset_fragments(&mut self) {
        self.buffers.clear();
    }
}

/// Decode one complete armored payload into a message.
fn decode_payload(
    payload: &str,
    fill_bits: u8,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    let bv = sixbit::payload_to_bits(payload, fill_bits)?;
    ais::dispatch(&bv, station, own_vessel)
}

// -------------------------------------------------------------------------------------------------

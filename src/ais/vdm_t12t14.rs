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

use super::*;
use crate::ais::Station;
use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------

/// Type 12: Addressed Safety-Related Message
///
/// Short safety text addressed to a single station. The text field runs
/// to the end of the payload, truncated to whole 6-bit groups.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressedSafetyMessage {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the sender.
    pub mmsi: u32,

    /// Sequence number (2 bits).
    pub seqno: u8,

    /// MMSI of the addressed station.
    pub dest_mmsi: u32,

    /// Retransmit flag.
    pub retransmit: bool,

    /// Safety text, trailing padding trimmed.
    pub text: String,
}

/// Type 14: Safety-Related Broadcast Message
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafetyBroadcastMessage {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the sender.
    pub mmsi: u32,

    /// Safety text, trailing padding trimmed.
    pub text: String,
}

// -------------------------------------------------------------------------------------------------

/// Decode a variable-length 6-bit text tail starting at `start`.
fn text_tail(bv: &BitVec, start: usize) -> Result<String, ParseError> {
    let remaining = bv.len() - start;
    let text_bits = remaining - remaining % 6;
    if text_bits == 0 {
        return Ok(String::new());
    }
    pick_string(bv, start, text_bits)
}

// Type 12 header: MMSI at 8, sequence number at 38, destination MMSI at
// 40, retransmit at 70, spare at 71, text from 72. Type 14: spare at
// 38-39, text from 40.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    let message_type = pick_u64(bv, 0, 6)? as u8;
    if message_type == 12 {
        if bv.len() < 72 {
            return Err(ParseError::TooShort(format!(
                "addressed safety message too short: {} bits (72 required)",
                bv.len()
            )));
        }
        Ok(ParsedMessage::AddressedSafetyMessage(
            AddressedSafetyMessage {
                own_vessel,
                station,
                mmsi: pick_u64(bv, 8, 30)? as u32,
                seqno: pick_u64(bv, 38, 2)? as u8,
                dest_mmsi: pick_u64(bv, 40, 30)? as u32,
                retransmit: pick_bool(bv, 70)?,
                text: text_tail(bv, 72)?,
            },
        ))
    } else {
        if bv.len() < 40 {
            return Err(ParseError::TooShort(format!(
                "safety broadcast too short: {} bits (40 required)",
                bv.len()
            )));
        }
        Ok(ParsedMessage::SafetyBroadcastMessage(
            SafetyBroadcastMessage {
                own_vessel,
                station,
                mmsi: pick_u64(bv, 8, 30)? as u32,
                text: text_tail(bv, 40)?,
            },
        ))
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::{pack, pack_str};

    #[test]
    fn test_parse_addressed_safety_message() {
        let mut bv = pack(&[
            (12, 6),
            (0, 2),
            (271002099, 30),
            (0, 2),
            (271002111, 30),
            (1, 1),
            (0, 1),
        ]);
        pack_str(&mut bv, "MAYDAY RELAY", 90);
        let message = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::AddressedSafetyMessage(message) => message,
            other => panic!("expected AddressedSafetyMessage, got {:?}", other),
        };
        assert_eq!(message.mmsi, 271002099);
        assert_eq!(message.dest_mmsi, 271002111);
        assert!(message.retransmit);
        assert_eq!(message.text, "MAYDAY RELAY");
    }

    #[test]
    fn test_parse_safety_broadcast() {
        let mut bv = pack(&[(14, 6), (0, 2), (2655651, 30), (0, 2)]);
        pack_str(&mut bv, "GALE WARNING", 72);
        let message = match handle(&bv, Station::BaseStation, false).unwrap() {
            ParsedMessage::SafetyBroadcastMessage(message) => message,
            other => panic!("expected SafetyBroadcastMessage, got {:?}", other),
        };
        assert_eq!(message.mmsi, 2655651);
        assert_eq!(message.text, "GALE WARNING");
    }

    #[test]
    fn test_empty_text_tail() {
        let bv = pack(&[(14, 6), (0, 2), (2655651, 30), (0, 2)]);
        let message = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::SafetyBroadcastMessage(message) => message,
            _ => unreachable!(),
        };
        assert_eq!(message.text, "");
    }

    #[test]
    fn test_ragged_tail_is_truncated_to_groups() {
        let mut bv = pack(&[(14, 6), (0, 2), (2655651, 30), (0, 2)]);
        pack_str(&mut bv, "SOS", 18);
        // Four stray bits beyond the last whole 6-bit group.
        let stray = pack(&[(0xF, 4)]);
        bv.extend_from_bitslice(&stray);
        let message = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::SafetyBroadcastMessage(message) => message,
            _ => unreachable!(),
        };
        assert_eq!(message.text, "SOS");
    }

    #[test]
    fn test_short_payload_rejected() {
        let bv = pack(&[(12, 6), (0, 2), (271002099, 30)]);
        assert!(matches!(
            handle(&bv, Station::Other, false),
            Err(ParseError::TooShort(_))
        ));
    }
}

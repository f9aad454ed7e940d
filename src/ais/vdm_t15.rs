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

/// One interrogation request: who is asked for which message type.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterrogationRequest {
    /// MMSI of the interrogated station.
    pub dest_mmsi: u32,
    /// Requested message type code.
    pub message_type: u8,
    /// Response slot offset (12 bits).
    pub slot_offset: u16,
}

/// Type 15: Interrogation
///
/// Requests one or two stations to transmit specific message types. The
/// second request is present only when the payload extends past the
/// fixed first-request block.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interrogation {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the interrogating station.
    pub mmsi: u32,

    /// First interrogated station.
    pub first: InterrogationRequest,

    /// Second interrogated station, when transmitted.
    pub second: Option<InterrogationRequest>,
}

// -------------------------------------------------------------------------------------------------

// First request at bits 40-87 (MMSI 40, type 70, offset 76). A second
// station block occupies bits 110-157.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 88 {
        return Err(ParseError::TooShort(format!(
            "interrogation too short: {} bits (88 required)",
            bv.len()
        )));
    }

    let first = InterrogationRequest {
        dest_mmsi: pick_u64(bv, 40, 30)? as u32,
        message_type: pick_u64(bv, 70, 6)? as u8,
        slot_offset: pick_u64(bv, 76, 12)? as u16,
    };
    let second = if bv.len() >= 158 {
        Some(InterrogationRequest {
            dest_mmsi: pick_u64(bv, 110, 30)? as u32,
            message_type: pick_u64(bv, 140, 6)? as u8,
            slot_offset: pick_u64(bv, 146, 12)? as u16,
        })
    } else {
        None
    };

    Ok(ParsedMessage::Interrogation(Interrogation {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        first,
        second,
    }))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;

    #[test]
    fn test_parse_single_interrogation() {
        let bv = pack(&[
            (15, 6),
            (0, 2),
            (368578000, 30),
            (0, 2),
            (5158, 30),  // interrogated mmsi
            (5, 6),      // requested type
            (0, 12),     // slot offset
        ]);
        let interrogation = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::Interrogation(interrogation) => interrogation,
            other => panic!("expected Interrogation, got {:?}", other),
        };
        assert_eq!(interrogation.mmsi, 368578000);
        assert_eq!(
            interrogation.first,
            InterrogationRequest {
                dest_mmsi: 5158,
                message_type: 5,
                slot_offset: 0
            }
        );
        assert_eq!(interrogation.second, None);
    }

    #[test]
    fn test_parse_two_station_interrogation() {
        let bv = pack(&[
            (15, 6),
            (0, 2),
            (368578000, 30),
            (0, 2),
            (366972000, 30),
            (3, 6),
            (516, 12),
            (0, 2),   // spare
            (0, 20),  // unused second request to first station
            (367014000, 30),
            (5, 6),
            (617, 12),
            (0, 2),   // spare
        ]);
        let interrogation = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::Interrogation(interrogation) => interrogation,
            _ => unreachable!(),
        };
        assert_eq!(interrogation.first.dest_mmsi, 366972000);
        assert_eq!(interrogation.first.message_type, 3);
        assert_eq!(interrogation.first.slot_offset, 516);
        let second = interrogation.second.unwrap();
        assert_eq!(second.dest_mmsi, 367014000);
        assert_eq!(second.message_type, 5);
        assert_eq!(second.slot_offset, 617);
    }

    #[test]
    fn test_short_payload_rejected() {
        let bv = pack(&[(15, 6), (0, 2), (368578000, 30), (0, 2), (5158, 30)]);
        assert!(matches!(
            handle(&bv, Station::Other, false),
            Err(ParseError::TooShort(_))
        ));
    }
}

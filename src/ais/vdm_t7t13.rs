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

/// One acknowledged message: destination MMSI plus sequence number.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckTarget {
    /// MMSI whose message is acknowledged.
    pub mmsi: u32,
    /// Sequence number of the acknowledged message (2 bits).
    pub seqno: u8,
}

/// Types 7 and 13: Binary / Safety-Related Acknowledgement
///
/// Type 7 acknowledges binary addressed messages (type 6), type 13
/// acknowledges addressed safety messages (type 12). Both carry one to
/// four MMSI/sequence pairs; the count follows from the payload length.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// Message type, 7 or 13.
    pub message_type: u8,

    /// User ID (30 bits) - MMSI of the acknowledging station.
    pub mmsi: u32,

    /// Acknowledged messages, in transmission order.
    pub targets: Vec<AckTarget>,
}

// -------------------------------------------------------------------------------------------------

// Header is 40 bits; each acknowledgement slot is 30 + 2 bits.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 72 {
        return Err(ParseError::TooShort(format!(
            "acknowledgement too short: {} bits (72 required)",
            bv.len()
        )));
    }

    let message_type = pick_u64(bv, 0, 6)? as u8;
    let mmsi = pick_u64(bv, 8, 30)? as u32;

    let mut targets = Vec::new();
    let mut offset = 40;
    while offset + 32 <= bv.len() && targets.len() < 4 {
        targets.push(AckTarget {
            mmsi: pick_u64(bv, offset, 30)? as u32,
            seqno: pick_u64(bv, offset + 30, 2)? as u8,
        });
        offset += 32;
    }

    let ack = Acknowledgement {
        own_vessel,
        station,
        message_type,
        mmsi,
        targets,
    };
    if message_type == 13 {
        Ok(ParsedMessage::SafetyAcknowledge(ack))
    } else {
        Ok(ParsedMessage::BinaryAcknowledge(ack))
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;

    #[test]
    fn test_parse_single_ack() {
        let bv = pack(&[
            (7, 6),
            (0, 2),
            (265547250, 30),
            (0, 2),          // spare
            (236111000, 30),
            (2, 2),
        ]);
        let ack = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::BinaryAcknowledge(ack) => ack,
            other => panic!("expected BinaryAcknowledge, got {:?}", other),
        };
        assert_eq!(ack.message_type, 7);
        assert_eq!(ack.mmsi, 265547250);
        assert_eq!(
            ack.targets,
            alloc::vec![AckTarget {
                mmsi: 236111000,
                seqno: 2
            }]
        );
    }

    #[test]
    fn test_parse_four_safety_acks() {
        let mut fields = alloc::vec![(13u64, 6usize), (0, 2), (265547250, 30), (0, 2)];
        for i in 0..4u64 {
            fields.push((230000000 + i, 30));
            fields.push((i, 2));
        }
        let bv = pack(&fields);
        let ack = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::SafetyAcknowledge(ack) => ack,
            other => panic!("expected SafetyAcknowledge, got {:?}", other),
        };
        assert_eq!(ack.message_type, 13);
        assert_eq!(ack.targets.len(), 4);
        assert_eq!(ack.targets[3].mmsi, 230000003);
        assert_eq!(ack.targets[3].seqno, 3);
    }

    #[test]
    fn test_short_payload_rejected() {
        let bv = pack(&[(7, 6), (0, 2), (265547250, 30), (0, 2)]);
        assert!(matches!(
            handle(&bv, Station::Other, false),
            Err(ParseError::TooShort(_))
        ));
    }
}

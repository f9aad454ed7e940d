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

/// One reserved slot block offered by a base station.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotReservation {
    /// Reserved slot offset (12 bits).
    pub offset: u16,
    /// Number of consecutive slots (4 bits).
    pub number: u8,
    /// Reservation timeout in minutes (3 bits).
    pub timeout: u8,
    /// Repeat increment (11 bits).
    pub increment: u16,
}

/// Type 20: Data Link Management
///
/// Base station reservation of TDMA slots. Carries one to four
/// offset/number/timeout/increment blocks; the count follows from the
/// payload length.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataLinkManagement {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the base station.
    pub mmsi: u32,

    /// Slot reservations, in transmission order.
    pub reservations: Vec<SlotReservation>,
}

// -------------------------------------------------------------------------------------------------

// Header is 40 bits; each reservation block is 30 bits.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 70 {
        return Err(ParseError::TooShort(format!(
            "data link management too short: {} bits (70 required)",
            bv.len()
        )));
    }

    let mut reservations = Vec::new();
    let mut offset = 40;
    while offset + 30 <= bv.len() && reservations.len() < 4 {
        reservations.push(SlotReservation {
            offset: pick_u64(bv, offset, 12)? as u16,
            number: pick_u64(bv, offset + 12, 4)? as u8,
            timeout: pick_u64(bv, offset + 16, 3)? as u8,
            increment: pick_u64(bv, offset + 19, 11)? as u16,
        });
        offset += 30;
    }

    Ok(ParsedMessage::DataLinkManagement(DataLinkManagement {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        reservations,
    }))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;

    #[test]
    fn test_parse_single_reservation() {
        let bv = pack(&[
            (20, 6),
            (0, 2),
            (2300048, 30),
            (0, 2),
            (1725, 12),
            (1, 4),
            (7, 3),
            (750, 11),
        ]);
        let dlm = match handle(&bv, Station::BaseStation, false).unwrap() {
            ParsedMessage::DataLinkManagement(dlm) => dlm,
            other => panic!("expected DataLinkManagement, got {:?}", other),
        };
        assert_eq!(dlm.mmsi, 2300048);
        assert_eq!(
            dlm.reservations,
            alloc::vec![SlotReservation {
                offset: 1725,
                number: 1,
                timeout: 7,
                increment: 750
            }]
        );
    }

    #[test]
    fn test_parse_four_reservations() {
        let mut fields = alloc::vec![(20u64, 6usize), (0, 2), (2300048, 30), (0, 2)];
        for i in 1..=4u64 {
            fields.push((100 * i, 12));
            fields.push((i, 4));
            fields.push((3, 3));
            fields.push((i, 11));
        }
        let dlm = match handle(&pack(&fields), Station::BaseStation, false).unwrap() {
            ParsedMessage::DataLinkManagement(dlm) => dlm,
            _ => unreachable!(),
        };
        assert_eq!(dlm.reservations.len(), 4);
        assert_eq!(dlm.reservations[3].offset, 400);
        assert_eq!(dlm.reservations[3].number, 4);
    }

    #[test]
    fn test_partial_trailing_block_ignored() {
        // 40-bit header, one whole block, then 10 stray bits.
        let bv = pack(&[
            (20, 6),
            (0, 2),
            (2300048, 30),
            (0, 2),
            (1725, 12),
            (1, 4),
            (7, 3),
            (750, 11),
            (0x3FF, 10),
        ]);
        let dlm = match handle(&bv, Station::BaseStation, false).unwrap() {
            ParsedMessage::DataLinkManagement(dlm) => dlm,
            _ => unreachable!(),
        };
        assert_eq!(dlm.reservations.len(), 1);
    }
}

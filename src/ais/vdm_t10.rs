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

/// Type 10: UTC/Date Inquiry
///
/// Request for a type 11 UTC/date response from a specific station.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UtcDateInquiry {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the inquiring station.
    pub mmsi: u32,

    /// MMSI of the interrogated station.
    pub dest_mmsi: u32,
}

// -------------------------------------------------------------------------------------------------

pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 70 {
        return Err(ParseError::TooShort(format!(
            "UTC/date inquiry too short: {} bits (70 required)",
            bv.len()
        )));
    }

    Ok(ParsedMessage::UtcDateInquiry(UtcDateInquiry {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        dest_mmsi: pick_u64(bv, 40, 30)? as u32,
    }))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;

    #[test]
    fn test_parse_utc_date_inquiry() {
        let bv = pack(&[
            (10, 6),
            (0, 2),
            (366814480, 30),
            (0, 2),
            (366832740, 30),
            (0, 2),
        ]);
        let inquiry = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::UtcDateInquiry(inquiry) => inquiry,
            other => panic!("expected UtcDateInquiry, got {:?}", other),
        };
        assert_eq!(inquiry.mmsi, 366814480);
        assert_eq!(inquiry.dest_mmsi, 366832740);
    }

    #[test]
    fn test_short_payload_rejected() {
        let bv = pack(&[(10, 6), (0, 2), (366814480, 30)]);
        assert!(matches!(
            handle(&bv, Station::Other, false),
            Err(ParseError::TooShort(_))
        ));
    }
}

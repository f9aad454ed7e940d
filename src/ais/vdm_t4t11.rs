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
use crate::ais::normalize;
use crate::ais::Station;
use crate::LatLon;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------

/// Type 4: Base Station Report / Type 11: UTC/Date Response
///
/// Timestamped position report from a base station (4) or the UTC/date
/// response a mobile station sends after a type 10 inquiry (11). Both
/// share one layout.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseStationReport {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// Message type, 4 or 11.
    pub message_type: u8,

    /// User ID (30 bits) - MMSI of the station.
    pub mmsi: u32,

    /// UTC date and time of the report; `None` when any component
    /// carries its wire-level "not available" value.
    pub utc: Option<DateTime<Utc>>,

    /// Position accuracy flag: true = high (<= 10 m).
    pub position_accuracy: bool,

    /// Longitude in decimal degrees; 181.0 when not available.
    pub longitude: f64,

    /// Latitude in decimal degrees; 91.0 when not available.
    pub latitude: f64,

    /// EPFD fix type (see [`fix_type_to_str`](crate::ais::fix_type_to_str)).
    pub fix_type: u8,

    /// Receiver Autonomous Integrity Monitoring flag.
    pub raim: bool,

    /// SOTDMA communication state (19 bits).
    pub radio_status: u32,
}

impl LatLon for BaseStationReport {
    fn latitude(&self) -> Option<f64> {
        if (-90.0..=90.0).contains(&self.latitude) {
            Some(self.latitude)
        } else {
            None
        }
    }

    fn longitude(&self) -> Option<f64> {
        if (-180.0..=180.0).contains(&self.longitude) {
            Some(self.longitude)
        } else {
            None
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// AIS VDM/VDO types 4 and 11: Base Station Report / UTC Date Response
///
/// The message structure is:
/// - Bits 0-5: Message Type = 4 or 11
/// - Bits 8-37: MMSI (30 bits)
/// - Bits 38-51: UTC year (14 bits, 0 = N/A)
/// - Bits 52-55: UTC month (4 bits, 0 = N/A)
/// - Bits 56-60: UTC day (5 bits, 0 = N/A)
/// - Bits 61-65: UTC hour (5 bits, 24 = N/A)
/// - Bits 66-71: UTC minute (6 bits, 60 = N/A)
/// - Bits 72-77: UTC second (6 bits, 60 = N/A)
/// - Bit 78: Position Accuracy
/// - Bits 79-106: Longitude (28 bits)
/// - Bits 107-133: Latitude (27 bits)
/// - Bits 134-137: EPFD fix type (4 bits)
/// - Bit 148: RAIM flag
/// - Bits 149-167: Radio status (19 bits)
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 168 {
        return Err(ParseError::TooShort(format!(
            "base station report too short: {} bits (168 required)",
            bv.len()
        )));
    }

    let year = pick_u64(bv, 38, 14)? as i32;
    let month = pick_u64(bv, 52, 4)? as u32;
    let day = pick_u64(bv, 56, 5)? as u32;
    let hour = pick_u64(bv, 61, 5)? as u32;
    let minute = pick_u64(bv, 66, 6)? as u32;
    let second = pick_u64(bv, 72, 6)? as u32;
    let utc = if year == 0 || month == 0 || day == 0 || hour > 23 || minute > 59 || second > 59
    {
        None
    } else {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(|datetime| datetime.and_utc())
    };

    Ok(ParsedMessage::BaseStationReport(BaseStationReport {
        own_vessel,
        station,
        message_type: pick_u64(bv, 0, 6)? as u8,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        utc,
        position_accuracy: pick_bool(bv, 78)?,
        longitude: normalize::lon(pick_lon(bv, 79)?),
        latitude: normalize::lat(pick_lat(bv, 107)?),
        fix_type: pick_u64(bv, 134, 4)? as u8,
        raim: pick_bool(bv, 148)?,
        radio_status: pick_u64(bv, 149, 19)? as u32,
    }))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;
    use chrono::Timelike;

    fn base_station_payload(month: u64) -> BitVec {
        pack(&[
            (4, 6),          // message type
            (0, 2),          // repeat
            (2655651, 30),   // mmsi
            (2024, 14),      // year
            (month, 4),      // month
            (17, 5),         // day
            (12, 5),         // hour
            (34, 6),         // minute
            (56, 6),         // second
            (1, 1),          // accuracy
            (2644800, 28),   // lon 4.408
            (30737880, 27),  // lat 51.2298
            (1, 4),          // fix type GPS
            (0, 10),         // spare
            (0, 1),          // raim
            (12345, 19),     // radio status
        ])
    }

    #[test]
    fn test_parse_base_station_report() {
        let report = match handle(&base_station_payload(5), Station::BaseStation, false).unwrap()
        {
            ParsedMessage::BaseStationReport(report) => report,
            other => panic!("expected BaseStationReport, got {:?}", other),
        };
        assert_eq!(report.message_type, 4);
        assert_eq!(report.mmsi, 2655651);
        let utc = report.utc.unwrap();
        assert_eq!(utc.to_rfc3339(), "2024-05-17T12:34:56+00:00");
        assert_eq!(utc.hour(), 12);
        assert!((report.longitude - 4.408).abs() < 1e-9);
        assert!((report.latitude - 51.2298).abs() < 1e-9);
        assert_eq!(report.fix_type, 1);
        assert_eq!(report.radio_status, 12345);
    }

    #[test]
    fn test_unavailable_date_components_yield_none() {
        let report = match handle(&base_station_payload(0), Station::BaseStation, false).unwrap()
        {
            ParsedMessage::BaseStationReport(report) => report,
            _ => unreachable!(),
        };
        assert_eq!(report.utc, None);
    }

    #[test]
    fn test_short_payload_rejected() {
        let bv = pack(&[(4, 6), (0, 2), (2655651, 30)]);
        assert!(matches!(
            handle(&bv, Station::BaseStation, false),
            Err(ParseError::TooShort(_))
        ));
    }
}

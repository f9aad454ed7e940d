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
use crate::ais::{NavigationStatus, Station};
use crate::LatLon;
use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------

/// Types 1-3: Class A Position Report
///
/// Scheduled (1), assigned (2) or interrogation-response (3) position
/// report from a Class A transponder. All positional fields carry the
/// canonical "not available" markers after normalization: latitude 91.0,
/// longitude 181.0, speed/course/heading -1.0, timestamp 255.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionReport {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// Message type, 1, 2 or 3.
    pub message_type: u8,

    /// User ID (30 bits) - MMSI of the transmitting vessel.
    pub mmsi: u32,

    /// Navigational status.
    pub nav_status: NavigationStatus,

    /// Raw rate of turn indicator (8 bits, signed). -128 means not
    /// available; other values follow the ITU-R ROT-AIS encoding.
    pub rate_of_turn: i8,

    /// Speed over ground in knots; -1.0 when not available.
    pub sog_knots: f64,

    /// Position accuracy flag: true = high (<= 10 m).
    pub position_accuracy: bool,

    /// Longitude in decimal degrees; 181.0 when not available.
    pub longitude: f64,

    /// Latitude in decimal degrees; 91.0 when not available.
    pub latitude: f64,

    /// Course over ground in degrees; -1.0 when not available.
    pub cog: f64,

    /// True heading in degrees; -1.0 when not available.
    pub heading_true: f64,

    /// UTC second of the position fix; 255 when not available.
    pub timestamp_seconds: u8,

    /// Maneuver indicator (see [`maneuver_to_str`](crate::ais::maneuver_to_str)).
    pub maneuver: u8,

    /// Receiver Autonomous Integrity Monitoring flag.
    pub raim: bool,

    /// SOTDMA/ITDMA communication state (19 bits).
    pub radio_status: u32,
}

impl LatLon for PositionReport {
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

/// AIS VDM/VDO types 1-3: Class A Position Report
///
/// The message structure is:
/// - Bits 0-5: Message Type (6 bits) = 1, 2 or 3
/// - Bits 6-7: Repeat Indicator (2 bits)
/// - Bits 8-37: MMSI (30 bits)
/// - Bits 38-41: Navigation Status (4 bits)
/// - Bits 42-49: Rate of Turn (8 bits, signed)
/// - Bits 50-59: Speed Over Ground (10 bits, 1/10 knot)
/// - Bit 60: Position Accuracy
/// - Bits 61-88: Longitude (28 bits, 1/600000 degree)
/// - Bits 89-115: Latitude (27 bits, 1/600000 degree)
/// - Bits 116-127: Course Over Ground (12 bits, 1/10 degree)
/// - Bits 128-136: True Heading (9 bits)
/// - Bits 137-142: UTC Second (6 bits)
/// - Bits 143-144: Maneuver Indicator (2 bits)
/// - Bits 145-147: Spare
/// - Bit 148: RAIM flag
/// - Bits 149-167: Radio status (19 bits)
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 168 {
        return Err(ParseError::TooShort(format!(
            "Class A position report too short: {} bits (168 required)",
            bv.len()
        )));
    }

    Ok(ParsedMessage::PositionReport(PositionReport {
        own_vessel,
        station,
        message_type: pick_u64(bv, 0, 6)? as u8,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        nav_status: NavigationStatus::from(pick_u64(bv, 38, 4)? as u8),
        rate_of_turn: pick_i64(bv, 42, 8)? as i8,
        sog_knots: normalize::speed(pick_speed(bv, 50)?),
        position_accuracy: pick_bool(bv, 60)?,
        longitude: normalize::lon(pick_lon(bv, 61)?),
        latitude: normalize::lat(pick_lat(bv, 89)?),
        cog: normalize::course(pick_u64(bv, 116, 12)? as f64 / 10.0),
        heading_true: normalize::heading(pick_heading(bv, 128)?),
        timestamp_seconds: normalize::timestamp(pick_u64(bv, 137, 6)? as u8),
        maneuver: pick_u64(bv, 143, 2)? as u8,
        raim: pick_bool(bv, 148)?,
        radio_status: pick_u64(bv, 149, 19)? as u32,
    }))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;

    fn class_a_payload() -> BitVec {
        pack(&[
            (3, 6),                        // message type
            (0, 2),                        // repeat
            (366123456, 30),               // mmsi
            (5, 4),                        // nav status: moored
            (129, 8),                      // rate of turn: -127
            (123, 10),                     // sog 12.3 knots
            (1, 1),                        // accuracy
            ((-73451640i64 as u64) & 0xFFFFFFF, 28), // lon -122.4194
            (22664940, 27),                // lat 37.7749
            (454, 12),                     // cog 45.4
            (180, 9),                      // heading
            (60, 6),                       // second 60: not available
            (1, 2),                        // maneuver
            (0, 3),                        // spare
            (1, 1),                        // raim
            (81956, 19),                   // radio status
        ])
    }

    #[test]
    fn test_parse_class_a_position_report() {
        let message = handle(&class_a_payload(), Station::MobileStation, false).unwrap();
        let report = match message {
            ParsedMessage::PositionReport(report) => report,
            other => panic!("expected PositionReport, got {:?}", other),
        };
        assert_eq!(report.message_type, 3);
        assert_eq!(report.mmsi, 366123456);
        assert_eq!(report.nav_status, NavigationStatus::Moored);
        assert_eq!(report.rate_of_turn, -127);
        assert_eq!(report.sog_knots, 12.3);
        assert!(report.position_accuracy);
        assert!((report.longitude - -122.4194).abs() < 1e-9);
        assert!((report.latitude - 37.7749).abs() < 1e-9);
        assert_eq!(report.cog, 45.4);
        assert_eq!(report.heading_true, 180.0);
        // Wire second 60 is canonicalized, never surfaced raw.
        assert_eq!(report.timestamp_seconds, 255);
        assert_eq!(report.maneuver, 1);
        assert!(report.raim);
        assert_eq!(report.radio_status, 81956);
    }

    #[test]
    fn test_latlon_accessors_reject_markers() {
        let mut report = match handle(&class_a_payload(), Station::Other, false).unwrap() {
            ParsedMessage::PositionReport(report) => report,
            _ => unreachable!(),
        };
        assert!(LatLon::latitude(&report).is_some());
        report.latitude = 91.0;
        report.longitude = 181.0;
        assert_eq!(LatLon::latitude(&report), None);
        assert_eq!(LatLon::longitude(&report), None);
    }

    #[test]
    fn test_unavailable_position_is_normalized() {
        // Wire markers: lon 0x6791AC0 (181 deg), lat 0x3412140 (91 deg),
        // sog 1023, heading 511.
        let bv = pack(&[
            (1, 6),
            (0, 2),
            (244699008, 30),
            (15, 4),
            (128, 8),
            (1023, 10),
            (0, 1),
            (0x6791AC0, 28),
            (0x3412140, 27),
            (3600, 12),
            (511, 9),
            (40, 6),
            (0, 2),
            (0, 3),
            (0, 1),
            (0, 19),
        ]);
        let report = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::PositionReport(report) => report,
            _ => unreachable!(),
        };
        assert_eq!(report.longitude, 181.0);
        assert_eq!(report.latitude, 91.0);
        assert_eq!(report.sog_knots, -1.0);
        assert_eq!(report.cog, -1.0);
        assert_eq!(report.heading_true, -1.0);
        assert_eq!(report.rate_of_turn, -128);
    }

    #[test]
    fn test_short_payload_rejected() {
        let bv = pack(&[(1, 6), (0, 2), (244699008, 30)]);
        assert!(matches!(
            handle(&bv, Station::Other, false),
            Err(ParseError::TooShort(_))
        ));
    }
}

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
use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------

/// Altitude wire marker for "not available" (12-bit field).
pub const ALTITUDE_UNAVAILABLE: u16 = 4095;

/// Type 9: Standard SAR Aircraft Position Report
///
/// Position report from search-and-rescue aircraft. Unlike surface
/// position reports the speed is in whole knots (0-1022) and there is no
/// true-heading field; bits 128-133 carry the UTC second.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SarAircraftPositionReport {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the aircraft.
    pub mmsi: u32,

    /// Altitude in meters; 4095 = not available, 4094 = 4094 or higher.
    pub altitude: u16,

    /// Speed over ground in knots; -1.0 when not available (raw 1023).
    pub sog_knots: f64,

    /// Position accuracy flag: true = high (<= 10 m).
    pub position_accuracy: bool,

    /// Longitude in decimal degrees; 181.0 when not available.
    pub longitude: f64,

    /// Latitude in decimal degrees; 91.0 when not available.
    pub latitude: f64,

    /// Course over ground in degrees; -1.0 when not available.
    pub cog: f64,

    /// UTC second of the position fix; 255 when not available.
    pub timestamp_seconds: u8,

    /// Data terminal equipment ready flag.
    pub dte: bool,

    /// Assigned-mode flag.
    pub assigned: bool,

    /// Receiver Autonomous Integrity Monitoring flag.
    pub raim: bool,

    /// Radio status (20 bits).
    pub radio_status: u32,
}

impl LatLon for SarAircraftPositionReport {
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

// Altitude 38-49, SOG 50-59 (whole knots), accuracy 60, longitude 61,
// latitude 89, COG 116-127, second 128-133, regional 134-141, DTE 142,
// assigned 146, RAIM 147, radio 148-167.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 168 {
        return Err(ParseError::TooShort(format!(
            "SAR aircraft position report too short: {} bits (168 required)",
            bv.len()
        )));
    }

    let sog_raw = pick_u64(bv, 50, 10)?;
    let sog_knots = if sog_raw == 1023 {
        -1.0
    } else {
        sog_raw as f64
    };

    Ok(ParsedMessage::SarAircraftPositionReport(
        SarAircraftPositionReport {
            own_vessel,
            station,
            mmsi: pick_u64(bv, 8, 30)? as u32,
            altitude: pick_u64(bv, 38, 12)? as u16,
            sog_knots,
            position_accuracy: pick_bool(bv, 60)?,
            longitude: normalize::lon(pick_lon(bv, 61)?),
            latitude: normalize::lat(pick_lat(bv, 89)?),
            cog: normalize::course(pick_u64(bv, 116, 12)? as f64 / 10.0),
            timestamp_seconds: normalize::timestamp(pick_u64(bv, 128, 6)? as u8),
            dte: pick_bool(bv, 142)?,
            assigned: pick_bool(bv, 146)?,
            raim: pick_bool(bv, 147)?,
            radio_status: pick_u64(bv, 148, 20)? as u32,
        },
    ))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;

    #[test]
    fn test_parse_sar_aircraft_report() {
        let bv = pack(&[
            (9, 6),
            (0, 2),
            (111232506, 30),
            (500, 12),      // altitude
            (350, 10),      // 350 knots
            (1, 1),
            (2644800, 28),  // lon 4.408
            (30737880, 27), // lat 51.2298
            (2189, 12),     // cog 218.9
            (25, 6),        // second
            (0, 8),         // regional
            (1, 1),         // dte
            (0, 3),         // spare
            (0, 1),         // assigned
            (1, 1),         // raim
            (0x81234, 20),  // radio
        ]);
        let report = match handle(&bv, Station::MobileStation, false).unwrap() {
            ParsedMessage::SarAircraftPositionReport(report) => report,
            other => panic!("expected SarAircraftPositionReport, got {:?}", other),
        };
        assert_eq!(report.mmsi, 111232506);
        assert_eq!(report.altitude, 500);
        // SAR speed is whole knots, never divided by ten.
        assert_eq!(report.sog_knots, 350.0);
        assert!((report.longitude - 4.408).abs() < 1e-9);
        assert!((report.latitude - 51.2298).abs() < 1e-9);
        assert_eq!(report.cog, 218.9);
        assert_eq!(report.timestamp_seconds, 25);
        assert!(report.dte);
        assert!(report.raim);
        assert_eq!(report.radio_status, 0x81234);
    }

    #[test]
    fn test_unavailable_markers() {
        let bv = pack(&[
            (9, 6),
            (0, 2),
            (111232506, 30),
            (4095, 12),
            (1023, 10),
            (0, 1),
            (0x6791AC0, 28),
            (0x3412140, 27),
            (3600, 12),
            (60, 6),
            (0, 8),
            (0, 1),
            (0, 3),
            (0, 1),
            (0, 1),
            (0, 20),
        ]);
        let report = match handle(&bv, Station::Other, false).unwrap() {
            ParsedMessage::SarAircraftPositionReport(report) => report,
            _ => unreachable!(),
        };
        assert_eq!(report.altitude, ALTITUDE_UNAVAILABLE);
        assert_eq!(report.sog_knots, -1.0);
        assert_eq!(report.longitude, 181.0);
        assert_eq!(report.latitude, 91.0);
        assert_eq!(report.cog, -1.0);
        assert_eq!(report.timestamp_seconds, 255);
        assert_eq!(LatLon::latitude(&report), None);
    }
}

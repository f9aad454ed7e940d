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
use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------

/// Type 23: Group Assignment Command
///
/// Base station command to every station of a given type inside a
/// region: reporting interval, quiet time and Tx/Rx mode.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupAssignmentCommand {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the base station.
    pub mmsi: u32,

    /// North-east corner longitude; 181.0 when not available.
    pub ne_longitude: f64,

    /// North-east corner latitude; 91.0 when not available.
    pub ne_latitude: f64,

    /// South-west corner longitude; 181.0 when not available.
    pub sw_longitude: f64,

    /// South-west corner latitude; 91.0 when not available.
    pub sw_latitude: f64,

    /// Station type filter (4 bits).
    pub station_type: u8,

    /// Ship and cargo type filter.
    pub ship_type: u8,

    /// Tx/Rx mode (2 bits).
    pub txrx_mode: u8,

    /// Reporting interval code (4 bits).
    pub interval: u8,

    /// Quiet time in minutes, 0 = none (4 bits).
    pub quiet_time: u8,
}

// -------------------------------------------------------------------------------------------------

// Region corners at 40-109 in 1/10 minute, station type at 110, ship
// type at 114, Tx/Rx at 144, interval at 146, quiet time at 150.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 154 {
        return Err(ParseError::TooShort(format!(
            "group assignment too short: {} bits (154 required)",
            bv.len()
        )));
    }

    Ok(ParsedMessage::GroupAssignmentCommand(
        GroupAssignmentCommand {
            own_vessel,
            station,
            mmsi: pick_u64(bv, 8, 30)? as u32,
            ne_longitude: normalize::lon(pick_i64(bv, 40, 18)? as f64 / 600.0),
            ne_latitude: normalize::lat(pick_i64(bv, 58, 17)? as f64 / 600.0),
            sw_longitude: normalize::lon(pick_i64(bv, 75, 18)? as f64 / 600.0),
            sw_latitude: normalize::lat(pick_i64(bv, 93, 17)? as f64 / 600.0),
            station_type: pick_u64(bv, 110, 4)? as u8,
            ship_type: pick_u64(bv, 114, 8)? as u8,
            txrx_mode: pick_u64(bv, 144, 2)? as u8,
            interval: pick_u64(bv, 146, 4)? as u8,
            quiet_time: pick_u64(bv, 150, 4)? as u8,
        },
    ))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;

    #[test]
    fn test_parse_group_assignment() {
        let bv = pack(&[
            (23, 6),
            (0, 2),
            (2268120, 30),
            (0, 2),       // spare
            (1800, 18),   // ne lon 3.0
            (31200, 17),  // ne lat 52.0
            (600, 18),    // sw lon 1.0
            (30600, 17),  // sw lat 51.0
            (6, 4),       // station type: inland waterways
            (70, 8),      // ship type: cargo
            (0, 22),      // spare
            (1, 2),       // txrx
            (9, 4),       // interval
            (3, 4),       // quiet time
            (0, 6),       // spare
        ]);
        let command = match handle(&bv, Station::BaseStation, false).unwrap() {
            ParsedMessage::GroupAssignmentCommand(command) => command,
            other => panic!("expected GroupAssignmentCommand, got {:?}", other),
        };
        assert_eq!(command.mmsi, 2268120);
        assert!((command.ne_longitude - 3.0).abs() < 1e-9);
        assert!((command.ne_latitude - 52.0).abs() < 1e-9);
        assert!((command.sw_longitude - 1.0).abs() < 1e-9);
        assert!((command.sw_latitude - 51.0).abs() < 1e-9);
        assert_eq!(command.station_type, 6);
        assert_eq!(command.ship_type, 70);
        assert_eq!(command.txrx_mode, 1);
        assert_eq!(command.interval, 9);
        assert_eq!(command.quiet_time, 3);
    }

    #[test]
    fn test_short_payload_rejected() {
        let bv = pack(&[(23, 6), (0, 2), (2268120, 30)]);
        assert!(matches!(
            handle(&bv, Station::BaseStation, false),
            Err(ParseError::TooShort(_))
        ));
    }
}

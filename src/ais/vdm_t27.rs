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

/// Type 27: Long Range AIS Broadcast Message
///
/// Satellite-received position report, 96 bits. Position uses the
/// coarse 0.1-minute scale, speed is whole knots (0-62, raw 63 = not
/// available) and course is whole degrees (raw 511 = not available).
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LongRangePositionReport {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the transmitting vessel.
    pub mmsi: u32,

    /// Position accuracy flag: true = high (<= 10 m).
    pub position_accuracy: bool,

    /// Receiver Autonomous Integrity Monitoring flag.
    pub raim: bool,

    /// Navigational status.
    pub nav_status: NavigationStatus,

    /// Longitude in decimal degrees; 181.0 when not available.
    pub longitude: f64,

    /// Latitude in decimal degrees; 91.0 when not available.
    pub latitude: f64,

    /// Speed over ground in knots; -1.0 when not available.
    pub sog_knots: f64,

    /// Course over ground in degrees; -1.0 when not available.
    pub cog: f64,

    /// True when the position is a current GNSS fix, false when it is
    /// older than the latency allowance.
    pub gnss: bool,
}

impl LatLon for LongRangePositionReport {
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

// Accuracy 38, RAIM 39, status 40-43, longitude 44-61 (18 bits),
// latitude 62-78 (17 bits), speed 79-84, course 85-93, GNSS 94.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 95 {
        return Err(ParseError::TooShort(format!(
            "long range broadcast too short: {} bits (95 required)",
            bv.len()
        )));
    }

    let sog_raw = pick_u64(bv, 79, 6)?;
    let sog_knots = if sog_raw == 63 { -1.0 } else { sog_raw as f64 };
    let cog_raw = pick_u64(bv, 85, 9)?;
    let cog = if cog_raw == 511 { -1.0 } else { cog_raw as f64 };

    Ok(ParsedMessage::LongRangePositionReport(
        LongRangePositionReport {
            own_vessel,
            station,
            mmsi: pick_u64(bv, 8, 30)? as u32,
            position_accuracy: pick_bool(bv, 38)?,
            raim: pick_bool(bv, 39)?,
            nav_status: NavigationStatus::from(pick_u64(bv, 40, 4)? as u8),
            longitude: normalize::lon(pick_i64(bv, 44, 18)? as f64 / 600.0),
            latitude: normalize::lat(pick_i64(bv, 62, 17)? as f64 / 600.0),
            sog_knots,
            cog: normalize::course(cog),
            gnss: pick_bool(bv, 94)?,
        },
    ))
}

// -------------------------------------------------------------------------------------------------

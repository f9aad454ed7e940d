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

/// Type 19: Extended Class B Position Report
///
/// Class B position report extended with static data (name, ship type,
/// dimensions, fix type). 312 bits; the position block matches type 18.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendedClassBReport {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the transmitting vessel.
    pub mmsi: u32,

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

    /// Vessel name (20 six-bit characters), trailing padding trimmed.
    pub vessel_name: String,

    /// Ship and cargo type code.
    pub ship_type: u8,

    /// Distance from reference point to bow, meters.
    pub dimension_to_bow: u16,

    /// Distance from reference point to stern, meters.
    pub dimension_to_stern: u16,

    /// Distance from reference point to port side, meters.
    pub dimension_to_port: u8,

    /// Distance from reference point to starboard side, meters.
    pub dimension_to_starboard: u8,

    /// EPFD fix type.
    pub fix_type: u8,

    /// Receiver Autonomous Integrity Monitoring flag.
    pub raim: bool,

    /// Data terminal equipment ready flag.
    pub dte: bool,

    /// Assigned-mode flag.
    pub assigned: bool,
}

impl LatLon for ExtendedClassBReport {
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

// Position block as type 18 (SOG 46, lon 57, lat 85, COG 112, heading
// 124, second 133), then name at 143, ship type at 263, dimensions at
// 271-300, fix type at 301, RAIM 305, DTE 306, assigned 307.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 312 {
        return Err(ParseError::TooShort(format!(
            "extended Class B report too short: {} bits (312 required)",
            bv.len()
        )));
    }

    Ok(ParsedMessage::ExtendedClassBReport(ExtendedClassBReport {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        sog_knots: normalize::speed(pick_speed(bv, 46)?),
        position_accuracy: pick_bool(bv, 56)?,
        longitude: normalize::lon(pick_lon(bv, 57)?),
        latitude: normalize::lat(pick_lat(bv, 85)?),
        cog: normalize::course(pick_u64(bv, 112, 12)? as f64 / 10.0),
        heading_true: normalize::heading(pick_heading(bv, 124)?),
        timestamp_seconds: normalize::timestamp(pick_u64(bv, 133, 6)? as u8),
        vessel_name: pick_string(bv, 143, 120)?,
        ship_type: pick_u64(bv, 263, 8)? as u8,
        dimension_to_bow: pick_u64(bv, 271, 9)? as u16,
        dimension_to_stern: pick_u64(bv, 280, 9)? as u16,
        dimension_to_port: pick_u64(bv, 289, 6)? as u8,
        dimension_to_starboard: pick_u64(bv, 295, 6)? as u8,
        fix_type: pick_u64(bv, 301, 4)? as u8,
        raim: pick_bool(bv, 305)?,
        dte: pick_bool(bv, 306)?,
        assigned: pick_bool(bv, 307)?,
    }))
}

// -------------------------------------------------------------------------------------------------

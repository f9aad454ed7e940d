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

/// Type 21: Aid-to-Navigation Report
///
/// Position and status of buoys, lighthouses and virtual aids. The name
/// may continue in a variable extension after the fixed 272-bit block.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AidToNavigationReport {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the aid station.
    pub mmsi: u32,

    /// Aid type code (5 bits, ITU-R M.1371 table 74).
    pub aid_type: u8,

    /// Aid name including any extension, trailing padding trimmed.
    pub name: String,

    /// Position accuracy flag: true = high (<= 10 m).
    pub position_accuracy: bool,

    /// Longitude in decimal degrees; 181.0 when not available.
    pub longitude: f64,

    /// Latitude in decimal degrees; 91.0 when not available.
    pub latitude: f64,

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

    /// UTC second of the position fix; 255 when not available.
    pub timestamp_seconds: u8,

    /// True when the aid is off its charted position.
    pub off_position: bool,

    /// Regional reserved bits.
    pub regional: u8,

    /// Receiver Autonomous Integrity Monitoring flag.
    pub raim: bool,

    /// True for a virtual aid (no physical structure at the position).
    pub virtual_aid: bool,

    /// Assigned-mode flag.
    pub assigned: bool,
}

impl LatLon for AidToNavigationReport {
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

// Aid type at 38, name at 43 (120 bits), accuracy 163, longitude 164,
// latitude 192, dimensions 219-248, fix type 249, second 253, flags
// 259-270, name extension from 272 in whole 6-bit groups.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 272 {
        return Err(ParseError::TooShort(format!(
            "aid-to-navigation report too short: {} bits (272 required)",
            bv.len()
        )));
    }

    let mut name = pick_string(bv, 43, 120)?;
    if bv.len() > 272 {
        let remaining = bv.len() - 272;
        let extension_bits = remaining - remaining % 6;
        if extension_bits > 0 {
            name.push_str(&pick_string(bv, 272, extension_bits)?);
        }
    }

    Ok(ParsedMessage::AidToNavigationReport(AidToNavigationReport {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        aid_type: pick_u64(bv, 38, 5)? as u8,
        name,
        position_accuracy: pick_bool(bv, 163)?,
        longitude: normalize::lon(pick_lon(bv, 164)?),
        latitude: normalize::lat(pick_lat(bv, 192)?),
        dimension_to_bow: pick_u64(bv, 219, 9)? as u16,
        dimension_to_stern: pick_u64(bv, 228, 9)? as u16,
        dimension_to_port: pick_u64(bv, 237, 6)? as u8,
        dimension_to_starboard: pick_u64(bv, 243, 6)? as u8,
        fix_type: pick_u64(bv, 249, 4)? as u8,
        timestamp_seconds: normalize::timestamp(pick_u64(bv, 253, 6)? as u8),
        off_position: pick_bool(bv, 259)?,
        regional: pick_u64(bv, 260, 8)? as u8,
        raim: pick_bool(bv, 268)?,
        virtual_aid: pick_bool(bv, 269)?,
        assigned: pick_bool(bv, 270)?,
    }))
}

// -------------------------------------------------------------------------------------------------

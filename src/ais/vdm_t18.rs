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

/// Type 18: Standard Class B Position Report
///
/// Position report from Class B "carrier sense" equipment. The layout
/// matches the Class A report through the course field but carries the
/// heading at bit 124 and a block of capability flags instead of
/// navigation status and rate of turn.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardClassBReport {
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

    /// Carrier sense unit flag: true = CS, false = SOTDMA.
    pub cs_unit: bool,

    /// Display available flag.
    pub display: bool,

    /// DSC capability flag.
    pub dsc: bool,

    /// Whole-marine-band flag.
    pub band: bool,

    /// Message 22 frequency management capability flag.
    pub msg22: bool,

    /// Assigned-mode flag.
    pub assigned: bool,

    /// Receiver Autonomous Integrity Monitoring flag.
    pub raim: bool,

    /// Radio status (20 bits).
    pub radio_status: u32,
}

impl LatLon for StandardClassBReport {
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

/// AIS VDM/VDO type 18: Standard Class B Position Report
///
/// The message structure is:
/// - Bits 0-5: Message Type = 18
/// - Bits 8-37: MMSI (30 bits)
/// - Bits 46-55: Speed Over Ground (10 bits, 1/10 knot)
/// - Bit 56: Position Accuracy
/// - Bits 57-84: Longitude (28 bits)
/// - Bits 85-111: Latitude (27 bits)
/// - Bits 112-123: Course Over Ground (12 bits, 1/10 degree)
/// - Bits 124-132: True Heading (9 bits)
/// - Bits 133-138: UTC Second (6 bits)
/// - Bits 141-145: CS/display/DSC/band/msg22 flags
/// - Bit 146: Assigned, Bit 147: RAIM
/// - Bits 148-167: Radio status (20 bits)
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 168 {
        return Err(ParseError::TooShort(format!(
            "Class B position report too short: {} bits (168 required)",
            bv.len()
        )));
    }

    Ok(ParsedMessage::StandardClassBReport(StandardClassBReport {
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
        cs_unit: pick_bool(bv, 141)?,
        display: pick_bool(bv, 142)?,
        dsc: pick_bool(bv, 143)?,
        band: pick_bool(bv, 144)?,
        msg22: pick_bool(bv, 145)?,
        assigned: pick_bool(bv, 146)?,
        raim: pick_bool(bv, 147)?,
        radio_status: pick_u64(bv, 148, 20)? as u32,
    }))
}

// -------------------------------------------------------------------------------------------------

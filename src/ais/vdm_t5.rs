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

/// Type 5: Static and Voyage Related Data
///
/// Ship identity and voyage particulars from a Class A transponder.
/// Always transmitted as a two-sentence group (424 bits).
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticAndVoyageData {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the vessel.
    pub mmsi: u32,

    /// AIS protocol version (2 bits).
    pub ais_version: u8,

    /// IMO ship identification number; 0 when not available.
    pub imo: u32,

    /// Radio call sign (7 six-bit characters), trailing padding trimmed.
    pub call_sign: String,

    /// Vessel name (20 six-bit characters), trailing padding trimmed.
    pub vessel_name: String,

    /// Ship and cargo type code
    /// (see [`ship_type_to_str`](crate::ais::ship_type_to_str)).
    pub ship_type: u8,

    /// Distance from reference point to bow, meters.
    pub dimension_to_bow: u16,

    /// Distance from reference point to stern, meters.
    pub dimension_to_stern: u16,

    /// Distance from reference point to port side, meters.
    pub dimension_to_port: u8,

    /// Distance from reference point to starboard side, meters.
    pub dimension_to_starboard: u8,

    /// EPFD fix type (see [`fix_type_to_str`](crate::ais::fix_type_to_str)).
    pub fix_type: u8,

    /// Estimated time of arrival: month (0 = N/A).
    pub eta_month: u8,

    /// Estimated time of arrival: day (0 = N/A).
    pub eta_day: u8,

    /// Estimated time of arrival: hour (24 = N/A).
    pub eta_hour: u8,

    /// Estimated time of arrival: minute (60 = N/A).
    pub eta_minute: u8,

    /// Maximum present static draught in meters (1/10 m resolution).
    pub draught: f64,

    /// Destination (20 six-bit characters), trailing padding trimmed.
    pub destination: String,

    /// Data terminal equipment ready flag.
    pub dte: bool,
}

// -------------------------------------------------------------------------------------------------

/// AIS VDM/VDO type 5: Static and Voyage Related Data
///
/// Fixed layout: MMSI at bit 8, AIS version at 38, IMO at 40, callsign
/// at 70 (42 bits), name at 112 (120 bits), ship type at 232, dimensions
/// at 240-269, fix type at 270, ETA at 274-293, draught at 294,
/// destination at 302 (120 bits), DTE at 422. Some transmitters omit the
/// final spare bits, so everything through the destination (422 bits) is
/// required and the DTE flag defaults to false when absent.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 422 {
        return Err(ParseError::TooShort(format!(
            "static and voyage data too short: {} bits (422 required)",
            bv.len()
        )));
    }

    let dte = if bv.len() > 422 {
        pick_bool(bv, 422)?
    } else {
        false
    };

    Ok(ParsedMessage::StaticAndVoyageData(StaticAndVoyageData {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        ais_version: pick_u64(bv, 38, 2)? as u8,
        imo: pick_u64(bv, 40, 30)? as u32,
        call_sign: pick_string(bv, 70, 42)?,
        vessel_name: pick_string(bv, 112, 120)?,
        ship_type: pick_u64(bv, 232, 8)? as u8,
        dimension_to_bow: pick_u64(bv, 240, 9)? as u16,
        dimension_to_stern: pick_u64(bv, 249, 9)? as u16,
        dimension_to_port: pick_u64(bv, 258, 6)? as u8,
        dimension_to_starboard: pick_u64(bv, 264, 6)? as u8,
        fix_type: pick_u64(bv, 270, 4)? as u8,
        eta_month: pick_u64(bv, 274, 4)? as u8,
        eta_day: pick_u64(bv, 278, 5)? as u8,
        eta_hour: pick_u64(bv, 283, 5)? as u8,
        eta_minute: pick_u64(bv, 288, 6)? as u8,
        draught: pick_u64(bv, 294, 8)? as f64 / 10.0,
        destination: pick_string(bv, 302, 120)?,
        dte,
    }))
}

// -------------------------------------------------------------------------------------------------

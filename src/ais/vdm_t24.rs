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

/// Payload of a type 24 report, selected by the 2-bit part indicator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StaticDataPart {
    /// Part A carries the vessel name.
    PartA {
        /// Vessel name (20 six-bit characters), trailing padding trimmed.
        vessel_name: String,
    },
    /// Part B carries ship type, vendor, callsign and dimensions.
    PartB {
        /// Ship and cargo type code.
        ship_type: u8,
        /// Vendor ID (3 six-bit characters).
        vendor_id: String,
        /// Unit model code (4 bits).
        unit_model: u8,
        /// Unit serial number (20 bits).
        serial_number: u32,
        /// Radio call sign (7 six-bit characters), trailing padding
        /// trimmed.
        call_sign: String,
        /// Distance from reference point to bow, meters.
        dimension_to_bow: u16,
        /// Distance from reference point to stern, meters.
        dimension_to_stern: u16,
        /// Distance from reference point to port side, meters.
        dimension_to_port: u8,
        /// Distance from reference point to starboard side, meters.
        dimension_to_starboard: u8,
    },
}

impl Default for StaticDataPart {
    fn default() -> StaticDataPart {
        StaticDataPart::PartA {
            vessel_name: String::new(),
        }
    }
}

/// Type 24: Static Data Report
///
/// Class B static data, transmitted as two independent single-slot
/// messages distinguished by the part indicator at bits 38-39.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticDataReport {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the vessel.
    pub mmsi: u32,

    /// Part A or part B content.
    pub part: StaticDataPart,
}

// -------------------------------------------------------------------------------------------------

// Part A: name at 40 (120 bits). Part B: ship type at 40, vendor at
// 48 (18 bits), model at 66, serial at 70, callsign at 90 (42 bits),
// dimensions at 132-161. Part indicator values 2 and 3 are invalid.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 40 {
        return Err(ParseError::TooShort(format!(
            "static data report too short: {} bits (40 required)",
            bv.len()
        )));
    }

    let part_number = pick_u64(bv, 38, 2)?;
    let part = match part_number {
        0 => {
            if bv.len() < 160 {
                return Err(ParseError::TooShort(format!(
                    "static data report part A too short: {} bits (160 required)",
                    bv.len()
                )));
            }
            StaticDataPart::PartA {
                vessel_name: pick_string(bv, 40, 120)?,
            }
        }
        1 => {
            if bv.len() < 162 {
                return Err(ParseError::TooShort(format!(
                    "static data report part B too short: {} bits (162 required)",
                    bv.len()
                )));
            }
            StaticDataPart::PartB {
                ship_type: pick_u64(bv, 40, 8)? as u8,
                vendor_id: pick_string(bv, 48, 18)?,
                unit_model: pick_u64(bv, 66, 4)? as u8,
                serial_number: pick_u64(bv, 70, 20)? as u32,
                call_sign: pick_string(bv, 90, 42)?,
                dimension_to_bow: pick_u64(bv, 132, 9)? as u16,
                dimension_to_stern: pick_u64(bv, 141, 9)? as u16,
                dimension_to_port: pick_u64(bv, 150, 6)? as u8,
                dimension_to_starboard: pick_u64(bv, 156, 6)? as u8,
            }
        }
        other => {
            return Err(ParseError::InvalidBitfield(format!(
                "invalid static data report part indicator {}",
                other
            )))
        }
    };

    Ok(ParsedMessage::StaticDataReport(StaticDataReport {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        part,
    }))
}

// -------------------------------------------------------------------------------------------------

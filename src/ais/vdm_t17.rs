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

/// Type 17: DGNSS Broadcast Binary Message
///
/// Differential GNSS corrections broadcast by a base station. The
/// reference position uses the coarse 0.1-minute scale; the correction
/// data is stored raw.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DgnssBroadcastMessage {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the base station.
    pub mmsi: u32,

    /// Reference longitude in decimal degrees; 181.0 when not available.
    pub longitude: f64,

    /// Reference latitude in decimal degrees; 91.0 when not available.
    pub latitude: f64,

    /// DGNSS correction data, packed to whole bytes.
    pub data: Vec<u8>,

    /// Number of bits carried in `data`.
    pub data_bit_length: usize,
}

// -------------------------------------------------------------------------------------------------

// Longitude 40-57 (18 bits) and latitude 58-74 (17 bits) in 1/10
// minute; correction data from bit 80.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 80 {
        return Err(ParseError::TooShort(format!(
            "DGNSS broadcast too short: {} bits (80 required)",
            bv.len()
        )));
    }

    let data = pick_bytes(bv, 80, bv.len() - 80)?;
    let data_bit_length = data.len() * 8;

    Ok(ParsedMessage::DgnssBroadcastMessage(DgnssBroadcastMessage {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        longitude: normalize::lon(pick_i64(bv, 40, 18)? as f64 / 600.0),
        latitude: normalize::lat(pick_i64(bv, 58, 17)? as f64 / 600.0),
        data,
        data_bit_length,
    }))
}

// -------------------------------------------------------------------------------------------------

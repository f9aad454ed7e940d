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

/// Type 22: Channel Management
///
/// Base station assignment of VHF channels for a geographic region. The
/// region corners use the coarse 0.1-minute scale. When the `addressed`
/// flag is set the corner fields carry the two addressed MMSIs instead
/// of coordinates; the decoded corners are then not meaningful.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelManagement {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the base station.
    pub mmsi: u32,

    /// Channel A number (12 bits).
    pub channel_a: u16,

    /// Channel B number (12 bits).
    pub channel_b: u16,

    /// Tx/Rx mode (4 bits).
    pub txrx_mode: u8,

    /// Low power flag.
    pub power: bool,

    /// North-east corner longitude; 181.0 when not available.
    pub ne_longitude: f64,

    /// North-east corner latitude; 91.0 when not available.
    pub ne_latitude: f64,

    /// South-west corner longitude; 181.0 when not available.
    pub sw_longitude: f64,

    /// South-west corner latitude; 91.0 when not available.
    pub sw_latitude: f64,

    /// True when the assignment addresses two stations instead of a
    /// region.
    pub addressed: bool,

    /// Channel A bandwidth flag.
    pub band_a: bool,

    /// Channel B bandwidth flag.
    pub band_b: bool,

    /// Transitional zone size (3 bits).
    pub zone_size: u8,
}

// -------------------------------------------------------------------------------------------------

// Channels at 40/52, Tx/Rx at 64, power at 68, region corners at
// 69-138 in 1/10 minute, flags at 139-144.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 145 {
        return Err(ParseError::TooShort(format!(
            "channel management too short: {} bits (145 required)",
            bv.len()
        )));
    }

    Ok(ParsedMessage::ChannelManagement(ChannelManagement {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        channel_a: pick_u64(bv, 40, 12)? as u16,
        channel_b: pick_u64(bv, 52, 12)? as u16,
        txrx_mode: pick_u64(bv, 64, 4)? as u8,
        power: pick_bool(bv, 68)?,
        ne_longitude: normalize::lon(pick_i64(bv, 69, 18)? as f64 / 600.0),
        ne_latitude: normalize::lat(pick_i64(bv, 87, 17)? as f64 / 600.0),
        sw_longitude: normalize::lon(pick_i64(bv, 104, 18)? as f64 / 600.0),
        sw_latitude: normalize::lat(pick_i64(bv, 122, 17)? as f64 / 600.0),
        addressed: pick_bool(bv, 139)?,
        band_a: pick_bool(bv, 140)?,
        band_b: pick_bool(bv, 141)?,
        zone_size: pick_u64(bv, 142, 3)? as u8,
    }))
}

// -------------------------------------------------------------------------------------------------

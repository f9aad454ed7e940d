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

/// Type 8: Binary Broadcast Message
///
/// Broadcast counterpart of type 6. The message can span 1 to 4 NMEA
/// sentences with a maximum payload of 1008 bits; interpretation of the
/// application data depends on the DAC (Designated Area Code) and FID
/// (Functional ID) fields. The raw bytes are stored for the application
/// layer.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryBroadcastMessage {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the broadcasting station.
    pub mmsi: u32,

    /// Designated Area Code (10 bits). Common values: 1 international,
    /// 200 European inland waterways, 316/366 St. Lawrence Seaway.
    pub dac: u16,

    /// Functional ID (6 bits), the message subtype within the DAC.
    pub fid: u8,

    /// Binary payload (up to 952 bits after DAC/FID), packed to whole
    /// bytes.
    pub data: Vec<u8>,

    /// Number of bits carried in `data`.
    pub data_bit_length: usize,
}

// -------------------------------------------------------------------------------------------------

/// AIS VDM/VDO type 8: Binary Broadcast Message
///
/// The message structure is:
/// - Bits 0-5: Message Type (6 bits) = 8
/// - Bits 6-7: Repeat Indicator (2 bits)
/// - Bits 8-37: MMSI (30 bits)
/// - Bits 38-39: Spare (2 bits)
/// - Bits 40-49: Designated Area Code (10 bits)
/// - Bits 50-55: Functional ID (6 bits)
/// - Bits 56+: Data payload (variable, up to 952 bits)
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 56 {
        return Err(ParseError::TooShort(format!(
            "binary broadcast message too short: {} bits (56 required)",
            bv.len()
        )));
    }

    let data = pick_bytes(bv, 56, bv.len() - 56)?;
    let data_bit_length = data.len() * 8;

    Ok(ParsedMessage::BinaryBroadcastMessage(
        BinaryBroadcastMessage {
            own_vessel,
            station,
            mmsi: pick_u64(bv, 8, 30)? as u32,
            dac: pick_u64(bv, 40, 10)? as u16,
            fid: pick_u64(bv, 50, 6)? as u8,
            data,
            data_bit_length,
        },
    ))
}

// -------------------------------------------------------------------------------------------------

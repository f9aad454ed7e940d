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

/// Structured application identifier: DAC plus FID (16 bits).
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationId {
    /// Designated Area Code (10 bits).
    pub dac: u16,
    /// Functional ID (6 bits).
    pub fid: u8,
}

/// Type 25: Single Slot Binary Message
///
/// Short binary message fitting one TDMA slot (at most 168 bits). Two
/// flag bits select whether a destination MMSI and a structured
/// application id precede the data, shifting its start offset.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SingleSlotBinaryMessage {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the sender.
    pub mmsi: u32,

    /// MMSI of the addressed station, when the addressed flag is set.
    pub dest_mmsi: Option<u32>,

    /// Application id, when the structured flag is set.
    pub app_id: Option<ApplicationId>,

    /// Binary payload, packed to whole bytes.
    pub data: Vec<u8>,

    /// Number of bits carried in `data`.
    pub data_bit_length: usize,
}

/// Type 26: Multiple Slot Binary Message
///
/// As type 25 but spanning several slots and carrying a trailing 20-bit
/// radio status.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultipleSlotBinaryMessage {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the sender.
    pub mmsi: u32,

    /// MMSI of the addressed station, when the addressed flag is set.
    pub dest_mmsi: Option<u32>,

    /// Application id, when the structured flag is set.
    pub app_id: Option<ApplicationId>,

    /// Binary payload, packed to whole bytes.
    pub data: Vec<u8>,

    /// Number of bits carried in `data`.
    pub data_bit_length: usize,

    /// Radio status (20 bits, last bits of the payload).
    pub radio_status: u32,
}

// -------------------------------------------------------------------------------------------------

// Flags at 38 (addressed) and 39 (structured); optional destination
// MMSI (30 bits) and application id (16 bits) shift the data start.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 40 {
        return Err(ParseError::TooShort(format!(
            "slot binary message too short: {} bits (40 required)",
            bv.len()
        )));
    }

    let message_type = pick_u64(bv, 0, 6)? as u8;
    let mmsi = pick_u64(bv, 8, 30)? as u32;
    let addressed = pick_bool(bv, 38)?;
    let structured = pick_bool(bv, 39)?;

    let mut offset = 40;
    let dest_mmsi = if addressed {
        let dest = pick_u64(bv, offset, 30)? as u32;
        offset += 30;
        Some(dest)
    } else {
        None
    };
    let app_id = if structured {
        let id = ApplicationId {
            dac: pick_u64(bv, offset, 10)? as u16,
            fid: pick_u64(bv, offset + 10, 6)? as u8,
        };
        offset += 16;
        Some(id)
    } else {
        None
    };

    if message_type == 26 {
        // The radio status occupies the final 20 bits after the data.
        if bv.len() < offset + 20 {
            return Err(ParseError::TooShort(format!(
                "multi-slot binary message too short: {} bits ({} required)",
                bv.len(),
                offset + 20
            )));
        }
        let data_bits = bv.len() - offset - 20;
        let data = pick_bytes(bv, offset, data_bits)?;
        let data_bit_length = data.len() * 8;
        let radio_status = pick_u64(bv, offset + data_bits, 20)? as u32;
        Ok(ParsedMessage::MultipleSlotBinaryMessage(
            MultipleSlotBinaryMessage {
                own_vessel,
                station,
                mmsi,
                dest_mmsi,
                app_id,
                data,
                data_bit_length,
                radio_status,
            },
        ))
    } else {
        let data = pick_bytes(bv, offset, bv.len() - offset)?;
        let data_bit_length = data.len() * 8;
        Ok(ParsedMessage::SingleSlotBinaryMessage(
            SingleSlotBinaryMessage {
                own_vessel,
                station,
                mmsi,
                dest_mmsi,
                app_id,
                data,
                data_bit_length,
            },
        ))
    }
}

// -------------------------------------------------------------------------------------------------

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

/// Type 6: Binary Addressed Message
///
/// Application-specific binary data addressed to a single station. The
/// payload interpretation depends on the DAC/FID pair; this decoder
/// stores the raw bytes for the application layer.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryAddressedMessage {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the sender.
    pub mmsi: u32,

    /// Sequence number (2 bits).
    pub seqno: u8,

    /// MMSI of the addressed station.
    pub dest_mmsi: u32,

    /// Retransmit flag.
    pub retransmit: bool,

    /// Designated Area Code (10 bits).
    pub dac: u16,

    /// Functional ID (6 bits).
    pub fid: u8,

    /// Binary payload, packed to whole bytes.
    pub data: Vec<u8>,

    /// Number of bits carried in `data`.
    pub data_bit_length: usize,
}

// -------------------------------------------------------------------------------------------------

/// AIS VDM/VDO type 6: Binary Addressed Message
///
/// Header: MMSI at 8, sequence number at 38, destination MMSI at 40,
/// retransmit at 70, DAC at 72, FID at 82. Application data runs from
/// bit 88 to the end of the payload (at most 920 bits).
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 88 {
        return Err(ParseError::TooShort(format!(
            "binary addressed message too short: {} bits (88 required)",
            bv.len()
        )));
    }

    let data = pick_bytes(bv, 88, bv.len() - 88)?;
    let data_bit_length = data.len() * 8;

    Ok(ParsedMessage::BinaryAddressedMessage(
        BinaryAddressedMessage {
            own_vessel,
            station,
            mmsi: pick_u64(bv, 8, 30)? as u32,
            seqno: pick_u64(bv, 38, 2)? as u8,
            dest_mmsi: pick_u64(bv, 40, 30)? as u32,
            retransmit: pick_bool(bv, 70)?,
            dac: pick_u64(bv, 72, 10)? as u16,
            fid: pick_u64(bv, 82, 6)? as u8,
            data,
            data_bit_length,
        },
    ))
}

// -------------------------------------------------------------------------------------------------

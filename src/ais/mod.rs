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

//! AIS message type dispatch and the per-type decoder bank.
//!
//! The dispatcher reads the 6-bit type code at payload offset 0 and
//! routes to one decoder module per ITU-R M.1371 message family. Each
//! decoder is a fixed sequence of bit-offset/length reads; any failed
//! read aborts the whole message, so a partially populated result is
//! never surfaced.

pub(crate) use alloc::format;
pub(crate) use alloc::string::{String, ToString};
pub(crate) use alloc::vec::Vec;

pub(crate) use crate::error::ParseError;
pub(crate) use crate::sixbit::{
    pick_bool, pick_bytes, pick_heading, pick_i64, pick_lat, pick_lon, pick_speed,
    pick_string, pick_u64, BitVec,
};
pub(crate) use crate::ParsedMessage;

pub mod normalize;

pub mod vdm_t1t2t3;
pub mod vdm_t4t11;
pub mod vdm_t5;
pub mod vdm_t6;
pub mod vdm_t7t13;
pub mod vdm_t8;
pub mod vdm_t9;
pub mod vdm_t10;
pub mod vdm_t12t14;
pub mod vdm_t15;
pub mod vdm_t16;
pub mod vdm_t17;
pub mod vdm_t18;
pub mod vdm_t19;
pub mod vdm_t20;
pub mod vdm_t21;
pub mod vdm_t22;
pub mod vdm_t23;
pub mod vdm_t24;
pub mod vdm_t25t26;
pub mod vdm_t27;

pub use vdm_t1t2t3::PositionReport;
pub use vdm_t4t11::BaseStationReport;
pub use vdm_t5::StaticAndVoyageData;
pub use vdm_t6::BinaryAddressedMessage;
pub use vdm_t7t13::{AckTarget, Acknowledgement};
pub use vdm_t8::BinaryBroadcastMessage;
pub use vdm_t9::SarAircraftPositionReport;
pub use vdm_t10::UtcDateInquiry;
pub use vdm_t12t14::{AddressedSafetyMessage, SafetyBroadcastMessage};
pub use vdm_t15::{Interrogation, InterrogationRequest};
pub use vdm_t16::{AssignmentModeCommand, AssignmentTarget};
pub use vdm_t17::DgnssBroadcastMessage;
pub use vdm_t18::StandardClassBReport;
pub use vdm_t19::ExtendedClassBReport;
pub use vdm_t20::{DataLinkManagement, SlotReservation};
pub use vdm_t21::AidToNavigationReport;
pub use vdm_t22::ChannelManagement;
pub use vdm_t23::GroupAssignmentCommand;
pub use vdm_t24::{StaticDataPart, StaticDataReport};
pub use vdm_t25t26::{ApplicationId, MultipleSlotBinaryMessage, SingleSlotBinaryMessage};
pub use vdm_t27::LongRangePositionReport;

// -------------------------------------------------------------------------------------------------

/// AIS station type, derived from the NMEA talker identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Station {
    /// `AB` — NMEA 4.0 base AIS station (also legacy `BS`).
    BaseStation,
    /// `AD` — dependent AIS base station.
    DependentBaseStation,
    /// `AI` — mobile AIS station.
    MobileStation,
    /// `AN` — aid to navigation AIS station.
    AidToNavigationStation,
    /// `AR` — AIS receiving station.
    ReceivingStation,
    /// `AS` — limited base station.
    LimitedBaseStation,
    /// `AT` — AIS transmitting station.
    TransmittingStation,
    /// `AX` — repeater AIS station.
    RepeaterStation,
    /// `SA` — physical shore AIS station.
    PhysicalShoreStation,
    /// Any other talker.
    Other,
}

impl Default for Station {
    fn default() -> Station {
        Station::Other
    }
}

impl Station {
    /// Classify a two-character NMEA talker identifier.
    pub fn from_talker(talker: &str) -> Station {
        match talker {
            "AB" | "BS" => Station::BaseStation,
            "AD" => Station::DependentBaseStation,
            "AI" => Station::MobileStation,
            "AN" => Station::AidToNavigationStation,
            "AR" => Station::ReceivingStation,
            "AS" => Station::LimitedBaseStation,
            "AT" => Station::TransmittingStation,
            "AX" => Station::RepeaterStation,
            "SA" => Station::PhysicalShoreStation,
            _ => Station::Other,
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Navigational status of a Class A position report (4-bit field).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NavigationStatus {
    UnderWayUsingEngine,
    AtAnchor,
    NotUnderCommand,
    RestrictedManoeuvrability,
    ConstrainedByDraught,
    Moored,
    Aground,
    EngagedInFishing,
    UnderWaySailing,
    ReservedForHsc,
    ReservedForWig,
    PowerDrivenVesselTowingAstern,
    PowerDrivenVesselPushingAhead,
    ReservedForFutureUse,
    AisSartIsActive,
    NotDefined,
}

impl Default for NavigationStatus {
    fn default() -> NavigationStatus {
        NavigationStatus::NotDefined
    }
}

impl From<u8> for NavigationStatus {
    fn from(code: u8) -> NavigationStatus {
        match code {
            0 => NavigationStatus::UnderWayUsingEngine,
            1 => NavigationStatus::AtAnchor,
            2 => NavigationStatus::NotUnderCommand,
            3 => NavigationStatus::RestrictedManoeuvrability,
            4 => NavigationStatus::ConstrainedByDraught,
            5 => NavigationStatus::Moored,
            6 => NavigationStatus::Aground,
            7 => NavigationStatus::EngagedInFishing,
            8 => NavigationStatus::UnderWaySailing,
            9 => NavigationStatus::ReservedForHsc,
            10 => NavigationStatus::ReservedForWig,
            11 => NavigationStatus::PowerDrivenVesselTowingAstern,
            12 => NavigationStatus::PowerDrivenVesselPushingAhead,
            13 => NavigationStatus::ReservedForFutureUse,
            14 => NavigationStatus::AisSartIsActive,
            _ => NavigationStatus::NotDefined,
        }
    }
}

impl core::fmt::Display for NavigationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let label = match self {
            NavigationStatus::UnderWayUsingEngine => "Under way using engine",
            NavigationStatus::AtAnchor => "At anchor",
            NavigationStatus::NotUnderCommand => "Not under command",
            NavigationStatus::RestrictedManoeuvrability => "Restricted manoeuvrability",
            NavigationStatus::ConstrainedByDraught => "Constrained by her draught",
            NavigationStatus::Moored => "Moored",
            NavigationStatus::Aground => "Aground",
            NavigationStatus::EngagedInFishing => "Engaged in fishing",
            NavigationStatus::UnderWaySailing => "Under way sailing",
            NavigationStatus::ReservedForHsc => "Reserved for HSC",
            NavigationStatus::ReservedForWig => "Reserved for WIG",
            NavigationStatus::PowerDrivenVesselTowingAstern => {
                "Power-driven vessel towing astern"
            }
            NavigationStatus::PowerDrivenVesselPushingAhead => {
                "Power-driven vessel pushing ahead"
            }
            NavigationStatus::ReservedForFutureUse => "Reserved for future use",
            NavigationStatus::AisSartIsActive => "AIS-SART is active",
            NavigationStatus::NotDefined => "Not defined",
        };
        write!(f, "{}", label)
    }
}

// -------------------------------------------------------------------------------------------------

/// Vessel class label for an ITU-R M.1371 Annex B ship type code.
pub fn ship_type_to_str(code: u8) -> &'static str {
    match code {
        20..=29 => "Wing in ground",
        30 => "Fishing",
        31 | 32 => "Towing",
        33 => "Dredging or underwater ops",
        34 => "Diving ops",
        35 => "Military ops",
        36 => "Sailing",
        37 => "Pleasure craft",
        40..=49 => "High speed craft",
        50 => "Pilot vessel",
        51 => "Search and rescue vessel",
        52 => "Tug",
        53 => "Port tender",
        54 => "Anti-pollution equipment",
        55 => "Law enforcement",
        58 => "Medical transport",
        60..=69 => "Passenger",
        70..=79 => "Cargo",
        80..=89 => "Tanker",
        90..=99 => "Other type",
        _ => "Unknown",
    }
}

/// Label for an EPFD fix type code.
pub fn fix_type_to_str(code: u8) -> &'static str {
    match code {
        0 => "Undefined",
        1 => "GPS",
        2 => "GLONASS",
        3 => "Combined GPS/GLONASS",
        4 => "Loran-C",
        5 => "Chayka",
        6 => "Integrated navigation system",
        7 => "Surveyed",
        8 => "Galileo",
        15 => "Internal GNSS",
        _ => "Unknown",
    }
}

/// Label for a Class A maneuver indicator code.
pub fn maneuver_to_str(code: u8) -> &'static str {
    match code {
        0 => "Not available",
        1 => "No special maneuver",
        2 => "Special maneuver",
        _ => "Unknown",
    }
}

// -------------------------------------------------------------------------------------------------

/// Route a payload to the decoder for its 6-bit message type code.
///
/// Codes outside the 27 recognized types fail with `UnsupportedType`;
/// payloads shorter than the type field fail with `TooShort`.
pub(crate) fn dispatch(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    let message_type = pick_u64(bv, 0, 6)?;
    match message_type {
        1..=3 => vdm_t1t2t3::handle(bv, station, own_vessel),
        4 | 11 => vdm_t4t11::handle(bv, station, own_vessel),
        5 => vdm_t5::handle(bv, station, own_vessel),
        6 => vdm_t6::handle(bv, station, own_vessel),
        7 | 13 => vdm_t7t13::handle(bv, station, own_vessel),
        8 => vdm_t8::handle(bv, station, own_vessel),
        9 => vdm_t9::handle(bv, station, own_vessel),
        10 => vdm_t10::handle(bv, station, own_vessel),
        12 | 14 => vdm_t12t14::handle(bv, station, own_vessel),
        15 => vdm_t15::handle(bv, station, own_vessel),
        16 => vdm_t16::handle(bv, station, own_vessel),
        17 => vdm_t17::handle(bv, station, own_vessel),
        18 => vdm_t18::handle(bv, station, own_vessel),
        19 => vdm_t19::handle(bv, station, own_vessel),
        20 => vdm_t20::handle(bv, station, own_vessel),
        21 => vdm_t21::handle(bv, station, own_vessel),
        22 => vdm_t22::handle(bv, station, own_vessel),
        23 => vdm_t23::handle(bv, station, own_vessel),
        24 => vdm_t24::handle(bv, station, own_vessel),
        25 | 26 => vdm_t25t26::handle(bv, station, own_vessel),
        27 => vdm_t27::handle(bv, station, own_vessel),
        _ => Err(ParseError::UnsupportedType(format!(
            "unrecognized message type {}",
            message_type
        ))),
    }
}

// -------------------------------------------------------------------------------------------------

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

/// One assigned-mode target: station, slot offset and increment.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTarget {
    /// MMSI of the commanded station.
    pub dest_mmsi: u32,
    /// Reporting slot offset (12 bits).
    pub slot_offset: u16,
    /// Reporting increment (10 bits).
    pub increment: u16,
}

/// Type 16: Assignment Mode Command
///
/// A base station commands one or two stations into an assigned
/// reporting schedule. The second target is present only when the
/// payload extends past the first command block.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignmentModeCommand {
    /// True if the data is about own vessel, false if about other.
    pub own_vessel: bool,

    /// AIS station type.
    pub station: Station,

    /// User ID (30 bits) - MMSI of the commanding base station.
    pub mmsi: u32,

    /// Commanded stations, one or two.
    pub targets: Vec<AssignmentTarget>,
}

// -------------------------------------------------------------------------------------------------

// First command at bits 40-91, second at 92-143.
pub(crate) fn handle(
    bv: &BitVec,
    station: Station,
    own_vessel: bool,
) -> Result<ParsedMessage, ParseError> {
    if bv.len() < 92 {
        return Err(ParseError::TooShort(format!(
            "assignment mode command too short: {} bits (92 required)",
            bv.len()
        )));
    }

    let mut targets = Vec::with_capacity(2);
    targets.push(AssignmentTarget {
        dest_mmsi: pick_u64(bv, 40, 30)? as u32,
        slot_offset: pick_u64(bv, 70, 12)? as u16,
        increment: pick_u64(bv, 82, 10)? as u16,
    });
    if bv.len() >= 144 {
        targets.push(AssignmentTarget {
            dest_mmsi: pick_u64(bv, 92, 30)? as u32,
            slot_offset: pick_u64(bv, 122, 12)? as u16,
            increment: pick_u64(bv, 134, 10)? as u16,
        });
    }

    Ok(ParsedMessage::AssignmentModeCommand(AssignmentModeCommand {
        own_vessel,
        station,
        mmsi: pick_u64(bv, 8, 30)? as u32,
        targets,
    }))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::sixbit::testkit::pack;

    #[test]
    fn test_parse_single_target() {
        let bv = pack(&[
            (16, 6),
            (0, 2),
            (2053501, 30),
            (0, 2),
            (224251000, 30),
            (200, 12),
            (0, 10),
        ]);
        let command = match handle(&bv, Station::BaseStation, false).unwrap() {
            ParsedMessage::AssignmentModeCommand(command) => command,
            other => panic!("expected AssignmentModeCommand, got {:?}", other),
        };
        assert_eq!(command.mmsi, 2053501);
        assert_eq!(
            command.targets,
            alloc::vec![AssignmentTarget {
                dest_mmsi: 224251000,
                slot_offset: 200,
                increment: 0
            }]
        );
    }

    #[test]
    fn test_parse_two_targets() {
        let bv = pack(&[
            (16, 6),
            (0, 2),
            (2053501, 30),
            (0, 2),
            (224251000, 30),
            (200, 12),
            (5, 10),
            (224252000, 30),
            (300, 12),
            (7, 10),
            (0, 4), // spare
        ]);
        let command = match handle(&bv, Station::BaseStation, false).unwrap() {
            ParsedMessage::AssignmentModeCommand(command) => command,
            _ => unreachable!(),
        };
        assert_eq!(command.targets.len(), 2);
        assert_eq!(command.targets[1].dest_mmsi, 224252000);
        assert_eq!(command.targets[1].slot_offset, 300);
        assert_eq!(command.targets[1].increment, 7);
    }

    #[test]
    fn test_short_payload_rejected() {
        let bv = pack(&[(16, 6), (0, 2), (2053501, 30), (0, 2), (224251000, 30)]);
        assert!(matches!(
            handle(&bv, Station::BaseStation, false),
            Err(ParseError::TooShort(_))
        ));
    }
}

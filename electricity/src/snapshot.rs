//! Serializable view of a board for display and debugging.

use serde::{Deserialize, Serialize};

use crate::board::{Board, DeviceId};
use crate::core::Result;
use crate::device::DeviceKind;
use crate::pole::PoleLink;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoleSnapshot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<PoleLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub poles: Vec<PoleSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub devices: Vec<DeviceSnapshot>,
}

impl BoardSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn linked_pole_count(&self) -> usize {
        self.devices
            .iter()
            .flat_map(|d| &d.poles)
            .filter(|p| p.link.is_some())
            .count()
    }
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        let devices = self
            .devices()
            .map(|(id, device)| DeviceSnapshot {
                id,
                name: device.name().to_string(),
                kind: device.kind(),
                poles: device
                    .poles()
                    .iter()
                    .map(|p| PoleSnapshot {
                        name: p.name().to_string(),
                        link: p.link().cloned(),
                    })
                    .collect(),
            })
            .collect();

        BoardSnapshot { devices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Generator, Switch};

    #[test]
    fn test_snapshot_contents() {
        let mut board = Board::new();
        let generator = board.add(Generator::named("main"));
        let sw = board.add(Switch::named("hall"));
        board.connect(generator, "A2", sw, "A1").unwrap();

        let snapshot = board.snapshot();
        assert_eq!(snapshot.devices.len(), 2);
        assert_eq!(snapshot.devices[0].kind, DeviceKind::Generator);
        assert_eq!(snapshot.devices[0].poles.len(), 3);
        assert_eq!(
            snapshot.devices[0].poles[1].link,
            Some(PoleLink::new(sw, "A1"))
        );
        assert_eq!(snapshot.linked_pole_count(), 2);
    }

    #[test]
    fn test_snapshot_json() {
        let mut board = Board::new();
        let sw = board.add(Switch::named("hall"));
        board.connect(sw, "A1", sw, "A2").unwrap();

        let json = board.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["devices"][0]["name"], "hall");
        assert_eq!(value["devices"][0]["kind"], "switch");
        assert_eq!(value["devices"][0]["poles"][0]["link"]["pole"], "A2");
        assert_eq!(value["devices"][0]["poles"][0]["link"]["device"], 0);
    }

    #[test]
    fn test_unlinked_poles_omit_link() {
        let mut board = Board::new();
        board.add(Switch::new());

        let json = board.snapshot().to_json().unwrap();
        assert!(!json.contains("\"link\""));
    }
}

//! Poles: named connection points on a device.

use serde::{Deserialize, Serialize};

use crate::board::DeviceId;

/// The far end of a link: a device handle and a pole name on that device.
///
/// The handle does not own the device; the board that issued it does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoleLink {
    pub device: DeviceId,
    pub pole: String,
}

impl PoleLink {
    pub fn new(device: DeviceId, pole: impl Into<String>) -> Self {
        Self {
            device,
            pole: pole.into(),
        }
    }

    /// Whether this link names `pole` on `device`.
    pub fn points_to(&self, device: DeviceId, pole: &str) -> bool {
        self.device == device && self.pole == pole
    }
}

/// A named connection point.
///
/// A pole is either fully linked or fully unlinked; device handle and pole
/// name are stored together so one cannot be set without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pole {
    name: String,
    link: Option<PoleLink>,
}

impl Pole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the pole. Uniqueness within the device is up to the caller.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn link(&self) -> Option<&PoleLink> {
        self.link.as_ref()
    }

    pub fn is_linked(&self) -> bool {
        self.link.is_some()
    }

    pub fn linked_device(&self) -> Option<DeviceId> {
        self.link.as_ref().map(|l| l.device)
    }

    /// Name of the pole on the far end, or `""` when unlinked.
    pub fn linked_pole_name(&self) -> &str {
        self.link.as_ref().map(|l| l.pole.as_str()).unwrap_or("")
    }

    pub(crate) fn attach(&mut self, link: PoleLink) -> Option<PoleLink> {
        self.link.replace(link)
    }

    pub(crate) fn detach(&mut self) -> Option<PoleLink> {
        self.link.take()
    }

    pub(crate) fn link_mut(&mut self) -> Option<&mut PoleLink> {
        self.link.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pole_is_unlinked() {
        let pole = Pole::new("A1");
        assert_eq!(pole.name(), "A1");
        assert!(!pole.is_linked());
        assert_eq!(pole.linked_device(), None);
        assert_eq!(pole.linked_pole_name(), "");
    }

    #[test]
    fn test_attach_and_detach() {
        let mut pole = Pole::new("A1");
        let previous = pole.attach(PoleLink::new(DeviceId::new(2), "A2"));
        assert!(previous.is_none());
        assert_eq!(pole.linked_device(), Some(DeviceId::new(2)));
        assert_eq!(pole.linked_pole_name(), "A2");

        let old = pole.detach().unwrap();
        assert!(old.points_to(DeviceId::new(2), "A2"));
        assert_eq!(pole.linked_device(), None);
        assert_eq!(pole.linked_pole_name(), "");
    }

    #[test]
    fn test_rename_keeps_link() {
        let mut pole = Pole::new("A1");
        pole.attach(PoleLink::new(DeviceId::new(0), "A2"));
        pole.set_name("L");
        assert_eq!(pole.name(), "L");
        assert_eq!(pole.linked_pole_name(), "A2");
    }
}

//! Board: the arena that owns devices and mediates every link mutation.
//!
//! Devices are addressed by [`DeviceId`] handles. A pole's link stores a
//! handle rather than a pointer, so links never keep a device alive and
//! both ends of a link can be updated through one `&mut Board`.

use serde::{Deserialize, Serialize};

use crate::core::{ConnectOptions, ElectricityError, Result};
use crate::device::Device;
use crate::pole::{Pole, PoleLink};

/// Handle to a device on a [`Board`].
///
/// Handles are never reused: once a device is removed its handle stays
/// invalid for the lifetime of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(usize);

impl DeviceId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Collection of devices and the links between their poles
#[derive(Debug, Default)]
pub struct Board {
    devices: Vec<Option<Box<dyn Device>>>,
    options: ConnectOptions,
}

impl Board {
    /// Create an empty board with legacy (non-strict) reconnect behavior
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConnectOptions) -> Self {
        Self {
            devices: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ConnectOptions) {
        self.options = options;
    }

    /// Add a device and return its handle
    pub fn add<D: Device + 'static>(&mut self, device: D) -> DeviceId {
        self.add_boxed(Box::new(device))
    }

    pub fn add_boxed(&mut self, device: Box<dyn Device>) -> DeviceId {
        let id = DeviceId::new(self.devices.len());
        tracing::debug!("Added {} '{}' as {}", device.kind(), device.name(), id);
        self.devices.push(Some(device));
        id
    }

    /// Remove a device, detaching every pole on the board that points at it.
    ///
    /// The returned device has all of its own links cleared.
    pub fn remove(&mut self, id: DeviceId) -> Result<Box<dyn Device>> {
        let mut device = self
            .devices
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(ElectricityError::DeviceNotFound(id))?;

        for pole in device.poles_mut() {
            pole.detach();
        }

        let mut detached = 0;
        for other in self.devices.iter_mut().flatten() {
            for pole in other.poles_mut() {
                if pole.linked_device() == Some(id) {
                    pole.detach();
                    detached += 1;
                }
            }
        }

        tracing::debug!(
            "Removed {} '{}' ({}), detached {} pole(s)",
            device.kind(),
            device.name(),
            id,
            detached
        );
        Ok(device)
    }

    pub fn contains(&self, id: DeviceId) -> bool {
        matches!(self.devices.get(id.0), Some(Some(_)))
    }

    pub fn device(&self, id: DeviceId) -> Result<&dyn Device> {
        self.devices
            .get(id.0)
            .and_then(|slot| slot.as_deref())
            .ok_or(ElectricityError::DeviceNotFound(id))
    }

    pub fn device_mut(&mut self, id: DeviceId) -> Result<&mut (dyn Device + 'static)> {
        self.devices
            .get_mut(id.0)
            .and_then(|slot| slot.as_deref_mut())
            .ok_or(ElectricityError::DeviceNotFound(id))
    }

    /// All devices still on the board, in insertion order
    pub fn devices(&self) -> impl Iterator<Item = (DeviceId, &dyn Device)> {
        self.devices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|d| (DeviceId::new(i), d)))
    }

    pub fn len(&self) -> usize {
        self.devices.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a pole by name on a device
    pub fn pole(&self, id: DeviceId, name: &str) -> Result<&Pole> {
        self.device(id)?
            .pole(name)
            .ok_or_else(|| ElectricityError::pole_not_found(id, name))
    }

    fn pole_mut(&mut self, id: DeviceId, name: &str) -> Result<&mut Pole> {
        self.device_mut(id)?
            .pole_mut(name)
            .ok_or_else(|| ElectricityError::pole_not_found(id, name))
    }

    /// Link `pole` on device `a` with `other_pole` on device `b`.
    ///
    /// `a` and `b` may be the same device. Pole names that are textually
    /// equal are always rejected with `InvalidConnection`, even across two
    /// different devices. Nothing is mutated unless both poles exist.
    ///
    /// Without strict mode a pole that was already linked is simply
    /// relinked and its old partner keeps pointing at it; see
    /// [`Board::audit`]. Strict mode disconnects both poles first.
    pub fn connect(
        &mut self,
        a: DeviceId,
        pole: &str,
        b: DeviceId,
        other_pole: &str,
    ) -> Result<()> {
        if pole == other_pole {
            tracing::debug!("Refusing to connect {}.{} to {}.{}", a, pole, b, other_pole);
            return Err(ElectricityError::InvalidConnection {
                pole: pole.to_string(),
            });
        }

        self.pole(a, pole)?;
        self.pole(b, other_pole)?;

        if self.options.strict_mode {
            self.disconnect(a, pole)?;
            self.disconnect(b, other_pole)?;
        }

        let previous_a = self.pole_mut(a, pole)?.attach(PoleLink::new(b, other_pole));
        let previous_b = self.pole_mut(b, other_pole)?.attach(PoleLink::new(a, pole));

        for (owner, name, previous) in [(a, pole, previous_a), (b, other_pole, previous_b)] {
            if let Some(old) = previous {
                if !old.points_to(a, pole) && !old.points_to(b, other_pole) {
                    tracing::warn!(
                        "{}.{} relinked; {}.{} still points at it",
                        owner,
                        name,
                        old.device,
                        old.pole
                    );
                }
            }
        }

        tracing::debug!("Connected {}.{} <-> {}.{}", a, pole, b, other_pole);
        Ok(())
    }

    /// Unlink `pole` on device `id` and the pole it is linked to.
    ///
    /// Returns `Ok(false)` if the pole was not linked. The far pole is looked
    /// up on the device the link actually names and is only cleared while it
    /// still points back at this pole.
    pub fn disconnect(&mut self, id: DeviceId, pole: &str) -> Result<bool> {
        let Some(link) = self.pole_mut(id, pole)?.detach() else {
            return Ok(false);
        };

        match self.pole_mut(link.device, &link.pole) {
            Ok(far) => {
                if far.link().is_some_and(|back| back.points_to(id, pole)) {
                    far.detach();
                } else {
                    tracing::warn!(
                        "{}.{} was linked one-sided to {}.{}",
                        id,
                        pole,
                        link.device,
                        link.pole
                    );
                }
            }
            Err(e) => tracing::warn!("Far side of {}.{} is gone: {}", id, pole, e),
        }

        tracing::debug!("Disconnected {}.{} from {}.{}", id, pole, link.device, link.pole);
        Ok(true)
    }

    /// Whether any pole of `a` is directly linked to an existing pole of `b`.
    ///
    /// Not transitive; see [`crate::Topology::is_reachable`] for that.
    pub fn is_connected_to(&self, a: DeviceId, b: DeviceId) -> bool {
        let (Ok(this), Ok(other)) = (self.device(a), self.device(b)) else {
            return false;
        };

        this.poles()
            .iter()
            .filter_map(Pole::link)
            .any(|link| link.device == b && other.pole(&link.pole).is_some())
    }

    pub fn rename_device(&mut self, id: DeviceId, name: impl Into<String>) -> Result<()> {
        self.device_mut(id)?.set_name(name.into());
        Ok(())
    }

    /// Rename a pole, keeping its partner's link pointed at the new name.
    ///
    /// Pole names should stay unique within a device; a clash is logged but
    /// not rejected.
    pub fn rename_pole(&mut self, id: DeviceId, old: &str, new: &str) -> Result<()> {
        let device = self.device_mut(id)?;
        if old != new && device.pole(new).is_some() {
            tracing::warn!("Device {} already has a pole named '{}'", id, new);
        }

        let pole = device
            .pole_mut(old)
            .ok_or_else(|| ElectricityError::pole_not_found(id, old))?;
        pole.set_name(new);
        let link = pole.link().cloned();

        if let Some(link) = link {
            if let Ok(far) = self.pole_mut(link.device, &link.pole) {
                if let Some(back) = far.link_mut() {
                    if back.points_to(id, old) {
                        back.pole = new.to_string();
                    }
                }
            }
        }

        tracing::debug!("Renamed pole {}.{} to '{}'", id, old, new);
        Ok(())
    }
}

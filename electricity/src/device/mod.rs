//! Device Module
//!
//! A device is anything with a fixed set of named poles. Concrete kinds
//! (switch, light, generator) only provide pole storage; lookup is defined
//! once on the [`Device`] trait and all link mutations live on
//! [`crate::Board`].

pub mod variants;

use serde::{Deserialize, Serialize};

use crate::pole::Pole;

pub use variants::{Generator, Light, Switch};

/// Kind of device, used for display and snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Switch,
    Light,
    Generator,
    /// Devices implemented outside this crate
    Other,
}

impl DeviceKind {
    /// Pole names a freshly built device of this kind starts with.
    pub fn default_pole_names(&self) -> &'static [&'static str] {
        match self {
            DeviceKind::Switch | DeviceKind::Light => &["A1", "A2"],
            DeviceKind::Generator => &["A1", "A2", "A3"],
            DeviceKind::Other => &[],
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::Switch => write!(f, "Switch"),
            DeviceKind::Light => write!(f, "Light"),
            DeviceKind::Generator => write!(f, "Generator"),
            DeviceKind::Other => write!(f, "Other"),
        }
    }
}

/// Common contract for every device kind.
///
/// Implementors supply a display name and pole storage. Poles are addressed
/// by name or by a 1-based index in `1..=pole_count()`.
pub trait Device: std::fmt::Debug + Send {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    fn kind(&self) -> DeviceKind {
        DeviceKind::Other
    }

    fn poles(&self) -> &[Pole];

    fn poles_mut(&mut self) -> &mut [Pole];

    fn pole_count(&self) -> usize {
        self.poles().len()
    }

    /// Find a pole by name
    fn pole(&self, name: &str) -> Option<&Pole> {
        self.poles().iter().find(|p| p.name() == name)
    }

    /// Find a mutable pole by name
    fn pole_mut(&mut self, name: &str) -> Option<&mut Pole> {
        self.poles_mut().iter_mut().find(|p| p.name() == name)
    }

    /// Find a pole by 1-based position
    fn pole_at(&self, index: usize) -> Option<&Pole> {
        index.checked_sub(1).and_then(|i| self.poles().get(i))
    }

    fn pole_names(&self) -> Vec<&str> {
        self.poles().iter().map(Pole::name).collect()
    }
}

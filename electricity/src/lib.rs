//! Electricity - pole and wire topology for simple electrical devices
//!
//! Devices (switches, lights, generators) expose named poles. Any two poles
//! can be linked to model a wire, and later unlinked. Only topology is
//! tracked: there is no current, voltage or circuit simulation.
//!
//! # Quick Start
//!
//! ```
//! use electricity::prelude::*;
//!
//! let mut board = Board::new();
//! let sw = board.add(Switch::new());
//! let sw2 = board.add(Switch::new());
//!
//! board.connect(sw, "A2", sw2, "A1").unwrap();
//! assert!(board.is_connected_to(sw, sw2));
//!
//! // "A1" on sw was never linked; the A2 link survives
//! assert!(!board.disconnect(sw, "A1").unwrap());
//! assert!(board.is_connected_to(sw, sw2));
//! ```
//!
//! # Features
//!
//! - **Devices**: built-in kinds plus any type implementing [`Device`]
//! - **Links**: reciprocal pole-to-pole links with optional strict relinking
//! - **Audit**: detection of one-sided and dangling links
//! - **Topology**: petgraph-based reachability and path finding

pub mod audit;
pub mod board;
pub mod core;
pub mod device;
pub mod pole;
pub mod shared;
pub mod snapshot;
pub mod topology;

// Re-export main types
pub use audit::{LinkIssue, LinkIssueKind};
pub use board::{Board, DeviceId};
pub use crate::core::{ConnectOptions, ElectricityError, Result};
pub use device::{Device, DeviceKind, Generator, Light, Switch};
pub use pole::{Pole, PoleLink};
pub use shared::SharedBoard;
pub use snapshot::{BoardSnapshot, DeviceSnapshot, PoleSnapshot};
pub use topology::{Topology, TopologyStats};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Board, ConnectOptions, Device, DeviceId, DeviceKind, ElectricityError, Generator, Light,
        Switch, Topology,
    };
}

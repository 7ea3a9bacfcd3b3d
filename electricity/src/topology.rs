//! Topology Graph
//!
//! A read-only petgraph view of a [`Board`]: one node per device and one
//! undirected edge per reciprocal link. Used for queries that go beyond the
//! direct pole-to-pole check on the board:
//! - Transitive reachability
//! - Path finding between devices
//! - Link statistics

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::board::{Board, DeviceId};
use crate::device::DeviceKind;

/// Node in the topology graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceNode {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
}

/// Edge in the topology graph - one reciprocal pole-to-pole link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEdge {
    /// Pole on the lower-ordered end of the link
    pub pole: String,

    /// Pole on the other end
    pub other_pole: String,
}

/// Snapshot of board connectivity as a graph.
///
/// One-sided and dangling links are left out; see [`Board::audit`].
#[derive(Debug, Clone)]
pub struct Topology {
    graph: UnGraph<DeviceNode, LinkEdge>,
    device_indices: HashMap<DeviceId, NodeIndex>,
}

impl Topology {
    pub fn from_board(board: &Board) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut device_indices = HashMap::new();

        for (id, device) in board.devices() {
            let idx = graph.add_node(DeviceNode {
                id,
                name: device.name().to_string(),
                kind: device.kind(),
            });
            device_indices.insert(id, idx);
        }

        for (id, device) in board.devices() {
            for pole in device.poles() {
                let Some(link) = pole.link() else {
                    continue;
                };

                // Each link is seen from both ends; keep the lower-ordered one
                if (link.device, link.pole.as_str()) < (id, pole.name()) {
                    continue;
                }

                let reciprocal = board
                    .pole(link.device, &link.pole)
                    .ok()
                    .and_then(|far| far.link())
                    .is_some_and(|back| back.points_to(id, pole.name()));
                if !reciprocal {
                    continue;
                }

                if let (Some(&a), Some(&b)) =
                    (device_indices.get(&id), device_indices.get(&link.device))
                {
                    graph.add_edge(
                        a,
                        b,
                        LinkEdge {
                            pole: pole.name().to_string(),
                            other_pole: link.pole.clone(),
                        },
                    );
                }
            }
        }

        Self {
            graph,
            device_indices,
        }
    }

    /// Devices sharing at least one link with `id`, in handle order.
    ///
    /// Includes `id` itself if it has a self-link.
    pub fn neighbors(&self, id: DeviceId) -> Vec<DeviceId> {
        let Some(&idx) = self.device_indices.get(&id) else {
            return Vec::new();
        };

        self.graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n).map(|d| d.id))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Links between two devices as `(pole on a, pole on b)` pairs
    pub fn links_between(&self, a: DeviceId, b: DeviceId) -> Vec<(String, String)> {
        let (Some(&ia), Some(&ib)) = (self.device_indices.get(&a), self.device_indices.get(&b))
        else {
            return Vec::new();
        };

        self.graph
            .edges_connecting(ia, ib)
            .map(|edge| {
                let link = edge.weight();
                // edges_connecting reports `ia` as the source; orientation
                // comes from the stored endpoints
                let stored_source = self.graph.edge_endpoints(edge.id()).map(|(s, _)| s);
                if stored_source == Some(ia) {
                    (link.pole.clone(), link.other_pole.clone())
                } else {
                    (link.other_pole.clone(), link.pole.clone())
                }
            })
            .collect()
    }

    /// Whether `b` can be reached from `a` through any chain of links.
    ///
    /// A device always reaches itself.
    pub fn is_reachable(&self, a: DeviceId, b: DeviceId) -> bool {
        use petgraph::algo::has_path_connecting;

        match (self.device_indices.get(&a), self.device_indices.get(&b)) {
            (Some(&ia), Some(&ib)) => has_path_connecting(&self.graph, ia, ib, None),
            _ => false,
        }
    }

    /// Find a shortest chain of devices from `a` to `b`, by name
    pub fn find_path(&self, a: DeviceId, b: DeviceId) -> Option<Vec<String>> {
        use petgraph::algo::astar;

        let from_idx = self.device_indices.get(&a)?;
        let to_idx = self.device_indices.get(&b)?;

        let result = astar(&self.graph, *from_idx, |n| n == *to_idx, |_| 1, |_| 0);

        result.map(|(_, path)| {
            path.into_iter()
                .filter_map(|idx| self.graph.node_weight(idx).map(|d| d.name.clone()))
                .collect()
        })
    }

    /// Get statistics about the topology
    pub fn stats(&self) -> TopologyStats {
        let self_link_count = self
            .graph
            .edge_references()
            .filter(|e| e.source() == e.target())
            .count();

        TopologyStats {
            device_count: self.graph.node_count(),
            link_count: self.graph.edge_count(),
            self_link_count,
            group_count: petgraph::algo::connected_components(&self.graph),
        }
    }
}

/// Statistics about a topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyStats {
    pub device_count: usize,
    pub link_count: usize,
    pub self_link_count: usize,
    /// Number of groups of devices that reach each other
    pub group_count: usize,
}

//! Link consistency checks.
//!
//! Every link should be reciprocal. Relinking a pole without strict mode,
//! or removing a device from a board while something else still names it,
//! can leave poles whose link no longer has a matching far end.

use serde::{Deserialize, Serialize};

use crate::board::{Board, DeviceId};
use crate::pole::PoleLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkIssueKind {
    /// The far pole exists but is linked elsewhere (or not at all)
    OneSided,
    /// The far device or the far pole name does not exist
    Dangling,
}

impl std::fmt::Display for LinkIssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkIssueKind::OneSided => write!(f, "one-sided"),
            LinkIssueKind::Dangling => write!(f, "dangling"),
        }
    }
}

/// A pole whose link does not satisfy the reciprocity invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkIssue {
    pub device: DeviceId,
    pub pole: String,
    pub link: PoleLink,
    pub kind: LinkIssueKind,
}

impl std::fmt::Display for LinkIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} link {}.{} -> {}.{}",
            self.kind, self.device, self.pole, self.link.device, self.link.pole
        )
    }
}

impl Board {
    /// List every pole whose link is not reciprocated
    pub fn audit(&self) -> Vec<LinkIssue> {
        let mut issues = Vec::new();

        for (id, device) in self.devices() {
            for pole in device.poles() {
                let Some(link) = pole.link() else {
                    continue;
                };

                let far = self
                    .device(link.device)
                    .ok()
                    .and_then(|d| d.pole(&link.pole));

                let kind = match far {
                    None => LinkIssueKind::Dangling,
                    Some(far) if far.link().is_some_and(|l| l.points_to(id, pole.name())) => {
                        continue
                    }
                    Some(_) => LinkIssueKind::OneSided,
                };

                issues.push(LinkIssue {
                    device: id,
                    pole: pole.name().to_string(),
                    link: link.clone(),
                    kind,
                });
            }
        }

        if !issues.is_empty() {
            tracing::debug!("Audit found {} inconsistent link(s)", issues.len());
        }
        issues
    }
}

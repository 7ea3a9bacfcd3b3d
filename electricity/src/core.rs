//! Errors and options shared by every board operation.
//! No I/O, no global state.

use serde::{Deserialize, Serialize};

use crate::board::DeviceId;

#[derive(Debug, thiserror::Error)]
pub enum ElectricityError {
    #[error("Device not found: {0}")]
    DeviceNotFound(DeviceId),
    #[error("Pole '{pole}' not found on device {device}")]
    PoleNotFound { device: DeviceId, pole: String },
    #[error("Cannot connect pole '{pole}' to a pole with the same name")]
    InvalidConnection { pole: String },
    #[error("Board lock poisoned")]
    LockPoisoned,
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ElectricityError>;

impl ElectricityError {
    pub(crate) fn pole_not_found(device: DeviceId, pole: &str) -> Self {
        ElectricityError::PoleNotFound {
            device,
            pole: pole.to_string(),
        }
    }
}

/// Options controlling how a board mutates links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectOptions {
    /// Disconnect both poles from their previous partners before linking.
    ///
    /// When off, relinking an already linked pole leaves its old partner
    /// pointing at it (a one-sided link, reported by `Board::audit`).
    pub strict_mode: bool,
}

impl ConnectOptions {
    pub fn strict() -> Self {
        Self { strict_mode: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_legacy() {
        assert!(!ConnectOptions::default().strict_mode);
        assert!(ConnectOptions::strict().strict_mode);
    }

    #[test]
    fn test_options_serialize() {
        let json = serde_json::to_string(&ConnectOptions::strict()).unwrap();
        assert_eq!(json, r#"{"strict_mode":true}"#);

        let options: ConnectOptions = serde_json::from_str(r#"{"strict_mode":false}"#).unwrap();
        assert_eq!(options, ConnectOptions::default());
    }

    #[test]
    fn test_error_messages() {
        let err = ElectricityError::pole_not_found(DeviceId::new(3), "B7");
        assert_eq!(err.to_string(), "Pole 'B7' not found on device #3");

        let err = ElectricityError::InvalidConnection {
            pole: "A1".to_string(),
        };
        assert!(err.to_string().contains("'A1'"));
    }
}

//! Thread-safe handle to a board.
//!
//! The whole board sits behind one mutex, so both ends of a link are always
//! updated under the same lock.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::board::{Board, DeviceId};
use crate::core::{ConnectOptions, ElectricityError, Result};
use crate::device::Device;

#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    pub fn with_options(options: ConnectOptions) -> Self {
        Self::new(Board::with_options(options))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Board>> {
        self.inner.lock().map_err(|_| ElectricityError::LockPoisoned)
    }

    /// Run `f` with exclusive access to the board
    pub fn with<T>(&self, f: impl FnOnce(&mut Board) -> T) -> Result<T> {
        let mut board = self.lock()?;
        Ok(f(&mut board))
    }

    pub fn add<D: Device + 'static>(&self, device: D) -> Result<DeviceId> {
        Ok(self.lock()?.add(device))
    }

    pub fn connect(&self, a: DeviceId, pole: &str, b: DeviceId, other_pole: &str) -> Result<()> {
        self.lock()?.connect(a, pole, b, other_pole)
    }

    pub fn disconnect(&self, id: DeviceId, pole: &str) -> Result<bool> {
        self.lock()?.disconnect(id, pole)
    }

    pub fn is_connected_to(&self, a: DeviceId, b: DeviceId) -> Result<bool> {
        Ok(self.lock()?.is_connected_to(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Light, Switch};
    use std::thread;

    #[test]
    fn test_concurrent_links_stay_reciprocal() {
        let shared = SharedBoard::with_options(ConnectOptions::strict());
        let switches: Vec<DeviceId> = (0..4).map(|_| shared.add(Switch::new()).unwrap()).collect();
        let lamp = shared.add(Light::new()).unwrap();

        let handles: Vec<_> = switches
            .iter()
            .map(|&sw| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        shared.connect(sw, "A1", lamp, "A2").unwrap();
                        shared.disconnect(sw, "A1").unwrap();
                        shared.connect(sw, "A1", lamp, "A2").unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let issues = shared.with(|board| board.audit()).unwrap();
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);

        let connected = switches
            .iter()
            .filter(|&&sw| shared.is_connected_to(sw, lamp).unwrap())
            .count();
        assert_eq!(connected, 1);
    }
}

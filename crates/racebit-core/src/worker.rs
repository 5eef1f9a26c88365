//! Race worker pair — two spinning threads competing over the shared register.
//!
//! One worker is assigned 0, the other 1. Each runs a tight loop that polls a
//! cancellation flag and otherwise tries to force the register to its own
//! value. Their relative write order is deliberately unspecified; the
//! scheduler's arbitration between the two loops is the entropy source.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crate::register::BitRegister;

/// Handle to one powerup cycle's pair of race workers.
///
/// Both workers busy-wait for the whole cycle: no sleeps, no blocking waits,
/// one cancellation poll per iteration. This burns two cores while running —
/// a deliberate trade-off, since uncoordinated contention under load is what
/// makes the register's value unpredictable at sample time.
///
/// The pair is bound to exactly one cancellation signal and one register
/// generation. A new cycle spawns a new pair; threads are never reused
/// across cycles, so a worker lingering briefly after cancellation can only
/// ever touch its own generation's register.
pub struct RaceWorkerPair {
    handles: [JoinHandle<()>; 2],
}

impl RaceWorkerPair {
    /// Spawn both workers against `register`, bound to `cancel`.
    pub fn spawn(register: &Arc<BitRegister>, cancel: &Arc<AtomicBool>) -> Self {
        let spawn_one = |bit: u8| {
            let register = Arc::clone(register);
            let cancel = Arc::clone(cancel);
            thread::spawn(move || race_loop(bit, &register, &cancel))
        };
        Self {
            handles: [spawn_one(0), spawn_one(1)],
        }
    }

    /// Whether both workers have observed cancellation and exited.
    pub fn is_finished(&self) -> bool {
        self.handles.iter().all(JoinHandle::is_finished)
    }
}

/// One worker's contention loop: poll cancellation, then try to flip the
/// register to `bit`. No per-iteration state and no delay between attempts.
fn race_loop(bit: u8, register: &BitRegister, cancel: &AtomicBool) {
    while !cancel.load(Ordering::Relaxed) {
        let _ = register.flip_to(bit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn workers_exit_on_cancellation() {
        let register = Arc::new(BitRegister::new());
        let cancel = Arc::new(AtomicBool::new(false));
        let pair = RaceWorkerPair::spawn(&register, &cancel);

        cancel.store(true, Ordering::Relaxed);
        let deadline = Instant::now() + Duration::from_secs(2);
        while !pair.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(pair.is_finished(), "workers still spinning after cancel");
    }

    #[test]
    fn register_stays_binary_under_contention() {
        let register = Arc::new(BitRegister::new());
        let cancel = Arc::new(AtomicBool::new(false));
        let _pair = RaceWorkerPair::spawn(&register, &cancel);

        for _ in 0..100 {
            assert!(register.load() <= 1);
        }
        cancel.store(true, Ordering::Relaxed);
    }
}

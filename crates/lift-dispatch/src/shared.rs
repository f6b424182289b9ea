//! `SharedDispatcher` — a cloneable, mutually exclusive handle on one engine.

use std::sync::{Arc, Mutex, MutexGuard};

use lift_core::{CabinCommand, CabinId, Direction, RequestId, ResetParams};

use crate::{
    BoardOutcome, DispatchEngine, DispatchError, DispatchResult, ExitOutcome, FleetSnapshot,
};

/// Thread-safe handle on a [`DispatchEngine`].
///
/// Every operation holds the lock for its whole duration, so calls, boardings,
/// exits, resets, and ticks from independent callers never interleave.  The
/// engine does no I/O while locked.
///
/// Clones share the same engine.
///
/// ```rust,ignore
/// let dispatcher = SharedDispatcher::new(DispatchEngine::default());
/// let transport = dispatcher.clone();
/// std::thread::spawn(move || transport.call_at_floor(3, Direction::Up));
/// let commands = dispatcher.next_commands()?;
/// ```
#[derive(Clone)]
pub struct SharedDispatcher {
    inner: Arc<Mutex<DispatchEngine>>,
}

impl SharedDispatcher {
    pub fn new(engine: DispatchEngine) -> Self {
        Self { inner: Arc::new(Mutex::new(engine)) }
    }

    fn lock(&self) -> DispatchResult<MutexGuard<'_, DispatchEngine>> {
        self.inner.lock().map_err(|_| DispatchError::Poisoned)
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut DispatchEngine) -> T) -> DispatchResult<T> {
        let mut engine = self.lock()?;
        Ok(f(&mut *engine))
    }

    pub fn call_at_floor(&self, floor: i32, direction: Direction) -> DispatchResult<RequestId> {
        self.lock()?.call_at_floor(floor, direction)
    }

    pub fn floor_to_go(&self, destination: i32, cabin: CabinId) -> DispatchResult<BoardOutcome> {
        self.lock()?.floor_to_go(destination, cabin)
    }

    pub fn user_has_entered(&self, cabin: CabinId) -> DispatchResult<()> {
        self.lock()?.user_has_entered(cabin)
    }

    pub fn user_has_exited(&self, cabin: CabinId) -> DispatchResult<ExitOutcome> {
        self.lock()?.user_has_exited(cabin)
    }

    pub fn reset(&self, params: ResetParams) -> DispatchResult<()> {
        self.lock()?.reset(params)
    }

    pub fn next_commands(&self) -> DispatchResult<Vec<CabinCommand>> {
        Ok(self.lock()?.next_commands())
    }

    pub fn snapshot(&self) -> DispatchResult<FleetSnapshot> {
        Ok(self.lock()?.snapshot())
    }
}

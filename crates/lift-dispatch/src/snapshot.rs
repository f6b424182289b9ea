//! Owned, read-only copies of fleet state for UIs and diagnostics.

use lift_core::{CabinCommand, CabinId, Direction, FleetConfig, Tick};

use crate::{Cabin, DispatchEngine, Request};

/// State of one cabin at capture time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinSnapshot {
    pub id:             CabinId,
    pub floor:          i32,
    pub direction:      Direction,
    pub door_open:      bool,
    pub last_command:   CabinCommand,
    pub boarding_queue: Vec<Request>,
    pub riders:         Vec<Request>,
}

impl From<&Cabin> for CabinSnapshot {
    fn from(cabin: &Cabin) -> Self {
        Self {
            id:             cabin.id,
            floor:          cabin.floor,
            direction:      cabin.direction,
            door_open:      cabin.door_open,
            last_command:   cabin.last_command,
            boarding_queue: cabin.boarding_queue.clone(),
            riders:         cabin.riders.clone(),
        }
    }
}

/// State of the whole engine at capture time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSnapshot {
    pub tick:                 Tick,
    pub config:               FleetConfig,
    pub cabins:               Vec<CabinSnapshot>,
    pub pending:              Vec<Request>,
    pub cumulative_score:     f64,
    pub abnormal_board_count: u64,
    pub abnormal_exit_count:  u64,
    pub reset_count:          u64,
    pub total_calls:          u64,
    pub exit_signals:         u64,
}

impl FleetSnapshot {
    pub fn capture(engine: &DispatchEngine) -> Self {
        Self {
            tick:                 engine.tick(),
            config:               engine.config().clone(),
            cabins:               engine.cabins().iter().map(CabinSnapshot::from).collect(),
            pending:              engine.pending().to_vec(),
            cumulative_score:     engine.cumulative_score(),
            abnormal_board_count: engine.abnormal_board_count(),
            abnormal_exit_count:  engine.abnormal_exit_count(),
            reset_count:          engine.reset_count(),
            total_calls:          engine.total_calls(),
            exit_signals:         engine.exit_signals(),
        }
    }

    /// Riders aboard across the fleet.
    pub fn riders_aboard(&self) -> usize {
        self.cabins.iter().map(|c| c.riders.len()).sum()
    }

    /// Waiters assigned to a cabin but not aboard yet.
    pub fn riders_queued(&self) -> usize {
        self.cabins.iter().map(|c| c.boarding_queue.len()).sum()
    }
}

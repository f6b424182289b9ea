//! Plain data row types written by output backends.

use lift_core::{CabinCommand, Direction};

/// One cabin's command and resulting state for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CabinCommandRow {
    pub tick:      u64,
    pub cabin:     u32,
    pub command:   CabinCommand,
    /// Floor after the command was applied.
    pub floor:     i32,
    pub direction: Direction,
    pub door_open: bool,
    /// Riders aboard.
    pub riders:    u32,
    /// Waiters assigned to the cabin.
    pub queued:    u32,
}

/// Fleet-wide totals at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetSummaryRow {
    pub tick:             u64,
    /// Requests no cabin has taken yet.
    pub pending:          u64,
    /// Riders aboard across the fleet.
    pub riders:           u64,
    pub cumulative_score: f64,
    pub abnormal_board:   u64,
    pub abnormal_exit:    u64,
}

//! The `DispatchEngine`: fleet ownership, assignment, and event handling.

use lift_core::{CabinCommand, CabinId, Direction, FleetConfig, RequestId, ResetParams, Tick};
use tracing::{debug, info, warn};

use crate::{
    Cabin, DispatchError, DispatchObserver, DispatchResult, FleetSnapshot, NoopObserver, Request,
};

// ── Event outcomes ────────────────────────────────────────────────────────────

/// Where a boarding rider was found.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BoardSource {
    /// The boarding cabin's own queue.
    OwnQueue,
    /// The unassigned pending pool.
    Pool,
    /// Another cabin's queue: the rider took whichever car arrived first.
    OtherCabin(CabinId),
}

/// Result of a boarding event.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BoardOutcome {
    Boarded { request: RequestId, source: BoardSource },
    /// The cabin already carries `capacity` riders.  Counted as abnormal.
    CabinFull,
    /// No tracked request matched.  Counted as abnormal.
    Unmatched,
}

/// Result of an exit event.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ExitOutcome {
    /// `score` was added to the fleet total.
    Exited { request: RequestId, score: f64 },
    /// No rider aboard was bound for the cabin's floor.  Counted as abnormal.
    Unmatched,
}

// ── DispatchEngine ────────────────────────────────────────────────────────────

/// Owns the fleet and every request not yet aboard a cabin.
///
/// Every public operation runs to completion against `&mut self`; wrap the
/// engine in a [`SharedDispatcher`][crate::SharedDispatcher] when several
/// callers feed it concurrently.
///
/// # Tick
///
/// ```text
/// next_commands():
///   ① Age      — every pooled request waits one more tick.
///   ② Assign   — each pooled request is offered to the fleet again.
///   ③ Decide   — each cabin, in index order, picks its command.
/// ```
///
/// Assignments made in ② are visible to the decisions in ③.
pub struct DispatchEngine {
    config: FleetConfig,

    cabins: Vec<Cabin>,

    /// Requests no cabin could take yet, in call order.
    pending: Vec<Request>,

    cumulative_score:     f64,
    abnormal_board_count: u64,
    abnormal_exit_count:  u64,
    reset_count:          u64,
    total_calls:          u64,
    exit_signals:         u64,

    tick:            Tick,
    next_request_id: u64,
}

impl Default for DispatchEngine {
    fn default() -> Self {
        Self::build(FleetConfig::default())
    }
}

impl DispatchEngine {
    /// Create an engine running `config`, validated first.
    pub fn new(config: FleetConfig) -> DispatchResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: FleetConfig) -> Self {
        let cabins = build_fleet(&config);
        Self {
            config,
            cabins,
            pending:              Vec::new(),
            cumulative_score:     0.0,
            abnormal_board_count: 0,
            abnormal_exit_count:  0,
            reset_count:          0,
            total_calls:          0,
            exit_signals:         0,
            tick:                 Tick::ZERO,
            next_request_id:      0,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// The fleet, in index order.
    pub fn cabins(&self) -> &[Cabin] {
        &self.cabins
    }

    pub fn cabin(&self, cabin: CabinId) -> DispatchResult<&Cabin> {
        let idx = self.check_cabin(cabin)?;
        Ok(&self.cabins[idx])
    }

    /// Requests not yet assigned to any cabin.
    pub fn pending(&self) -> &[Request] {
        &self.pending
    }

    /// Sum of every exited rider's score since the last reset.
    pub fn cumulative_score(&self) -> f64 {
        self.cumulative_score
    }

    pub fn abnormal_board_count(&self) -> u64 {
        self.abnormal_board_count
    }

    pub fn abnormal_exit_count(&self) -> u64 {
        self.abnormal_exit_count
    }

    /// Resets performed since the engine was created.
    pub fn reset_count(&self) -> u64 {
        self.reset_count
    }

    /// Call events received since the last reset.
    pub fn total_calls(&self) -> u64 {
        self.total_calls
    }

    /// Exit events received since the last reset, matched or not.
    pub fn exit_signals(&self) -> u64 {
        self.exit_signals
    }

    /// Ticks computed since the last reset.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Owned copy of the whole fleet state.
    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot::capture(self)
    }

    #[cfg(test)]
    pub(crate) fn cabins_mut(&mut self) -> &mut [Cabin] {
        &mut self.cabins
    }

    #[cfg(test)]
    pub(crate) fn pending_mut(&mut self) -> &mut Vec<Request> {
        &mut self.pending
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Compute one tick and return each cabin's command in index order.
    pub fn next_commands(&mut self) -> Vec<CabinCommand> {
        self.tick_observed(&mut NoopObserver)
    }

    /// [`next_commands`][Self::next_commands] with observer callbacks around
    /// the tick.
    pub fn tick_observed<O: DispatchObserver>(&mut self, observer: &mut O) -> Vec<CabinCommand> {
        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: age the pool ─────────────────────────────────────────
        for request in &mut self.pending {
            request.wait_ticks += 1;
        }

        // ── Phase 2: retry assignment in call order ───────────────────────
        //
        // Each assignment changes the receiving cabin's occupancy, so later
        // requests in the same pass see it.
        let pool = std::mem::take(&mut self.pending);
        for request in pool {
            if let Err(unassigned) = self.assign(request) {
                self.pending.push(unassigned);
            }
        }

        // ── Phase 3: per-cabin decisions in index order ───────────────────
        let commands: Vec<CabinCommand> =
            self.cabins.iter_mut().map(Cabin::next_command).collect();

        debug!(tick = now.0, commands = ?commands, pending = self.pending.len(), "tick");

        observer.on_tick_end(now, &commands, self);
        self.tick = now.next();
        commands
    }

    // ── Assignment ────────────────────────────────────────────────────────

    /// Hand `request` to the best eligible cabin.
    ///
    /// Returns the cabin it joined, or gives the request back when no cabin
    /// can take it yet.
    fn assign(&mut self, request: Request) -> Result<CabinId, Request> {
        let eligible = self.eligible_cabins(&request);
        let chosen = match eligible.as_slice() {
            [] => return Err(request),
            [only] => *only,
            _ => self.nearest_cabin(&request, &eligible),
        };

        let cabin = &mut self.cabins[chosen];
        debug!(request = request.id.0, cabin = cabin.id.0, origin = request.origin, "assigned");
        cabin.boarding_queue.push(request);
        Ok(cabin.id)
    }

    /// Indexes of every cabin allowed to take `request`, in fleet order.
    pub fn eligible_cabins(&self, request: &Request) -> Vec<usize> {
        self.cabins
            .iter()
            .enumerate()
            .filter(|(_, cabin)| cabin.can_take(request))
            .map(|(i, _)| i)
            .collect()
    }

    /// Among `eligible`, the first cabin strictly closer to the caller than
    /// every cabin before it, starting from the full floor span.
    ///
    /// If no cabin is strictly closer than the full span (every candidate
    /// sits at the far end of the building) the first eligible cabin is
    /// used.
    pub fn nearest_cabin(&self, request: &Request, eligible: &[usize]) -> usize {
        let mut best: Option<usize> = None;
        let mut min_distance = self.config.span();
        for &i in eligible {
            let distance = (self.cabins[i].floor - request.origin).abs();
            if distance < min_distance {
                min_distance = distance;
                best = Some(i);
            }
        }
        best.unwrap_or(eligible[0])
    }

    // ── External events ───────────────────────────────────────────────────

    /// A rider at `floor` asks to travel in `direction`.
    ///
    /// The request is assigned immediately when a cabin can take it,
    /// otherwise it waits in the pending pool until a later tick.
    pub fn call_at_floor(&mut self, floor: i32, direction: Direction) -> DispatchResult<RequestId> {
        self.check_floor(floor)?;

        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        self.total_calls += 1;

        info!(request = id.0, floor, %direction, "call");

        if let Err(unassigned) = self.assign(Request::waiting(id, floor, direction)) {
            self.pending.push(unassigned);
        }
        Ok(id)
    }

    /// A rider stepped into `cabin` and chose `destination`.
    ///
    /// The rider is looked up, in order, in the cabin's own queue (same floor
    /// and travel direction), the pending pool (same floor), then every other
    /// cabin's queue (same floor and direction).
    pub fn floor_to_go(&mut self, destination: i32, cabin: CabinId) -> DispatchResult<BoardOutcome> {
        let idx = self.check_cabin(cabin)?;
        self.check_floor(destination)?;

        let here = self.cabins[idx].floor;
        info!(cabin = cabin.0, from = here, to = destination, "boarding");

        if self.cabins[idx].is_full() {
            self.abnormal_board_count += 1;
            warn!(cabin = cabin.0, floor = here, to = destination, "boarding into a full cabin");
            return Ok(BoardOutcome::CabinFull);
        }

        let intended = Direction::toward(here, destination);
        let Some((mut request, source)) = self.find_boarding_rider(idx, here, intended) else {
            self.abnormal_board_count += 1;
            warn!(
                cabin = cabin.0,
                floor = here,
                to = destination,
                "no waiting rider matches boarding"
            );
            return Ok(BoardOutcome::Unmatched);
        };

        request.board(destination);
        let id = request.id;
        self.cabins[idx].riders.push(request);
        Ok(BoardOutcome::Boarded { request: id, source })
    }

    /// Detach the rider boarding cabin `idx` at `floor` from its current
    /// owner.
    fn find_boarding_rider(
        &mut self,
        idx:       usize,
        floor:     i32,
        direction: Direction,
    ) -> Option<(Request, BoardSource)> {
        if let Some(request) = self.cabins[idx].take_waiter(floor, direction) {
            return Some((request, BoardSource::OwnQueue));
        }

        if let Some(pos) = self.pending.iter().position(|r| r.origin == floor) {
            return Some((self.pending.remove(pos), BoardSource::Pool));
        }

        self.cabins
            .iter_mut()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .find_map(|(_, other)| {
                let id = other.id;
                other
                    .take_waiter(floor, direction)
                    .map(|request| (request, BoardSource::OtherCabin(id)))
            })
    }

    /// A rider left `cabin` at its current floor.
    pub fn user_has_exited(&mut self, cabin: CabinId) -> DispatchResult<ExitOutcome> {
        let idx = self.check_cabin(cabin)?;
        let floor = self.cabins[idx].floor;
        info!(cabin = cabin.0, floor, "exit");

        self.exit_signals += 1;

        match self.cabins[idx].take_alighting_rider() {
            Some(rider) => {
                self.cumulative_score += rider.score;
                Ok(ExitOutcome::Exited { request: rider.id, score: rider.score })
            }
            None => {
                self.abnormal_exit_count += 1;
                warn!(cabin = cabin.0, floor, "no rider can exit here");
                Ok(ExitOutcome::Unmatched)
            }
        }
    }

    /// A rider reports having entered `cabin`.  Acknowledged only: boarding
    /// state changes on [`floor_to_go`][Self::floor_to_go].
    pub fn user_has_entered(&mut self, cabin: CabinId) -> DispatchResult<()> {
        let idx = self.check_cabin(cabin)?;
        info!(cabin = cabin.0, floor = self.cabins[idx].floor, "entered");
        Ok(())
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Apply `params` over the current configuration and rebuild the fleet.
    pub fn reset(&mut self, params: ResetParams) -> DispatchResult<()> {
        self.reset_observed(params, &mut NoopObserver)
    }

    /// [`reset`][Self::reset] with an observer notified once the new fleet
    /// is in place.
    ///
    /// An invalid configuration is rejected before anything changes.
    pub fn reset_observed<O: DispatchObserver>(
        &mut self,
        params:   ResetParams,
        observer: &mut O,
    ) -> DispatchResult<()> {
        let config = params.apply(&self.config)?;

        info!(
            cause = params.cause.as_deref().unwrap_or("unspecified"),
            lower = config.lower_floor,
            higher = config.higher_floor,
            capacity = config.capacity,
            cabins = config.cabin_count,
            "reset"
        );

        self.cabins = build_fleet(&config);
        self.config = config;
        self.pending.clear();
        self.cumulative_score = 0.0;
        self.abnormal_board_count = 0;
        self.abnormal_exit_count = 0;
        self.total_calls = 0;
        self.exit_signals = 0;
        self.tick = Tick::ZERO;
        self.reset_count += 1;

        observer.on_reset(&self.config, self.reset_count);
        Ok(())
    }

    // ── Contract checks ───────────────────────────────────────────────────

    fn check_cabin(&self, cabin: CabinId) -> DispatchResult<usize> {
        let idx = cabin.index();
        if idx < self.cabins.len() {
            Ok(idx)
        } else {
            Err(DispatchError::CabinOutOfRange { cabin, count: self.cabins.len() })
        }
    }

    fn check_floor(&self, floor: i32) -> DispatchResult<()> {
        if self.config.contains(floor) {
            Ok(())
        } else {
            Err(DispatchError::FloorOutOfRange {
                floor,
                lower:  self.config.lower_floor,
                higher: self.config.higher_floor,
            })
        }
    }
}

/// Fresh cabins `0..cabin_count` for `config`.
fn build_fleet(config: &FleetConfig) -> Vec<Cabin> {
    (0..config.cabin_count)
        .map(|i| Cabin::new(CabinId(i as u32), config))
        .collect()
}

//! One cabin and its per-tick next-command decision.

use lift_core::{CabinCommand, CabinId, Direction, FleetConfig};
use tracing::trace;

use crate::{Request, best_score};

/// Fraction of capacity above which a cabin counts as almost full.
pub const ALMOST_FULL_RATIO: f64 = 0.8;

/// Minimum score for a rider to count as demand ahead while the cabin still
/// has valuable work.
pub const RIDER_DEMAND_SCORE: f64 = 2.0;

/// Minimum score for a queued waiter to count as demand ahead while the cabin
/// still has valuable work.
pub const WAITER_DEMAND_SCORE: f64 = 4.0;

/// A single car of the fleet.
///
/// The cabin owns two request lists: `boarding_queue` holds waiters assigned
/// to this car, `riders` holds requests aboard.  Both are mutated only by the
/// owning [`DispatchEngine`][crate::DispatchEngine] and by
/// [`next_command`][Self::next_command].
#[derive(Clone, Debug)]
pub struct Cabin {
    pub id: CabinId,

    /// Current floor, always within the configured bounds.
    pub floor: i32,

    pub direction: Direction,

    pub door_open: bool,

    /// Command issued on the previous decision (`Nothing` before the first).
    pub last_command: CabinCommand,

    /// Waiters assigned to this cabin, in assignment order.
    pub boarding_queue: Vec<Request>,

    /// Riders aboard, in boarding order.  Never longer than `capacity`.
    pub riders: Vec<Request>,

    lower_floor:  i32,
    higher_floor: i32,
    capacity:     usize,
}

impl Cabin {
    /// An empty, closed cabin heading up from the configured start floor.
    pub fn new(id: CabinId, config: &FleetConfig) -> Self {
        Self {
            id,
            floor:          config.start_floor(),
            direction:      Direction::Up,
            door_open:      false,
            last_command:   CabinCommand::Nothing,
            boarding_queue: Vec::new(),
            riders:         Vec::new(),
            lower_floor:    config.lower_floor,
            higher_floor:   config.higher_floor,
            capacity:       config.capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn lower_floor(&self) -> i32 {
        self.lower_floor
    }

    #[inline]
    pub fn higher_floor(&self) -> i32 {
        self.higher_floor
    }

    // ── Decision ──────────────────────────────────────────────────────────

    /// Age and rescore every member, then decide and apply this tick's
    /// command.
    ///
    /// Rules, first match wins:
    ///
    /// 1. Door open → `Close`.
    /// 2. Almost full or nobody scoring, and a rider can alight here → open.
    /// 3. A scoring rider alights here, or a scoring waiter boards here with
    ///    room aboard → open.
    /// 4. No riders and no waiters → `Nothing`.
    /// 5. At a boundary floor → move away from it.
    /// 6. Keep going while there is demand ahead, otherwise reverse.
    ///
    /// Rules 2 and 3 never fire right after a `Close`, so a cabin always
    /// leaves a floor once it has closed there.
    pub fn next_command(&mut self) -> CabinCommand {
        self.refresh_scores();

        let command = self.decide();
        trace!(
            cabin = self.id.0,
            floor = self.floor,
            direction = %self.direction,
            %command,
            "cabin decision"
        );
        command
    }

    fn decide(&mut self) -> CabinCommand {
        if self.door_open {
            self.door_open = false;
            self.last_command = CabinCommand::Close;
            return CabinCommand::Close;
        }

        let just_closed = self.last_command == CabinCommand::Close;
        let relaxed = self.is_almost_full() || !self.has_scoring_members();

        if relaxed && self.can_alight_here() && !just_closed {
            return self.open_door(self.direction);
        }

        let demand_ahead = self.has_demand_ahead(self.direction);

        if !just_closed
            && (self.scoring_rider_alights_here()
                || (self.scoring_waiter_boards_here() && self.riders.len() < self.capacity))
        {
            let heading = if demand_ahead { self.direction } else { self.direction.opposite() };
            return self.open_door(heading);
        }

        if self.is_empty() {
            self.last_command = CabinCommand::Nothing;
            return CabinCommand::Nothing;
        }

        if self.floor == self.lower_floor {
            return self.travel(Direction::Up);
        }
        if self.floor == self.higher_floor {
            return self.travel(Direction::Down);
        }

        let heading = if demand_ahead { self.direction } else { self.direction.opposite() };
        self.travel(heading)
    }

    /// Advance every member's accounting by one tick and recompute its score
    /// at the current floor.
    pub fn refresh_scores(&mut self) {
        let floor = self.floor;
        for waiter in &mut self.boarding_queue {
            waiter.wait_ticks += 1;
            waiter.score = best_score(waiter, floor);
        }
        for rider in &mut self.riders {
            rider.travel_ticks += 1;
            rider.score = best_score(rider, floor);
        }
    }

    /// Open the door.  Boundary floors force the announced direction;
    /// elsewhere `interior` is announced.
    fn open_door(&mut self, interior: Direction) -> CabinCommand {
        let heading = if self.floor == self.lower_floor {
            Direction::Up
        } else if self.floor == self.higher_floor {
            Direction::Down
        } else {
            interior
        };
        let command = heading.open_command();
        self.door_open = true;
        self.last_command = command;
        command
    }

    /// Move one floor towards `heading`.
    fn travel(&mut self, heading: Direction) -> CabinCommand {
        debug_assert!(!self.door_open, "cabin {} moving with door open", self.id);
        self.floor += match heading {
            Direction::Up => 1,
            Direction::Down => -1,
        };
        self.direction = heading;
        let command = heading.move_command();
        self.last_command = command;
        command
    }

    // ── Occupancy predicates ──────────────────────────────────────────────

    /// No riders aboard and nobody assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty() && self.boarding_queue.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.riders.len() >= self.capacity
    }

    /// More riders aboard than `floor(capacity * ALMOST_FULL_RATIO)`.
    pub fn is_almost_full(&self) -> bool {
        let threshold = (self.capacity as f64 * ALMOST_FULL_RATIO) as usize;
        self.riders.len() > threshold
    }

    /// Any rider or queued waiter with a positive score.
    pub fn has_scoring_members(&self) -> bool {
        self.riders.iter().any(Request::is_scoring)
            || self.boarding_queue.iter().any(Request::is_scoring)
    }

    /// Any rider whose destination is the current floor.
    pub fn can_alight_here(&self) -> bool {
        self.riders.iter().any(|r| r.alights_at(self.floor))
    }

    /// Any scoring rider whose destination is the current floor.
    pub fn scoring_rider_alights_here(&self) -> bool {
        self.riders.iter().any(|r| r.alights_at(self.floor) && r.is_scoring())
    }

    /// Any scoring queued waiter calling from the current floor.
    pub fn scoring_waiter_boards_here(&self) -> bool {
        self.boarding_queue
            .iter()
            .any(|w| w.origin == self.floor && w.is_scoring())
    }

    /// Whether any member needs the cabin further along `direction`.
    ///
    /// When the cabin is almost full, or nobody is scoring any more, every
    /// member counts.  Otherwise only riders scoring above
    /// [`RIDER_DEMAND_SCORE`] and waiters scoring above
    /// [`WAITER_DEMAND_SCORE`] count, so low-value stops are skipped while
    /// valuable work remains.
    pub fn has_demand_ahead(&self, direction: Direction) -> bool {
        let relaxed = !self.has_scoring_members() || self.is_almost_full();
        let floor = self.floor;

        let rider_ahead = self.riders.iter().any(|r| {
            let ahead = r.destination.is_some_and(|d| direction.is_beyond(floor, d));
            ahead && (relaxed || r.score > RIDER_DEMAND_SCORE)
        });
        if rider_ahead {
            return true;
        }

        self.boarding_queue.iter().any(|w| {
            let ahead = direction.is_beyond(floor, w.origin)
                || (w.origin == floor && w.direction == direction);
            ahead && (relaxed || w.score > WAITER_DEMAND_SCORE)
        })
    }

    /// Whether a pending `request` travels the same way as this cabin and
    /// has not been passed yet.
    pub fn is_on_the_way(&self, request: &Request) -> bool {
        if request.direction != self.direction {
            return false;
        }
        match self.direction {
            Direction::Up => self.floor <= request.origin,
            Direction::Down => self.floor >= request.origin,
        }
    }

    /// Whether this cabin may be assigned `request`: it must have room, and
    /// either have nothing valuable to do or be passing the caller's floor
    /// in the caller's direction.
    pub fn can_take(&self, request: &Request) -> bool {
        if self.is_full() {
            return false;
        }
        self.is_empty() || !self.has_scoring_members() || self.is_on_the_way(request)
    }

    // ── Membership transfers ──────────────────────────────────────────────

    /// Remove and return the first queued waiter calling from `floor` in
    /// `direction`.
    pub fn take_waiter(&mut self, floor: i32, direction: Direction) -> Option<Request> {
        let pos = self
            .boarding_queue
            .iter()
            .position(|w| w.origin == floor && w.direction == direction)?;
        Some(self.boarding_queue.remove(pos))
    }

    /// Remove and return the first rider bound for the current floor.
    pub fn take_alighting_rider(&mut self) -> Option<Request> {
        let floor = self.floor;
        let pos = self.riders.iter().position(|r| r.alights_at(floor))?;
        Some(self.riders.remove(pos))
    }
}

//! One rider's lifecycle record.

use lift_core::{Direction, RequestId};

/// Lifecycle phase of a [`Request`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestPhase {
    /// Called a cabin and has not boarded yet.
    Waiting,
    /// Aboard a cabin with a chosen destination.
    Riding,
}

/// A rider, from the moment they call until they exit.
///
/// A request is always owned by exactly one collection: the engine's pending
/// pool, one cabin's boarding queue, or one cabin's rider list.  Moving it
/// between them is a move of the value, never a copy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub id: RequestId,

    /// Floor the call was made from.
    pub origin: i32,

    /// Direction requested at call time.
    pub direction: Direction,

    /// Chosen destination; `Some` once the rider has boarded.
    pub destination: Option<i32>,

    /// Ticks spent waiting.  Frozen once the rider boards.
    pub wait_ticks: u32,

    /// Ticks spent aboard.
    pub travel_ticks: u32,

    /// Remaining achievable score, refreshed every tick by the owning cabin.
    /// Requests in the pending pool keep their last value (zero for fresh
    /// calls).
    pub score: f64,
}

impl Request {
    /// A fresh waiting request with zeroed accounting.
    pub fn waiting(id: RequestId, origin: i32, direction: Direction) -> Self {
        Self {
            id,
            origin,
            direction,
            destination:  None,
            wait_ticks:   0,
            travel_ticks: 0,
            score:        0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> RequestPhase {
        match self.destination {
            None => RequestPhase::Waiting,
            Some(_) => RequestPhase::Riding,
        }
    }

    #[inline]
    pub fn is_riding(&self) -> bool {
        self.destination.is_some()
    }

    /// `true` while the rider still contributes to dispatch priority.
    #[inline]
    pub fn is_scoring(&self) -> bool {
        self.score > 0.0
    }

    /// Transition to [`RequestPhase::Riding`] towards `destination`.
    pub fn board(&mut self, destination: i32) {
        self.destination = Some(destination);
    }

    /// `true` if this rider is aboard and bound for `floor`.
    #[inline]
    pub fn alights_at(&self, floor: i32) -> bool {
        self.destination == Some(floor)
    }
}

//! Rider satisfaction model.
//!
//! A rider starts with [`INITIAL_SCORE`] points.  Waiting costs one point per
//! two ticks, riding one point per tick, and the estimate of what is still
//! to come (distance to the cabin, or to the destination) is charged up
//! front.  Long trips earn back their own length so they are not penalized
//! for being long.
//!
//! All halving is integer division, so the result is always a whole number;
//! it is returned as `f64` because fleet totals are accumulated as floats.

use crate::Request;

/// Points a rider can earn before any waiting or travel.
pub const INITIAL_SCORE: i64 = 22;

/// Best score `request` can still achieve when served by a cabin standing at
/// `current_floor`.  Never negative.
pub fn best_score(request: &Request, current_floor: i32) -> f64 {
    let wait = i64::from(request.wait_ticks);
    let floor = i64::from(current_floor);
    let origin = i64::from(request.origin);

    let score = match request.destination {
        None => {
            let elapsed_wait = wait + (origin - floor).abs();
            INITIAL_SCORE - 1 - elapsed_wait / 2
        }
        Some(destination) => {
            let destination = i64::from(destination);
            let travel_estimate =
                i64::from(request.travel_ticks) + (floor - destination).abs() + 1;
            INITIAL_SCORE - wait / 2 - travel_estimate + (origin - destination).abs()
        }
    };

    score.max(0) as f64
}

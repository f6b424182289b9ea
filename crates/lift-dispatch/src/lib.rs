//! `lift-dispatch` — the dispatch and decision engine for a fleet of cabins.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`request`]   | `Request`, `RequestPhase` — one rider, waiting or riding        |
//! | [`score`]     | `best_score` — remaining achievable rider score                 |
//! | [`cabin`]     | `Cabin` — per-tick next-command state machine                   |
//! | [`engine`]    | `DispatchEngine` — assignment, tick loop, board/exit events     |
//! | [`shared`]    | `SharedDispatcher` — mutually exclusive handle for many callers |
//! | [`observer`]  | `DispatchObserver`, `NoopObserver`                              |
//! | [`snapshot`]  | `FleetSnapshot`, `CabinSnapshot`                                |
//! | [`error`]     | `DispatchError`, `DispatchResult<T>`                            |
//!
//! # Request ownership
//!
//! A request lives in exactly one place at a time:
//!
//! ```text
//! call ──► pending pool ──assign──► cabin.boarding_queue ──board──► cabin.riders ──exit──► gone
//!               └──────────────────────board──────────────────────────┘
//! ```
//!
//! Every arrow is a move of the `Request` value between `Vec`s, so a request
//! can never be counted twice.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{CabinId, Direction, ResetParams};
//! use lift_dispatch::DispatchEngine;
//!
//! let mut engine = DispatchEngine::default();
//! engine.reset(ResetParams::new().floors(0, 10).cabin_count(3))?;
//! engine.call_at_floor(4, Direction::Up)?;
//! let commands = engine.next_commands();
//! ```

pub mod cabin;
pub mod engine;
pub mod error;
pub mod observer;
pub mod request;
pub mod score;
pub mod shared;
pub mod snapshot;


pub use cabin::Cabin;
pub use engine::{BoardOutcome, BoardSource, DispatchEngine, ExitOutcome};
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use request::{Request, RequestPhase};
pub use score::{INITIAL_SCORE, best_score};
pub use shared::SharedDispatcher;
pub use snapshot::{CabinSnapshot, FleetSnapshot};

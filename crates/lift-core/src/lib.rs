//! `lift-core` — foundational types for the `lift` dispatch controller.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and a single external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CabinId`, `RequestId`                                |
//! | [`command`]     | `Direction`, `CabinCommand`, text protocol helpers    |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `FleetConfig`, `ResetParams`                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod command;
pub mod config;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::{CabinCommand, Direction, render_commands};
pub use config::{FleetConfig, ResetParams};
pub use error::{CoreError, CoreResult};
pub use ids::{CabinId, RequestId};
pub use time::Tick;

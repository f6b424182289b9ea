//! `lift-output` — per-tick trace writers for the lift dispatch controller.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `cabin_commands.csv`, `fleet_summaries.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `lift_dispatch::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut trace = TraceObserver::new(writer);
//! for _ in 0..100 {
//!     engine.tick_observed(&mut trace);
//! }
//! trace.finish();
//! if let Some(e) = trace.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{CabinCommandRow, FleetSummaryRow};
pub use writer::OutputWriter;

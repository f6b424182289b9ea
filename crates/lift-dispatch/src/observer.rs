//! Dispatch observer trait for tracing and data collection.

use lift_core::{CabinCommand, FleetConfig, Tick};

use crate::DispatchEngine;

/// Callbacks invoked by [`DispatchEngine::tick_observed`] and
/// [`DispatchEngine::reset_observed`].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — command printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl DispatchObserver for Printer {
///     fn on_tick_end(&mut self, tick: Tick, commands: &[CabinCommand], _: &DispatchEngine) {
///         println!("{tick}: {commands:?}");
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called before the pending pool is aged.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once every cabin has decided.  `commands` is in fleet index
    /// order and `engine` already reflects the commands' side effects.
    fn on_tick_end(&mut self, _tick: Tick, _commands: &[CabinCommand], _engine: &DispatchEngine) {}

    /// Called after a reset rebuilt the fleet.
    fn on_reset(&mut self, _config: &FleetConfig, _reset_count: u64) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

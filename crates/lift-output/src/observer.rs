//! `TraceObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use lift_core::{CabinCommand, Tick};
use lift_dispatch::{DispatchEngine, DispatchObserver};

use crate::row::{CabinCommandRow, FleetSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes one row per cabin and one fleet summary
/// for every observed tick.
///
/// Observer hooks cannot fail, so writer errors are stored.  After the run,
/// call [`finish`][Self::finish] and check [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, commands: &[CabinCommand], engine: &DispatchEngine) {
        let rows: Vec<CabinCommandRow> = engine
            .cabins()
            .iter()
            .zip(commands)
            .map(|(cabin, &command)| CabinCommandRow {
                tick:      tick.0,
                cabin:     cabin.id.0,
                command,
                floor:     cabin.floor,
                direction: cabin.direction,
                door_open: cabin.door_open,
                riders:    cabin.riders.len() as u32,
                queued:    cabin.boarding_queue.len() as u32,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_commands(&rows);
            self.store_err(result);
        }

        let summary = FleetSummaryRow {
            tick:             tick.0,
            pending:          engine.pending().len() as u64,
            riders:           engine.cabins().iter().map(|c| c.riders.len() as u64).sum(),
            cumulative_score: engine.cumulative_score(),
            abnormal_board:   engine.abnormal_board_count(),
            abnormal_exit:    engine.abnormal_exit_count(),
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
    }
}

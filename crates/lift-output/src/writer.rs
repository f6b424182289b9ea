//! The `OutputWriter` trait implemented by trace backends.

use crate::{CabinCommandRow, FleetSummaryRow, OutputResult};

/// Sink for per-tick trace rows.
///
/// Errors never interrupt dispatch: [`TraceObserver`][crate::TraceObserver]
/// keeps the first one for [`take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write one tick's cabin rows, in fleet order.
    fn write_commands(&mut self, rows: &[CabinCommandRow]) -> OutputResult<()>;

    /// Write one fleet summary row.
    fn write_summary(&mut self, row: &FleetSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `cabin_commands.csv`
//! - `fleet_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CabinCommandRow, FleetSummaryRow, OutputResult};

pub const COMMANDS_FILE: &str = "cabin_commands.csv";
pub const SUMMARIES_FILE: &str = "fleet_summaries.csv";

/// Writes the dispatch trace to two CSV files.
pub struct CsvWriter {
    commands:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir`, creating `dir` if needed, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut commands = Writer::from_path(dir.join(COMMANDS_FILE))?;
        commands.write_record([
            "tick", "cabin", "command", "floor", "direction", "door_open", "riders", "queued",
        ])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "tick",
            "pending",
            "riders",
            "cumulative_score",
            "abnormal_board",
            "abnormal_exit",
        ])?;

        Ok(Self { commands, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_commands(&mut self, rows: &[CabinCommandRow]) -> OutputResult<()> {
        for row in rows {
            self.commands.write_record(&[
                row.tick.to_string(),
                row.cabin.to_string(),
                row.command.to_string(),
                row.floor.to_string(),
                row.direction.to_string(),
                (row.door_open as u8).to_string(),
                row.riders.to_string(),
                row.queued.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &FleetSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.pending.to_string(),
            row.riders.to_string(),
            row.cumulative_score.to_string(),
            row.abnormal_board.to_string(),
            row.abnormal_exit.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.commands.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

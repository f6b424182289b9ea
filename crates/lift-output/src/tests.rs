//! Tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use lift_core::{CabinCommand, Direction};
    use tempfile::TempDir;

    use crate::csv::{COMMANDS_FILE, CsvWriter, SUMMARIES_FILE};
    use crate::row::{CabinCommandRow, FleetSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn command_row(cabin: u32, tick: u64) -> CabinCommandRow {
        CabinCommandRow {
            tick,
            cabin,
            command:   CabinCommand::OpenDown,
            floor:     -1,
            direction: Direction::Down,
            door_open: true,
            riders:    2,
            queued:    1,
        }
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(COMMANDS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "cabin", "command", "floor", "direction", "door_open", "riders", "queued"]
        );

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "pending", "riders", "cumulative_score", "abnormal_board", "abnormal_exit"]
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(COMMANDS_FILE).exists());
        assert!(nested.join(SUMMARIES_FILE).exists());
    }

    #[test]
    fn command_rows_use_protocol_names() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_commands(&[command_row(0, 9), command_row(1, 9)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, COMMANDS_FILE);
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "9");
        assert_eq!(&rows[0][2], "OPEN_DOWN");
        assert_eq!(&rows[0][3], "-1");
        assert_eq!(&rows[0][4], "DOWN");
        assert_eq!(&rows[0][5], "1");
        assert_eq!(&rows[1][1], "1");
    }

    #[test]
    fn summary_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = FleetSummaryRow {
            tick:             4,
            pending:          3,
            riders:           7,
            cumulative_score: 12.5,
            abnormal_board:   1,
            abnormal_exit:    0,
        };
        w.write_summary(&row).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, SUMMARIES_FILE);
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[0][3], "12.5");
        assert_eq!(&rows[0][4], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use lift_core::{CabinId, Direction, Tick};
    use lift_dispatch::DispatchEngine;
    use tempfile::TempDir;

    use crate::csv::{COMMANDS_FILE, CsvWriter, SUMMARIES_FILE};
    use crate::row::{CabinCommandRow, FleetSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, TraceObserver};

    /// Keeps rows in memory.
    #[derive(Default)]
    struct Memory {
        commands:  Vec<CabinCommandRow>,
        summaries: Vec<FleetSummaryRow>,
        finished:  usize,
    }

    impl OutputWriter for Memory {
        fn write_commands(&mut self, rows: &[CabinCommandRow]) -> OutputResult<()> {
            self.commands.extend_from_slice(rows);
            Ok(())
        }

        fn write_summary(&mut self, row: &FleetSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_commands(&mut self, _: &[CabinCommandRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("commands")))
        }

        fn write_summary(&mut self, _: &FleetSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("summary")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn one_row_per_cabin_per_tick() {
        let mut engine = DispatchEngine::default();
        let mut trace = TraceObserver::new(Memory::default());

        engine.call_at_floor(3, Direction::Up).unwrap();
        for _ in 0..4 {
            engine.tick_observed(&mut trace);
        }
        trace.finish();
        assert!(trace.take_error().is_none());

        let memory = trace.into_writer();
        assert_eq!(memory.commands.len(), 8);
        assert_eq!(memory.summaries.len(), 4);
        assert_eq!(memory.finished, 1);

        let last = memory.commands[6];
        assert_eq!(last.tick, 3);
        assert_eq!(last.cabin, 0);
        assert_eq!(last.command.to_string(), "OPEN_UP");
        assert_eq!(last.floor, 3);
        assert!(last.door_open);
        assert_eq!(last.queued, 1);
    }

    #[test]
    fn summary_tracks_engine_counters() {
        let mut engine = DispatchEngine::default();
        let mut trace = TraceObserver::new(Memory::default());

        engine.floor_to_go(2, CabinId(0)).unwrap();
        engine.user_has_exited(CabinId(1)).unwrap();
        engine.tick_observed(&mut trace);

        let summary = trace.into_writer().summaries[0];
        assert_eq!(summary.tick, Tick::ZERO.0);
        assert_eq!(summary.abnormal_board, 1);
        assert_eq!(summary.abnormal_exit, 1);
        assert_eq!(summary.riders, 0);
    }

    #[test]
    fn first_error_kept() {
        let mut engine = DispatchEngine::default();
        let mut trace = TraceObserver::new(Broken);

        engine.tick_observed(&mut trace);
        engine.tick_observed(&mut trace);

        let err = trace.take_error().unwrap();
        assert!(err.to_string().contains("commands"));
        assert!(trace.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut engine = DispatchEngine::default();
        let mut trace = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());

        engine.call_at_floor(1, Direction::Down).unwrap();
        for _ in 0..3 {
            engine.tick_observed(&mut trace);
        }
        trace.finish();
        assert!(trace.take_error().is_none());
        drop(trace);

        let mut rdr = csv::Reader::from_path(dir.path().join(COMMANDS_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 6);
        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let ticks: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ticks, ["0", "1", "2"]);
    }
}

//! rush_hour — drives the dispatch engine with seeded random rider traffic.
//!
//! Riders call from a random floor, board whichever cabin opens at their
//! floor announcing their direction, and leave when their cabin opens at
//! their destination.  Every tick is traced to CSV under
//! `output/rush_hour/`; the final fleet snapshot is printed as JSON.
//!
//! Set `RUST_LOG=lift_dispatch=debug` to follow individual ticks.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::{CabinCommand, CabinId, Direction, FleetConfig, ResetParams, render_commands};
use lift_dispatch::{BoardOutcome, DispatchEngine, ExitOutcome};
use lift_output::{CsvWriter, TraceObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64   = 42;
const TICKS:            u64   = 600;
const CALL_PROBABILITY: f64   = 0.4;
/// Calls stop this many ticks before the end so the fleet can drain.
const DRAIN_TICKS:      u64   = 120;
const OUTPUT_DIR:       &str  = "output/rush_hour";

// ── Simulated riders ──────────────────────────────────────────────────────────

struct Waiting {
    origin:      i32,
    destination: i32,
}

impl Waiting {
    fn direction(&self) -> Direction {
        Direction::toward(self.origin, self.destination)
    }
}

struct Aboard {
    cabin:       CabinId,
    destination: i32,
}

#[derive(Default)]
struct Tally {
    calls:    u64,
    boarded:  u64,
    exited:   u64,
    rejected: u64,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut engine = DispatchEngine::new(FleetConfig::default())?;
    engine.reset(ResetParams::new().floors(-1, 12).capacity(6).cabin_count(3).cause("rush hour"))?;
    let config = engine.config().clone();
    info!(?config, seed = SEED, ticks = TICKS, "starting");

    let mut trace = TraceObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);
    let mut rng = SmallRng::seed_from_u64(SEED);

    let mut waiting: Vec<Waiting> = Vec::new();
    let mut aboard: Vec<Aboard> = Vec::new();
    let mut tally = Tally::default();
    let mut last_commands = Vec::new();

    let t0 = Instant::now();
    for t in 0..TICKS {
        // 1. New callers.
        if t < TICKS - DRAIN_TICKS && rng.gen_bool(CALL_PROBABILITY) {
            let origin = rng.gen_range(config.lower_floor..=config.higher_floor);
            let mut destination = rng.gen_range(config.lower_floor..config.higher_floor);
            if destination >= origin {
                destination += 1;
            }
            let rider = Waiting { origin, destination };
            engine.call_at_floor(origin, rider.direction())?;
            waiting.push(rider);
            tally.calls += 1;
        }

        // 2. Dispatch.
        let commands = engine.tick_observed(&mut trace);

        // 3. Riders react to open doors.
        for (i, command) in commands.iter().enumerate() {
            let announced = match command {
                CabinCommand::OpenUp => Direction::Up,
                CabinCommand::OpenDown => Direction::Down,
                _ => continue,
            };
            let cabin = CabinId(i as u32);
            let floor = engine.cabin(cabin)?.floor;

            let mut k = 0;
            while k < aboard.len() {
                if aboard[k].cabin == cabin && aboard[k].destination == floor {
                    aboard.swap_remove(k);
                    if let ExitOutcome::Exited { .. } = engine.user_has_exited(cabin)? {
                        tally.exited += 1;
                    }
                } else {
                    k += 1;
                }
            }

            let mut k = 0;
            while k < waiting.len() {
                let rider = &waiting[k];
                if rider.origin != floor || rider.direction() != announced {
                    k += 1;
                    continue;
                }
                if engine.cabin(cabin)?.is_full() {
                    break;
                }
                engine.user_has_entered(cabin)?;
                match engine.floor_to_go(rider.destination, cabin)? {
                    BoardOutcome::Boarded { .. } => {
                        let rider = waiting.swap_remove(k);
                        aboard.push(Aboard { cabin, destination: rider.destination });
                        tally.boarded += 1;
                    }
                    BoardOutcome::CabinFull | BoardOutcome::Unmatched => {
                        tally.rejected += 1;
                        k += 1;
                    }
                }
            }
        }

        last_commands = commands;
    }
    let elapsed = t0.elapsed();

    trace.finish();
    if let Some(e) = trace.take_error() {
        eprintln!("trace error: {e}");
    }

    // 4. Summary.
    let snapshot = engine.snapshot();
    println!("Dispatch complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  calls {}  boarded {}  exited {}  rejected {}  still waiting {}  aboard {}",
        tally.calls,
        tally.boarded,
        tally.exited,
        tally.rejected,
        waiting.len(),
        aboard.len(),
    );
    println!("  cumulative score {:.1}", snapshot.cumulative_score);
    println!("Last tick commands:");
    print!("{}", render_commands(&last_commands));
    println!();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

//! headless — run the physarum simulator without a window.
//!
//! Usage: `headless [config.json]`
//!
//! Without an argument the built-in defaults are used (800×600 field, 3000
//! agents, uniform placement).  See `demo.json` next to this crate for the
//! file format.  Set `RUST_LOG=debug` (or `trace`) for engine logging.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use ph_agent::AgentPopulation;
use ph_core::{SimConfig, SimParams, Tick};
use ph_field::TrailField;
use ph_output::{CsvWriter, SimOutputObserver};
use ph_sim::{SimBuilder, SimObserver};

// ── Configuration file ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    width:      usize,
    height:     usize,
    output_dir: PathBuf,
    config:     SimConfig,
    params:     SimParams,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width:      800,
            height:     600,
            output_dir: PathBuf::from("output/headless"),
            config:     SimConfig { seed: Some(42), ..SimConfig::default() },
            params:     SimParams::default(),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer wrapper to report progress ──────────────────────────────────────

/// Records per-snapshot trail statistics and forwards every hook to `inner`.
struct ProgressObserver<O: SimObserver> {
    inner:     O,
    snapshots: Vec<(Tick, f64, f32)>,
}

impl<O: SimObserver> ProgressObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, snapshots: Vec::new() }
    }
}

impl<O: SimObserver> SimObserver for ProgressObserver<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, field: &TrailField, agents: &AgentPopulation) {
        self.inner.on_tick_end(tick, field, agents);
    }

    fn on_snapshot(&mut self, tick: Tick, field: &TrailField, agents: &AgentPopulation) {
        let (total, max) = (field.total(), field.max());
        info!(%tick, total_trail = total, max_trail = max, "snapshot");
        self.snapshots.push((tick, total, max));
        self.inner.on_snapshot(tick, field, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let demo = load_config(path.as_deref())?;

    if let Some(threads) = demo.config.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring rayon thread pool")?;
    }

    println!("=== headless — physarum transport networks ===");
    println!(
        "Field: {}x{}  |  Agents: {}  |  Ticks: {}  |  Placement: {}",
        demo.width,
        demo.height,
        demo.params.agent_count,
        demo.config.total_ticks,
        demo.params.distribution,
    );
    println!();

    let mut sim = SimBuilder::new(demo.config.clone(), demo.width, demo.height)
        .params(demo.params.clone())
        .build()?;

    std::fs::create_dir_all(&demo.output_dir)
        .with_context(|| format!("creating {}", demo.output_dir.display()))?;
    let writer = CsvWriter::new(&demo.output_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {:.1} ticks/s, {:.2} M agent-steps/s",
        demo.config.total_ticks as f64 / elapsed.as_secs_f64(),
        demo.config.total_ticks as f64 * demo.params.agent_count as f64
            / elapsed.as_secs_f64()
            / 1e6,
    );
    println!("  output written to {}", demo.output_dir.display());
    println!();

    println!("{:<10} {:>14} {:>10}", "Tick", "Total trail", "Max");
    println!("{}", "-".repeat(36));
    for (tick, total, max) in &obs.snapshots {
        println!("{:<10} {:>14.3} {:>10.4}", tick.to_string(), total, max);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct HookCounts {
        starts:    u64,
        ends:      u64,
        snapshots: u64,
        finished:  Option<Tick>,
    }

    impl SimObserver for HookCounts {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, _field: &TrailField, _agents: &AgentPopulation) {
            self.ends += 1;
        }
        fn on_snapshot(&mut self, _tick: Tick, _field: &TrailField, _agents: &AgentPopulation) {
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.finished = Some(final_tick);
        }
    }

    #[test]
    fn progress_observer_forwards_every_hook() {
        let config = SimConfig {
            total_ticks:           6,
            seed:                  Some(3),
            num_threads:           None,
            output_interval_ticks: 3,
        };
        let params = SimParams { agent_count: 50, ..SimParams::default() };
        let mut sim = SimBuilder::new(config, 40, 30).params(params).build().unwrap();

        let mut obs = ProgressObserver::new(HookCounts::default());
        sim.run(&mut obs);

        assert_eq!(obs.inner.starts, 6);
        assert_eq!(obs.inner.ends, 6);
        // Completed ticks 0 and 3.
        assert_eq!(obs.inner.snapshots, 2);
        assert_eq!(obs.snapshots.len(), 2);
        assert_eq!(obs.inner.finished, Some(Tick(6)));
    }

    #[test]
    fn default_config_when_no_path() {
        let demo = load_config(None).unwrap();
        assert_eq!((demo.width, demo.height), (800, 600));
        assert_eq!(demo.params, SimParams::default());
    }
}

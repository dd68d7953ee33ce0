//! Simulation observer trait for progress reporting and data collection.

use ph_agent::AgentPopulation;
use ph_core::Tick;
use ph_field::TrailField;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every `tick` argument is the 0-based
/// index of the tick being processed.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, field: &TrailField, _agents: &AgentPopulation) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: total trail {:.2}", field.total());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any phase runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the diffusion phase with read access to the results.
    fn on_tick_end(&mut self, _tick: Tick, _field: &TrailField, _agents: &AgentPopulation) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after `on_tick_end`.
    fn on_snapshot(&mut self, _tick: Tick, _field: &TrailField, _agents: &AgentPopulation) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

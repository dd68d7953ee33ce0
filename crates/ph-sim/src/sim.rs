//! The `Sim` struct and its tick loop.

use ph_agent::{AgentPopulation, AgentRngs, PopulationBuilder};
use ph_core::{RandomSource, SimConfig, SimParams, SimRng, Tick};
use ph_field::{Kernel3x3, TrailField};
use tracing::{debug, trace, warn};

use crate::step::{self, deposit_all};
use crate::{SimError, SimObserver, SimResult};

// ── TickView ──────────────────────────────────────────────────────────────────

/// Read-only results of one tick, handed to the rendering side.
#[derive(Copy, Clone, Debug)]
pub struct TickView<'a> {
    /// The tick just completed (0-based).
    pub tick:   Tick,
    pub field:  &'a TrailField,
    pub agents: &'a AgentPopulation,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the trail field and the population and advances both through
/// the four ordered phases described in the [crate docs](crate).  Parameters
/// are replaced wholesale via [`set_params`](Self::set_params) and are never
/// modified by the sim itself.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run-level configuration (total ticks, seed, snapshot interval, …).
    pub config: SimConfig,

    pub(crate) params:   SimParams,
    pub(crate) kernel:   Kernel3x3,
    pub(crate) field:    TrailField,
    pub(crate) agents:   AgentPopulation,
    pub(crate) rngs:     AgentRngs,
    /// Root RNG; each reset draws a child from it.
    pub(crate) root_rng: SimRng,
    pub(crate) tick:     Tick,
    pub(crate) resets:   u64,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn kernel(&self) -> &Kernel3x3 {
        &self.kernel
    }

    pub fn field(&self) -> &TrailField {
        &self.field
    }

    pub fn agents(&self) -> &AgentPopulation {
        &self.agents
    }

    /// Number of ticks completed since the last reset.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Replace the parameters read by every later tick.
    ///
    /// `agent_count` and `distribution` only take effect at the next
    /// [`reset`](Self::reset).  On error the previous parameters stay.
    pub fn set_params(&mut self, params: SimParams) -> SimResult<()> {
        if let Err(e) = params.validate() {
            warn!(error = %e, "rejected parameter change");
            return Err(e.into());
        }
        self.params = params;
        Ok(())
    }

    /// Reallocate the field at `width × height` (all zero) and rebuild the
    /// population from `params`.
    ///
    /// Everything is built before anything is replaced, so a rejected reset
    /// leaves the running simulation exactly as it was.
    pub fn reset(&mut self, width: usize, height: usize, params: SimParams) -> SimResult<()> {
        let prepared = params
            .validate()
            .map_err(SimError::from)
            .and_then(|()| TrailField::new(width, height).map_err(SimError::from));
        let field = match prepared {
            Ok(field) => field,
            Err(e) => {
                warn!(error = %e, width, height, "rejected reset");
                return Err(e);
            }
        };

        let mut placement_rng = self.root_rng.child(self.resets);
        let (agents, rngs) = PopulationBuilder::new(params.agent_count)
            .distribution(params.distribution)
            .build(width, height, &mut placement_rng)?;

        debug!(
            width,
            height,
            agents = params.agent_count,
            distribution = %params.distribution,
            reset = self.resets,
            "simulation reset"
        );

        self.field  = field;
        self.agents = agents;
        self.rngs   = rngs;
        self.params = params;
        self.tick   = Tick::ZERO;
        self.resets += 1;
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick, steering with each agent's own RNG.
    #[cfg(not(feature = "parallel"))]
    pub fn tick(&mut self) -> TickView<'_> {
        self.tick_serial()
    }

    /// Advance one tick, steering with each agent's own RNG.
    ///
    /// The steer and move phases run on Rayon's pool; the result is
    /// identical to [`tick_serial`](Self::tick_serial).
    #[cfg(feature = "parallel")]
    pub fn tick(&mut self) -> TickView<'_> {
        self.steer_parallel();
        self.advance_parallel();
        self.finish_tick()
    }

    /// Advance one tick with every agent phase on the calling thread.
    pub fn tick_serial(&mut self) -> TickView<'_> {
        let field  = &self.field;
        let params = &self.params;
        for (agent, rng) in self.agents.as_mut_slice().iter_mut().zip(self.rngs.as_mut_slice()) {
            let readings = step::sense(agent, field, params);
            step::steer(agent, readings, params, rng);
        }
        self.advance_serial();
        self.finish_tick()
    }

    /// Advance one tick, drawing every random turn from `source` in agent
    /// order.  Always sequential; intended for tests and replays that need
    /// to script the coin flips.
    pub fn tick_with<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> TickView<'_> {
        for agent in self.agents.as_mut_slice() {
            let readings = step::sense(agent, &self.field, &self.params);
            step::steer(agent, readings, &self.params, source);
        }
        self.advance_serial();
        self.finish_tick()
    }

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.tick < self.config.end_tick() {
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let interval = self.config.output_interval_ticks;
        observer.on_tick_start(self.tick);
        let view = self.tick();
        observer.on_tick_end(view.tick, view.field, view.agents);
        if interval > 0 && view.tick.0 % interval == 0 {
            observer.on_snapshot(view.tick, view.field, view.agents);
        }
    }

    /// Phase ①.  Reads only the field as it stood at tick start.
    #[cfg(feature = "parallel")]
    fn steer_parallel(&mut self) {
        use rayon::prelude::*;

        let field  = &self.field;
        let params = &self.params;
        self.agents
            .as_mut_slice()
            .par_iter_mut()
            .zip(self.rngs.as_mut_slice().par_iter_mut())
            .for_each(|(agent, rng)| {
                let readings = step::sense(agent, field, params);
                step::steer(agent, readings, params, rng);
            });
    }

    /// Phase ②.
    #[cfg(feature = "parallel")]
    fn advance_parallel(&mut self) {
        use rayon::prelude::*;

        let width  = self.field.width() as f32;
        let height = self.field.height() as f32;
        let params = &self.params;
        self.agents
            .as_mut_slice()
            .par_iter_mut()
            .for_each(|agent| step::advance(agent, params, width, height));
    }

    fn advance_serial(&mut self) {
        let width  = self.field.width() as f32;
        let height = self.field.height() as f32;
        for agent in self.agents.as_mut_slice() {
            step::advance(agent, &self.params, width, height);
        }
    }

    /// Phases ③ and ④, then bump the tick counter.
    fn finish_tick(&mut self) -> TickView<'_> {
        // ── Phase ③: deposit (sequential: all agents share the field) ────
        let landed = deposit_all(&self.agents, &mut self.field, self.params.deposit_amount);

        // ── Phase ④: diffuse + decay ─────────────────────────────────────
        self.field.diffuse_and_decay(&self.kernel, self.params.decay_factor);

        let completed = self.tick;
        self.tick = completed.next();
        trace!(tick = completed.0, landed, total = self.field.total(), "tick complete");

        TickView {
            tick:   completed,
            field:  &self.field,
            agents: &self.agents,
        }
    }
}

//! Fluent builder for constructing a [`Sim`].

use ph_agent::{AgentPopulation, AgentRngs};
use ph_core::{SimConfig, SimParams, SimRng, Tick};
use ph_field::{Kernel3x3, TrailField};
use tracing::debug;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, snapshot interval, …
/// - field `width × height` in cells
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                   |
/// |---------------|---------------------------|
/// | `.params(p)`  | `SimParams::default()`    |
/// | `.kernel(k)`  | `Kernel3x3::GAUSSIAN`     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, 800, 600)
///     .params(params)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    width:  usize,
    height: usize,
    params: SimParams,
    kernel: Kernel3x3,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, width: usize, height: usize) -> Self {
        Self {
            config,
            width,
            height,
            params: SimParams::default(),
            kernel: Kernel3x3::GAUSSIAN,
        }
    }

    /// Model parameters for the first reset and every tick after it.
    pub fn params(mut self, params: SimParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the diffusion stencil.
    ///
    /// Weights must be finite and non-negative so the field stays
    /// non-negative.  A kernel that does not sum to 1 is accepted but will
    /// gain or lose mass every pass.
    pub fn kernel(mut self, kernel: Kernel3x3) -> Self {
        self.kernel = kernel;
        self
    }

    /// Validate inputs, allocate the field, place the population, and return
    /// a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.kernel.weights().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SimError::Config(format!(
                "diffusion kernel weights must be finite and non-negative: {:?}",
                self.kernel.weights()
            )));
        }

        let root_rng = match self.config.seed {
            Some(seed) => SimRng::new(seed),
            None       => SimRng::from_entropy(),
        };

        // Placeholder state; `reset` below validates and replaces all of it.
        let mut sim = Sim {
            config:   self.config,
            params:   self.params.clone(),
            kernel:   self.kernel,
            field:    TrailField::new(1, 1)?,
            agents:   AgentPopulation::new(),
            rngs:     AgentRngs::default(),
            root_rng,
            tick:     Tick::ZERO,
            resets:   0,
        };
        sim.reset(self.width, self.height, self.params)?;

        debug!(
            width = self.width,
            height = self.height,
            seed = ?sim.config.seed,
            total_ticks = sim.config.total_ticks,
            "simulation built"
        );
        Ok(sim)
    }
}

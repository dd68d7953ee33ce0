//! Fluent builder for constructing `AgentPopulation` + `AgentRngs` in one
//! step.

use ph_core::{Distribution, PhResult, SimRng};

use crate::{AgentPopulation, AgentRngs};

/// Fluent builder for [`AgentPopulation`] + [`AgentRngs`].
///
/// Placement draws from the caller's `SimRng`; the per-agent RNGs are then
/// seeded from a value drawn from that same stream, so one stream fixes
/// both the layout and every later random turn.
pub struct PopulationBuilder {
    count:        usize,
    distribution: Distribution,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            distribution: Distribution::default(),
        }
    }

    /// Placement policy (default: [`Distribution::UniformRandom`]).
    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Place every agent on a `width × height` field.
    ///
    /// Fails without drawing per-agent seeds if the count or either
    /// dimension is zero.
    pub fn build(
        self,
        width:  usize,
        height: usize,
        rng:    &mut SimRng,
    ) -> PhResult<(AgentPopulation, AgentRngs)> {
        let mut agents = AgentPopulation::new();
        agents.initialize(self.count, &self.distribution, width, height, rng)?;
        let rngs = AgentRngs::new(self.count, rng.random());
        Ok((agents, rngs))
    }
}

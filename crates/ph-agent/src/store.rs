//! Population storage: `AgentPopulation` (agent records) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The parallel steering phase needs `&mut` access to each agent *and* to
//! that agent's RNG, while the trail field is shared read-only.  Keeping RNGs
//! in a separate `AgentRngs` lets the sim zip the two slices with
//! `par_iter_mut()` without any aliasing tricks:
//!
//! ```ignore
//! agents.as_mut_slice()
//!     .par_iter_mut()
//!     .zip(rngs.as_mut_slice().par_iter_mut())
//!     .for_each(|(agent, rng)| steer(agent, &field, &params, rng));
//! ```

use ph_core::{AgentId, AgentRng, PhError, PhResult, SimRng};

use crate::{Agent, Placement};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, index-aligned with [`AgentPopulation`].
#[derive(Clone, Debug, Default)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `population_seed`.
    pub fn new(count: usize, population_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(population_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [AgentRng] {
        &mut self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentPopulation ───────────────────────────────────────────────────────────

/// Every agent in the simulation, indexed by [`AgentId`].
#[derive(Clone, Debug, Default)]
pub struct AgentPopulation {
    agents: Vec<Agent>,
}

impl AgentPopulation {
    /// An empty population.  Call [`initialize`](Self::initialize) to fill it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap explicit agent records (tests, hand-built scenarios).
    pub fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// Discard every agent and create exactly `count` new ones using
    /// `placement`.
    ///
    /// The replacement is built in full before the old agents are dropped,
    /// so on error the previous population is untouched.
    pub fn initialize<P: Placement + ?Sized>(
        &mut self,
        count:     usize,
        placement: &P,
        width:     usize,
        height:    usize,
        rng:       &mut SimRng,
    ) -> PhResult<()> {
        if count == 0 {
            return Err(PhError::Config("agent count must be at least 1".into()));
        }
        if width == 0 || height == 0 {
            return Err(PhError::Config(format!(
                "field dimensions must be non-zero, got {width}x{height}"
            )));
        }

        let (w, h) = (width as f32, height as f32);
        let agents: Vec<Agent> = (0..count)
            .map(|i| placement.place(i, count, w, h, rng))
            .collect();

        self.agents = agents;
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable access for the sim's phases.  The length cannot change.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }
}

impl<'a> IntoIterator for &'a AgentPopulation {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

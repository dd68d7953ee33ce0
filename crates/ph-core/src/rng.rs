//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = population_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Per-agent streams mean the steering phase produces the same headings
//! whether it runs sequentially or on Rayon's pool.
//!
//! The population seed itself is drawn from the root [`SimRng`] at every
//! reset, so successive resets produce different layouts while the whole
//! run stays reproducible from `SimConfig::seed`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The randomness the steering rule consumes.
///
/// Injected into the sense/steer phase so tests can script outcomes.
pub trait RandomSource {
    /// Fair two-outcome draw: `true` and `false` each with probability 1/2.
    fn coin_flip(&mut self) -> bool;

    /// Uniform `f32` in `[low, high]`.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// One per agent, stored in a parallel `Vec<AgentRng>` alongside the
/// population.  Each Rayon worker gets exclusive access to its slice.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from a population seed and an agent ID.
    pub fn new(population_seed: u64, agent: AgentId) -> Self {
        let seed = population_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for AgentRng {
    #[inline]
    fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    #[inline]
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if low >= high {
            return low;
        }
        self.0.gen_range(low..=high)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (placement at reset, deriving
/// per-agent seeds).
///
/// Used only in single-threaded contexts.  Parallel work uses [`AgentRng`]s
/// derived from it.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Runs are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    #[inline]
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if low >= high {
            return low;
        }
        self.0.gen_range(low..=high)
    }
}

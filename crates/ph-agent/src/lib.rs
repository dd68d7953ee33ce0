//! `ph-agent` — agent storage and initial placement.
//!
//! # Key types
//!
//! | Type                 | Role                                                    |
//! |----------------------|---------------------------------------------------------|
//! | [`Agent`]            | `{ x, y, heading }` record, nothing more                |
//! | [`AgentPopulation`]  | Owns every agent; rebuilt wholesale by `initialize`     |
//! | [`AgentRngs`]        | Per-agent deterministic RNGs, stored beside the agents  |
//! | [`Placement`]        | "Place one agent" capability behind each distribution   |
//! | [`PopulationBuilder`]| Builds a population and its RNGs in one call            |
//!
//! # Usage
//!
//! ```rust
//! use ph_agent::PopulationBuilder;
//! use ph_core::{Distribution, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let (agents, rngs) = PopulationBuilder::new(500)
//!     .distribution(Distribution::CenterDisk)
//!     .build(200, 100, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(agents.len(), 500);
//! assert_eq!(rngs.len(),   500);
//! assert!(agents.iter().all(|a| a.x < 200.0 && a.y < 100.0));
//! ```

pub mod agent;
pub mod builder;
pub mod placement;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, wrap_coord};
pub use builder::PopulationBuilder;
pub use placement::{CenterDisk, CenterPoint, Placement, UniformRandom, DISK_RADIUS_FRACTION};
pub use store::{AgentPopulation, AgentRngs};

//! `ph-core` — foundational types for the physarum transport-network simulator.
//!
//! This crate is a dependency of every other `ph-*` crate.  It has no `ph-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`params`]      | `SimParams`, `Distribution`, `HeadingMode`, `SensorBoundary` |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global), `RandomSource` |
//! | [`error`]       | `PhError`, `PhResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and parameter     |
//!           | types so applications can load them from JSON.             |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PhError, PhResult};
pub use ids::AgentId;
pub use params::{Distribution, HeadingMode, SensorBoundary, SimParams};
pub use rng::{AgentRng, RandomSource, SimRng};
pub use time::{SimConfig, Tick};

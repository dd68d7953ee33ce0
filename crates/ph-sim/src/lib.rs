//! `ph-sim` — tick loop orchestrator for the physarum simulator.
//!
//! # Phased tick loop
//!
//! ```text
//! every tick, each phase over the whole population before the next:
//!   ① Sense+steer — sample F, FL, FR from the trail field; turn
//!                   (parallel with the `parallel` feature).
//!   ② Move        — advance along the heading, wrap onto the torus
//!                   (parallel with the `parallel` feature).
//!   ③ Deposit     — add the deposit amount at each agent's rounded cell;
//!                   border cells are skipped.
//!   ④ Diffuse     — 3×3 kernel + decay over the pre-phase field.
//! ```
//!
//! Sensing in ① never sees deposits from ③ of the same tick, and ④ reads
//! only the field as it stood when ④ began.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs phases ①, ② and ④ on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust
//! use ph_core::{SimConfig, SimParams};
//! use ph_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { total_ticks: 10, seed: Some(42), ..SimConfig::default() };
//! let params = SimParams { agent_count: 200, ..SimParams::default() };
//! let mut sim = SimBuilder::new(config, 128, 96).params(params).build().unwrap();
//! sim.run(&mut NoopObserver);
//! assert_eq!(sim.current_tick().0, 10);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod step;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickView};
pub use step::{Decision, Readings};

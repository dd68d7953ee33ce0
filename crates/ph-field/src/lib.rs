//! `ph-field` — the shared trail field.
//!
//! A dense `width × height` grid of `f32` chemoattractant concentration.
//! Agents read it through their sensors and write it by deposition; once per
//! tick the whole grid is diffused through a 3×3 kernel and decayed.
//!
//! # Edge policy
//!
//! The outermost ring of cells is frozen: deposits landing there are
//! discarded and the diffusion pass leaves those cells untouched, so the
//! 3×3 stencil never reads outside the grid.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Diffuses rows on Rayon's thread pool.                  |

pub mod error;
pub mod field;
pub mod kernel;


pub use error::{FieldError, FieldResult};
pub use field::TrailField;
pub use kernel::Kernel3x3;
pub use ph_core::SensorBoundary;

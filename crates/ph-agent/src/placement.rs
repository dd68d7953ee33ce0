//! Initial placement policies.
//!
//! Each policy answers one question: "where does agent `i` of `count` start,
//! and which way does it face?".  [`Distribution`] implements [`Placement`]
//! by dispatching to the concrete policy, so configuration stays a plain
//! enum while tests and applications can supply their own policy.

use std::f32::consts::{FRAC_PI_2, TAU};

use ph_core::{Distribution, HeadingMode, SimRng};

use crate::{Agent, wrap_coord};

/// Disk radius for [`CenterDisk`], as a fraction of the longer field side.
pub const DISK_RADIUS_FRACTION: f32 = 0.2;

/// Capability to place one agent.
pub trait Placement {
    /// Create agent `index` of `count` on a `width × height` field.
    ///
    /// The returned position must lie in `[0, width) × [0, height)`.
    fn place(&self, index: usize, count: usize, width: f32, height: f32, rng: &mut SimRng) -> Agent;
}

#[inline]
fn random_heading(rng: &mut SimRng) -> f32 {
    rng.gen_range(0.0..TAU)
}

// ── UniformRandom ─────────────────────────────────────────────────────────────

/// Position uniform over the field, heading uniform in `[0, 2π)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformRandom;

impl Placement for UniformRandom {
    fn place(&self, _index: usize, _count: usize, width: f32, height: f32, rng: &mut SimRng) -> Agent {
        let x = rng.gen_range(0.0..width);
        let y = rng.gen_range(0.0..height);
        Agent::new(x, y, random_heading(rng))
    }
}

// ── CenterPoint ───────────────────────────────────────────────────────────────

/// Every agent at `(width/2, height/2)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct CenterPoint {
    pub headings: HeadingMode,
}

impl Placement for CenterPoint {
    fn place(&self, index: usize, count: usize, width: f32, height: f32, rng: &mut SimRng) -> Agent {
        let heading = match self.headings {
            HeadingMode::Random => random_heading(rng),
            HeadingMode::Even   => TAU * index as f32 / count.max(1) as f32 - FRAC_PI_2,
        };
        Agent::new(width / 2.0, height / 2.0, heading)
    }
}

// ── CenterDisk ────────────────────────────────────────────────────────────────

/// Area-uniform inside a centred disk of radius
/// `DISK_RADIUS_FRACTION · max(width, height)`.
///
/// The radius is `R·√u` rather than `R·u` so density does not pile up at
/// the centre.  On very elongated fields the disk overhangs the short side;
/// those positions wrap like any other.
#[derive(Copy, Clone, Debug, Default)]
pub struct CenterDisk;

impl Placement for CenterDisk {
    fn place(&self, _index: usize, _count: usize, width: f32, height: f32, rng: &mut SimRng) -> Agent {
        let radius = width.max(height) * DISK_RADIUS_FRACTION;
        let theta = rng.gen_range(0.0..TAU);
        let r = radius * rng.random::<f32>().sqrt();
        let x = wrap_coord(r * theta.cos() + width / 2.0, width);
        let y = wrap_coord(r * theta.sin() + height / 2.0, height);
        Agent::new(x, y, random_heading(rng))
    }
}

// ── Distribution dispatch ─────────────────────────────────────────────────────

impl Placement for Distribution {
    fn place(&self, index: usize, count: usize, width: f32, height: f32, rng: &mut SimRng) -> Agent {
        match *self {
            Distribution::UniformRandom => UniformRandom.place(index, count, width, height, rng),
            Distribution::CenterPoint { headings } => {
                CenterPoint { headings }.place(index, count, width, height, rng)
            }
            Distribution::CenterDisk => CenterDisk.place(index, count, width, height, rng),
        }
    }
}

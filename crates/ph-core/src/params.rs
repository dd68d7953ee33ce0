//! Model parameters consumed by every tick.
//!
//! `SimParams` is owned by the caller and handed to the simulation by value;
//! the engine never mutates it.  Replacing it between ticks is the only way
//! to change behaviour mid-run.

use std::f32::consts::PI;

use crate::{PhError, PhResult};

// ── Distribution ──────────────────────────────────────────────────────────────

/// How headings are assigned when every agent starts at the same point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeadingMode {
    /// Uniform in `[0, 2π)` per agent.
    #[default]
    Random,
    /// `heading_i = 2π·i/count − π/2`: a starburst.
    Even,
}

/// Initial spatial distribution of the population.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "kind"))]
pub enum Distribution {
    /// Position uniform over the whole field.
    #[default]
    UniformRandom,
    /// Every agent at the field centre.
    CenterPoint { headings: HeadingMode },
    /// Area-uniform inside a disk of radius `0.2 · max(width, height)`.
    CenterDisk,
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distribution::UniformRandom => write!(f, "uniform-random"),
            Distribution::CenterPoint { headings: HeadingMode::Random } => {
                write!(f, "center-point/random")
            }
            Distribution::CenterPoint { headings: HeadingMode::Even } => {
                write!(f, "center-point/even")
            }
            Distribution::CenterDisk => write!(f, "center-disk"),
        }
    }
}

// ── SensorBoundary ────────────────────────────────────────────────────────────

/// What a sensor reads when its sample point falls off the grid.
///
/// Sensor points sit `sensor_offset` cells ahead of the agent, so agents near
/// an edge routinely probe outside the field.  There is no "nearest edge
/// cell" policy: edge cells never receive deposits and diffusion leaves them
/// untouched, so it would always read the same as `Zero`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensorBoundary {
    /// Off-grid samples read `0.0`.
    #[default]
    Zero,
    /// Off-grid samples wrap toroidally, matching agent movement.
    Wrap,
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Lower bound of the optional turn-speed scale factor.
pub const TURN_SCALE_MIN: f32 = 1.0;
/// Upper bound of the optional turn-speed scale factor.
pub const TURN_SCALE_MAX: f32 = 1.25;

/// Per-tick model parameters.
///
/// `agent_count` and `distribution` are read only at reset; everything else
/// is read every tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Number of agents created at reset.
    pub agent_count: usize,
    /// Distance from the agent to each sensor, in cells.
    pub sensor_offset: f32,
    /// Angle between the forward sensor and each side sensor, in radians.
    pub sensor_angle: f32,
    /// Heading change per turning tick, in radians.
    pub turn_speed: f32,
    /// Distance moved per tick, in cells.
    pub speed: f32,
    /// Amount added to the trail at each agent's cell per tick.
    pub deposit_amount: f32,
    /// Multiplicative attenuation applied by every diffusion pass.
    pub decay_factor: f32,
    /// Scale each turn by a factor drawn uniformly from
    /// `[TURN_SCALE_MIN, TURN_SCALE_MAX]`.
    pub randomize_turn_speed: bool,
    /// Off-grid sensor policy.
    pub sensor_boundary: SensorBoundary,
    /// Placement policy used at reset.
    pub distribution: Distribution,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            agent_count:          3_000,
            sensor_offset:        10.0,
            sensor_angle:         40.0 / 180.0 * PI,
            turn_speed:           40.0 / 180.0 * PI,
            speed:                3.0,
            deposit_amount:       1.33,
            decay_factor:         0.95,
            randomize_turn_speed: false,
            sensor_boundary:      SensorBoundary::Zero,
            distribution:         Distribution::UniformRandom,
        }
    }
}

impl SimParams {
    /// Reject parameter sets that would make the model degenerate.
    ///
    /// Every float must be finite; distances, speeds and the deposit must be
    /// non-negative; the decay factor must lie in `[0, 1]` so the field stays
    /// non-negative and bounded.
    pub fn validate(&self) -> PhResult<()> {
        if self.agent_count == 0 {
            return Err(PhError::Config("agent_count must be at least 1".into()));
        }

        let floats = [
            ("sensor_offset",  self.sensor_offset),
            ("sensor_angle",   self.sensor_angle),
            ("turn_speed",     self.turn_speed),
            ("speed",          self.speed),
            ("deposit_amount", self.deposit_amount),
            ("decay_factor",   self.decay_factor),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(PhError::NonFinite { name, value });
            }
        }

        for (name, value) in [
            ("sensor_offset",  self.sensor_offset),
            ("speed",          self.speed),
            ("deposit_amount", self.deposit_amount),
        ] {
            if value < 0.0 {
                return Err(PhError::Config(format!("{name} must be non-negative, got {value}")));
            }
        }

        if !(0.0..=1.0).contains(&self.decay_factor) {
            return Err(PhError::Config(format!(
                "decay_factor must be in [0, 1], got {}",
                self.decay_factor
            )));
        }

        Ok(())
    }
}

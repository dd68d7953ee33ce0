//! Per-agent phase functions.
//!
//! Each function touches one agent (and, for deposit, the shared field) so
//! the sim can drive them sequentially or from Rayon without changes.

use ph_agent::{Agent, AgentPopulation};
use ph_core::params::{TURN_SCALE_MAX, TURN_SCALE_MIN};
use ph_core::{RandomSource, SimParams};
use ph_field::TrailField;

/// The three sensor values for one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Readings {
    pub front: f32,
    pub left:  f32,
    pub right: f32,
}

/// Outcome of the steering rule, before any randomness is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Front sensor strictly strongest.
    Straight,
    /// `left > right`: heading increases.
    Left,
    /// `right > left`: heading decreases.
    Right,
    /// `left == right` (including a front-sensor tie): fair coin.
    Random,
}

impl Readings {
    /// Apply the priority-ordered steering rule.
    #[inline]
    pub fn decide(&self) -> Decision {
        if self.front > self.left && self.front > self.right {
            Decision::Straight
        } else if self.left > self.right {
            Decision::Left
        } else if self.right > self.left {
            Decision::Right
        } else {
            Decision::Random
        }
    }
}

// ── Phase ①: sense + steer ────────────────────────────────────────────────────

/// Sample the field at `sensor_offset` along `heading`, `heading + angle`
/// and `heading - angle`.
#[inline]
pub fn sense(agent: &Agent, field: &TrailField, params: &SimParams) -> Readings {
    let probe = |theta: f32| {
        let dir = agent.heading + theta;
        field.sample(
            agent.x + dir.cos() * params.sensor_offset,
            agent.y + dir.sin() * params.sensor_offset,
            params.sensor_boundary,
        )
    };
    Readings {
        front: probe(0.0),
        left:  probe(params.sensor_angle),
        right: probe(-params.sensor_angle),
    }
}

/// Turn `agent` according to `readings`.  Returns the decision taken.
///
/// Randomness is consumed only on a tie (one coin flip) and, when
/// `randomize_turn_speed` is set, once per actual turn for the scale factor.
#[inline]
pub fn steer<R: RandomSource + ?Sized>(
    agent:    &mut Agent,
    readings: Readings,
    params:   &SimParams,
    rng:      &mut R,
) -> Decision {
    let decision = readings.decide();
    let sign = match decision {
        Decision::Straight => return decision,
        Decision::Left     => 1.0,
        Decision::Right    => -1.0,
        Decision::Random   => if rng.coin_flip() { 1.0 } else { -1.0 },
    };
    let scale = if params.randomize_turn_speed {
        rng.uniform(TURN_SCALE_MIN, TURN_SCALE_MAX)
    } else {
        1.0
    };
    agent.heading += sign * params.turn_speed * scale;
    decision
}

// ── Phase ②: move ─────────────────────────────────────────────────────────────

/// Advance `speed` cells along the heading and wrap onto the torus.
#[inline]
pub fn advance(agent: &mut Agent, params: &SimParams, width: f32, height: f32) {
    agent.x += agent.heading.cos() * params.speed;
    agent.y += agent.heading.sin() * params.speed;
    agent.wrap(width, height);
}

// ── Phase ③: deposit ──────────────────────────────────────────────────────────

/// Deposit `amount` at every agent's rounded cell.  Returns how many landed
/// (agents on the border are skipped).
pub fn deposit_all(agents: &AgentPopulation, field: &mut TrailField, amount: f32) -> usize {
    agents
        .iter()
        .filter(|a| field.deposit(a.x, a.y, amount))
        .count()
}

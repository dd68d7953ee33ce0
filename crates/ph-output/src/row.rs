//! Plain data row types written by output backends.

/// One agent's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    /// Raw, unnormalised heading in radians.
    pub heading:  f32,
}

/// Trail statistics after one tick's diffusion pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub total_trail: f64,
    pub max_trail:   f32,
    pub agent_count: u64,
}

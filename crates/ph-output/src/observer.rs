//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ph_agent::AgentPopulation;
use ph_core::Tick;
use ph_field::TrailField;
use ph_sim::SimObserver;
use tracing::warn;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every tick and agent
/// snapshots at the sim's snapshot interval.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, field: &TrailField, agents: &AgentPopulation) {
        let row = TickSummaryRow {
            tick:        tick.0,
            total_trail: field.total(),
            max_trail:   field.max(),
            agent_count: agents.len() as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, _field: &TrailField, agents: &AgentPopulation) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .zip(agents.iter())
            .map(|(id, a)| AgentSnapshotRow {
                agent_id: id.0,
                tick:     tick.0,
                x:        a.x,
                y:        a.y,
                heading:  a.heading,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

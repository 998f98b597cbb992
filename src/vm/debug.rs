use tracing::{Level, enabled, trace};

use super::Machine;

impl Machine {
    // =========================================================
    // Debug helpers
    // =========================================================

    /// Indices executed at least once since the last reset.
    pub fn visited(&self) -> Vec<usize> {
        self.visits[..self.program.len()]
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// One-line summary of the machine, for logs and error context.
    pub fn snapshot(&self) -> String {
        let instr = match self.program.get(self.pointer) {
            Some(instr) => instr.to_string(),
            None => "<halted>".to_string(),
        };
        format!(
            "pc={} instr={} acc={} steps={} visited={}/{}",
            self.pointer,
            instr,
            self.accumulator,
            self.steps,
            self.visited().len(),
            self.program.len()
        )
    }

    pub(crate) fn dump_state(&self, headline: &str) {
        if !enabled!(Level::TRACE) {
            return;
        }

        trace!("{headline}: {}", self.snapshot());
    }
}

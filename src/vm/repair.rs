use tracing::{debug, info};

use super::{Machine, RunMode};
use crate::error::RepairError;
use crate::program::Program;

/// The accepted single-instruction patch and the run it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    /// Index whose `jmp`/`nop` was swapped.
    pub patched_index: usize,
    pub accumulator: i64,
    /// Candidates run, including the accepted one.
    pub attempts: usize,
    /// Steps executed by the halting run.
    pub steps: usize,
}

/// Swaps one `jmp`/`nop` at a time, in ascending index order, until the
/// program halts without repeating an instruction.
///
/// Every attempt runs on a fresh copy of `program`, so nothing from a failed
/// attempt carries into the next one. An attempt that jumps out of range
/// counts as failed.
pub fn find_fix(program: &Program) -> Result<Repair, RepairError> {
    let base = Machine::new(program.clone());
    let mut attempts = 0;

    for index in program.toggle_candidates() {
        attempts += 1;

        let mut machine = base.clone();
        let Some(op) = machine.program.toggle(index) else {
            continue;
        };

        match machine.run_all(RunMode::DetectLoop) {
            Ok(steps) if machine.is_halted() => {
                info!(
                    index,
                    %op,
                    acc = machine.accumulator(),
                    attempts,
                    "program repaired"
                );
                return Ok(Repair {
                    patched_index: index,
                    accumulator: machine.accumulator(),
                    attempts,
                    steps,
                });
            }
            Ok(steps) => {
                debug!(index, %op, steps, pc = machine.program_counter(), "patch loops");
            }
            Err(err) => {
                debug!(index, %op, %err, "patch leaves the program");
            }
        }
    }

    Err(RepairError::NoFixFound {
        candidates: attempts,
    })
}

/// [`find_fix`], keeping only the final accumulator.
pub fn find_fix_and_run(program: &Program) -> Result<i64, RepairError> {
    find_fix(program).map(|repair| repair.accumulator)
}

pub mod debug;
pub mod exec;
pub mod repair;

pub use exec::{RunMode, Status};
pub use repair::{Repair, find_fix, find_fix_and_run};

use crate::program::Program;

#[derive(Debug, Clone)]
pub struct Machine {
    // Code being executed; fixed for the machine's lifetime
    program: Program,

    // Running total, only `acc` touches it
    accumulator: i64,

    // Next instruction; `program.len()` once halted
    pointer: usize,

    // Executions per index, one extra slot so `pointer == len` is addressable
    visits: Vec<u32>,

    // Instructions executed since the last reset
    steps: usize,
}

impl Machine {
    pub fn new(program: Program) -> Self {
        let visits = vec![0; program.len() + 1];
        Self {
            program,
            accumulator: 0,
            pointer: 0,
            visits,
            steps: 0,
        }
    }

    /// Zeroes the accumulator, pointer and every visit count. The program is
    /// kept as is.
    pub fn reset(&mut self) {
        self.accumulator = 0;
        self.pointer = 0;
        self.visits.fill(0);
        self.steps = 0;
    }

    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    pub fn program_counter(&self) -> usize {
        self.pointer
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Hands the program back, dropping the execution state.
    pub fn into_program(self) -> Program {
        self.program
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Times the instruction at `index` has run since the last reset.
    pub fn visit_count(&self, index: usize) -> u32 {
        self.visits.get(index).copied().unwrap_or(0)
    }

    pub fn is_halted(&self) -> bool {
        self.pointer == self.program.len()
    }
}

use tracing::trace;

use super::Machine;
use crate::error::MachineError;
use crate::grammar::Opcode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Stop before any instruction would run a second time.
    DetectLoop,
    /// Run until the pointer reaches the end. Never returns on a looping
    /// program.
    UntilHalt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
    WouldRepeat,
}

impl Machine {
    /// Executes the instruction under the pointer.
    ///
    /// Returns `Ok(false)` without doing anything once the pointer sits at
    /// the end of the program, `Ok(true)` otherwise. A jump leaving
    /// `0..=len` is refused and the machine is left untouched.
    pub fn step(&mut self) -> Result<bool, MachineError> {
        let len = self.program.len();
        if self.pointer == len {
            return Ok(false);
        }

        let instr = self.program[self.pointer];
        let next = match instr.op {
            Opcode::Nop | Opcode::Acc => self.pointer + 1,
            Opcode::Jmp => self.jump_target(instr.arg)?,
        };

        self.visits[self.pointer] = self.visits[self.pointer].saturating_add(1);
        if instr.op == Opcode::Acc {
            self.accumulator = self.accumulator.wrapping_add(instr.arg);
        }

        trace!(
            pc = self.pointer,
            %instr,
            acc = self.accumulator,
            next,
            "step"
        );

        self.pointer = next;
        self.steps += 1;
        Ok(true)
    }

    fn jump_target(&self, offset: i64) -> Result<usize, MachineError> {
        let len = self.program.len();
        let out_of_bounds = || MachineError::JumpOutOfBounds {
            pc: self.pointer,
            target: (self.pointer as i64).saturating_add(offset),
            len,
        };

        let delta = isize::try_from(offset).map_err(|_| out_of_bounds())?;
        match self.pointer.checked_add_signed(delta) {
            Some(target) if target <= len => Ok(target),
            _ => Err(out_of_bounds()),
        }
    }

    /// True when the next `step` would execute an instruction that already
    /// ran since the last reset.
    pub fn would_repeat(&self) -> bool {
        self.visits[self.pointer] >= 1
    }

    pub fn status(&self) -> Status {
        if self.is_halted() {
            Status::Halted
        } else if self.would_repeat() {
            Status::WouldRepeat
        } else {
            Status::Running
        }
    }

    /// Steps until halt (or, in `DetectLoop` mode, until the next
    /// instruction would repeat). Returns the number of steps executed by
    /// this call.
    pub fn run_all(&mut self, mode: RunMode) -> Result<usize, MachineError> {
        let mut steps = 0;
        match mode {
            RunMode::UntilHalt => {
                while self.step()? {
                    steps += 1;
                }
            }
            RunMode::DetectLoop => {
                while !self.would_repeat() && self.step()? {
                    steps += 1;
                }
            }
        }

        self.dump_state("run finished");
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;

    fn machine(text: &str) -> Machine {
        Machine::new(assemble(text).unwrap())
    }

    #[test]
    fn nop_only_advances() {
        let mut m = machine("nop +7");
        assert!(m.step().unwrap());
        assert_eq!(m.program_counter(), 1);
        assert_eq!(m.accumulator(), 0);
    }

    #[test]
    fn acc_adds_and_advances() {
        let mut m = machine("acc +5\nacc -7");
        m.step().unwrap();
        m.step().unwrap();
        assert_eq!(m.accumulator(), -2);
        assert_eq!(m.program_counter(), 2);
    }

    #[test]
    fn jmp_moves_both_ways() {
        let mut m = machine("jmp +2\nacc +100\njmp -1");
        m.step().unwrap();
        assert_eq!(m.program_counter(), 2);
        m.step().unwrap();
        assert_eq!(m.program_counter(), 1);
        assert_eq!(m.accumulator(), 0);
    }

    #[test]
    fn step_at_end_is_a_noop() {
        let mut m = machine("acc +5");
        assert!(m.step().unwrap());
        assert!(m.is_halted());
        assert!(!m.step().unwrap());
        assert_eq!(m.accumulator(), 5);
        assert_eq!(m.program_counter(), 1);
        assert_eq!(m.steps(), 1);
    }

    #[test]
    fn jump_to_exactly_len_halts() {
        let mut m = machine("jmp +2\nacc +1");
        assert_eq!(m.run_all(RunMode::DetectLoop).unwrap(), 1);
        assert_eq!(m.status(), Status::Halted);
    }

    #[test]
    fn jump_past_end_is_refused() {
        let mut m = machine("nop +0\njmp +5");
        m.step().unwrap();
        let err = m.step().unwrap_err();
        assert_eq!(
            err,
            MachineError::JumpOutOfBounds {
                pc: 1,
                target: 6,
                len: 2
            }
        );
        assert_eq!(m.program_counter(), 1);
        assert_eq!(m.visit_count(1), 0);
    }

    #[test]
    fn jump_before_start_is_refused() {
        let mut m = machine("jmp -1");
        assert!(matches!(
            m.step(),
            Err(MachineError::JumpOutOfBounds { target: -1, .. })
        ));
    }

    #[test]
    fn visit_counts_record_first_execution() {
        let mut m = machine("nop +0\njmp -1");
        assert!(!m.would_repeat());
        m.step().unwrap();
        assert_eq!(m.visit_count(0), 1);
        m.step().unwrap();
        assert_eq!(m.program_counter(), 0);
        assert!(m.would_repeat());
        assert_eq!(m.status(), Status::WouldRepeat);
    }

    #[test]
    fn visit_count_saturates() {
        let mut m = machine("jmp +0");
        m.visits[0] = u32::MAX;
        assert!(m.step().unwrap());
        assert_eq!(m.visit_count(0), u32::MAX);
        assert!(m.would_repeat());
    }

    #[test]
    fn until_halt_counts_every_step() {
        let mut m = machine("nop +0\nacc +1\njmp +2\njmp -2\nnop +0");
        assert_eq!(m.run_all(RunMode::UntilHalt).unwrap(), 4);
        assert_eq!(m.accumulator(), 1);
        assert!(m.is_halted());
        assert_eq!(m.run_all(RunMode::UntilHalt).unwrap(), 0);
    }
}

//! The two answers computed from a console program.

use crate::assembler::assemble;
use crate::error::ConsoleError;
use crate::vm::{Machine, RunMode, find_fix_and_run};

/// Accumulator at the moment the program would first repeat an instruction
/// (or at halt, if it never does).
pub fn accumulator_before_loop(text: &str) -> Result<i64, ConsoleError> {
    let mut machine = Machine::new(assemble(text)?);
    machine.run_all(RunMode::DetectLoop)?;
    Ok(machine.accumulator())
}

/// Accumulator after the single `jmp`/`nop` swap that makes the program halt.
pub fn accumulator_after_fix(text: &str) -> Result<i64, ConsoleError> {
    let program = assemble(text)?;
    Ok(find_fix_and_run(&program)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AssemblyError, RepairError};

    const SAMPLE: &str = "nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6";

    #[test]
    fn sample_answers() {
        assert_eq!(accumulator_before_loop(SAMPLE), Ok(5));
        assert_eq!(accumulator_after_fix(SAMPLE), Ok(8));
    }

    #[test]
    fn assembly_errors_pass_through() {
        assert!(matches!(
            accumulator_before_loop("nop +0\nbad +1"),
            Err(ConsoleError::Assembly(AssemblyError::UnknownOpcode { line: 2, .. }))
        ));
    }

    #[test]
    fn repair_errors_pass_through() {
        assert_eq!(
            accumulator_after_fix("acc +1\njmp +0\njmp -1\n"),
            Err(ConsoleError::Repair(RepairError::NoFixFound { candidates: 2 }))
        );
    }
}

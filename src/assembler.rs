use tracing::debug;

use crate::error::{AssemblyError, UnknownMnemonic};
use crate::grammar::{Instruction, Opcode};
use crate::program::{DEFAULT_CAPACITY, Program};
use crate::tokenizer::{parse_argument, tokenize_line};

struct Assembler {
    capacity: usize,
    code: Vec<Instruction>,
}

impl Assembler {
    fn new(capacity: usize) -> Self {
        Assembler {
            capacity,
            code: Vec::new(),
        }
    }

    fn push_line(&mut self, number: usize, line: &str) -> Result<(), AssemblyError> {
        let instr = assemble_line(number, line)?;
        self.code.push(instr);
        Ok(())
    }

    fn assemble_text(mut self, text: &str) -> Result<Program, AssemblyError> {
        let lines = text.lines().count();
        if lines > self.capacity {
            return Err(AssemblyError::ProgramTooLarge {
                lines,
                capacity: self.capacity,
            });
        }

        self.code.reserve(lines);
        for (i, line) in text.lines().enumerate() {
            self.push_line(i + 1, line)?;
        }

        Ok(Program::from_parts(self.code, self.capacity))
    }
}

/// Assembles one `<mnemonic> <signed integer>` line. `number` is 1-based and
/// only used for error context.
pub fn assemble_line(number: usize, line: &str) -> Result<Instruction, AssemblyError> {
    if line.is_empty() {
        return Err(AssemblyError::MalformedLine { line: number });
    }

    let tokens = tokenize_line(line);

    let op = tokens
        .mnemonic
        .parse::<Opcode>()
        .map_err(|UnknownMnemonic(mnemonic)| AssemblyError::UnknownOpcode {
            line: number,
            mnemonic,
        })?;

    let arg = parse_argument(tokens.argument).ok_or_else(|| AssemblyError::MalformedArgument {
        line: number,
        argument: tokens.argument.to_string(),
    })?;

    Ok(Instruction::new(op, arg))
}

pub fn assemble(text: &str) -> Result<Program, AssemblyError> {
    assemble_with_capacity(text, DEFAULT_CAPACITY)
}

pub fn assemble_with_capacity(text: &str, capacity: usize) -> Result<Program, AssemblyError> {
    let program = Assembler::new(capacity).assemble_text(text)?;
    debug!(
        instructions = program.len(),
        capacity = program.capacity(),
        "assembled program"
    );
    Ok(program)
}

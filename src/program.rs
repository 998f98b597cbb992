use std::fmt;
use std::ops::Index;

use crate::grammar::{Instruction, Opcode};

/// Capacity used by [`crate::assembler::assemble`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// A bounded, ordered instruction list. Read-only while a machine runs it;
/// the only mutation is [`Program::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    code: Vec<Instruction>,
    capacity: usize,
}

impl Program {
    /// Caller guarantees `code.len() <= capacity`; the assembler checks it.
    pub(crate) fn from_parts(code: Vec<Instruction>, capacity: usize) -> Self {
        debug_assert!(code.len() <= capacity);
        Self { code, capacity }
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.code.get(index)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.code
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.code.iter()
    }

    /// Swaps `jmp`/`nop` at `index`, leaving the argument untouched.
    /// Returns the new opcode, or `None` for `acc` or an index past the end.
    pub fn toggle(&mut self, index: usize) -> Option<Opcode> {
        let instr = self.code.get_mut(index)?;
        let op = instr.op.toggled()?;
        instr.op = op;
        Some(op)
    }

    /// Indices the repair search may patch, in ascending order.
    pub fn toggle_candidates(&self) -> impl Iterator<Item = usize> + '_ {
        self.code
            .iter()
            .enumerate()
            .filter(|(_, instr)| instr.op.toggled().is_some())
            .map(|(i, _)| i)
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.code[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.code.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.code.len().saturating_sub(1).to_string().len();
        for (i, instr) in self.code.iter().enumerate() {
            writeln!(f, "{i:>width$}: {instr}")?;
        }
        Ok(())
    }
}

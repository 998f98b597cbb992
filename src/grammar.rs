// program        ::= line ("\n" line)* "\n"?

// line           ::= mnemonic " " argument

// mnemonic       ::= "nop" | "acc" | "jmp"

// argument       ::= sign digit+
// sign           ::= "+" | "-"
// digit          ::= [0-9]

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownMnemonic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop,
    Acc,
    Jmp,
}

/// Mnemonic table, matched exactly against the first field of a line.
pub static OPCODES: &[(&str, Opcode)] = &[
    ("nop", Opcode::Nop),
    ("acc", Opcode::Acc),
    ("jmp", Opcode::Jmp),
];

impl Opcode {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "nop",
            Opcode::Acc => "acc",
            Opcode::Jmp => "jmp",
        }
    }

    pub fn lookup(mnemonic: &str) -> Option<Opcode> {
        OPCODES
            .iter()
            .find(|(name, _)| *name == mnemonic)
            .map(|(_, op)| *op)
    }

    /// The control-flow swap used by the repair search. `acc` has none.
    pub fn toggled(self) -> Option<Opcode> {
        match self {
            Opcode::Nop => Some(Opcode::Jmp),
            Opcode::Jmp => Some(Opcode::Nop),
            Opcode::Acc => None,
        }
    }
}

impl FromStr for Opcode {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::lookup(s).ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub op: Opcode,
    pub arg: i64,
}

impl Instruction {
    pub const fn new(op: Opcode, arg: i64) -> Self {
        Self { op, arg }
    }
}

impl fmt::Display for Instruction {
    // Always signed, so the listing reassembles to the same program.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.op, self.arg)
    }
}

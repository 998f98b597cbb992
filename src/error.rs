use thiserror::Error;

/// Errors raised while turning source text into a [`crate::program::Program`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("line {line}: unknown opcode `{mnemonic}`")]
    UnknownOpcode { line: usize, mnemonic: String },
    #[error("line {line}: malformed argument `{argument}`")]
    MalformedArgument { line: usize, argument: String },
    /// Blank line or missing separator.
    #[error("line {line}: expected `<mnemonic> <signed integer>`")]
    MalformedLine { line: usize },
    #[error("program has {lines} lines, capacity is {capacity}")]
    ProgramTooLarge { lines: usize, capacity: usize },
}

/// A mnemonic missing from the opcode table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mnemonic `{0}`")]
pub struct UnknownMnemonic(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("jump at {pc} targets {target}, outside 0..={len}")]
    JumpOutOfBounds { pc: usize, target: i64, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    #[error("no single jmp/nop swap halts the program ({candidates} candidates tried)")]
    NoFixFound { candidates: usize },
}

/// Any failure along the assemble, run, repair pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Machine(#[from] MachineError),
    #[error(transparent)]
    Repair(#[from] RepairError),
}

//! Assembler and interpreter for the three-opcode handheld console
//! (`nop`, `acc`, `jmp`), with loop detection and a single-swap repair search.

pub mod assembler;
pub mod error;
pub mod grammar;
pub mod logging;
pub mod program;
pub mod solve;
pub mod tokenizer;
pub mod vm;

pub use assembler::{assemble, assemble_with_capacity};
pub use error::{AssemblyError, ConsoleError, MachineError, RepairError, UnknownMnemonic};
pub use grammar::{Instruction, Opcode};
pub use program::{DEFAULT_CAPACITY, Program};
pub use vm::{Machine, Repair, RunMode, Status, find_fix, find_fix_and_run};

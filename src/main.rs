use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use game_console::program::DEFAULT_CAPACITY;
use game_console::vm::{Machine, RunMode, find_fix};
use game_console::{assemble_with_capacity, logging};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    /// Accumulator right before the first repeated instruction
    #[value(name = "1")]
    One,
    /// Accumulator after the single jmp/nop repair
    #[value(name = "2")]
    Two,
    Both,
}

/// Assemble a console program and print its accumulator answers.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Program file; `-` or omitted reads stdin
    input: Option<PathBuf>,

    /// Maximum number of instructions accepted by the assembler
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Print the assembled listing before the answers
    #[arg(long)]
    listing: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let text = read_input(cli.input.as_ref())?;
    let program =
        assemble_with_capacity(&text, cli.capacity).context("failed to assemble program")?;

    if cli.listing {
        print!("{program}");
    }

    if matches!(cli.part, Part::One | Part::Both) {
        let mut machine = Machine::new(program.clone());
        let steps = machine
            .run_all(RunMode::DetectLoop)
            .context("program failed before repeating")?;
        debug!(steps, status = ?machine.status(), "part one finished");
        println!("Part 1: {}", machine.accumulator());
    }

    if matches!(cli.part, Part::Two | Part::Both) {
        let repair = find_fix(&program).context("failed to repair program")?;
        debug!(
            index = repair.patched_index,
            attempts = repair.attempts,
            "part two finished"
        );
        println!("Part 2: {}", repair.accumulator);
    }

    Ok(())
}

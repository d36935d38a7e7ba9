//! RV32I random instruction generator CLI.
//!
//! Generates a stream of random RV32I base instructions and prints each one
//! as canonical assembly text alongside its 32-bit encoding in hex. Supports:
//! 1. **Deterministic runs:** `--seed` fixes the random sequence.
//! 2. **Single-mnemonic runs:** `--mnemonic addi` restricts generation.
//! 3. **Machine-readable output:** `--json` emits one record per line.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::process;
use tracing_subscriber::EnvFilter;

use rvgen_core::{Generator, Mnemonic};

#[derive(Parser, Debug)]
#[command(
    name = "rvgen",
    author,
    version,
    about = "Random RISC-V RV32I instruction generator",
    long_about = "Generate random RV32I base instructions and print the assembly text with the encoded 32-bit word.\n\nExamples:\n  rvgen\n  rvgen -c 100 --seed 42\n  rvgen -m beq --json"
)]
struct Cli {
    /// Number of instructions to generate.
    #[arg(short, long, default_value_t = 25)]
    count: u32,

    /// Seed for a reproducible sequence; drawn from OS entropy when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Restrict generation to one mnemonic (e.g. addi, beq, jal).
    #[arg(short, long)]
    mnemonic: Option<Mnemonic>,

    /// Emit one JSON record per instruction instead of text.
    #[arg(long)]
    json: bool,
}

/// One generated instruction, as emitted by `--json`.
#[derive(Serialize)]
struct Record {
    /// Canonical assembly text, e.g. `"addi x5, x3, -17"`.
    asm: String,
    /// Encoded instruction word as 0x-prefixed hex.
    word: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let rng = cli
        .seed
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    let mut generator = Generator::new(rng);

    for _ in 0..cli.count {
        let instruction = match cli.mnemonic {
            Some(mnemonic) => generator.instruction(mnemonic),
            None => generator.random(),
        };
        let word = instruction.encode();

        if cli.json {
            let record = Record {
                asm: instruction.to_string(),
                word: format!("{word:#010x}"),
            };
            let line = serde_json::to_string(&record).unwrap_or_else(|e| {
                eprintln!("Error serializing record: {e}");
                process::exit(1);
            });
            println!("{line}");
        } else {
            let asm = instruction.to_string();
            println!("{asm:<28} {word:#010x}");
        }
    }
}

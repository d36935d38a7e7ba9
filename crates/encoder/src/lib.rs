//! RISC-V RV32I instruction encoder and random instruction generator.
//!
//! This crate encodes RV32I base instructions into their 32-bit binary
//! representation and renders them as assembly text, with operands either
//! supplied by the caller or drawn from an explicit random source:
//! 1. **ISA:** Opcode/funct constants and the six format encoders
//!    (R, I, S, B, U, J), built on one shared field-packing primitive.
//! 2. **Model:** A closed mnemonic set with exhaustive dispatch, plus the
//!    instruction structure with encoding and canonical assembly rendering.
//! 3. **Generation:** A seedable random operand supply that only ever
//!    presents in-range operand values to the encoders.
//!
//! The encoders are pure, stateless, and total: out-of-range field values
//! are masked to their declared width, never rejected.

/// Library error definitions.
pub mod error;
/// Random operand supply and instruction generation.
pub mod r#gen;
/// Instruction set (encoding, mnemonics, instruction model, RV32I constants).
pub mod isa;

/// Error type for mnemonic lookup failures.
pub use crate::error::Error;
/// Random instruction generator; construct with any `rand::Rng`.
pub use crate::r#gen::Generator;
/// Instruction model types; encode with `Instruction::encode`.
pub use crate::isa::instruction::{Instruction, Operands};
/// Mnemonic table and instruction formats.
pub use crate::isa::mnemonic::{Format, Mnemonic};

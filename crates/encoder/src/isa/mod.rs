//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I encoding constants, the format encoders, and the
//! instruction model.
//!
//! # Structure
//!
//! * `rv32i`: Base integer opcode and function-code constants.
//! * `encode`: Field packer and the six format encoders (R, I, S, B, U, J).
//! * `mnemonic`: The closed mnemonic set and its per-mnemonic constants.
//! * `instruction`: Instruction model, assembly rendering, field extraction.

/// Field packer and per-format instruction encoders.
pub mod encode;

/// Instruction model, assembly rendering, and bit extraction utilities.
pub mod instruction;

/// Mnemonic table and instruction formats.
pub mod mnemonic;

/// Base integer instruction set constants (32-bit RISC-V).
pub mod rv32i;

//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions to
//! distinguish between operations that share the same `funct3` (e.g., ADD vs
//! SUB). Shift-immediate instructions reuse it as the upper seven bits of the
//! I-type immediate field.

/// Default operation (ADD, SRL, SLLI, SRLI, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
/// Used to distinguish SUB from ADD, and SRA from SRL.
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic, including SRAI).
pub const SRA: u32 = 0b0100000;

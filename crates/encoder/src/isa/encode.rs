//! RISC-V Instruction Encoder.
//!
//! This module builds 32-bit RISC-V instruction words from raw field values,
//! one function per instruction format (R, I, S, B, U, J). Each function
//! composes the [`field`] packer per the ISA bit layout for its format,
//! including the immediate-field splits for S, B, and J where the encoded
//! immediate is not a contiguous range.
//!
//! # Error Policy
//!
//! Out-of-range values are masked to their declared field width rather than
//! rejected. This mirrors hardware bit-field semantics and keeps every
//! encoder a total function defined for all integer inputs; callers are
//! responsible for range correctness before encoding.

/// Bit offset of the opcode field (bits 6-0), common to every format.
const OPCODE_OFFSET: u32 = 0;

/// Width of the opcode field (7 bits).
const OPCODE_WIDTH: u32 = 7;

/// Bit offset of the destination register field (bits 11-7).
const RD_OFFSET: u32 = 7;

/// Bit offset of the funct3 field (bits 14-12).
const FUNCT3_OFFSET: u32 = 12;

/// Width of the funct3 field (3 bits).
const FUNCT3_WIDTH: u32 = 3;

/// Bit offset of the first source register field (bits 19-15).
const RS1_OFFSET: u32 = 15;

/// Bit offset of the second source register field (bits 24-20).
const RS2_OFFSET: u32 = 20;

/// Bit offset of the funct7 field (bits 31-25).
const FUNCT7_OFFSET: u32 = 25;

/// Width of the funct7 field (7 bits).
const FUNCT7_WIDTH: u32 = 7;

/// Width of a register index field (5 bits).
const REG_WIDTH: u32 = 5;

/// Bit offset of the contiguous I-type immediate (bits 31-20).
const I_IMM_OFFSET: u32 = 20;

/// Width of the I-type immediate (12 bits).
const I_IMM_WIDTH: u32 = 12;

/// Bit offset of the contiguous U-type immediate (bits 31-12).
const U_IMM_OFFSET: u32 = 12;

/// Width of the U-type immediate (20 bits).
const U_IMM_WIDTH: u32 = 20;

/// Packs a value into a fixed-width field at a fixed bit offset.
///
/// Returns `(value & ((1 << width) - 1)) << offset`. The mask is applied
/// before the shift so that sign bits of a negative immediate cast to `u32`
/// can never leak into adjacent fields. Masking is total and silent; there
/// are no error conditions.
///
/// Every format encoder below goes through this single primitive instead of
/// inlining its own shift/mask arithmetic.
#[inline(always)]
pub const fn field(value: u32, width: u32, offset: u32) -> u32 {
    (value & ((1 << width) - 1)) << offset
}

/// Encodes an R-type (register-register) instruction.
///
/// Layout: `funct7[31:25] | rs2[24:20] | rs1[19:15] | funct3[14:12] | rd[11:7] | opcode[6:0]`
///
/// Used for all register-register ALU operations (ADD, SUB, SLL, SLT, SLTU,
/// XOR, SRL, SRA, OR, AND). Bit 5 of `funct7` distinguishes SUB/SRA from
/// ADD/SRL within the same `funct3`.
pub const fn r_type(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    field(funct7, FUNCT7_WIDTH, FUNCT7_OFFSET)
        | field(rs2, REG_WIDTH, RS2_OFFSET)
        | field(rs1, REG_WIDTH, RS1_OFFSET)
        | field(funct3, FUNCT3_WIDTH, FUNCT3_OFFSET)
        | field(rd, REG_WIDTH, RD_OFFSET)
        | field(opcode, OPCODE_WIDTH, OPCODE_OFFSET)
}

/// Encodes an I-type (immediate) instruction.
///
/// Layout: `imm[31:20] | rs1[19:15] | funct3[14:12] | rd[11:7] | opcode[6:0]`
///
/// Used for loads, JALR, and immediate ALU operations. Shift instructions
/// (SLLI/SRLI/SRAI) reuse this encoder with `(funct7 << 5) | shamt` packed
/// as the 12-bit immediate.
pub const fn i_type(imm: i32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    field(imm as u32, I_IMM_WIDTH, I_IMM_OFFSET)
        | field(rs1, REG_WIDTH, RS1_OFFSET)
        | field(funct3, FUNCT3_WIDTH, FUNCT3_OFFSET)
        | field(rd, REG_WIDTH, RD_OFFSET)
        | field(opcode, OPCODE_WIDTH, OPCODE_OFFSET)
}

/// Encodes an S-type (store) instruction.
///
/// Layout: `imm[11:5] | rs2[24:20] | rs1[19:15] | funct3[14:12] | imm[4:0] | opcode[6:0]`
///
/// The immediate is split because the `rd` slot is reused for its low bits:
/// bits [11:5] land at positions [31:25] and bits [4:0] at positions [11:7].
pub const fn s_type(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    field(imm >> 5, 7, FUNCT7_OFFSET)
        | field(rs2, REG_WIDTH, RS2_OFFSET)
        | field(rs1, REG_WIDTH, RS1_OFFSET)
        | field(funct3, FUNCT3_WIDTH, FUNCT3_OFFSET)
        | field(imm, 5, RD_OFFSET)
        | field(opcode, OPCODE_WIDTH, OPCODE_OFFSET)
}

/// Encodes a B-type (conditional branch) instruction.
///
/// Layout: `imm[12|10:5] | rs2[24:20] | rs1[19:15] | funct3[14:12] | imm[4:1|11] | opcode[6:0]`
///
/// Immediate bit 0 is never encoded (branch targets are 2-byte aligned) and
/// the remaining twelve bits are scattered, with bit 11 moved to the
/// opposite end of the word: bit 12 → position 31, bits [10:5] → positions
/// [30:25], bits [4:1] → positions [11:8], bit 11 → position 7.
pub const fn b_type(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    field(imm >> 12, 1, 31)
        | field(imm >> 5, 6, 25)
        | field(rs2, REG_WIDTH, RS2_OFFSET)
        | field(rs1, REG_WIDTH, RS1_OFFSET)
        | field(funct3, FUNCT3_WIDTH, FUNCT3_OFFSET)
        | field(imm >> 1, 4, 8)
        | field(imm >> 11, 1, 7)
        | field(opcode, OPCODE_WIDTH, OPCODE_OFFSET)
}

/// Encodes a U-type (upper immediate) instruction.
///
/// Layout: `imm[31:12] | rd[11:7] | opcode[6:0]`
///
/// `imm` holds the upper 20 bits of a 32-bit result; the low 12 bits of
/// that result are implicitly zero. Used for LUI and AUIPC.
pub const fn u_type(imm: u32, rd: u32, opcode: u32) -> u32 {
    field(imm, U_IMM_WIDTH, U_IMM_OFFSET)
        | field(rd, REG_WIDTH, RD_OFFSET)
        | field(opcode, OPCODE_WIDTH, OPCODE_OFFSET)
}

/// Encodes a J-type (unconditional jump) instruction.
///
/// Layout: `imm[20|10:1|11|19:12] | rd[11:7] | opcode[6:0]`
///
/// Same implicit-zero bit 0 as B-type but wider: bit 20 → position 31,
/// bits [10:1] → positions [30:21], bit 11 → position 20, and bits [19:12]
/// stay at positions [19:12]. The 8-bit chunk is the only one that is not
/// relocated; each chunk's destination is independent of the B-type scatter.
pub const fn j_type(imm: i32, rd: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    field(imm >> 20, 1, 31)
        | field(imm >> 1, 10, 21)
        | field(imm >> 11, 1, 20)
        | field(imm >> 12, 8, 12)
        | field(rd, REG_WIDTH, RD_OFFSET)
        | field(opcode, OPCODE_WIDTH, OPCODE_OFFSET)
}

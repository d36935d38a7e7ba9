//! Instruction Model and Field Extraction.
//!
//! Provides the [`Instruction`] structure pairing a mnemonic with its
//! operand values, encoding into a 32-bit word, and canonical assembly
//! rendering, plus the [`InstructionBits`] trait for re-extracting fields
//! from an encoded word.

use std::fmt;

use crate::isa::encode;
use crate::isa::mnemonic::Mnemonic;

/// Bit mask for extracting the opcode field (bits 6-0).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 14-12).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 31-25).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded words.
///
/// Each accessor is the exact inverse of the mask-and-shift performed by the
/// corresponding encoder field, so for any input `v` the extracted value is
/// `v` masked to the field's width.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 6-0).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 11-7).
    fn rd(&self) -> u32;

    /// Extracts the first source register field (bits 19-15).
    fn rs1(&self) -> u32;

    /// Extracts the second source register field (bits 24-20).
    fn rs2(&self) -> u32;

    /// Extracts the funct3 field (bits 14-12).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 31-25).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u32 {
        (self >> 7) & REG_MASK
    }

    #[inline(always)]
    fn rs1(&self) -> u32 {
        (self >> 15) & REG_MASK
    }

    #[inline(always)]
    fn rs2(&self) -> u32 {
        (self >> 20) & REG_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Operand values for one instruction, grouped by operand shape.
///
/// The shape determines both which format encoder is used and how the
/// instruction renders as assembly text. Loads and JALR share the I format
/// with the ALU immediates but render with `offset(base)` address syntax,
/// so they get their own variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operands {
    /// Register-register ALU operation: `rd, rs1, rs2`.
    Register {
        /// Destination register index.
        rd: u32,
        /// First source register index.
        rs1: u32,
        /// Second source register index.
        rs2: u32,
    },
    /// ALU operation with a 12-bit signed immediate: `rd, rs1, imm`.
    Immediate {
        /// Destination register index.
        rd: u32,
        /// Source register index.
        rs1: u32,
        /// Signed 12-bit immediate.
        imm: i32,
    },
    /// Shift by a 5-bit constant amount: `rd, rs1, shamt`.
    Shift {
        /// Destination register index.
        rd: u32,
        /// Source register index.
        rs1: u32,
        /// Shift amount in [0, 31].
        shamt: u32,
    },
    /// Memory load: `rd, offset(rs1)`.
    Load {
        /// Destination register index.
        rd: u32,
        /// Base address register index.
        rs1: u32,
        /// Signed 12-bit byte offset.
        offset: i32,
    },
    /// Memory store: `rs2, offset(rs1)`.
    Store {
        /// Source register index holding the value to store.
        rs2: u32,
        /// Base address register index.
        rs1: u32,
        /// Signed 12-bit byte offset.
        offset: i32,
    },
    /// Conditional branch: `rs1, rs2, offset`.
    Branch {
        /// First comparison register index.
        rs1: u32,
        /// Second comparison register index.
        rs2: u32,
        /// Signed, even 13-bit branch offset.
        offset: i32,
    },
    /// Upper immediate: `rd, imm`.
    Upper {
        /// Destination register index.
        rd: u32,
        /// Unsigned 20-bit immediate (upper bits of the result).
        imm: u32,
    },
    /// Unconditional jump: `rd, offset`.
    Jump {
        /// Link register index.
        rd: u32,
        /// Signed, even 21-bit jump offset.
        offset: i32,
    },
    /// Register-indirect jump: `rd, offset(rs1)`.
    JumpReg {
        /// Link register index.
        rd: u32,
        /// Base address register index.
        rs1: u32,
        /// Signed 12-bit byte offset.
        offset: i32,
    },
}

/// One RV32I instruction: a mnemonic plus its operand values.
///
/// The instruction is pure data; [`Instruction::encode`] produces the 32-bit
/// word and [`fmt::Display`] renders the canonical assembly text, e.g.
/// `addi x5, x3, -17` or `jalr x1, 4(x2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The instruction's mnemonic, fixing opcode/funct3/funct7.
    pub mnemonic: Mnemonic,
    /// The instruction's operand values.
    pub operands: Operands,
}

impl Instruction {
    /// Creates an instruction from a mnemonic and operand values.
    ///
    /// The operand shape is not validated against the mnemonic's format;
    /// pairing them correctly is the caller's responsibility, and the
    /// generator always does (see `gen`).
    pub const fn new(mnemonic: Mnemonic, operands: Operands) -> Self {
        Self { mnemonic, operands }
    }

    /// Encodes this instruction into its 32-bit word.
    ///
    /// Dispatches on the operand shape to the matching format encoder. Like
    /// the encoders themselves, this is total: out-of-range operand values
    /// are masked, never rejected.
    pub const fn encode(&self) -> u32 {
        let m = self.mnemonic;
        match self.operands {
            Operands::Register { rd, rs1, rs2 } => {
                encode::r_type(m.funct7(), rs2, rs1, m.funct3(), rd, m.opcode())
            }
            Operands::Immediate { rd, rs1, imm } => {
                encode::i_type(imm, rs1, m.funct3(), rd, m.opcode())
            }
            // Shifts pack funct7 above the 5-bit shamt inside the I-type
            // immediate field; funct7 bit 5 selects SRAI over SRLI.
            Operands::Shift { rd, rs1, shamt } => encode::i_type(
                ((m.funct7() << 5) | shamt) as i32,
                rs1,
                m.funct3(),
                rd,
                m.opcode(),
            ),
            Operands::Load { rd, rs1, offset } | Operands::JumpReg { rd, rs1, offset } => {
                encode::i_type(offset, rs1, m.funct3(), rd, m.opcode())
            }
            Operands::Store { rs2, rs1, offset } => {
                encode::s_type(offset, rs2, rs1, m.funct3(), m.opcode())
            }
            Operands::Branch { rs1, rs2, offset } => {
                encode::b_type(offset, rs2, rs1, m.funct3(), m.opcode())
            }
            Operands::Upper { rd, imm } => encode::u_type(imm, rd, m.opcode()),
            Operands::Jump { rd, offset } => encode::j_type(offset, rd, m.opcode()),
        }
    }
}

impl fmt::Display for Instruction {
    /// Renders the instruction in canonical RV32I assembly syntax.
    ///
    /// Registers use their numeric `x<N>` names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic;
        match self.operands {
            Operands::Register { rd, rs1, rs2 } => write!(f, "{m} x{rd}, x{rs1}, x{rs2}"),
            Operands::Immediate { rd, rs1, imm } => write!(f, "{m} x{rd}, x{rs1}, {imm}"),
            Operands::Shift { rd, rs1, shamt } => write!(f, "{m} x{rd}, x{rs1}, {shamt}"),
            Operands::Load { rd, rs1, offset } | Operands::JumpReg { rd, rs1, offset } => {
                write!(f, "{m} x{rd}, {offset}(x{rs1})")
            }
            Operands::Store { rs2, rs1, offset } => write!(f, "{m} x{rs2}, {offset}(x{rs1})"),
            Operands::Branch { rs1, rs2, offset } => write!(f, "{m} x{rs1}, x{rs2}, {offset}"),
            Operands::Upper { rd, imm } => write!(f, "{m} x{rd}, {imm}"),
            Operands::Jump { rd, offset } => write!(f, "{m} x{rd}, {offset}"),
        }
    }
}

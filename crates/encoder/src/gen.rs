//! Random Operand Supply.
//!
//! Provides the [`Generator`], which pairs a caller-supplied random source
//! with the mnemonic table to produce fully-formed [`Instruction`]s. The
//! random source is an explicit object, never process-global state: pass
//! `rand::thread_rng()` for ad-hoc use or a seeded `ChaCha8Rng` for
//! reproducible sequences.
//!
//! The generator guarantees every operand it supplies is within its field's
//! valid range, since the encoders mask rather than reject (see
//! [`crate::isa::encode`]). Branch and jump offsets are drawn from the even
//! domain directly — a halfword count shifted left by one — so the
//! distribution is uniform over representable targets and the range minimum
//! is exactly the format's documented bound.

use rand::Rng;
use tracing::trace;

use crate::isa::instruction::{Instruction, Operands};
use crate::isa::mnemonic::Mnemonic;

/// Number of addressable general-purpose registers.
const REG_COUNT: u32 = 32;

/// Inclusive bounds of a signed 12-bit immediate.
const IMM12_MIN: i32 = -2048;
/// Largest signed 12-bit immediate.
const IMM12_MAX: i32 = 2047;

/// Largest unsigned 20-bit (U-format) immediate.
const IMM20_MAX: u32 = 0xFFFFF;

/// Half the magnitude of the B-format offset domain, in halfwords (2^11).
const BRANCH_HALFWORDS: i32 = 1 << 11;

/// Half the magnitude of the J-format offset domain, in halfwords (2^19).
const JUMP_HALFWORDS: i32 = 1 << 19;

/// Exclusive upper bound of the 5-bit shift amount.
const SHAMT_BOUND: u32 = 32;

/// Random instruction generator over an explicit random source.
#[derive(Debug)]
pub struct Generator<R> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// Creates a generator drawing from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates an instruction with a uniformly random mnemonic.
    pub fn random(&mut self) -> Instruction {
        let idx = self.rng.gen_range(0..Mnemonic::ALL.len());
        self.instruction(Mnemonic::ALL[idx])
    }

    /// Generates an instruction for `mnemonic` with random operands.
    ///
    /// Operands are drawn uniformly within the valid range for the
    /// mnemonic's operand shape: register indices in [0, 31], I-format
    /// immediates in [-2048, 2047], U-format immediates in [0, 0xFFFFF],
    /// shift amounts in [0, 31], and branch/jump offsets over the even
    /// values of their 13- and 21-bit signed ranges.
    pub fn instruction(&mut self, mnemonic: Mnemonic) -> Instruction {
        use Mnemonic::{Auipc, Beq, Bge, Bgeu, Blt, Bltu, Bne, Jal, Jalr, Lui};

        let operands = match mnemonic {
            Lui | Auipc => Operands::Upper {
                rd: self.reg(),
                imm: self.rng.gen_range(0..=IMM20_MAX),
            },
            Jal => Operands::Jump {
                rd: self.reg(),
                offset: self.even_offset(JUMP_HALFWORDS),
            },
            Jalr => Operands::JumpReg {
                rd: self.reg(),
                rs1: self.reg(),
                offset: self.imm12(),
            },
            Beq | Bne | Blt | Bge | Bltu | Bgeu => Operands::Branch {
                rs1: self.reg(),
                rs2: self.reg(),
                offset: self.even_offset(BRANCH_HALFWORDS),
            },
            Mnemonic::Lb | Mnemonic::Lh | Mnemonic::Lw | Mnemonic::Lbu | Mnemonic::Lhu => {
                Operands::Load {
                    rd: self.reg(),
                    rs1: self.reg(),
                    offset: self.imm12(),
                }
            }
            Mnemonic::Sb | Mnemonic::Sh | Mnemonic::Sw => Operands::Store {
                rs2: self.reg(),
                rs1: self.reg(),
                offset: self.imm12(),
            },
            Mnemonic::Slli | Mnemonic::Srli | Mnemonic::Srai => Operands::Shift {
                rd: self.reg(),
                rs1: self.reg(),
                shamt: self.rng.gen_range(0..SHAMT_BOUND),
            },
            Mnemonic::Addi
            | Mnemonic::Slti
            | Mnemonic::Sltiu
            | Mnemonic::Xori
            | Mnemonic::Ori
            | Mnemonic::Andi => Operands::Immediate {
                rd: self.reg(),
                rs1: self.reg(),
                imm: self.imm12(),
            },
            _ => Operands::Register {
                rd: self.reg(),
                rs1: self.reg(),
                rs2: self.reg(),
            },
        };

        let instruction = Instruction::new(mnemonic, operands);
        trace!(word = instruction.encode(), "generated {instruction}");
        instruction
    }

    /// Draws a uniformly random register index.
    fn reg(&mut self) -> u32 {
        self.rng.gen_range(0..REG_COUNT)
    }

    /// Draws a uniformly random signed 12-bit immediate.
    fn imm12(&mut self) -> i32 {
        self.rng.gen_range(IMM12_MIN..=IMM12_MAX)
    }

    /// Draws a uniformly random even offset in [-2h, 2h - 2].
    ///
    /// The draw is over halfword counts, so every even target is equally
    /// likely and the minimum never undershoots the format's bound. Drawing
    /// bytes and clearing bit 0 afterwards would skew the distribution and
    /// let the post-mask minimum land one below the documented range.
    fn even_offset(&mut self, halfwords: i32) -> i32 {
        self.rng.gen_range(-halfwords..halfwords) << 1
    }
}

//! RV32I Mnemonic Table.
//!
//! Defines the closed set of base-integer mnemonics together with the fixed
//! encoding constants (format, opcode, funct3, funct7) the ISA assigns to
//! each. Dispatch over [`Mnemonic`] is an exhaustive `match`, so adding a
//! variant without wiring its constants is a compile error rather than a
//! silent lookup miss.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// The six instruction formats of the RV32I base ISA.
///
/// Each format is a fixed bit layout for a 32-bit instruction word; the
/// format determines which fields exist and where their bits live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register: `funct7 | rs2 | rs1 | funct3 | rd | opcode`.
    R,
    /// Immediate: `imm[11:0] | rs1 | funct3 | rd | opcode`.
    I,
    /// Store: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
    S,
    /// Branch: `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode`.
    B,
    /// Upper immediate: `imm[31:12] | rd | opcode`.
    U,
    /// Jump: `imm[20|10:1|11|19:12] | rd | opcode`.
    J,
}

/// An RV32I base-integer instruction mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Mnemonic {
    Lui,
    Auipc,
    Jal,
    Jalr,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
}

impl Mnemonic {
    /// Every RV32I base mnemonic, in ISA listing order.
    pub const ALL: [Self; 37] = [
        Self::Lui,
        Self::Auipc,
        Self::Jal,
        Self::Jalr,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bge,
        Self::Bltu,
        Self::Bgeu,
        Self::Lb,
        Self::Lh,
        Self::Lw,
        Self::Lbu,
        Self::Lhu,
        Self::Sb,
        Self::Sh,
        Self::Sw,
        Self::Addi,
        Self::Slti,
        Self::Sltiu,
        Self::Xori,
        Self::Ori,
        Self::Andi,
        Self::Slli,
        Self::Srli,
        Self::Srai,
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
    ];

    /// Returns the instruction format this mnemonic encodes in.
    pub const fn format(self) -> Format {
        match self {
            Self::Lui | Self::Auipc => Format::U,
            Self::Jal => Format::J,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => Format::B,
            Self::Sb | Self::Sh | Self::Sw => Format::S,
            Self::Add
            | Self::Sub
            | Self::Sll
            | Self::Slt
            | Self::Sltu
            | Self::Xor
            | Self::Srl
            | Self::Sra
            | Self::Or
            | Self::And => Format::R,
            _ => Format::I,
        }
    }

    /// Returns the major opcode (bits 6-0) for this mnemonic.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Lui => opcodes::OP_LUI,
            Self::Auipc => opcodes::OP_AUIPC,
            Self::Jal => opcodes::OP_JAL,
            Self::Jalr => opcodes::OP_JALR,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => {
                opcodes::OP_BRANCH
            }
            Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu => opcodes::OP_LOAD,
            Self::Sb | Self::Sh | Self::Sw => opcodes::OP_STORE,
            Self::Addi
            | Self::Slti
            | Self::Sltiu
            | Self::Xori
            | Self::Ori
            | Self::Andi
            | Self::Slli
            | Self::Srli
            | Self::Srai => opcodes::OP_IMM,
            _ => opcodes::OP_REG,
        }
    }

    /// Returns the funct3 field for this mnemonic.
    ///
    /// U- and J-format instructions have no funct3 slot; their value here is
    /// zero and is never packed into a word.
    pub const fn funct3(self) -> u32 {
        match self {
            Self::Lui | Self::Auipc | Self::Jal => 0,
            Self::Jalr => funct3::JALR,
            Self::Beq => funct3::BEQ,
            Self::Bne => funct3::BNE,
            Self::Blt => funct3::BLT,
            Self::Bge => funct3::BGE,
            Self::Bltu => funct3::BLTU,
            Self::Bgeu => funct3::BGEU,
            Self::Lb => funct3::LB,
            Self::Lh => funct3::LH,
            Self::Lw => funct3::LW,
            Self::Lbu => funct3::LBU,
            Self::Lhu => funct3::LHU,
            Self::Sb => funct3::SB,
            Self::Sh => funct3::SH,
            Self::Sw => funct3::SW,
            Self::Addi | Self::Add | Self::Sub => funct3::ADD_SUB,
            Self::Slti | Self::Slt => funct3::SLT,
            Self::Sltiu | Self::Sltu => funct3::SLTU,
            Self::Xori | Self::Xor => funct3::XOR,
            Self::Ori | Self::Or => funct3::OR,
            Self::Andi | Self::And => funct3::AND,
            Self::Slli | Self::Sll => funct3::SLL,
            Self::Srli | Self::Srai | Self::Srl | Self::Sra => funct3::SRL_SRA,
        }
    }

    /// Returns the funct7 field for this mnemonic.
    ///
    /// Only meaningful for R-format instructions and the shift immediates,
    /// where it doubles as the upper seven bits of the immediate field.
    pub const fn funct7(self) -> u32 {
        match self {
            Self::Sub | Self::Sra | Self::Srai => funct7::SUB,
            _ => funct7::DEFAULT,
        }
    }

    /// Returns the lower-case textual name used in assembly output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Slli => "slli",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mnemonic {
    type Err = Error;

    /// Parses a mnemonic name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == lower)
            .ok_or_else(|| Error::UnknownMnemonic(s.to_string()))
    }
}

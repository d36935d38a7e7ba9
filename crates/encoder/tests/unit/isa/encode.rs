//! Format Encoder Tests.
//!
//! Verifies the six format encoders against known instruction words,
//! per-field round trips, range boundaries, and the silent-truncation
//! masking contract.

use rvgen_core::isa::encode;
use rvgen_core::isa::instruction::InstructionBits;
use rvgen_core::isa::rv32i::{funct3, funct7, opcodes};

use super::{decode_b_imm, decode_i_imm, decode_j_imm, decode_s_imm, decode_u_imm};

// ──────────────────────────────────────────────────────────
// Field packer
// ──────────────────────────────────────────────────────────

#[test]
fn field_masks_before_shifting() {
    // A sign-extended -1 cast to u32 is all-ones; only the declared width
    // may survive, and nothing may leak above the field.
    let packed = encode::field(-1i32 as u32, 12, 20);
    assert_eq!(packed, 0xFFF0_0000);
}

#[test]
fn field_places_value_at_offset() {
    assert_eq!(encode::field(0b101, 3, 7), 0b101 << 7);
}

#[test]
fn field_truncates_oversized_value() {
    // 0x1F does not fit in 4 bits; the top bit must be dropped.
    assert_eq!(encode::field(0x1F, 4, 0), 0xF);
}

// ──────────────────────────────────────────────────────────
// Known instruction words
// ──────────────────────────────────────────────────────────

#[test]
fn encode_add_x1_x2_x3() {
    let word = encode::r_type(funct7::DEFAULT, 3, 2, funct3::ADD_SUB, 1, opcodes::OP_REG);
    assert_eq!(word, 0x003100B3);
}

#[test]
fn encode_addi_x5_x0_minus_one() {
    let word = encode::i_type(-1, 0, funct3::ADD_SUB, 5, opcodes::OP_IMM);
    assert_eq!(word, 0xFFF00293, "immediate field must be all-ones");
}

#[test]
fn encode_lui_x10_max() {
    let word = encode::u_type(0xFFFFF, 10, opcodes::OP_LUI);
    assert_eq!(word, 0xFFFFF537);
}

#[test]
fn encode_jal_x1_4() {
    let word = encode::j_type(4, 1, opcodes::OP_JAL);
    assert_eq!(word, 0x004000EF);
}

#[test]
fn encode_nop() {
    // NOP = ADDI x0, x0, 0
    let word = encode::i_type(0, 0, funct3::ADD_SUB, 0, opcodes::OP_IMM);
    assert_eq!(word, 0x00000013);
}

// ──────────────────────────────────────────────────────────
// R-type
// ──────────────────────────────────────────────────────────

#[test]
fn r_type_field_placement() {
    let word = encode::r_type(funct7::SUB, 31, 15, funct3::SRL_SRA, 7, opcodes::OP_REG);
    assert_eq!(word.funct7(), funct7::SUB);
    assert_eq!(word.rs2(), 31);
    assert_eq!(word.rs1(), 15);
    assert_eq!(word.funct3(), funct3::SRL_SRA);
    assert_eq!(word.rd(), 7);
    assert_eq!(word.opcode(), opcodes::OP_REG);
}

#[test]
fn r_type_masks_register_indices() {
    // Index 37 exceeds 5 bits; the encoder keeps the low five (37 & 31 = 5).
    let word = encode::r_type(0, 37, 37, 0, 37, opcodes::OP_REG);
    assert_eq!(word.rs2(), 5);
    assert_eq!(word.rs1(), 5);
    assert_eq!(word.rd(), 5);
}

#[test]
fn r_type_sub_differs_from_add_only_in_funct7() {
    let add = encode::r_type(funct7::DEFAULT, 3, 2, funct3::ADD_SUB, 1, opcodes::OP_REG);
    let sub = encode::r_type(funct7::SUB, 3, 2, funct3::ADD_SUB, 1, opcodes::OP_REG);
    assert_eq!(add ^ sub, 1 << 30);
}

// ──────────────────────────────────────────────────────────
// I-type
// ──────────────────────────────────────────────────────────

#[test]
fn i_type_imm_boundaries() {
    for imm in [-2048, -1, 0, 1, 2047] {
        let word = encode::i_type(imm, 0, 0, 0, opcodes::OP_IMM);
        assert_eq!(decode_i_imm(word), imm, "I-type round-trip failed for {imm}");
    }
}

#[test]
fn i_type_out_of_range_imm_truncates() {
    // 4096 = 0x1000: bit 12 is dropped, leaving zero.
    let word = encode::i_type(4096, 0, 0, 0, opcodes::OP_IMM);
    assert_eq!(decode_i_imm(word), 0);
}

#[test]
fn i_type_negative_imm_does_not_leak_into_rs1() {
    let word = encode::i_type(-1, 0, 0, 0, opcodes::OP_IMM);
    assert_eq!(word.rs1(), 0, "sign bits must not reach the rs1 field");
    assert_eq!(word.funct3(), 0);
}

#[test]
fn i_type_shift_packs_funct7_above_shamt() {
    // SRAI x1, x2, 3: funct7 bit 5 selects arithmetic right shift.
    let imm = ((funct7::SRA << 5) | 3) as i32;
    let word = encode::i_type(imm, 2, funct3::SRL_SRA, 1, opcodes::OP_IMM);
    assert_eq!(word.funct7(), funct7::SRA);
    assert_eq!((word >> 20) & 0x1F, 3, "shamt occupies the low five bits");
}

#[test]
fn jalr_uses_i_type_layout() {
    let word = encode::i_type(4, 2, funct3::JALR, 1, opcodes::OP_JALR);
    assert_eq!(word.opcode(), opcodes::OP_JALR);
    assert_eq!(word.rd(), 1);
    assert_eq!(word.rs1(), 2);
    assert_eq!(decode_i_imm(word), 4);
}

// ──────────────────────────────────────────────────────────
// S-type
// ──────────────────────────────────────────────────────────

#[test]
fn s_type_field_placement() {
    let word = encode::s_type(7, 3, 2, funct3::SB, opcodes::OP_STORE);
    assert_eq!(word.opcode(), opcodes::OP_STORE);
    assert_eq!(word.rs2(), 3);
    assert_eq!(word.rs1(), 2);
    assert_eq!(word.funct3(), funct3::SB);
    assert_eq!(decode_s_imm(word), 7);
}

#[test]
fn s_type_imm_boundaries() {
    for imm in [-2048, -1, 0, 1, 2047] {
        let word = encode::s_type(imm, 0, 0, 0, opcodes::OP_STORE);
        assert_eq!(decode_s_imm(word), imm, "S-type round-trip failed for {imm}");
    }
}

#[test]
fn s_type_split_reuses_rd_slot() {
    // imm = 0b11111 lands entirely in the low chunk, where rd lives in
    // other formats; the high chunk must stay clear.
    let word = encode::s_type(0b11111, 0, 0, 0, opcodes::OP_STORE);
    assert_eq!(word.rd(), 0b11111);
    assert_eq!(word.funct7(), 0);
}

// ──────────────────────────────────────────────────────────
// B-type
// ──────────────────────────────────────────────────────────

#[test]
fn b_type_beq_minus_four() {
    let word = encode::b_type(-4, 1, 0, funct3::BEQ, opcodes::OP_BRANCH);
    let imm = decode_b_imm(word);
    assert_eq!(imm & 1, 0, "decoded branch target must be even");
    assert_eq!(imm, -4);
}

#[test]
fn b_type_imm_boundaries() {
    for imm in [-4096, -256, -8, 0, 8, 128, 4094] {
        let word = encode::b_type(imm, 0, 0, 0, opcodes::OP_BRANCH);
        assert_eq!(decode_b_imm(word), imm, "B-type round-trip failed for {imm}");
    }
}

#[test]
fn b_type_bit_zero_never_encoded() {
    // An odd offset encodes identically to its even neighbour below it.
    let odd = encode::b_type(-3, 1, 0, funct3::BEQ, opcodes::OP_BRANCH);
    let even = encode::b_type(-4, 1, 0, funct3::BEQ, opcodes::OP_BRANCH);
    assert_eq!(odd, even);
}

#[test]
fn b_type_bit_eleven_lands_at_position_seven() {
    // imm = 0x800 sets only bit 11, which the scatter moves to bit 7.
    let word = encode::b_type(0x800, 0, 0, 0, 0);
    assert_eq!(word, 1 << 7);
}

#[test]
fn b_type_register_fields_unaffected_by_scatter() {
    let word = encode::b_type(-4096, 31, 31, funct3::BGEU, opcodes::OP_BRANCH);
    assert_eq!(word.rs1(), 31);
    assert_eq!(word.rs2(), 31);
    assert_eq!(word.funct3(), funct3::BGEU);
}

// ──────────────────────────────────────────────────────────
// U-type
// ──────────────────────────────────────────────────────────

#[test]
fn u_type_imm_boundaries() {
    for imm in [0u32, 1, 0x7FFFF, 0x80000, 0xFFFFF] {
        let word = encode::u_type(imm, 0, opcodes::OP_LUI);
        assert_eq!(decode_u_imm(word), imm, "U-type round-trip failed for {imm:#x}");
    }
}

#[test]
fn u_type_out_of_range_imm_truncates() {
    let word = encode::u_type(0x100001, 0, opcodes::OP_AUIPC);
    assert_eq!(decode_u_imm(word), 1);
}

// ──────────────────────────────────────────────────────────
// J-type
// ──────────────────────────────────────────────────────────

#[test]
fn j_type_imm_boundaries() {
    for imm in [-1048576, -20, 0, 4, 100, 1048574] {
        let word = encode::j_type(imm, 0, opcodes::OP_JAL);
        assert_eq!(decode_j_imm(word), imm, "J-type round-trip failed for {imm}");
    }
}

#[test]
fn j_type_bit_zero_never_encoded() {
    let odd = encode::j_type(5, 1, opcodes::OP_JAL);
    let even = encode::j_type(4, 1, opcodes::OP_JAL);
    assert_eq!(odd, even);
}

#[test]
fn j_type_middle_chunk_stays_in_place() {
    // Bits [19:12] are the only chunk the J scatter does not move.
    let word = encode::j_type(0xFF000, 0, 0);
    assert_eq!(word, 0xFF << 12);
}

#[test]
fn j_type_bit_eleven_lands_at_position_twenty() {
    let word = encode::j_type(0x800, 0, 0);
    assert_eq!(word, 1 << 20);
}

#[test]
fn j_type_low_chunk_lands_at_position_twenty_one() {
    // imm = 2 sets only bit 1, the lowest encoded jump bit.
    let word = encode::j_type(2, 0, 0);
    assert_eq!(word, 1 << 21);
}

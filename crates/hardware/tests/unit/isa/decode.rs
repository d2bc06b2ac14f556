//! Instruction Decoder Unit Tests.
//!
//! Verifies that `decode` correctly performs:
//!   1. Primary opcode lookup, including every unassigned byte
//!   2. Format classification and the register-form bit
//!   3. Immediate extraction with sign extension for M, Bi and Bc formats
//!   4. Register field selection, including the `UBR`/`RET` and system overrides
//!   5. System sub-opcode resolution

use crate::common::builder::instruction::*;
use aruxi_core::isa::decode::{decode, sign_extend};
use aruxi_core::isa::{InstrType, Opcode};
use proptest::prelude::*;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// Primary table
// ══════════════════════════════════════════════════════════

const ASSIGNED: [(u8, Opcode); 42] = [
    (0x80, Opcode::Add),
    (0x81, Opcode::Add),
    (0x88, Opcode::Adds),
    (0x89, Opcode::Adds),
    (0x90, Opcode::Sub),
    (0x91, Opcode::Sub),
    (0x98, Opcode::Subs),
    (0x99, Opcode::Subs),
    (0xA0, Opcode::Mul),
    (0xA2, Opcode::Smul),
    (0xA8, Opcode::Div),
    (0xAA, Opcode::Sdiv),
    (0x40, Opcode::Or),
    (0x41, Opcode::Or),
    (0x42, Opcode::And),
    (0x43, Opcode::And),
    (0x44, Opcode::Xor),
    (0x45, Opcode::Xor),
    (0x46, Opcode::Not),
    (0x47, Opcode::Not),
    (0x48, Opcode::Lsl),
    (0x49, Opcode::Lsl),
    (0x4A, Opcode::Lsr),
    (0x4B, Opcode::Lsr),
    (0x4C, Opcode::Asr),
    (0x4D, Opcode::Asr),
    (0x14, Opcode::Ld),
    (0x34, Opcode::Ldb),
    (0x54, Opcode::Ldbs),
    (0x74, Opcode::Ldbz),
    (0x94, Opcode::Ldh),
    (0xB4, Opcode::Ldhs),
    (0xD4, Opcode::Ldhz),
    (0x1C, Opcode::Str),
    (0x3C, Opcode::Strb),
    (0x5C, Opcode::Strh),
    (0xC0, Opcode::Ub),
    (0xC2, Opcode::Ubr),
    (0xC4, Opcode::B),
    (0xC6, Opcode::Call),
    (0xC8, Opcode::Ret),
    (0xBE, Opcode::Sys),
];

#[test]
fn primary_table_maps_every_byte() {
    for byte in 0..=u8::MAX {
        let expected = ASSIGNED
            .iter()
            .find(|(b, _)| *b == byte)
            .map_or(Opcode::Error, |(_, op)| *op);
        assert_eq!(
            Opcode::from_byte(byte),
            expected,
            "byte {byte:#04x} mapped incorrectly"
        );
    }
}

#[test]
fn unassigned_byte_decodes_to_error() {
    let d = decode(0xFF00_0000);
    assert_eq!(d.opcode, Opcode::Error);
    assert_eq!(d.itype, InstrType::None);
}

// ══════════════════════════════════════════════════════════
// Formats
// ══════════════════════════════════════════════════════════

#[test]
fn immediate_form_reads_imm14_and_rr_field_as_source() {
    let d = decode(add_i(3, 7, 100));
    assert_eq!(d.opcode, Opcode::Add);
    assert_eq!(d.itype, InstrType::I);
    assert_eq!(d.imm, 100);
    assert_eq!(d.rd, 3);
    assert_eq!(d.rs, 7);
}

#[test]
fn imm14_is_not_sign_extended() {
    let d = decode(add_i(1, 1, 0x3FFF));
    assert_eq!(d.imm, 0x3FFF);
}

#[test]
fn register_form_bit_selects_r_type() {
    let d = decode(add_r(4, 5, 6));
    assert_eq!(d.opcode, Opcode::Add);
    assert_eq!(d.itype, InstrType::R);
    assert_eq!((d.rd, d.rs, d.rr), (4, 5, 6));
    assert_eq!(d.imm, 0);
}

#[rstest]
#[case(OP_MUL, Opcode::Mul)]
#[case(OP_SMUL, Opcode::Smul)]
#[case(OP_DIV, Opcode::Div)]
#[case(OP_SDIV, Opcode::Sdiv)]
fn multiply_and_divide_are_always_register_form(#[case] byte: u8, #[case] op: Opcode) {
    let d = decode(InstructionBuilder::new().r_type(byte, 1, 2, 3).build());
    assert_eq!(d.opcode, op);
    assert_eq!(d.itype, InstrType::R);
    assert_eq!((d.rd, d.rs, d.rr), (1, 2, 3));
}

#[rstest]
#[case(4)]
#[case(-4)]
#[case(255)]
#[case(-256)]
fn memory_offset_is_sign_extended(#[case] offset: i32) {
    let d = decode(load(OP_LD, 1, 2, offset));
    assert_eq!(d.opcode, Opcode::Ld);
    assert_eq!(d.itype, InstrType::M);
    assert_eq!(d.imm, offset);
    assert_eq!((d.rd, d.rs), (1, 2));
}

#[test]
fn store_carries_value_register_in_rd() {
    let d = decode(store(OP_STRH, 9, 3, 2));
    assert_eq!(d.opcode, Opcode::Strh);
    assert_eq!((d.rd, d.rs, d.imm), (9, 3, 2));
}

#[rstest]
#[case(1)]
#[case(-1)]
#[case(0x7F_FFFF)]
#[case(-0x80_0000)]
fn branch_immediate_offset_is_sign_extended(#[case] offset: i32) {
    let d = decode(ub(offset));
    assert_eq!(d.opcode, Opcode::Ub);
    assert_eq!(d.itype, InstrType::Bi);
    assert_eq!(d.imm, offset);

    let d = decode(call(offset));
    assert_eq!(d.opcode, Opcode::Call);
    assert_eq!(d.imm, offset);
}

#[test]
fn conditional_branch_extracts_cond_and_offset() {
    let d = decode(b(11, -3));
    assert_eq!(d.opcode, Opcode::B);
    assert_eq!(d.itype, InstrType::Bc);
    assert_eq!(d.cond, 11);
    assert_eq!(d.imm, -3);
}

#[test]
fn register_branches_read_rs_from_bits_14_to_10() {
    let d = decode(ubr(17));
    assert_eq!(d.opcode, Opcode::Ubr);
    assert_eq!(d.itype, InstrType::Bu);
    assert_eq!(d.rs, 17);

    let d = decode(ret(28));
    assert_eq!(d.opcode, Opcode::Ret);
    assert_eq!(d.rs, 28);
}

// ══════════════════════════════════════════════════════════
// System group
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(syscall(), Opcode::Syscall)]
#[case(hlt(), Opcode::Hlt)]
#[case(si(), Opcode::Si)]
#[case(di(), Opcode::Di)]
#[case(eret(), Opcode::Eret)]
#[case(ldir(0), Opcode::Ldir)]
#[case(mvcstr(0), Opcode::Mvcstr)]
#[case(ldcstr(0), Opcode::Ldcstr)]
#[case(resr(0), Opcode::Resr)]
fn system_sub_opcodes_resolve(#[case] word: u32, #[case] op: Opcode) {
    let d = decode(word);
    assert_eq!(d.opcode, op);
    assert_eq!(d.itype, InstrType::S);
}

#[test]
fn unassigned_sub_opcode_decodes_to_error() {
    for sub in [0b00000, 0b00001, 0b00011, 0b11100] {
        let d = decode(InstructionBuilder::new().s_type(sub).build());
        assert_eq!(d.opcode, Opcode::Error, "sub-opcode {sub:#07b}");
    }
}

#[test]
fn mvcstr_sources_from_rr_field() {
    let d = decode(mvcstr(12));
    assert_eq!(d.rs, 12);
    assert_eq!(d.rd, 0);
}

#[test]
fn special_register_reads_target_rd() {
    assert_eq!(decode(ldir(5)).rd, 5);
    assert_eq!(decode(ldcstr(6)).rd, 6);
    assert_eq!(decode(resr(7)).rd, 7);
}

// ══════════════════════════════════════════════════════════
// Properties
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decode_keeps_raw_word(word in any::<u32>()) {
        prop_assert_eq!(decode(word).raw, word);
    }

    #[test]
    fn register_fields_stay_in_range(word in any::<u32>()) {
        let d = decode(word);
        prop_assert!(d.rd < 32 && d.rs < 32 && d.rr < 32);
    }

    #[test]
    fn sign_extend_matches_shift_pair(value in any::<u32>(), bits in 1u32..=32) {
        let shift = 32 - bits;
        prop_assert_eq!(sign_extend(value & mask(bits), bits), ((value << shift) as i32) >> shift);
    }
}

fn mask(bits: u32) -> u32 {
    if bits == 32 { u32::MAX } else { (1 << bits) - 1 }
}

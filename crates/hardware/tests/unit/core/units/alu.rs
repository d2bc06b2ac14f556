//! ALU Unit Tests.
//!
//! Verifies that the ALU correctly performs:
//!   1. Wrapping arithmetic, unsigned division and the divide-by-zero result
//!   2. Logic and shifts, including the five-bit shift amount
//!   3. Routing of every operation to its sub-unit function
//!   4. Condition flags with the add and subtract formulas

use aruxi_core::core::pipeline::signals::AluOp;
use aruxi_core::core::units::alu::{Alu, ConditionFlags, arithmetic, logic, shifts};
use proptest::prelude::*;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// Results
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(AluOp::Plus, 0xFFFF_FFFF, 1, 0)]
#[case(AluOp::Minus, 0, 1, 0xFFFF_FFFF)]
#[case(AluOp::Mul, 0x1_0000, 0x1_0000, 0)]
#[case(AluOp::Div, 7, 2, 3)]
#[case(AluOp::Div, 0x8000_0000, 2, 0x4000_0000)]
#[case(AluOp::Div, 42, 0, 0xFFFF_FFFF)]
#[case(AluOp::Or, 0xF0, 0x0F, 0xFF)]
#[case(AluOp::And, 0xF0, 0x3C, 0x30)]
#[case(AluOp::Xor, 0xFF, 0x0F, 0xF0)]
#[case(AluOp::Inv, 0x0000_FFFF, 0, 0xFFFF_0000)]
#[case(AluOp::Lsl, 1, 31, 0x8000_0000)]
#[case(AluOp::Lsl, 1, 33, 2)]
#[case(AluOp::Lsr, 0x8000_0000, 31, 1)]
#[case(AluOp::Asr, 0x8000_0000, 4, 0xF800_0000)]
#[case(AluOp::Asr, 0x4000_0000, 4, 0x0400_0000)]
#[case(AluOp::Pass, 123, 456, 0)]
fn alu_results(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected, "{op:?} {a:#x} {b:#x}");
}

// ══════════════════════════════════════════════════════════
// Routing
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(AluOp::Plus, arithmetic::add)]
#[case(AluOp::Minus, arithmetic::sub)]
#[case(AluOp::Mul, arithmetic::mul)]
#[case(AluOp::Div, arithmetic::div)]
#[case(AluOp::Or, logic::or)]
#[case(AluOp::And, logic::and)]
#[case(AluOp::Xor, logic::xor)]
#[case(AluOp::Inv, |a, _| logic::inv(a))]
#[case(AluOp::Lsl, shifts::lsl)]
#[case(AluOp::Lsr, shifts::lsr)]
#[case(AluOp::Asr, shifts::asr)]
#[case(AluOp::Pass, |_, _| 0)]
fn every_op_routes_to_its_sub_unit(#[case] op: AluOp, #[case] unit: fn(u32, u32) -> u32) {
    for (a, b) in [(0x8765_4321, 3), (0xFFFF_FFFF, 0x21), (12, 5), (0, 7)] {
        assert_eq!(Alu::execute(op, a, b), unit(a, b), "{op:?} {a:#x} {b:#x}");
    }
}

// ══════════════════════════════════════════════════════════
// Flags
// ══════════════════════════════════════════════════════════

#[test]
fn add_into_sign_bit_sets_negative_and_overflow() {
    let (res, f) = Alu::execute_with_flags(AluOp::Plus, 0x7FFF_FFFF, 1);
    assert_eq!(res, 0x8000_0000);
    assert!(f.n);
    assert!(!f.z);
    assert!(f.o);
    assert!(!f.c);
}

#[test]
fn unsigned_wrap_sets_carry() {
    let (res, f) = Alu::execute_with_flags(AluOp::Plus, 0xFFFF_FFFF, 2);
    assert_eq!(res, 1);
    assert!(f.c);
    assert!(!f.o);
}

#[test]
fn subtract_carry_means_no_borrow() {
    let (_, f) = Alu::execute_with_flags(AluOp::Minus, 5, 3);
    assert!(f.c);
    let (_, f) = Alu::execute_with_flags(AluOp::Minus, 3, 5);
    assert!(!f.c);
    assert!(f.n);
}

#[test]
fn subtract_overflow_positive_minus_negative() {
    let (_, f) = Alu::execute_with_flags(AluOp::Minus, 0x7FFF_FFFF, 0xFFFF_FFFF);
    // 0x7FFFFFFF - (-1) wraps negative: not flagged by the r > 0 formula.
    assert!(!f.o);
    let (_, f) = Alu::execute_with_flags(AluOp::Minus, 1, 0xFFFF_FFFF);
    assert!(f.o);
}

#[test]
fn flags_for_subtract_use_subtract_formulas_only() {
    let add = ConditionFlags::derive(AluOp::Plus, 5, 5, 10);
    let sub = ConditionFlags::derive(AluOp::Minus, 5, 5, 0);
    assert!(!add.c);
    assert!(sub.c);
    assert!(sub.z);
}

proptest! {
    #[test]
    fn zero_and_negative_track_result(op in prop_oneof![Just(AluOp::Plus), Just(AluOp::Minus)],
                                       a in any::<u32>(), b in any::<u32>()) {
        let (res, f) = Alu::execute_with_flags(op, a, b);
        prop_assert_eq!(f.z, res == 0);
        prop_assert_eq!(f.n, res >> 31 == 1);
    }

    #[test]
    fn add_carry_is_unsigned_wrap(a in any::<u32>(), b in any::<u32>()) {
        let (_, f) = Alu::execute_with_flags(AluOp::Plus, a, b);
        prop_assert_eq!(f.c, a.checked_add(b).is_none());
    }

    #[test]
    fn shift_amount_uses_low_five_bits(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(Alu::execute(AluOp::Lsl, a, b), a << (b & 31));
        prop_assert_eq!(Alu::execute(AluOp::Lsr, a, b), a >> (b & 31));
    }
}

//! AruXI Instruction Decoder.
//!
//! This module turns a raw instruction word into a [`Decoded`] record. It performs:
//! 1. **Opcode Lookup:** Top byte through the primary table, `SYS` through the sub-opcode table.
//! 2. **Classification:** Assigns one of the I/R/M/Bi/Bu/Bc/S formats.
//! 3. **Immediates:** Extracts the format's immediate, sign-extending the signed forms.
//! 4. **Register Selection:** Picks rd/rs/rr with per-opcode overrides for `UBR`/`RET` and the system group.

use crate::isa::instruction::{
    Decoded, IMM14_SHIFT, InstrType, InstructionBits, SIMM9_SHIFT, SIMM19_SHIFT,
};
use crate::isa::opcodes::Opcode;
use crate::isa::system;

/// Width of the unsigned I-type immediate.
const IMM14_BITS: u32 = 14;

/// Width of the signed M-type offset.
const SIMM9_BITS: u32 = 9;

/// Width of the signed Bc-type offset.
const SIMM19_BITS: u32 = 19;

/// Width of the signed Bi-type offset.
const SIMM24_BITS: u32 = 24;

/// Decodes an AruXI instruction word.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction word.
///
/// # Returns
///
/// A `Decoded` record. `opcode` is `Opcode::Error` when the primary byte or the
/// system sub-opcode is unassigned; the caller decides how to fault.
pub fn decode(word: u32) -> Decoded {
    let primary = Opcode::from_byte(word.opcode_byte());
    let mut d = Decoded {
        raw: word,
        opcode: primary,
        ..Decoded::default()
    };
    if primary == Opcode::Error {
        return d;
    }

    let (itype, imm) = classify(primary, word);
    d.itype = itype;
    d.imm = imm;

    if primary == Opcode::Sys {
        d.opcode = system::decode_sub_opcode(word);
        if d.opcode == Opcode::Error {
            return d;
        }
    }

    select_registers(&mut d);
    d
}

/// Classifies an opcode into its format and extracts the immediate.
///
/// Arithmetic and logic opcodes are immediate-form unless the register-form bit
/// is set; multiply and divide are always register-form.
///
/// # Returns
///
/// The instruction type and immediate (0 for formats without one).
pub fn classify(op: Opcode, word: u32) -> (InstrType, i32) {
    match op {
        Opcode::Nop
        | Opcode::Mul
        | Opcode::Smul
        | Opcode::Div
        | Opcode::Sdiv
        | Opcode::Add
        | Opcode::Adds
        | Opcode::Sub
        | Opcode::Subs
        | Opcode::Or
        | Opcode::And
        | Opcode::Xor
        | Opcode::Not
        | Opcode::Lsl
        | Opcode::Lsr
        | Opcode::Asr
        | Opcode::Cmp => {
            let always_reg = matches!(op, Opcode::Mul | Opcode::Smul | Opcode::Div | Opcode::Sdiv);
            if !word.mode_bit() && !always_reg {
                (InstrType::I, field(word, IMM14_SHIFT, IMM14_BITS) as i32)
            } else {
                (InstrType::R, 0)
            }
        }

        Opcode::Ld
        | Opcode::Ldb
        | Opcode::Ldbs
        | Opcode::Ldbz
        | Opcode::Ldh
        | Opcode::Ldhs
        | Opcode::Ldhz
        | Opcode::Str
        | Opcode::Strb
        | Opcode::Strh => (
            InstrType::M,
            sign_extend(field(word, SIMM9_SHIFT, SIMM9_BITS), SIMM9_BITS),
        ),

        Opcode::Ub | Opcode::Call => (
            InstrType::Bi,
            sign_extend(field(word, 0, SIMM24_BITS), SIMM24_BITS),
        ),

        Opcode::B => (
            InstrType::Bc,
            sign_extend(field(word, SIMM19_SHIFT, SIMM19_BITS), SIMM19_BITS),
        ),

        Opcode::Ubr | Opcode::Ret => (InstrType::Bu, 0),

        Opcode::Sys
        | Opcode::Syscall
        | Opcode::Hlt
        | Opcode::Si
        | Opcode::Di
        | Opcode::Eret
        | Opcode::Ldir
        | Opcode::Mvcstr
        | Opcode::Ldcstr
        | Opcode::Resr => (InstrType::S, 0),

        Opcode::Mv
        | Opcode::Mvn
        | Opcode::Sxb
        | Opcode::Sxh
        | Opcode::Uxb
        | Opcode::Uxh
        | Opcode::Addf
        | Opcode::Subf
        | Opcode::Mulf
        | Opcode::Divf
        | Opcode::Ldf
        | Opcode::Strf
        | Opcode::Mvf
        | Opcode::Error => (InstrType::None, 0),
    }
}

/// Fills the register indices of a classified instruction.
fn select_registers(d: &mut Decoded) {
    let word = d.raw;
    match d.itype {
        InstrType::Bu => d.rs = word.rs(),
        InstrType::I => {
            d.rd = word.rd();
            d.rs = word.rr();
        }
        InstrType::R | InstrType::M => {
            d.rd = word.rd();
            d.rs = word.rs();
            d.rr = word.rr();
        }
        InstrType::Bc => d.cond = word.cond(),
        InstrType::S => match d.opcode {
            Opcode::Mvcstr => d.rs = word.rr(),
            Opcode::Ldir | Opcode::Ldcstr | Opcode::Resr => d.rd = word.rd(),
            _ => {}
        },
        InstrType::Bi | InstrType::None => {}
    }
}

#[inline(always)]
const fn field(word: u32, shift: u32, bits: u32) -> u32 {
    (word >> shift) & ((1 << bits) - 1)
}

/// Sign-extends the low `bits` of `value`.
///
/// # Arguments
///
/// * `value` - The raw field, right-aligned.
/// * `bits`  - Width of the field (1-32).
#[inline(always)]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

//! 6809 decode table.
//!
//! 768 value rows: base page, then the 0x10 prefix page at +0x100 and the
//! 0x11 prefix page at +0x200. Unpopulated rows are the bad-opcode row.

use crate::cpu::branch::Cond;
use crate::cpu::m6809::Reg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AddrMode {
    Implied,
    Immediate,
    Direct,
    Extended,
    Indexed,
    Branch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Bad,
    Nop,
    Add,
    Adc,
    Sub,
    Cmp,
    And,
    Bit,
    Eor,
    Or,
    Abx,
    Clr,
    Com,
    Neg,
    Dec,
    Inc,
    Tst,
    Lea,
    Asl,
    Asr,
    Lsr,
    Rol,
    Ror,
    Tfr,
    Exg,
    Push,
    Pull,
    Bra,
    Bsr,
    Jmp,
    Jsr,
    Rts,
    Ld,
    St,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Payload {
    None,
    Cond(Cond),
    CalcAddr,
}

#[derive(Clone, Copy)]
pub(crate) struct OpDecode {
    pub name: &'static str,
    pub mode: AddrMode,
    pub width: u8,
    pub op: Op,
    pub reg: Reg,
    pub payload: Payload,
}

impl OpDecode {
    const BAD: OpDecode = OpDecode {
        name: "???",
        mode: AddrMode::Implied,
        width: 1,
        op: Op::Bad,
        reg: Reg::A,
        payload: Payload::None,
    };

    const fn val(name: &'static str, mode: AddrMode, width: u8, op: Op, reg: Reg) -> Self {
        OpDecode {
            name,
            mode,
            width,
            op,
            reg,
            payload: Payload::None,
        }
    }

    const fn addr(name: &'static str, mode: AddrMode, width: u8, op: Op, reg: Reg) -> Self {
        OpDecode {
            name,
            mode,
            width,
            op,
            reg,
            payload: Payload::CalcAddr,
        }
    }

    const fn bra(name: &'static str, width: u8, cond: Cond) -> Self {
        OpDecode {
            name,
            mode: AddrMode::Branch,
            width,
            op: Op::Bra,
            reg: Reg::Pc,
            payload: Payload::Cond(cond),
        }
    }

    pub(crate) fn calc_addr(&self) -> bool {
        matches!(self.payload, Payload::CalcAddr)
    }
}

use AddrMode::*;
use Reg::*;

pub(crate) static OPS: [OpDecode; 768] = build();

const fn build() -> [OpDecode; 768] {
    let mut t = [OpDecode::BAD; 768];

    // alu ops
    t[0x8B] = OpDecode::val("adda", Immediate, 1, Op::Add, A);
    t[0xCB] = OpDecode::val("addb", Immediate, 1, Op::Add, B);
    t[0xC3] = OpDecode::val("addd", Immediate, 2, Op::Add, D);
    t[0x9B] = OpDecode::val("adda", Direct, 1, Op::Add, A);
    t[0xDB] = OpDecode::val("addb", Direct, 1, Op::Add, B);
    t[0xD3] = OpDecode::val("addd", Direct, 2, Op::Add, D);
    t[0xAB] = OpDecode::val("adda", Indexed, 1, Op::Add, A);
    t[0xEB] = OpDecode::val("addb", Indexed, 1, Op::Add, B);
    t[0xE3] = OpDecode::val("addd", Indexed, 2, Op::Add, D);
    t[0xBB] = OpDecode::val("adda", Extended, 1, Op::Add, A);
    t[0xFB] = OpDecode::val("addb", Extended, 1, Op::Add, B);
    t[0xF3] = OpDecode::val("addd", Extended, 2, Op::Add, D);

    t[0x89] = OpDecode::val("adca", Immediate, 1, Op::Adc, A);
    t[0xC9] = OpDecode::val("adcb", Immediate, 1, Op::Adc, B);
    t[0x99] = OpDecode::val("adca", Direct, 1, Op::Adc, A);
    t[0xD9] = OpDecode::val("adcb", Direct, 1, Op::Adc, B);
    t[0xA9] = OpDecode::val("adca", Indexed, 1, Op::Adc, A);
    t[0xE9] = OpDecode::val("adcb", Indexed, 1, Op::Adc, B);
    t[0xB9] = OpDecode::val("adca", Extended, 1, Op::Adc, A);
    t[0xF9] = OpDecode::val("adcb", Extended, 1, Op::Adc, B);

    t[0x80] = OpDecode::val("suba", Immediate, 1, Op::Sub, A);
    t[0xC0] = OpDecode::val("subb", Immediate, 1, Op::Sub, B);
    t[0x83] = OpDecode::val("subd", Immediate, 2, Op::Sub, D);
    t[0x90] = OpDecode::val("suba", Direct, 1, Op::Sub, A);
    t[0xD0] = OpDecode::val("subb", Direct, 1, Op::Sub, B);
    t[0x93] = OpDecode::val("subd", Direct, 2, Op::Sub, D);
    t[0xA0] = OpDecode::val("suba", Indexed, 1, Op::Sub, A);
    t[0xE0] = OpDecode::val("subb", Indexed, 1, Op::Sub, B);
    t[0xA3] = OpDecode::val("subd", Indexed, 2, Op::Sub, D);
    t[0xB0] = OpDecode::val("suba", Extended, 1, Op::Sub, A);
    t[0xF0] = OpDecode::val("subb", Extended, 1, Op::Sub, B);
    t[0xB3] = OpDecode::val("subd", Extended, 2, Op::Sub, D);

    t[0x81] = OpDecode::val("cmpa", Immediate, 1, Op::Cmp, A);
    t[0xC1] = OpDecode::val("cmpb", Immediate, 1, Op::Cmp, B);
    t[0x183] = OpDecode::val("cmpd", Immediate, 2, Op::Cmp, D);
    t[0x28C] = OpDecode::val("cmps", Immediate, 2, Op::Cmp, S);
    t[0x283] = OpDecode::val("cmpu", Immediate, 2, Op::Cmp, U);
    t[0x8C] = OpDecode::val("cmpx", Immediate, 2, Op::Cmp, X);
    t[0x18C] = OpDecode::val("cmpy", Immediate, 2, Op::Cmp, Y);

    t[0x91] = OpDecode::val("cmpa", Direct, 1, Op::Cmp, A);
    t[0xD1] = OpDecode::val("cmpb", Direct, 1, Op::Cmp, B);
    t[0x193] = OpDecode::val("cmpd", Direct, 2, Op::Cmp, D);
    t[0x29C] = OpDecode::val("cmps", Direct, 2, Op::Cmp, S);
    t[0x293] = OpDecode::val("cmpu", Direct, 2, Op::Cmp, U);
    t[0x9C] = OpDecode::val("cmpx", Direct, 2, Op::Cmp, X);
    t[0x19C] = OpDecode::val("cmpy", Direct, 2, Op::Cmp, Y);

    t[0xA1] = OpDecode::val("cmpa", Indexed, 1, Op::Cmp, A);
    t[0xE1] = OpDecode::val("cmpb", Indexed, 1, Op::Cmp, B);
    t[0x1A3] = OpDecode::val("cmpd", Indexed, 2, Op::Cmp, D);
    t[0x2AC] = OpDecode::val("cmps", Indexed, 2, Op::Cmp, S);
    t[0x2A3] = OpDecode::val("cmpu", Indexed, 2, Op::Cmp, U);
    t[0xAC] = OpDecode::val("cmpx", Indexed, 2, Op::Cmp, X);
    t[0x1AC] = OpDecode::val("cmpy", Indexed, 2, Op::Cmp, Y);

    t[0xB1] = OpDecode::val("cmpa", Extended, 1, Op::Cmp, A);
    t[0xF1] = OpDecode::val("cmpb", Extended, 1, Op::Cmp, B);
    t[0x1B3] = OpDecode::val("cmpd", Extended, 2, Op::Cmp, D);
    t[0x2BC] = OpDecode::val("cmps", Extended, 2, Op::Cmp, S);
    t[0x2B3] = OpDecode::val("cmpu", Extended, 2, Op::Cmp, U);
    t[0xBC] = OpDecode::val("cmpx", Extended, 2, Op::Cmp, X);
    t[0x1BC] = OpDecode::val("cmpy", Extended, 2, Op::Cmp, Y);

    t[0x84] = OpDecode::val("anda", Immediate, 1, Op::And, A);
    t[0xC4] = OpDecode::val("andb", Immediate, 1, Op::And, B);
    t[0x1C] = OpDecode::val("andcc", Immediate, 1, Op::And, Cc);
    t[0x94] = OpDecode::val("anda", Direct, 1, Op::And, A);
    t[0xD4] = OpDecode::val("andb", Direct, 1, Op::And, B);
    t[0xA4] = OpDecode::val("anda", Indexed, 1, Op::And, A);
    t[0xE4] = OpDecode::val("andb", Indexed, 1, Op::And, B);
    t[0xB4] = OpDecode::val("anda", Extended, 1, Op::And, A);
    t[0xF4] = OpDecode::val("andb", Extended, 1, Op::And, B);

    t[0x85] = OpDecode::val("bita", Immediate, 1, Op::Bit, A);
    t[0xC5] = OpDecode::val("bitb", Immediate, 1, Op::Bit, B);
    t[0x95] = OpDecode::val("bita", Direct, 1, Op::Bit, A);
    t[0xD5] = OpDecode::val("bitb", Direct, 1, Op::Bit, B);
    t[0xA5] = OpDecode::val("bita", Indexed, 1, Op::Bit, A);
    t[0xE5] = OpDecode::val("bitb", Indexed, 1, Op::Bit, B);
    t[0xB5] = OpDecode::val("bita", Extended, 1, Op::Bit, A);
    t[0xF5] = OpDecode::val("bitb", Extended, 1, Op::Bit, B);

    t[0x88] = OpDecode::val("eora", Immediate, 1, Op::Eor, A);
    t[0xC8] = OpDecode::val("eorb", Immediate, 1, Op::Eor, B);
    t[0x98] = OpDecode::val("eora", Direct, 1, Op::Eor, A);
    t[0xD8] = OpDecode::val("eorb", Direct, 1, Op::Eor, B);
    t[0xA8] = OpDecode::val("eora", Indexed, 1, Op::Eor, A);
    t[0xE8] = OpDecode::val("eorb", Indexed, 1, Op::Eor, B);
    t[0xB8] = OpDecode::val("eora", Extended, 1, Op::Eor, A);
    t[0xF8] = OpDecode::val("eorb", Extended, 1, Op::Eor, B);

    t[0x8A] = OpDecode::val("ora", Immediate, 1, Op::Or, A);
    t[0xCA] = OpDecode::val("orb", Immediate, 1, Op::Or, B);
    t[0x1A] = OpDecode::val("orcc", Immediate, 1, Op::Or, Cc);
    t[0x9A] = OpDecode::val("ora", Direct, 1, Op::Or, A);
    t[0xDA] = OpDecode::val("orb", Direct, 1, Op::Or, B);
    t[0xAA] = OpDecode::val("ora", Indexed, 1, Op::Or, A);
    t[0xEA] = OpDecode::val("orb", Indexed, 1, Op::Or, B);
    t[0xBA] = OpDecode::val("ora", Extended, 1, Op::Or, A);
    t[0xFA] = OpDecode::val("orb", Extended, 1, Op::Or, B);

    // misc
    t[0x12] = OpDecode::val("nop", Implied, 1, Op::Nop, A);
    t[0x3A] = OpDecode::val("abx", Implied, 2, Op::Abx, X);
    t[0x1F] = OpDecode::val("tfr", Immediate, 1, Op::Tfr, A);
    t[0x1E] = OpDecode::val("exg", Immediate, 1, Op::Exg, A);

    t[0x4F] = OpDecode::val("clra", Implied, 1, Op::Clr, A);
    t[0x5F] = OpDecode::val("clrb", Implied, 1, Op::Clr, B);
    t[0x0F] = OpDecode::addr("clr", Direct, 1, Op::Clr, A);
    t[0x6F] = OpDecode::addr("clr", Indexed, 1, Op::Clr, A);
    t[0x7F] = OpDecode::addr("clr", Extended, 1, Op::Clr, A);

    t[0x43] = OpDecode::val("coma", Implied, 1, Op::Com, A);
    t[0x53] = OpDecode::val("comb", Implied, 1, Op::Com, B);
    t[0x03] = OpDecode::addr("com", Direct, 1, Op::Com, A);
    t[0x63] = OpDecode::addr("com", Indexed, 1, Op::Com, A);
    t[0x73] = OpDecode::addr("com", Extended, 1, Op::Com, A);

    t[0x40] = OpDecode::val("nega", Implied, 1, Op::Neg, A);
    t[0x50] = OpDecode::val("negb", Implied, 1, Op::Neg, B);
    t[0x00] = OpDecode::addr("neg", Direct, 1, Op::Neg, A);
    t[0x60] = OpDecode::addr("neg", Indexed, 1, Op::Neg, A);
    t[0x70] = OpDecode::addr("neg", Extended, 1, Op::Neg, A);

    t[0x4A] = OpDecode::val("deca", Implied, 1, Op::Dec, A);
    t[0x5A] = OpDecode::val("decb", Implied, 1, Op::Dec, B);
    t[0x0A] = OpDecode::addr("dec", Direct, 1, Op::Dec, A);
    t[0x6A] = OpDecode::addr("dec", Indexed, 1, Op::Dec, A);
    t[0x7A] = OpDecode::addr("dec", Extended, 1, Op::Dec, A);

    t[0x4C] = OpDecode::val("inca", Implied, 1, Op::Inc, A);
    t[0x5C] = OpDecode::val("incb", Implied, 1, Op::Inc, B);
    t[0x0C] = OpDecode::addr("inc", Direct, 1, Op::Inc, A);
    t[0x6C] = OpDecode::addr("inc", Indexed, 1, Op::Inc, A);
    t[0x7C] = OpDecode::addr("inc", Extended, 1, Op::Inc, A);

    t[0x48] = OpDecode::val("asla", Implied, 1, Op::Asl, A);
    t[0x58] = OpDecode::val("aslb", Implied, 1, Op::Asl, B);
    t[0x08] = OpDecode::addr("asl", Direct, 1, Op::Asl, A);
    t[0x68] = OpDecode::addr("asl", Indexed, 1, Op::Asl, A);
    t[0x78] = OpDecode::addr("asl", Extended, 1, Op::Asl, A);

    t[0x47] = OpDecode::val("asra", Implied, 1, Op::Asr, A);
    t[0x57] = OpDecode::val("asrb", Implied, 1, Op::Asr, B);
    t[0x07] = OpDecode::addr("asr", Direct, 1, Op::Asr, A);
    t[0x67] = OpDecode::addr("asr", Indexed, 1, Op::Asr, A);
    t[0x77] = OpDecode::addr("asr", Extended, 1, Op::Asr, A);

    t[0x44] = OpDecode::val("lsra", Implied, 1, Op::Lsr, A);
    t[0x54] = OpDecode::val("lsrb", Implied, 1, Op::Lsr, B);
    t[0x04] = OpDecode::addr("lsr", Direct, 1, Op::Lsr, A);
    t[0x64] = OpDecode::addr("lsr", Indexed, 1, Op::Lsr, A);
    t[0x74] = OpDecode::addr("lsr", Extended, 1, Op::Lsr, A);

    t[0x49] = OpDecode::val("rola", Implied, 1, Op::Rol, A);
    t[0x59] = OpDecode::val("rolb", Implied, 1, Op::Rol, B);
    t[0x09] = OpDecode::addr("rol", Direct, 1, Op::Rol, A);
    t[0x69] = OpDecode::addr("rol", Indexed, 1, Op::Rol, A);
    t[0x79] = OpDecode::addr("rol", Extended, 1, Op::Rol, A);

    t[0x46] = OpDecode::val("rora", Implied, 1, Op::Ror, A);
    t[0x56] = OpDecode::val("rorb", Implied, 1, Op::Ror, B);
    t[0x06] = OpDecode::addr("ror", Direct, 1, Op::Ror, A);
    t[0x66] = OpDecode::addr("ror", Indexed, 1, Op::Ror, A);
    t[0x76] = OpDecode::addr("ror", Extended, 1, Op::Ror, A);

    t[0x4D] = OpDecode::val("tsta", Implied, 1, Op::Tst, A);
    t[0x5D] = OpDecode::val("tstb", Implied, 1, Op::Tst, B);
    t[0x0D] = OpDecode::addr("tst", Direct, 1, Op::Tst, A);
    t[0x6D] = OpDecode::addr("tst", Indexed, 1, Op::Tst, A);
    t[0x7D] = OpDecode::addr("tst", Extended, 1, Op::Tst, A);

    t[0x32] = OpDecode::addr("leas", Indexed, 2, Op::Lea, S);
    t[0x33] = OpDecode::addr("leau", Indexed, 2, Op::Lea, U);
    t[0x30] = OpDecode::addr("leax", Indexed, 2, Op::Lea, X);
    t[0x31] = OpDecode::addr("leay", Indexed, 2, Op::Lea, Y);

    // push/pull; the immediate byte is the register mask
    t[0x34] = OpDecode::val("pshs", Immediate, 1, Op::Push, S);
    t[0x36] = OpDecode::val("pshu", Immediate, 1, Op::Push, U);

    t[0x35] = OpDecode::val("puls", Immediate, 1, Op::Pull, S);
    t[0x37] = OpDecode::val("pulu", Immediate, 1, Op::Pull, U);

    // loads
    t[0x86] = OpDecode::val("lda", Immediate, 1, Op::Ld, A);
    t[0xC6] = OpDecode::val("ldb", Immediate, 1, Op::Ld, B);
    t[0xCC] = OpDecode::val("ldd", Immediate, 2, Op::Ld, D);
    t[0x1CE] = OpDecode::val("lds", Immediate, 2, Op::Ld, S);
    t[0xCE] = OpDecode::val("ldu", Immediate, 2, Op::Ld, U);
    t[0x8E] = OpDecode::val("ldx", Immediate, 2, Op::Ld, X);
    t[0x18E] = OpDecode::val("ldy", Immediate, 2, Op::Ld, Y);

    t[0x96] = OpDecode::val("lda", Direct, 1, Op::Ld, A);
    t[0xD6] = OpDecode::val("ldb", Direct, 1, Op::Ld, B);
    t[0xDC] = OpDecode::val("ldd", Direct, 2, Op::Ld, D);
    t[0x1DE] = OpDecode::val("lds", Direct, 2, Op::Ld, S);
    t[0xDE] = OpDecode::val("ldu", Direct, 2, Op::Ld, U);
    t[0x9E] = OpDecode::val("ldx", Direct, 2, Op::Ld, X);
    t[0x19E] = OpDecode::val("ldy", Direct, 2, Op::Ld, Y);

    t[0xA6] = OpDecode::val("lda", Indexed, 1, Op::Ld, A);
    t[0xE6] = OpDecode::val("ldb", Indexed, 1, Op::Ld, B);
    t[0xEC] = OpDecode::val("ldd", Indexed, 2, Op::Ld, D);
    t[0x1EE] = OpDecode::val("lds", Indexed, 2, Op::Ld, S);
    t[0xEE] = OpDecode::val("ldu", Indexed, 2, Op::Ld, U);
    t[0xAE] = OpDecode::val("ldx", Indexed, 2, Op::Ld, X);
    t[0x1AE] = OpDecode::val("ldy", Indexed, 2, Op::Ld, Y);

    t[0xB6] = OpDecode::val("lda", Extended, 1, Op::Ld, A);
    t[0xF6] = OpDecode::val("ldb", Extended, 1, Op::Ld, B);
    t[0xFC] = OpDecode::val("ldd", Extended, 2, Op::Ld, D);
    t[0x1FE] = OpDecode::val("lds", Extended, 2, Op::Ld, S);
    t[0xFE] = OpDecode::val("ldu", Extended, 2, Op::Ld, U);
    t[0xBE] = OpDecode::val("ldx", Extended, 2, Op::Ld, X);
    t[0x1BE] = OpDecode::val("ldy", Extended, 2, Op::Ld, Y);

    // stores
    t[0x97] = OpDecode::addr("sta", Direct, 1, Op::St, A);
    t[0xD7] = OpDecode::addr("stb", Direct, 1, Op::St, B);
    t[0xDD] = OpDecode::addr("std", Direct, 2, Op::St, D);
    t[0x1DF] = OpDecode::addr("sts", Direct, 2, Op::St, S);
    t[0xDF] = OpDecode::addr("stu", Direct, 2, Op::St, U);
    t[0x9F] = OpDecode::addr("stx", Direct, 2, Op::St, X);
    t[0x19F] = OpDecode::addr("sty", Direct, 2, Op::St, Y);

    t[0xB7] = OpDecode::addr("sta", Extended, 1, Op::St, A);
    t[0xF7] = OpDecode::addr("stb", Extended, 1, Op::St, B);
    t[0xFD] = OpDecode::addr("std", Extended, 2, Op::St, D);
    t[0x1FF] = OpDecode::addr("sts", Extended, 2, Op::St, S);
    t[0xFF] = OpDecode::addr("stu", Extended, 2, Op::St, U);
    t[0xBF] = OpDecode::addr("stx", Extended, 2, Op::St, X);
    t[0x1BF] = OpDecode::addr("sty", Extended, 2, Op::St, Y);

    t[0xA7] = OpDecode::addr("sta", Indexed, 1, Op::St, A);
    t[0xE7] = OpDecode::addr("stb", Indexed, 1, Op::St, B);
    t[0xED] = OpDecode::addr("std", Indexed, 2, Op::St, D);
    t[0x1EF] = OpDecode::addr("sts", Indexed, 2, Op::St, S);
    t[0xEF] = OpDecode::addr("stu", Indexed, 2, Op::St, U);
    t[0xAF] = OpDecode::addr("stx", Indexed, 2, Op::St, X);
    t[0x1AF] = OpDecode::addr("sty", Indexed, 2, Op::St, Y);

    // branches
    t[0x20] = OpDecode::bra("bra", 1, Cond::Always);
    t[0x21] = OpDecode::bra("brn", 1, Cond::Never);
    t[0x22] = OpDecode::bra("bhi", 1, Cond::Hi);
    t[0x23] = OpDecode::bra("bls", 1, Cond::Ls);
    t[0x24] = OpDecode::bra("bcc", 1, Cond::Cc);
    t[0x25] = OpDecode::bra("bcs", 1, Cond::Cs);
    t[0x26] = OpDecode::bra("bne", 1, Cond::Ne);
    t[0x27] = OpDecode::bra("beq", 1, Cond::Eq);
    t[0x28] = OpDecode::bra("bvc", 1, Cond::Vc);
    t[0x29] = OpDecode::bra("bvs", 1, Cond::Vs);
    t[0x2A] = OpDecode::bra("bpl", 1, Cond::Pl);
    t[0x2B] = OpDecode::bra("bmi", 1, Cond::Mi);
    t[0x2C] = OpDecode::bra("bge", 1, Cond::Ge);
    t[0x2D] = OpDecode::bra("blt", 1, Cond::Lt);
    t[0x2E] = OpDecode::bra("bgt", 1, Cond::Gt);
    t[0x2F] = OpDecode::bra("ble", 1, Cond::Le);
    t[0x8D] = OpDecode {
        name: "bsr",
        mode: Branch,
        width: 1,
        op: Op::Bsr,
        reg: Pc,
        payload: Payload::None,
    };

    t[0x16] = OpDecode::bra("lbra", 2, Cond::Always);
    t[0x121] = OpDecode::bra("lbrn", 2, Cond::Never);
    t[0x122] = OpDecode::bra("lbhi", 2, Cond::Hi);
    t[0x123] = OpDecode::bra("lbls", 2, Cond::Ls);
    t[0x124] = OpDecode::bra("lbcc", 2, Cond::Cc);
    t[0x125] = OpDecode::bra("lbcs", 2, Cond::Cs);
    t[0x126] = OpDecode::bra("lbne", 2, Cond::Ne);
    t[0x127] = OpDecode::bra("lbeq", 2, Cond::Eq);
    t[0x128] = OpDecode::bra("lbvc", 2, Cond::Vc);
    t[0x129] = OpDecode::bra("lbvs", 2, Cond::Vs);
    t[0x12A] = OpDecode::bra("lbpl", 2, Cond::Pl);
    t[0x12B] = OpDecode::bra("lbmi", 2, Cond::Mi);
    t[0x12C] = OpDecode::bra("lbge", 2, Cond::Ge);
    t[0x12D] = OpDecode::bra("lblt", 2, Cond::Lt);
    t[0x12E] = OpDecode::bra("lbgt", 2, Cond::Gt);
    t[0x12F] = OpDecode::bra("lble", 2, Cond::Le);
    t[0x17] = OpDecode {
        name: "lbsr",
        mode: Branch,
        width: 2,
        op: Op::Bsr,
        reg: Pc,
        payload: Payload::None,
    };

    t[0x0E] = OpDecode::addr("jmp", Direct, 1, Op::Jmp, Pc);
    t[0x6E] = OpDecode::addr("jmp", Indexed, 1, Op::Jmp, Pc);
    t[0x7E] = OpDecode::addr("jmp", Extended, 1, Op::Jmp, Pc);

    t[0x9D] = OpDecode::addr("jsr", Direct, 1, Op::Jsr, Pc);
    t[0xAD] = OpDecode::addr("jsr", Indexed, 1, Op::Jsr, Pc);
    t[0xBD] = OpDecode::addr("jsr", Extended, 1, Op::Jsr, Pc);

    t[0x39] = OpDecode::val("rts", Implied, 1, Op::Rts, Pc);

    t
}

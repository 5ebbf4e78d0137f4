//! Z80 decode table.
//!
//! 768 rows indexed as `op + 0x100 * bucket`: bucket 0 is the unprefixed
//! page, bucket 1 the 0xED page, bucket 2 the 0xCB page. Rows carry only
//! the operation tag; operand registers, condition codes, and bit indices
//! are re-derived from the opcode's sub-bitfields at execution time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Alu {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ZOp {
    Bad,
    Nop,
    Halt,

    JpNn,
    JpCc,
    CallNn,
    CallCc,
    Rst,
    Ret,
    RetCc,
    Djnz,
    Jr,
    JrCc,

    Di,
    Ei,
    OutNA,
    InAN,

    LdRR,
    LdRN,
    LdHlN,
    LdDdNn,
    LdSpHl,
    LdNnHl,
    LdHlNn,
    LdNnA,
    LdBcA,
    LdDeA,
    LdANn,
    LdABc,
    LdADe,

    PushQq,
    PopQq,
    ExSpHl,
    ExDeHl,
    ExAfAf,

    AddHlSs,
    IncSs,
    DecSs,
    IncR,
    DecR,
    AluR(Alu),
    AluN(Alu),

    Rlca,
    Rrca,
    Rla,
    Rra,
    Ccf,
    Scf,

    // 0xED page
    OutCR,
    Ldir,
    LdNnDd,
    LdDdNnInd,
    Im,
    Reti,

    // 0xCB page
    Bit,
    Res,
    Set,
}

#[derive(Clone, Copy)]
pub(crate) struct ZDecode {
    pub name: &'static str,
    pub op: ZOp,
}

impl ZDecode {
    const BAD: ZDecode = ZDecode {
        name: "???",
        op: ZOp::Bad,
    };

    const fn new(name: &'static str, op: ZOp) -> Self {
        ZDecode { name, op }
    }
}

pub(crate) const BUCKET_ED: usize = 0x100;
pub(crate) const BUCKET_CB: usize = 0x200;

pub(crate) static OPS: [ZDecode; 768] = build();

const fn build() -> [ZDecode; 768] {
    let mut t = [ZDecode::BAD; 768];

    // --- unprefixed page ---

    t[0x00] = ZDecode::new("nop", ZOp::Nop);
    t[0x76] = ZDecode::new("halt", ZOp::Halt);

    t[0xC3] = ZDecode::new("jp nn", ZOp::JpNn);
    t[0xCD] = ZDecode::new("call nn", ZOp::CallNn);
    t[0xC9] = ZDecode::new("ret", ZOp::Ret);
    let mut cc = 0;
    while cc < 8 {
        t[0xC2 | (cc << 3)] = ZDecode::new("jp cc, nn", ZOp::JpCc);
        t[0xC4 | (cc << 3)] = ZDecode::new("call cc, nn", ZOp::CallCc);
        t[0xC0 | (cc << 3)] = ZDecode::new("ret cc", ZOp::RetCc);
        t[0xC7 | (cc << 3)] = ZDecode::new("rst p", ZOp::Rst);
        cc += 1;
    }

    t[0x10] = ZDecode::new("djnz e", ZOp::Djnz);
    t[0x18] = ZDecode::new("jr e", ZOp::Jr);
    t[0x20] = ZDecode::new("jr nz, e", ZOp::JrCc);
    t[0x28] = ZDecode::new("jr z, e", ZOp::JrCc);
    t[0x30] = ZDecode::new("jr nc, e", ZOp::JrCc);
    t[0x38] = ZDecode::new("jr c, e", ZOp::JrCc);

    t[0xF3] = ZDecode::new("di", ZOp::Di);
    t[0xFB] = ZDecode::new("ei", ZOp::Ei);
    t[0xD3] = ZDecode::new("out (n), a", ZOp::OutNA);
    t[0xDB] = ZDecode::new("in a, (n)", ZOp::InAN);

    // LD r, r' quadrant; 0x76 stays HALT
    let mut op = 0x40;
    while op < 0x80 {
        if op != 0x76 {
            t[op] = ZDecode::new("ld r, r'", ZOp::LdRR);
        }
        op += 1;
    }

    // LD r, n; the (HL) hole is its own row
    let mut r = 0;
    while r < 8 {
        t[0x06 | (r << 3)] = if r == 6 {
            ZDecode::new("ld (hl), n", ZOp::LdHlN)
        } else {
            ZDecode::new("ld r, n", ZOp::LdRN)
        };
        r += 1;
    }

    let mut dd = 0;
    while dd < 4 {
        t[0x01 | (dd << 4)] = ZDecode::new("ld dd, nn", ZOp::LdDdNn);
        t[0xC5 | (dd << 4)] = ZDecode::new("push qq", ZOp::PushQq);
        t[0xC1 | (dd << 4)] = ZDecode::new("pop qq", ZOp::PopQq);
        t[0x09 | (dd << 4)] = ZDecode::new("add hl, ss", ZOp::AddHlSs);
        t[0x03 | (dd << 4)] = ZDecode::new("inc ss", ZOp::IncSs);
        t[0x0B | (dd << 4)] = ZDecode::new("dec ss", ZOp::DecSs);
        dd += 1;
    }

    t[0xF9] = ZDecode::new("ld sp, hl", ZOp::LdSpHl);
    t[0x22] = ZDecode::new("ld (nn), hl", ZOp::LdNnHl);
    t[0x2A] = ZDecode::new("ld hl, (nn)", ZOp::LdHlNn);
    t[0x32] = ZDecode::new("ld (nn), a", ZOp::LdNnA);
    t[0x02] = ZDecode::new("ld (bc), a", ZOp::LdBcA);
    t[0x12] = ZDecode::new("ld (de), a", ZOp::LdDeA);
    t[0x3A] = ZDecode::new("ld a, (nn)", ZOp::LdANn);
    t[0x0A] = ZDecode::new("ld a, (bc)", ZOp::LdABc);
    t[0x1A] = ZDecode::new("ld a, (de)", ZOp::LdADe);

    t[0xE3] = ZDecode::new("ex (sp), hl", ZOp::ExSpHl);
    t[0xEB] = ZDecode::new("ex de, hl", ZOp::ExDeHl);
    t[0x08] = ZDecode::new("ex af, af'", ZOp::ExAfAf);

    // INC r / DEC r; the (HL) forms are not populated
    let mut r = 0;
    while r < 8 {
        if r != 6 {
            t[0x04 | (r << 3)] = ZDecode::new("inc r", ZOp::IncR);
            t[0x05 | (r << 3)] = ZDecode::new("dec r", ZOp::DecR);
        }
        r += 1;
    }

    // 8-bit ALU over r/(HL) and over immediates
    const ALU_GROUPS: [(Alu, &str, &str); 8] = [
        (Alu::Add, "add a, r", "add a, n"),
        (Alu::Adc, "adc a, r", "adc a, n"),
        (Alu::Sub, "sub r", "sub n"),
        (Alu::Sbc, "sbc a, r", "sbc a, n"),
        (Alu::And, "and r", "and n"),
        (Alu::Xor, "xor r", "xor n"),
        (Alu::Or, "or r", "or n"),
        (Alu::Cp, "cp r", "cp n"),
    ];
    let mut g = 0;
    while g < 8 {
        let (alu, reg_name, imm_name) = ALU_GROUPS[g];
        let mut src = 0;
        while src < 8 {
            t[0x80 + (g << 3) + src] = ZDecode::new(reg_name, ZOp::AluR(alu));
            src += 1;
        }
        t[0xC6 | (g << 3)] = ZDecode::new(imm_name, ZOp::AluN(alu));
        g += 1;
    }

    t[0x07] = ZDecode::new("rlca", ZOp::Rlca);
    t[0x0F] = ZDecode::new("rrca", ZOp::Rrca);
    t[0x17] = ZDecode::new("rla", ZOp::Rla);
    t[0x1F] = ZDecode::new("rra", ZOp::Rra);
    t[0x3F] = ZDecode::new("ccf", ZOp::Ccf);
    t[0x37] = ZDecode::new("scf", ZOp::Scf);

    // --- 0xED page ---

    // OUT (C), r; the r=6 encoding does not officially exist
    let mut r = 0;
    while r < 8 {
        if r != 6 {
            t[BUCKET_ED + (0x41 | (r << 3))] = ZDecode::new("out (c), r", ZOp::OutCR);
        }
        r += 1;
    }

    t[BUCKET_ED + 0xB0] = ZDecode::new("ldir", ZOp::Ldir);

    let mut dd = 0;
    while dd < 4 {
        t[BUCKET_ED + (0x43 | (dd << 4))] = ZDecode::new("ld (nn), dd", ZOp::LdNnDd);
        t[BUCKET_ED + (0x4B | (dd << 4))] = ZDecode::new("ld dd, (nn)", ZOp::LdDdNnInd);
        dd += 1;
    }

    t[BUCKET_ED + 0x46] = ZDecode::new("im 0", ZOp::Im);
    t[BUCKET_ED + 0x56] = ZDecode::new("im 1", ZOp::Im);
    t[BUCKET_ED + 0x5E] = ZDecode::new("im 2", ZOp::Im);
    t[BUCKET_ED + 0x4D] = ZDecode::new("reti", ZOp::Reti);

    // --- 0xCB page ---

    let mut op = 0x40;
    while op < 0x80 {
        t[BUCKET_CB + op] = ZDecode::new("bit b, r", ZOp::Bit);
        op += 1;
    }
    while op < 0xC0 {
        t[BUCKET_CB + op] = ZDecode::new("res b, r", ZOp::Res);
        op += 1;
    }
    while op < 0x100 {
        t[BUCKET_CB + op] = ZDecode::new("set b, r", ZOp::Set);
        op += 1;
    }

    t
}

//! Motorola 6800 interpreter.
//!
//! Decode is a flat 256-row table (`table::OPS`); execution is a single
//! dispatch over the operation tag with a shared memory-writeback tail for
//! the unary/shift class.

mod table;

use bitflags::bitflags;

use crate::core::{Bus, Endian};
use crate::cpu::flags;
use crate::cpu::{Cpu, Step};
use table::{AddrMode, Op, OpDecode, Payload, OPS};

const RESET_VECTOR: u16 = 0xFFFE;

bitflags! {
    /// Condition-code register bits. Bits 6-7 are unimplemented on the
    /// 6800 and read back as 1 through TPA.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CcFlag: u8 {
        const C = 0x01;
        const V = 0x02;
        const Z = 0x04;
        const N = 0x08;
        const I = 0x10;
        const H = 0x20;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Exceptions: u8 {
        const RESET = 0x01;
    }
}

/// Register identifiers used by the decode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
    A,
    B,
    Ix,
    Sp,
    Pc,
    Cc,
}

pub struct Cpu6800 {
    pub a: u8,
    pub b: u8,
    pub ix: u16,
    pub sp: u16,
    pub pc: u16,
    pub cc: u8,

    exceptions: Exceptions,
}

impl Cpu6800 {
    pub fn new() -> Self {
        let mut cpu = Self {
            a: 0,
            b: 0,
            ix: 0,
            sp: 0,
            pc: 0,
            cc: 0,
            exceptions: Exceptions::RESET,
        };
        cpu.reset();
        cpu
    }

    fn get_reg(&self, r: Reg) -> u16 {
        match r {
            Reg::A => self.a as u16,
            Reg::B => self.b as u16,
            Reg::Ix => self.ix,
            Reg::Sp => self.sp,
            Reg::Pc => self.pc,
            Reg::Cc => self.cc as u16,
        }
    }

    fn put_reg(&mut self, r: Reg, val: u16) {
        match r {
            Reg::A => self.a = val as u8,
            Reg::B => self.b = val as u8,
            Reg::Ix => self.ix = val,
            Reg::Sp => self.sp = val,
            Reg::Pc => self.pc = val,
            Reg::Cc => self.cc = val as u8,
        }
    }

    fn flag(&self, f: CcFlag) -> bool {
        self.cc & f.bits() != 0
    }

    fn set_flag(&mut self, f: CcFlag, set: bool) {
        if set {
            self.cc |= f.bits();
        } else {
            self.cc &= !f.bits();
        }
    }

    fn set_nz8(&mut self, result: u32) {
        self.set_flag(CcFlag::N, flags::negative8(result));
        self.set_flag(CcFlag::Z, flags::zero8(result));
    }

    fn set_nz16(&mut self, result: u32) {
        self.set_flag(CcFlag::N, flags::negative16(result));
        self.set_flag(CcFlag::Z, flags::zero16(result));
    }

    fn set_nzvc8(&mut self, a: u32, b: u32, result: u32) {
        self.set_nz8(result);
        self.set_flag(CcFlag::V, flags::overflow8(a, b, result));
        self.set_flag(CcFlag::C, flags::carry8(result));
    }

    // stack: SP points below top-of-stack; push stores then decrements
    fn push8<B: Bus + ?Sized>(&mut self, bus: &mut B, val: u8) {
        bus.mem_write8(self.sp, val);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn push16<B: Bus + ?Sized>(&mut self, bus: &mut B, val: u16) {
        self.push8(bus, val as u8);
        self.push8(bus, (val >> 8) as u8);
    }

    fn pull8<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.mem_read8(self.sp)
    }

    fn pull16<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let hi = self.pull8(bus) as u16;
        let lo = self.pull8(bus) as u16;
        (hi << 8) | lo
    }

    /// Evaluate the addressing mode: an immediate value, a dereferenced
    /// memory operand, an effective address (`calc_addr` rows), or a
    /// sign-extended branch displacement.
    fn fetch_operand<B: Bus + ?Sized>(&mut self, op: &OpDecode, bus: &mut B) -> i32 {
        match op.mode {
            AddrMode::Implied => 0,
            AddrMode::Immediate => {
                if op.width == 1 {
                    let val = bus.mem_read8(self.pc) as i32;
                    self.pc = self.pc.wrapping_add(1);
                    val
                } else {
                    let val = bus.mem_read16(self.pc, Endian::Big) as i32;
                    self.pc = self.pc.wrapping_add(2);
                    val
                }
            }
            AddrMode::Direct => {
                let addr = bus.mem_read8(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.operand_at(op, addr, bus)
            }
            AddrMode::Extended => {
                let addr = bus.mem_read16(self.pc, Endian::Big);
                self.pc = self.pc.wrapping_add(2);
                self.operand_at(op, addr, bus)
            }
            AddrMode::Indexed => {
                let offset = bus.mem_read8(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let addr = self.ix.wrapping_add(offset);
                self.operand_at(op, addr, bus)
            }
            AddrMode::Branch => {
                let disp = bus.mem_read8(self.pc) as i8 as i32;
                self.pc = self.pc.wrapping_add(1);
                disp
            }
        }
    }

    fn operand_at<B: Bus + ?Sized>(&mut self, op: &OpDecode, addr: u16, bus: &mut B) -> i32 {
        if op.calc_addr() {
            addr as i32
        } else if op.width == 1 {
            bus.mem_read8(addr) as i32
        } else {
            bus.mem_read16(addr, Endian::Big) as i32
        }
    }

    fn unary_read<B: Bus + ?Sized>(&mut self, op: &OpDecode, arg: i32, bus: &mut B) -> u8 {
        if op.mode == AddrMode::Implied {
            self.get_reg(op.reg) as u8
        } else {
            bus.mem_read8(arg as u16)
        }
    }

    fn unary_write<B: Bus + ?Sized>(&mut self, op: &OpDecode, arg: i32, val: u8, bus: &mut B) {
        if op.mode == AddrMode::Implied {
            self.put_reg(op.reg, val as u16);
        } else {
            bus.mem_write8(arg as u16, val);
        }
    }

    /// Execute one instruction.
    pub fn step<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Step {
        if self.exceptions.contains(Exceptions::RESET) {
            self.pc = bus.mem_read16(RESET_VECTOR, Endian::Big);
            self.exceptions = Exceptions::empty();
        }

        let instr_pc = self.pc;
        let opcode = bus.mem_read8(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let op = &OPS[opcode as usize];
        if op.op == Op::Bad {
            eprintln!("unhandled opcode {opcode:#04x} at {instr_pc:#06x}");
            return Step::Fault;
        }

        let arg = self.fetch_operand(op, bus);
        self.execute(op, arg, instr_pc, bus)
    }

    fn execute<B: Bus + ?Sized>(
        &mut self,
        op: &OpDecode,
        arg: i32,
        instr_pc: u16,
        bus: &mut B,
    ) -> Step {
        match op.op {
            Op::Nop => {}

            Op::Add | Op::Adc => {
                let a = self.get_reg(op.reg) as u32;
                let b = arg as u32;
                let mut result = a.wrapping_add(b);
                if op.op == Op::Adc && self.flag(CcFlag::C) {
                    result = result.wrapping_add(1);
                }
                self.set_flag(CcFlag::H, flags::half_carry(a, b, result));
                self.set_nzvc8(a, b, result);
                self.put_reg(op.reg, result as u16);
            }
            Op::AddAccum => {
                // aba: add accumulator B to A
                let a = self.a as u32;
                let b = self.b as u32;
                let result = a.wrapping_add(b);
                self.set_flag(CcFlag::H, flags::half_carry(a, b, result));
                self.set_nzvc8(a, b, result);
                self.a = result as u8;
            }
            Op::Sub | Op::Sbc => {
                let a = self.get_reg(op.reg) as u32;
                let b = (arg as u32).wrapping_neg();
                let mut result = a.wrapping_add(b);
                if op.op == Op::Sbc && self.flag(CcFlag::C) {
                    result = result.wrapping_sub(1);
                }
                self.set_nzvc8(a, b, result);
                self.put_reg(op.reg, result as u16);
            }
            Op::SubAccum => {
                // sba: subtract accumulator B from A
                let a = self.a as u32;
                let b = (self.b as u32).wrapping_neg();
                let result = a.wrapping_add(b);
                self.set_nzvc8(a, b, result);
                self.a = result as u8;
            }
            Op::Cmp => {
                let a = self.get_reg(op.reg) as u32;
                let b = arg as u32;
                let result = a.wrapping_sub(b);
                if op.width == 1 {
                    self.set_nzvc8(a, b, result);
                } else {
                    // cpx: no carry update
                    self.set_nz16(result);
                    self.set_flag(CcFlag::V, flags::overflow16(a, b, result));
                }
            }
            Op::CmpAccum => {
                // cba: compare accumulator A with B
                let a = self.a as u32;
                let b = self.b as u32;
                let result = a.wrapping_sub(b);
                self.set_nzvc8(a, b, result);
            }
            Op::And | Op::Bit => {
                let result = self.get_reg(op.reg) as u32 & arg as u32;
                self.set_nz8(result);
                self.set_flag(CcFlag::V, false);
                if op.op == Op::And {
                    self.put_reg(op.reg, result as u16);
                }
            }
            Op::Or => {
                let result = self.get_reg(op.reg) as u32 | arg as u32;
                self.set_nz8(result);
                self.set_flag(CcFlag::V, false);
                self.put_reg(op.reg, result as u16);
            }
            Op::Eor => {
                let result = self.get_reg(op.reg) as u32 ^ arg as u32;
                self.set_nz8(result);
                self.set_flag(CcFlag::V, false);
                self.put_reg(op.reg, result as u16);
            }

            Op::Asl => {
                let val = self.unary_read(op, arg, bus);
                self.set_flag(CcFlag::C, val & 0x80 != 0);
                let result = val << 1;
                self.set_nz8(result as u32);
                self.set_v_from_nc();
                self.unary_write(op, arg, result, bus);
            }
            Op::Asr => {
                let val = self.unary_read(op, arg, bus);
                self.set_flag(CcFlag::C, val & 0x01 != 0);
                let result = (val & 0x80) | (val >> 1);
                self.set_nz8(result as u32);
                self.set_v_from_nc();
                self.unary_write(op, arg, result, bus);
            }
            Op::Lsr => {
                let val = self.unary_read(op, arg, bus);
                self.set_flag(CcFlag::C, val & 0x01 != 0);
                let result = val >> 1;
                self.set_nz8(result as u32);
                self.set_v_from_nc();
                self.unary_write(op, arg, result, bus);
            }
            Op::Rol => {
                let val = self.unary_read(op, arg, bus);
                let old_c = self.flag(CcFlag::C);
                self.set_flag(CcFlag::C, val & 0x80 != 0);
                let result = (val << 1) | old_c as u8;
                self.set_nz8(result as u32);
                self.set_v_from_nc();
                self.unary_write(op, arg, result, bus);
            }
            Op::Ror => {
                let val = self.unary_read(op, arg, bus);
                let old_c = self.flag(CcFlag::C);
                self.set_flag(CcFlag::C, val & 0x01 != 0);
                let result = ((old_c as u8) << 7) | (val >> 1);
                self.set_nz8(result as u32);
                self.set_v_from_nc();
                self.unary_write(op, arg, result, bus);
            }

            Op::Dec => {
                if op.width == 1 {
                    let result = self.unary_read(op, arg, bus).wrapping_sub(1);
                    self.set_flag(CcFlag::V, result == 0x7F);
                    self.set_nz8(result as u32);
                    self.unary_write(op, arg, result, bus);
                } else {
                    // des/dex: only dex updates Z
                    let result = self.get_reg(op.reg).wrapping_sub(1);
                    if op.reg == Reg::Ix {
                        self.set_flag(CcFlag::Z, result == 0);
                    }
                    self.put_reg(op.reg, result);
                }
            }
            Op::Inc => {
                if op.width == 1 {
                    let result = self.unary_read(op, arg, bus).wrapping_add(1);
                    self.set_flag(CcFlag::V, result == 0x80);
                    self.set_nz8(result as u32);
                    self.unary_write(op, arg, result, bus);
                } else {
                    // ins/inx: only inx updates Z
                    let result = self.get_reg(op.reg).wrapping_add(1);
                    if op.reg == Reg::Ix {
                        self.set_flag(CcFlag::Z, result == 0);
                    }
                    self.put_reg(op.reg, result);
                }
            }
            Op::Clr => {
                self.set_flag(CcFlag::N, false);
                self.set_flag(CcFlag::V, false);
                self.set_flag(CcFlag::C, false);
                self.set_flag(CcFlag::Z, true);
                self.unary_write(op, arg, 0, bus);
            }
            Op::Com => {
                let result = !self.unary_read(op, arg, bus);
                self.set_nz8(result as u32);
                self.set_flag(CcFlag::V, false);
                self.set_flag(CcFlag::C, true);
                self.unary_write(op, arg, result, bus);
            }
            Op::Neg => {
                let val = self.unary_read(op, arg, bus);
                self.set_flag(CcFlag::V, val == 0x80);
                self.set_flag(CcFlag::C, val != 0x00);
                let result = val.wrapping_neg();
                self.set_nz8(result as u32);
                self.unary_write(op, arg, result, bus);
            }
            Op::Tst => {
                let val = self.unary_read(op, arg, bus);
                self.set_flag(CcFlag::V, false);
                self.set_flag(CcFlag::C, false);
                self.set_nz8(val as u32);
            }

            Op::Tfr => {
                if op.width == 1 {
                    // tab/tba
                    let val = if op.reg == Reg::A { self.b } else { self.a };
                    self.put_reg(op.reg, val as u16);
                    self.set_nz8(val as u32);
                    self.set_flag(CcFlag::V, false);
                } else if op.reg == Reg::Sp {
                    // txs: loads SP with IX - 1
                    self.sp = self.ix.wrapping_sub(1);
                } else {
                    // tsx: loads IX with SP + 1
                    self.ix = self.sp.wrapping_add(1);
                }
            }
            Op::TfrCc => {
                if op.reg == Reg::A {
                    // tpa: unimplemented CC bits read as 1
                    self.a = self.cc | 0b1100_0000;
                } else {
                    // tap
                    self.cc = self.a & 0b0011_1111;
                }
            }

            Op::Push => {
                let val = self.get_reg(op.reg) as u8;
                self.push8(bus, val);
            }
            Op::Pull => {
                let val = self.pull8(bus);
                self.put_reg(op.reg, val as u16);
            }

            Op::Ld => {
                if op.width == 1 {
                    self.set_nz8(arg as u32);
                } else {
                    self.set_nz16(arg as u32);
                }
                self.set_flag(CcFlag::V, false);
                self.put_reg(op.reg, arg as u16);
            }
            Op::St => {
                if op.width == 1 {
                    let val = self.get_reg(op.reg) as u8;
                    bus.mem_write8(arg as u16, val);
                    self.set_nz8(val as u32);
                } else {
                    let val = self.get_reg(op.reg);
                    bus.mem_write16(arg as u16, val, Endian::Big);
                    self.set_nz16(val as u32);
                }
                self.set_flag(CcFlag::V, false);
            }

            Op::Bra => {
                let cond = match op.payload {
                    Payload::Cond(c) => c,
                    _ => unreachable!("branch row without condition"),
                };
                let taken = cond.test(
                    self.flag(CcFlag::C),
                    self.flag(CcFlag::N),
                    self.flag(CcFlag::Z),
                    self.flag(CcFlag::V),
                );
                if taken {
                    self.pc = (self.pc as i32).wrapping_add(arg) as u16;
                    if arg == -2 {
                        eprintln!("infinite loop detected, aborting cpu");
                        return Step::SelfLoop;
                    }
                }
            }
            Op::Bsr => {
                self.push16(bus, self.pc);
                self.pc = (self.pc as i32).wrapping_add(arg) as u16;
            }
            Op::Jmp => {
                self.pc = arg as u16;
                if arg as u16 == instr_pc {
                    eprintln!("infinite loop detected, aborting cpu");
                    return Step::SelfLoop;
                }
            }
            Op::Jsr => {
                self.push16(bus, self.pc);
                self.pc = arg as u16;
            }
            Op::Rts => {
                self.pc = self.pull16(bus);
            }

            Op::SetCc => {
                if let Payload::Flag(mask) = op.payload {
                    self.cc |= mask;
                }
            }
            Op::ClearCc => {
                if let Payload::Flag(mask) = op.payload {
                    self.cc &= !mask;
                }
            }

            Op::Bad => unreachable!("bad opcode filtered before execute"),
        }

        Step::Normal
    }

    // V = N ^ C after shifts and rotates
    fn set_v_from_nc(&mut self) {
        let v = self.flag(CcFlag::N) ^ self.flag(CcFlag::C);
        self.set_flag(CcFlag::V, v);
    }
}

impl Default for Cpu6800 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu for Cpu6800 {
    fn reset(&mut self) {
        self.a = 0;
        self.b = 0;
        self.ix = 0;
        self.sp = 0;
        self.cc = 0;
        self.pc = 0;
        self.exceptions = Exceptions::RESET;
    }

    fn run(&mut self, bus: &mut dyn Bus) -> i32 {
        loop {
            match self.step(bus) {
                Step::Normal => {}
                Step::SelfLoop => return 0,
                Step::Fault => return 1,
            }
            if bus.shutdown_requested() {
                return 0;
            }
        }
    }

    fn dump(&self) -> String {
        format!(
            "A 0x{:02x} B 0x{:02x} X 0x{:04x} S 0x{:04x} CC 0x{:02x} ({}{}{}{}{}) PC 0x{:04x}",
            self.a,
            self.b,
            self.ix,
            self.sp,
            self.cc,
            if self.flag(CcFlag::H) { 'h' } else { ' ' },
            if self.flag(CcFlag::N) { 'n' } else { ' ' },
            if self.flag(CcFlag::Z) { 'z' } else { ' ' },
            if self.flag(CcFlag::V) { 'v' } else { ' ' },
            if self.flag(CcFlag::C) { 'c' } else { ' ' },
            self.pc,
        )
    }
}

use filament_core::cpu::m6800::{CcFlag, Cpu6800};

mod common;
use common::TestBus;

fn step(cpu: &mut Cpu6800, bus: &mut TestBus, n: usize) {
    for _ in 0..n {
        cpu.step(bus);
    }
}

fn flag(cpu: &Cpu6800, f: CcFlag) -> bool {
    cpu.cc & f.bits() != 0
}

// =============================================================================
// register unaries
// =============================================================================

#[test]
fn clra_clears_and_sets_z_only() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0xAA;
    cpu.cc = (CcFlag::N | CcFlag::V | CcFlag::C).bits();
    bus.load(0, &[0x4F]); // clra
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::V));
    assert!(!flag(&cpu, CcFlag::C));
}

#[test]
fn coma_complements_and_sets_carry() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x0F;
    bus.load(0, &[0x43]); // coma
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0xF0);
    assert!(flag(&cpu, CcFlag::C));
    assert!(!flag(&cpu, CcFlag::V));
    assert!(flag(&cpu, CcFlag::N));
}

#[test]
fn nega_edge_cases() {
    // negating 0x80 overflows
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x80;
    bus.load(0, &[0x40]); // nega
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x80);
    assert!(flag(&cpu, CcFlag::V));
    assert!(flag(&cpu, CcFlag::C));

    // negating zero clears carry
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x40]);
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(!flag(&cpu, CcFlag::C));
    assert!(flag(&cpu, CcFlag::Z));
}

#[test]
fn inca_overflow_at_0x80() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x7F;
    bus.load(0, &[0x4C]); // inca
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x80);
    assert!(flag(&cpu, CcFlag::V));
}

#[test]
fn deca_overflow_at_0x7f() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x80;
    bus.load(0, &[0x4A]); // deca
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x7F);
    assert!(flag(&cpu, CcFlag::V));
}

#[test]
fn tsta_clears_v_and_c() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x80;
    cpu.cc = (CcFlag::V | CcFlag::C).bits();
    bus.load(0, &[0x4D]); // tsta
    step(&mut cpu, &mut bus, 1);
    assert!(flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::V));
    assert!(!flag(&cpu, CcFlag::C));
}

// =============================================================================
// shifts: asr and lsr are distinct operations
// =============================================================================

#[test]
fn asra_keeps_the_sign_bit() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x81;
    bus.load(0, &[0x47]); // asra
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0xC0);
    assert!(flag(&cpu, CcFlag::C));
    assert!(flag(&cpu, CcFlag::N));
}

#[test]
fn lsra_shifts_zero_into_the_top() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x81;
    bus.load(0, &[0x44]); // lsra
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x40);
    assert!(flag(&cpu, CcFlag::C));
    assert!(!flag(&cpu, CcFlag::N));
}

#[test]
fn asla_shifts_out_the_top_bit() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0xC0;
    bus.load(0, &[0x48]); // asla
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x80);
    assert!(flag(&cpu, CcFlag::C));
    assert!(flag(&cpu, CcFlag::N));
    // V = N ^ C = 0
    assert!(!flag(&cpu, CcFlag::V));
}

#[test]
fn rola_and_rora_rotate_through_carry() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x80;
    cpu.cc = CcFlag::C.bits();
    bus.load(0, &[0x49]); // rola
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x01);
    assert!(flag(&cpu, CcFlag::C));

    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x01;
    cpu.cc = CcFlag::C.bits();
    bus.load(0, &[0x46]); // rora
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x80);
    assert!(flag(&cpu, CcFlag::C));
}

#[test]
fn shift_on_memory_operand_writes_back() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    bus.load(0x2000, &[0x81]);
    bus.load(0, &[0x74, 0x20, 0x00]); // lsr $2000
    step(&mut cpu, &mut bus, 1);
    assert_eq!(bus.memory[0x2000], 0x40);
    assert!(flag(&cpu, CcFlag::C));
}

#[test]
fn clr_extended_writes_zero_to_memory() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    bus.load(0x2000, &[0xFF]);
    bus.load(0, &[0x7F, 0x20, 0x00]); // clr $2000
    step(&mut cpu, &mut bus, 1);
    assert_eq!(bus.memory[0x2000], 0x00);
    assert!(flag(&cpu, CcFlag::Z));
}

// =============================================================================
// 16-bit inc/dec family
// =============================================================================

#[test]
fn inx_dex_update_only_z() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.ix = 0xFFFF;
    bus.load(0, &[0x08, 0x09]); // inx ; dex
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.ix, 0x0000);
    assert!(flag(&cpu, CcFlag::Z));
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.ix, 0xFFFF);
    assert!(!flag(&cpu, CcFlag::Z));
}

#[test]
fn ins_des_touch_no_flags() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.sp = 0xFFFF;
    bus.load(0, &[0x31, 0x34]); // ins ; des
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.sp, 0x0000);
    assert!(!flag(&cpu, CcFlag::Z));
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.sp, 0xFFFF);
}

// =============================================================================
// stack pointer transfers carry the architectural bias
// =============================================================================

#[test]
fn tsx_loads_ix_with_sp_plus_one() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.sp = 0x01FF;
    bus.load(0, &[0x30]); // tsx
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.ix, 0x0200);
}

#[test]
fn txs_loads_sp_with_ix_minus_one() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x0200;
    bus.load(0, &[0x35]); // txs
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.sp, 0x01FF);
}

// =============================================================================
// push/pull and load/store
// =============================================================================

#[test]
fn psha_pula_round_trip() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.sp = 0x01FF;
    cpu.a = 0x42;
    bus.load(0, &[0x36, 0x4F, 0x32]); // psha ; clra ; pula
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.sp, 0x01FE);
    assert_eq!(bus.memory[0x01FF], 0x42);
    step(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.sp, 0x01FF);
}

#[test]
fn lda_and_sta_modes() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    bus.load(0x0040, &[0x99]);
    bus.load(0, &[0x96, 0x40, 0xB7, 0x20, 0x00]); // lda $40 ; sta $2000
    step(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.a, 0x99);
    assert_eq!(bus.memory[0x2000], 0x99);
    assert!(flag(&cpu, CcFlag::N));
}

#[test]
fn ldx_and_stx_are_big_endian() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0xCE, 0x12, 0x34, 0xFF, 0x20, 0x00]); // ldx #$1234 ; stx $2000
    step(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.ix, 0x1234);
    assert_eq!(bus.memory[0x2000], 0x12);
    assert_eq!(bus.memory[0x2001], 0x34);
}

#[test]
fn lds_sets_nz_and_clears_v() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.cc = CcFlag::V.bits();
    bus.load(0, &[0x8E, 0x80, 0x00]); // lds #$8000
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.sp, 0x8000);
    assert!(flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::V));
}

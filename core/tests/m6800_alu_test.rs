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
// ADDA immediate (0x8B)
// =============================================================================

#[test]
fn adda_imm_basic() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x10;
    bus.load(0, &[0x8B, 0x20]); // adda #$20
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x30);
    assert_eq!(cpu.pc, 2);
    assert!(!flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::C));
    assert!(!flag(&cpu, CcFlag::V));
}

#[test]
fn adda_imm_zero_result_sets_z() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x8B, 0x00]); // adda #$00
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
}

#[test]
fn adda_imm_carry_wraps() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0xFF;
    bus.load(0, &[0x8B, 0x01]); // adda #$01
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(flag(&cpu, CcFlag::C));
    assert!(flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::V));
}

#[test]
fn adda_imm_signed_overflow() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x7F;
    bus.load(0, &[0x8B, 0x01]); // adda #$01 -> 0x80
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x80);
    assert!(flag(&cpu, CcFlag::V));
    assert!(flag(&cpu, CcFlag::N));
}

// scenario: A=0x0F, ADDA #$01 sets the half-carry and nothing else
#[test]
fn adda_imm_half_carry() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x0F;
    bus.boot_at(0x0100);
    bus.load(0x0100, &[0x8B, 0x01]); // adda #$01
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x10);
    assert!(flag(&cpu, CcFlag::H));
    assert!(!flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::V));
    assert!(!flag(&cpu, CcFlag::C));
}

// =============================================================================
// ADC / SUB / SBC / CMP
// =============================================================================

#[test]
fn adca_imm_adds_carry_in() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x10;
    cpu.cc = CcFlag::C.bits();
    bus.load(0, &[0x89, 0x20]); // adca #$20
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x31);
}

#[test]
fn suba_imm_basic() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x30;
    bus.load(0, &[0x80, 0x10]); // suba #$10
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x20);
    assert!(!flag(&cpu, CcFlag::C));
    assert!(!flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::N));
}

#[test]
fn suba_imm_borrow_sets_carry() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x00;
    bus.load(0, &[0x80, 0x01]); // suba #$01
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0xFF);
    assert!(flag(&cpu, CcFlag::C));
    assert!(flag(&cpu, CcFlag::N));
}

#[test]
fn suba_imm_to_zero_sets_z() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x44;
    bus.load(0, &[0x80, 0x44]);
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::C));
}

#[test]
fn sbca_imm_subtracts_borrow_in() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x30;
    cpu.cc = CcFlag::C.bits();
    bus.load(0, &[0x82, 0x10]); // sbca #$10
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x1F);
}

#[test]
fn cmpa_imm_sets_flags_without_store() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x10;
    bus.load(0, &[0x81, 0x20]); // cmpa #$20
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x10);
    assert!(flag(&cpu, CcFlag::C));
    assert!(flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::V));
}

#[test]
fn cpx_imm_compares_16_bits_without_carry() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.ix = 0x1234;
    cpu.cc = CcFlag::C.bits(); // cpx leaves C alone
    bus.load(0, &[0x8C, 0x12, 0x34]); // cpx #$1234
    step(&mut cpu, &mut bus, 1);
    assert!(flag(&cpu, CcFlag::Z));
    assert!(flag(&cpu, CcFlag::C));
}

// =============================================================================
// accumulator-to-accumulator forms
// =============================================================================

#[test]
fn aba_adds_b_into_a() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x21;
    cpu.b = 0x21;
    bus.load(0, &[0x1B]); // aba
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.b, 0x21);
}

#[test]
fn sba_subtracts_b_from_a() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x42;
    cpu.b = 0x21;
    bus.load(0, &[0x10]); // sba
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x21);
}

#[test]
fn cba_compares_without_store() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x42;
    cpu.b = 0x42;
    bus.load(0, &[0x11]); // cba
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x42);
    assert!(flag(&cpu, CcFlag::Z));
}

// =============================================================================
// logicals clear V and leave C alone
// =============================================================================

#[test]
fn anda_imm() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0xF0;
    cpu.cc = (CcFlag::V | CcFlag::C).bits();
    bus.load(0, &[0x84, 0x0F]); // anda #$0F
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
    assert!(!flag(&cpu, CcFlag::V));
    assert!(flag(&cpu, CcFlag::C));
}

#[test]
fn bita_sets_flags_without_store() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x80;
    bus.load(0, &[0x85, 0x80]); // bita #$80
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x80);
    assert!(flag(&cpu, CcFlag::N));
    assert!(!flag(&cpu, CcFlag::Z));
}

#[test]
fn oraa_and_eora() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x0F;
    bus.load(0, &[0x8A, 0xF0, 0x88, 0xFF]); // ora #$F0 ; eora #$FF
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0xFF);
    assert!(flag(&cpu, CcFlag::N));
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
}

// =============================================================================
// addressing modes reach memory
// =============================================================================

#[test]
fn adda_direct_reads_zero_page() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x01;
    bus.load(0x0040, &[0x41]);
    bus.boot_at(0x0100);
    bus.load(0x0100, &[0x9B, 0x40]); // adda $40
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x42);
}

#[test]
fn adda_extended_reads_absolute() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x01;
    bus.load(0x1234, &[0x41]);
    bus.load(0, &[0xBB, 0x12, 0x34]); // adda $1234
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x42);
}

#[test]
fn adda_indexed_adds_unsigned_offset() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x01;
    cpu.ix = 0x2000;
    bus.load(0x20FF, &[0x41]);
    bus.load(0, &[0xAB, 0xFF]); // adda $FF,x -- offset is unsigned
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x42);
}

// =============================================================================
// flag set/clear and CC transfers
// =============================================================================

#[test]
fn sec_clc_sev_clv_sei_cli() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x0D, 0x0B, 0x0F, 0x0C, 0x0A, 0x0E]);
    step(&mut cpu, &mut bus, 3); // sec sev sei
    assert!(flag(&cpu, CcFlag::C));
    assert!(flag(&cpu, CcFlag::V));
    assert!(flag(&cpu, CcFlag::I));
    step(&mut cpu, &mut bus, 3); // clc clv cli
    assert!(!flag(&cpu, CcFlag::C));
    assert!(!flag(&cpu, CcFlag::V));
    assert!(!flag(&cpu, CcFlag::I));
}

#[test]
fn tpa_reads_cc_with_high_bits_set() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.cc = (CcFlag::C | CcFlag::Z).bits();
    bus.load(0, &[0x07]); // tpa
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0b1100_0000 | (CcFlag::C | CcFlag::Z).bits());
}

#[test]
fn tap_writes_cc_masking_high_bits() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0xFF;
    bus.load(0, &[0x06]); // tap
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.cc, 0x3F);
}

#[test]
fn tab_and_tba_copy_and_set_nz() {
    let mut cpu = Cpu6800::new();
    let mut bus = TestBus::new();
    cpu.a = 0x80;
    bus.load(0, &[0x16, 0x17]); // tab ; tba
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.b, 0x80);
    assert!(flag(&cpu, CcFlag::N));
    cpu.b = 0x00;
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a, 0x00);
    assert!(flag(&cpu, CcFlag::Z));
}

use super::Machine;
use crate::cpu::{Bus, ExecState, Flag, InterruptSource, Reg16, Reg8};
use crate::error::CpuError;
use crate::interrupt_regs::{InterruptFlags, InterruptRegisters};

struct TestBus {
    memory: Vec<u8>,
    writes: Vec<(u16, u8)>,
}

impl TestBus {
    fn with_program(addr: u16, program: &[u8]) -> Self {
        let mut memory = vec![0; 0x10000];
        let start = addr as usize;
        memory[start..start + program.len()].copy_from_slice(program);
        Self {
            memory,
            writes: Vec::new(),
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.writes.push((addr, value));
        self.memory[addr as usize] = value;
    }
}

fn machine(program: &[u8]) -> Machine<TestBus, InterruptRegisters> {
    Machine::new(
        TestBus::with_program(0x0100, program),
        InterruptRegisters::new(),
    )
}

#[test]
fn new_machine_starts_at_cartridge_entry() {
    let gb = machine(&[]);
    assert_eq!(gb.pc(), 0x0100);
    assert_eq!(gb.sp(), 0xFFFE);
    assert_eq!(gb.read8(Reg8::A), 0x01);
    assert_eq!(gb.read16(Reg16::AF), 0x01B0);
    assert!(gb.get_flag(Flag::Z));
    assert!(!gb.ime());
    assert_eq!(gb.state(), ExecState::Fetching);
    assert_eq!(gb.total_cycles(), 0);
}

#[test]
fn step_accumulates_cycles() {
    // LD BC,0x1234 / INC BC / NOP
    let mut gb = machine(&[0x01, 0x34, 0x12, 0x03, 0x00]);

    assert_eq!(gb.step().unwrap(), 12);
    assert_eq!(gb.step().unwrap(), 8);
    assert_eq!(gb.step().unwrap(), 4);
    assert_eq!(gb.total_cycles(), 24);
    assert_eq!(gb.regs().bc(), 0x1235);
    assert_eq!(gb.pc(), 0x0105);
}

#[test]
fn step_cycles_overshoots_by_less_than_one_instruction() {
    // JP 0x0100 forever (16 cycles each).
    let mut gb = machine(&[0xC3, 0x00, 0x01]);

    let elapsed = gb.step_cycles(70).unwrap();
    assert_eq!(elapsed, 80);
    assert_eq!(gb.total_cycles(), 80);
    assert_eq!(gb.pc(), 0x0100);
}

#[test]
fn step_cycles_stops_on_lock() {
    // NOP / NOP / illegal
    let mut gb = machine(&[0x00, 0x00, 0xE4]);

    let err = gb.step_cycles(1_000).unwrap_err();
    assert_eq!(
        err,
        CpuError::UnimplementedOpcode {
            opcode: 0xE4,
            pc: 0x0102
        }
    );
    assert_eq!(gb.state(), ExecState::Locked);
    assert!(matches!(gb.step(), Err(CpuError::Locked { .. })));

    gb.reset();
    assert_eq!(gb.state(), ExecState::Fetching);
    assert_eq!(gb.total_cycles(), 0);
}

#[test]
fn interrupt_entry_writes_return_address_high_byte_first() {
    // EI / NOP / NOP
    let mut gb = machine(&[0xFB, 0x00, 0x00]);
    gb.interrupts_mut().enable(InterruptFlags::TIMER);
    gb.interrupts_mut().request(InterruptSource::Timer);

    gb.step().unwrap();
    gb.step().unwrap();
    gb.bus_mut().writes.clear();

    assert_eq!(gb.step().unwrap(), 20);
    assert_eq!(gb.pc(), 0x0050);
    assert_eq!(gb.bus().writes, vec![(0xFFFD, 0x01), (0xFFFC, 0x02)]);
    assert!(gb.interrupts().requested().is_empty());
}

#[test]
fn halted_machine_idles_until_interrupt() {
    // HALT / INC A
    let mut gb = machine(&[0x76, 0x3C]);
    gb.interrupts_mut().enable(InterruptFlags::JOYPAD);

    gb.step().unwrap();
    assert_eq!(gb.step_cycles(40).unwrap(), 40);
    assert_eq!(gb.state(), ExecState::Halted);
    assert_eq!(gb.pc(), 0x0101);

    gb.interrupts_mut().request(InterruptSource::Joypad);
    gb.step().unwrap();
    assert_eq!(gb.read8(Reg8::A), 0x02);
    assert_eq!(gb.pc(), 0x0102);
}

#[test]
fn stop_then_wake() {
    // STOP 00 / INC A
    let mut gb = machine(&[0x10, 0x00, 0x3C]);

    gb.step().unwrap();
    assert_eq!(gb.state(), ExecState::Stopped);
    assert_eq!(gb.step().unwrap(), 4);

    assert!(gb.wake());
    gb.step().unwrap();
    assert_eq!(gb.read8(Reg8::A), 0x02);
}

#[test]
fn independent_machines_do_not_share_state() {
    let mut first = machine(&[0x3C]);
    let second = machine(&[0x3C]);

    first.step().unwrap();
    assert_eq!(first.read8(Reg8::A), 0x02);
    assert_eq!(second.read8(Reg8::A), 0x01);
    assert_eq!(second.pc(), 0x0100);
}

#[test]
fn snapshot_restore_through_machine() {
    // INC A / INC A / INC A
    let mut gb = machine(&[0x3C, 0x3C, 0x3C]);
    gb.step().unwrap();
    let snap = gb.snapshot();

    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.read8(Reg8::A), 0x04);

    gb.restore(&snap);
    assert_eq!(gb.read8(Reg8::A), 0x02);
    assert_eq!(gb.pc(), 0x0101);
    gb.step().unwrap();
    assert_eq!(gb.read8(Reg8::A), 0x03);
}

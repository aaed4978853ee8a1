use crate::cpu::{
    Bus, Cpu, CpuSnapshot, ExecState, Flag, InterruptController, Reg16, Reg8, Registers,
};
use crate::error::CpuError;

#[cfg(test)]
mod tests;

/// A CPU wired to its memory bus and interrupt controller.
///
/// The wiring is fixed at construction. Several machines can coexist; none
/// of them share state.
pub struct Machine<B: Bus, I: InterruptController> {
    cpu: Cpu,
    bus: B,
    interrupts: I,
    cycles: u64,
}

impl<B: Bus, I: InterruptController> Machine<B, I> {
    /// Build a machine in the post-boot power-on state (PC=0x0100).
    pub fn new(bus: B, interrupts: I) -> Self {
        Self {
            cpu: Cpu::new(),
            bus,
            interrupts,
            cycles: 0,
        }
    }

    /// Run one instruction (or interrupt entry, or idle slice) and return
    /// its cost in T-cycles.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        let taken = self.cpu.step(&mut self.bus, &mut self.interrupts)?;
        self.cycles = self.cycles.wrapping_add(u64::from(taken));
        Ok(taken)
    }

    /// Step until at least `budget` T-cycles have elapsed.
    ///
    /// Returns the cycles actually consumed, which overshoots `budget` by
    /// less than one instruction.
    pub fn step_cycles(&mut self, budget: u64) -> Result<u64, CpuError> {
        let mut elapsed = 0u64;
        while elapsed < budget {
            elapsed += u64::from(self.step()?);
        }
        Ok(elapsed)
    }

    /// Return the CPU to its power-on state. Bus contents and interrupt
    /// registers belong to their owners and are left alone.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cycles = 0;
    }

    /// Joypad wake signal for STOP.
    pub fn wake(&mut self) -> bool {
        self.cpu.wake()
    }

    pub fn snapshot(&self) -> CpuSnapshot {
        self.cpu.snapshot()
    }

    pub fn restore(&mut self, snapshot: &CpuSnapshot) {
        self.cpu.restore(snapshot);
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn regs(&self) -> &Registers {
        self.cpu.regs()
    }

    pub fn read8(&self, reg: Reg8) -> u8 {
        self.cpu.read8(reg)
    }

    pub fn read16(&self, reg: Reg16) -> u16 {
        self.cpu.read16(reg)
    }

    pub fn get_flag(&self, flag: Flag) -> bool {
        self.cpu.get_flag(flag)
    }

    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    pub fn ime(&self) -> bool {
        self.cpu.ime()
    }

    pub fn state(&self) -> ExecState {
        self.cpu.state()
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn interrupts(&self) -> &I {
        &self.interrupts
    }

    pub fn interrupts_mut(&mut self) -> &mut I {
        &mut self.interrupts
    }

    /// T-cycles consumed since construction or the last reset.
    pub fn total_cycles(&self) -> u64 {
        self.cycles
    }
}

use super::super::{Bus, Cpu, ExecState};
use super::InterruptController;

/// Interrupt entry costs 5 M-cycles.
pub(in crate::cpu) const INTERRUPT_CYCLES: u32 = 20;

impl Cpu {
    /// Service a maskable interrupt if IME is set and one is pending.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None` otherwise.
    pub(in crate::cpu) fn handle_interrupts(
        &mut self,
        bus: &mut dyn Bus,
        interrupts: &mut dyn InterruptController,
    ) -> Option<u32> {
        if !self.ime || !interrupts.has_pending_enabled_interrupt() {
            return None;
        }
        let source = interrupts.highest_priority_source()?;

        self.state = ExecState::ServicingInterrupt;
        self.ime = false;
        self.ime_enable_pending = false;

        let pc = self.regs.pc;
        let [hi, lo] = pc.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);

        let vector = source.vector();
        self.regs.pc = vector;
        interrupts.acknowledge(source);

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
            source,
            vector,
            pc,
            self.regs.sp,
        );

        self.state = ExecState::Fetching;
        Some(INTERRUPT_CYCLES)
    }
}

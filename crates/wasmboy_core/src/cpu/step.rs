use crate::error::CpuError;
use crate::PREFIX_CB;

use super::decode::{decode, decode_extended, Outcome};
use super::{Bus, Cpu, ExecState, InterruptController, LockInfo};

/// Cost of one idle step while halted or stopped (one M-cycle).
pub(super) const IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute one instruction, one interrupt entry, or one idle HALT/STOP
    /// slice, and return the number of T-cycles taken.
    ///
    /// Interrupts are only polled here, at the instruction boundary.
    pub fn step(
        &mut self,
        bus: &mut dyn Bus,
        interrupts: &mut dyn InterruptController,
    ) -> Result<u32, CpuError> {
        match self.state {
            ExecState::Locked => {
                let LockInfo { opcode, pc } = self.lock.unwrap_or_default();
                return Err(CpuError::Locked { opcode, pc });
            }
            ExecState::Stopped => {
                // Only an external wake signal (joypad) leaves STOP.
                return Ok(IDLE_CYCLES);
            }
            ExecState::Halted => {
                if !interrupts.has_pending_enabled_interrupt() {
                    return Ok(IDLE_CYCLES);
                }
                // A pending interrupt always ends HALT. With IME clear the
                // handler is not entered and execution simply resumes.
                log::debug!("GB CPU leaving HALT at PC=0x{:04X} (IME={})", self.regs.pc, self.ime);
                self.state = ExecState::Fetching;
            }
            ExecState::Fetching | ExecState::Executing | ExecState::ServicingInterrupt => {}
        }

        if let Some(cycles) = self.handle_interrupts(bus, interrupts) {
            return Ok(cycles);
        }

        self.execute_next(bus, interrupts)
    }

    fn execute_next(
        &mut self,
        bus: &mut dyn Bus,
        interrupts: &mut dyn InterruptController,
    ) -> Result<u32, CpuError> {
        // Sampled before the instruction so that EI itself never completes
        // the delayed enable.
        let ime_armed = self.ime_enable_pending;

        let opcode_pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        self.state = ExecState::Executing;

        let instr = if opcode == PREFIX_CB {
            let cb = self.fetch8(bus);
            decode_extended(cb)
        } else {
            decode(opcode)
        };

        log::trace!(
            "{:04X}: {:<14} AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X}",
            opcode_pc,
            instr.mnemonic,
            self.regs.af(),
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl(),
            self.regs.sp,
        );

        let outcome = instr.execute(self, bus);
        let cycles = instr.cost(outcome);

        match outcome {
            Outcome::Done | Outcome::Taken => self.state = ExecState::Fetching,
            Outcome::Halt => self.enter_halt(interrupts),
            Outcome::Stop => {
                log::debug!("GB CPU entering STOP at PC=0x{:04X}", opcode_pc);
                self.state = ExecState::Stopped;
            }
            Outcome::Illegal => return Err(self.lock_up(opcode, opcode_pc)),
        }

        debug_assert_eq!(self.regs.f() & 0x0F, 0, "F low nibble must stay zero");

        self.apply_ime_delay(ime_armed);
        Ok(cycles)
    }

    /// HALT with an interrupt already pending does not halt.
    ///
    /// With IME clear the next opcode fetch fails to increment PC. Right
    /// after EI the interrupt is taken at once and returns to the HALT
    /// itself, so HALT executes again after the handler.
    fn enter_halt(&mut self, interrupts: &mut dyn InterruptController) {
        if self.ime || !interrupts.has_pending_enabled_interrupt() {
            self.state = ExecState::Halted;
        } else if self.ime_enable_pending {
            let halt_pc = self.regs.pc.wrapping_sub(1);
            log::debug!("GB CPU HALT after EI with interrupt pending at PC=0x{:04X}", halt_pc);
            self.regs.pc = halt_pc;
            self.state = ExecState::Fetching;
        } else {
            log::debug!("GB CPU HALT bug triggered at PC=0x{:04X}", self.regs.pc);
            self.halt_bug = true;
            self.state = ExecState::Fetching;
        }
    }

    fn lock_up(&mut self, opcode: u8, pc: u16) -> CpuError {
        log::error!(
            "GB CPU locked: invalid opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.lock = Some(LockInfo { opcode, pc });
        self.state = ExecState::Locked;
        CpuError::UnimplementedOpcode { opcode, pc }
    }

    /// External wake signal for STOP (a joypad line going low).
    ///
    /// Returns `true` if the CPU was stopped.
    pub fn wake(&mut self) -> bool {
        if self.state == ExecState::Stopped {
            log::debug!("GB CPU woken from STOP at PC=0x{:04X}", self.regs.pc);
            self.state = ExecState::Fetching;
            true
        } else {
            false
        }
    }
}

use crate::cpu::{decode_extended, Bus, Cpu, Outcome};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        Outcome::Done
    }

    /// HALT. Whether the CPU actually halts (or trips the HALT bug) depends
    /// on the interrupt controller, so the engine decides.
    pub(in crate::cpu) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        Outcome::Halt
    }

    pub(in crate::cpu) fn exec_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        // STOP is a 2-byte instruction; the second byte is normally 0x00
        // and ignored, but PC must still move past it.
        let _padding = self.fetch8(bus);
        Outcome::Stop
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.ime = false;
        self.ime_enable_pending = false;
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
        Outcome::Done
    }

    /// The 0xCB base entry. The engine resolves the prefix itself and
    /// charges the extended descriptor's cost; invoked directly, this
    /// fetches and runs the extended instruction that follows.
    pub(in crate::cpu) fn exec_prefix_cb(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        let cb = self.fetch8(bus);
        decode_extended(cb).execute(self, bus)
    }

    /// Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD). These
    /// hard-lock the CPU until power-off on real hardware.
    pub(in crate::cpu) fn exec_illegal(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        Outcome::Illegal
    }
}

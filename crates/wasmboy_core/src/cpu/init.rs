use super::{Cpu, ExecState, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            ime_enable_pending: false,
            state: ExecState::Fetching,
            halt_bug: false,
            lock: None,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Clears HALT/STOP, a lock-up from an illegal opcode, and any pending
    /// EI delay.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime_enable_pending = false;
        self.state = ExecState::Fetching;
        self.halt_bug = false;
        self.lock = None;
        self.apply_dmg_boot_state();
        log::debug!("GB CPU reset: PC=0x{:04X} SP=0x{:04X}", self.regs.pc, self.regs.sp);
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code at 0x0100.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.set_f(0xB0); // Z=1 N=0 H=1 C=1
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // IME is clear when control reaches the cartridge; software
        // enables interrupts with EI/RETI.
        self.ime = false;
    }
}

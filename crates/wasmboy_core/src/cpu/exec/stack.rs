use crate::cpu::{Bus, Cpu, Outcome};

impl Cpu {
    pub(in crate::cpu) fn exec_push_rr(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = self.regs.rp2(opcode >> 4);
        self.push_u16(bus, value);
        Outcome::Done
    }

    /// POP rr. POP AF goes through `set_af`, so F's low nibble stays zero.
    pub(in crate::cpu) fn exec_pop_rr(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(bus);
        self.regs.set_rp2(opcode >> 4, value);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(opcode & 0x38);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_call_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        let addr = self.fetch16(bus);
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.regs.pc = self.pop_u16(bus);
        Outcome::Done
    }

    /// RETI enables IME immediately, without the EI delay.
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        Outcome::Done
    }
}

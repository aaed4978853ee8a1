use crate::cpu::{Bus, Condition, Cpu, Outcome};

impl Cpu {
    pub(in crate::cpu) fn exec_jr(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.jr(bus, true);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let taken = self.condition(Condition::from_opcode(opcode));
        self.jr(bus, taken)
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let taken = self.condition(Condition::from_opcode(opcode));
        self.jp_cond(bus, taken)
    }

    pub(in crate::cpu) fn exec_jp_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.regs.pc = self.fetch16(bus);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.regs.pc = self.regs.hl();
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let taken = self.condition(Condition::from_opcode(opcode));
        self.call_cond(bus, taken)
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let taken = self.condition(Condition::from_opcode(opcode));
        self.ret_cond(bus, taken)
    }
}

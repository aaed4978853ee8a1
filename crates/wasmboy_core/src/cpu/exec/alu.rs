use crate::cpu::{Bus, Cpu, Flag, Outcome};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r (0x80–0xBF).
    pub(in crate::cpu) fn exec_alu_reg_group(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let value = self.read_reg8(bus, opcode & 0x07);
        self.alu_op(opcode >> 3, value);
        Outcome::Done
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,d8.
    pub(in crate::cpu) fn exec_alu_imm(&mut self, bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.fetch8(bus);
        self.alu_op(opcode >> 3, value);
        Outcome::Done
    }

    /// RLCA/RRCA/RLA/RRA. Same as the CB rotates except Z is always cleared.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let a = self.regs.a;
        self.regs.a = self.alu_rotate(opcode >> 3, a);
        self.set_flag(Flag::Z, false);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Outcome {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.regs.rp(opcode >> 4);
        self.alu_add16_hl(value);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.alu_daa();
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        Outcome::Done
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Outcome {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        Outcome::Done
    }
}

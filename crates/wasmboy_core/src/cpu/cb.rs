use super::{Bus, Cpu, Flag, Outcome};

// Handlers for the CB-prefixed table. The opcode passed in is the byte
// after the prefix: bits 6–7 select the group, bits 3–5 the operation or
// bit number, bits 0–2 the register (6 = (HL)).
impl Cpu {
    /// RLC/RRC/RL/RR/SLA/SRA/SWAP/SRL r.
    pub(super) fn exec_cb_rotate(&mut self, bus: &mut dyn Bus, cb: u8) -> Outcome {
        debug_assert!(cb < 0x40);
        let reg = cb & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_rotate(cb >> 3, value);
        self.write_reg8(bus, reg, result);
        Outcome::Done
    }

    /// BIT b,r: Z = !bit, N = 0, H = 1, C preserved.
    pub(super) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, cb: u8) -> Outcome {
        debug_assert!((0x40..0x80).contains(&cb));
        let bit = (cb >> 3) & 0x07;
        let value = self.read_reg8(bus, cb & 0x07);
        let carry = self.get_flag(Flag::C);
        self.set_flags(value & (1 << bit) == 0, false, true, carry);
        Outcome::Done
    }

    pub(super) fn exec_cb_res(&mut self, bus: &mut dyn Bus, cb: u8) -> Outcome {
        debug_assert!((0x80..0xC0).contains(&cb));
        let bit = (cb >> 3) & 0x07;
        let reg = cb & 0x07;
        let value = self.read_reg8(bus, reg) & !(1 << bit);
        self.write_reg8(bus, reg, value);
        Outcome::Done
    }

    pub(super) fn exec_cb_set(&mut self, bus: &mut dyn Bus, cb: u8) -> Outcome {
        debug_assert!(cb >= 0xC0);
        let bit = (cb >> 3) & 0x07;
        let reg = cb & 0x07;
        let value = self.read_reg8(bus, reg) | (1 << bit);
        self.write_reg8(bus, reg, value);
        Outcome::Done
    }
}

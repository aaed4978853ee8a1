use bitflags::bitflags;

use super::{Cpu, Registers};

bitflags! {
    /// Packed view of the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 0b1000_0000;
        const N = 0b0100_0000;
        const H = 0b0010_0000;
        const C = 0b0001_0000;
    }
}

/// A single flag bit in the F register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    pub fn mask(self) -> Flags {
        Flags::from_bits_truncate(1 << self as u8)
    }
}

/// Branch condition encoded in bits 3–4 of JR/JP/CALL/RET cc opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    NZ,
    Z,
    NC,
    C,
}

impl Condition {
    #[inline]
    pub(crate) fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 3) & 0x03 {
            0 => Condition::NZ,
            1 => Condition::Z,
            2 => Condition::NC,
            _ => Condition::C,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Condition::NZ => "NZ",
            Condition::Z => "Z",
            Condition::NC => "NC",
            Condition::C => "C",
        }
    }

    #[inline]
    pub fn holds(self, flags: Flags) -> bool {
        match self {
            Condition::NZ => !flags.contains(Flags::Z),
            Condition::Z => flags.contains(Flags::Z),
            Condition::NC => !flags.contains(Flags::C),
            Condition::C => flags.contains(Flags::C),
        }
    }
}

impl Registers {
    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.f)
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.flags().contains(flag.mask())
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let mut flags = self.flags();
        flags.set(flag.mask(), value);
        self.f = flags.bits();
    }

    /// Overwrite all four flags at once.
    #[inline]
    pub fn set_flags(&mut self, zero: bool, subtract: bool, half_carry: bool, carry: bool) {
        let mut flags = Flags::empty();
        flags.set(Flags::Z, zero);
        flags.set(Flags::N, subtract);
        flags.set(Flags::H, half_carry);
        flags.set(Flags::C, carry);
        self.f = flags.bits();
    }

    #[inline]
    pub fn is_zero_set(&self) -> bool {
        self.get_flag(Flag::Z)
    }

    #[inline]
    pub fn is_subtract_set(&self) -> bool {
        self.get_flag(Flag::N)
    }

    #[inline]
    pub fn is_half_carry_set(&self) -> bool {
        self.get_flag(Flag::H)
    }

    #[inline]
    pub fn is_carry_set(&self) -> bool {
        self.get_flag(Flag::C)
    }
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.get_flag(flag)
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub(crate) fn set_flags(&mut self, zero: bool, subtract: bool, half_carry: bool, carry: bool) {
        self.regs.set_flags(zero, subtract, half_carry, carry);
    }

    #[inline]
    pub(crate) fn condition(&self, cond: Condition) -> bool {
        cond.holds(self.regs.flags())
    }
}

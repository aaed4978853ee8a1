//! IE/IF register pair implementing [`InterruptController`].
//!
//! Devices raise requests with [`InterruptRegisters::request`]; a bus maps
//! the two bytes at 0xFFFF (IE) and 0xFF0F (IF) onto this value.

use bitflags::bitflags;

use crate::cpu::{InterruptController, InterruptSource};

bitflags! {
    /// One bit per interrupt source, as laid out in IE and IF.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0b0000_0001;
        const LCD_STAT = 0b0000_0010;
        const TIMER = 0b0000_0100;
        const SERIAL = 0b0000_1000;
        const JOYPAD = 0b0001_0000;
    }
}

impl From<InterruptSource> for InterruptFlags {
    fn from(source: InterruptSource) -> Self {
        InterruptFlags::from_bits_truncate(1 << source.index())
    }
}

pub const IF_ADDR: u16 = 0xFF0F;
pub const IE_ADDR: u16 = 0xFFFF;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterruptRegisters {
    /// IE. All eight bits are stored, as on hardware.
    ie: u8,
    /// IF, sources only.
    requested: u8,
}

impl InterruptRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, source: InterruptSource) {
        self.requested |= InterruptFlags::from(source).bits();
    }

    pub fn enable(&mut self, sources: InterruptFlags) {
        self.ie |= sources.bits();
    }

    pub fn enabled(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.ie)
    }

    pub fn requested(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.requested)
    }

    pub fn read_ie(&self) -> u8 {
        self.ie
    }

    pub fn write_ie(&mut self, value: u8) {
        self.ie = value;
    }

    /// IF reads back with the unused upper three bits set.
    pub fn read_if(&self) -> u8 {
        0xE0 | self.requested
    }

    pub fn write_if(&mut self, value: u8) {
        self.requested = value & InterruptFlags::all().bits();
    }

    fn pending(&self) -> InterruptFlags {
        self.enabled() & self.requested()
    }
}

impl InterruptController for InterruptRegisters {
    fn has_pending_enabled_interrupt(&self) -> bool {
        !self.pending().is_empty()
    }

    fn highest_priority_source(&self) -> Option<InterruptSource> {
        let pending = self.pending().bits();
        if pending == 0 {
            return None;
        }
        InterruptSource::from_index(pending.trailing_zeros() as u8)
    }

    fn acknowledge(&mut self, source: InterruptSource) {
        self.requested &= !InterruptFlags::from(source).bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_pending_until_enabled() {
        let mut regs = InterruptRegisters::new();
        regs.request(InterruptSource::Timer);
        assert!(!regs.has_pending_enabled_interrupt());
        assert_eq!(regs.highest_priority_source(), None);

        regs.enable(InterruptFlags::TIMER);
        assert!(regs.has_pending_enabled_interrupt());
        assert_eq!(regs.highest_priority_source(), Some(InterruptSource::Timer));
    }

    #[test]
    fn lowest_bit_wins() {
        let mut regs = InterruptRegisters::new();
        regs.write_ie(0x1F);
        regs.request(InterruptSource::Joypad);
        regs.request(InterruptSource::Serial);
        regs.request(InterruptSource::LcdStat);
        assert_eq!(regs.highest_priority_source(), Some(InterruptSource::LcdStat));

        regs.acknowledge(InterruptSource::LcdStat);
        assert_eq!(regs.highest_priority_source(), Some(InterruptSource::Serial));
        assert_eq!(
            regs.requested(),
            InterruptFlags::SERIAL | InterruptFlags::JOYPAD
        );
    }

    #[test]
    fn if_register_upper_bits_read_as_one() {
        let mut regs = InterruptRegisters::new();
        assert_eq!(regs.read_if(), 0xE0);

        regs.write_if(0xFF);
        assert_eq!(regs.read_if(), 0xFF);
        assert_eq!(regs.requested(), InterruptFlags::all());

        regs.write_if(0x04);
        assert_eq!(regs.read_if(), 0xE4);
    }

    #[test]
    fn ie_keeps_all_bits() {
        let mut regs = InterruptRegisters::new();
        regs.write_ie(0xE1);
        assert_eq!(regs.read_ie(), 0xE1);
        assert_eq!(regs.enabled(), InterruptFlags::VBLANK);
    }
}

mod ime;
mod service;

use std::cell::RefCell;
use std::rc::Rc;

/// Maskable interrupt sources, in priority order (VBlank highest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InterruptSource {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl InterruptSource {
    /// All sources, highest priority first.
    pub const ALL: [InterruptSource; 5] = [
        InterruptSource::VBlank,
        InterruptSource::LcdStat,
        InterruptSource::Timer,
        InterruptSource::Serial,
        InterruptSource::Joypad,
    ];

    /// Bit index of this source in the IE/IF registers.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Service routine address the CPU jumps to when taking this interrupt.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// The CPU side of the interrupt controller protocol.
///
/// The execution engine only calls these between instructions. The
/// controller owns the per-source enable and request bits; the CPU owns
/// the master enable (IME).
pub trait InterruptController {
    /// `true` when at least one source is both requested and enabled.
    fn has_pending_enabled_interrupt(&self) -> bool;

    /// Highest-priority source that is both requested and enabled.
    fn highest_priority_source(&self) -> Option<InterruptSource>;

    /// Clear the request bit of `source` once the CPU has taken it.
    fn acknowledge(&mut self, source: InterruptSource);
}

impl<I: InterruptController + ?Sized> InterruptController for &mut I {
    fn has_pending_enabled_interrupt(&self) -> bool {
        (**self).has_pending_enabled_interrupt()
    }

    fn highest_priority_source(&self) -> Option<InterruptSource> {
        (**self).highest_priority_source()
    }

    fn acknowledge(&mut self, source: InterruptSource) {
        (**self).acknowledge(source)
    }
}

/// Shared controller, for buses that also expose IE/IF as memory-mapped
/// registers.
impl<I: InterruptController + ?Sized> InterruptController for Rc<RefCell<I>> {
    fn has_pending_enabled_interrupt(&self) -> bool {
        self.borrow().has_pending_enabled_interrupt()
    }

    fn highest_priority_source(&self) -> Option<InterruptSource> {
        self.borrow().highest_priority_source()
    }

    fn acknowledge(&mut self, source: InterruptSource) {
        self.borrow_mut().acknowledge(source)
    }
}

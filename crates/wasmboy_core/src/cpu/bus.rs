/// Abstraction over the Game Boy memory bus.
///
/// The CPU core never touches memory directly; every opcode fetch, operand
/// read, stack access and load/store goes through this trait. Accesses are
/// synchronous and infallible from the CPU's point of view: unmapped or
/// mirrored regions are the implementation's business.
///
/// `read8` takes `&mut self` because reading I/O registers can have side
/// effects on real hardware.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        (**self).read8(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        (**self).write8(addr, value)
    }
}

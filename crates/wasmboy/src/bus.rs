use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{ensure, Result};
use wasmboy_core::interrupt_regs::{IE_ADDR, IF_ADDR};
use wasmboy_core::{Bus, InterruptRegisters, InterruptSource};

const MEMORY_SIZE: usize = 0x10000;
const SB_ADDR: u16 = 0xFF01;
const SC_ADDR: u16 = 0xFF02;

/// Serial port reduced to what test programs use: bytes written to SB are
/// captured when a transfer is started on SC with the internal clock.
#[derive(Default)]
struct Serial {
    sb: u8,
    sc: u8,
    output: Vec<u8>,
}

impl Serial {
    /// Returns `true` when a transfer completed.
    fn write_sc(&mut self, value: u8) -> bool {
        self.sc = value;
        if (self.sc & 0x81) == 0x81 {
            self.output.push(self.sb);
            self.sc &= !0x80;
            return true;
        }
        false
    }
}

/// Flat 64 KiB address space with IE/IF and the serial port mapped.
///
/// IE/IF live in an [`InterruptRegisters`] shared with the machine's
/// interrupt controller, so CPU writes to 0xFFFF/0xFF0F and the engine's
/// acknowledgements see the same bits.
pub struct FlatBus {
    memory: Box<[u8]>,
    interrupts: Rc<RefCell<InterruptRegisters>>,
    serial: Serial,
}

impl FlatBus {
    pub fn new(interrupts: Rc<RefCell<InterruptRegisters>>) -> Self {
        Self {
            memory: vec![0; MEMORY_SIZE].into_boxed_slice(),
            interrupts,
            serial: Serial::default(),
        }
    }

    /// Copy `image` into memory starting at `addr`.
    pub fn load(&mut self, addr: u16, image: &[u8]) -> Result<()> {
        let start = usize::from(addr);
        ensure!(
            start + image.len() <= MEMORY_SIZE,
            "image of {} bytes does not fit at 0x{addr:04X}",
            image.len()
        );
        self.memory[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Side-effect-free read for disassembly.
    pub fn peek(&self, addr: u16) -> u8 {
        match addr {
            IF_ADDR => self.interrupts.borrow().read_if(),
            IE_ADDR => self.interrupts.borrow().read_ie(),
            SB_ADDR => self.serial.sb,
            SC_ADDR => self.serial.sc | 0x7E,
            _ => self.memory[usize::from(addr)],
        }
    }

    pub fn serial_output(&self) -> &[u8] {
        &self.serial.output
    }
}

impl Bus for FlatBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            IF_ADDR => self.interrupts.borrow_mut().write_if(value),
            IE_ADDR => self.interrupts.borrow_mut().write_ie(value),
            SB_ADDR => self.serial.sb = value,
            SC_ADDR => {
                if self.serial.write_sc(value) {
                    self.interrupts.borrow_mut().request(InterruptSource::Serial);
                }
            }
            _ => self.memory[usize::from(addr)] = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasmboy_core::{InterruptController, InterruptFlags};

    fn bus() -> (FlatBus, Rc<RefCell<InterruptRegisters>>) {
        let interrupts = Rc::new(RefCell::new(InterruptRegisters::new()));
        (FlatBus::new(Rc::clone(&interrupts)), interrupts)
    }

    #[test]
    fn interrupt_registers_are_shared() {
        let (mut bus, interrupts) = bus();
        bus.write8(IE_ADDR, 0x04);
        bus.write8(IF_ADDR, 0x04);
        assert!(interrupts.borrow().has_pending_enabled_interrupt());

        interrupts.borrow_mut().acknowledge(InterruptSource::Timer);
        assert_eq!(bus.read8(IF_ADDR), 0xE0);
        assert_eq!(bus.read8(IE_ADDR), 0x04);
    }

    #[test]
    fn serial_transfer_captures_byte_and_raises_interrupt() {
        let (mut bus, interrupts) = bus();
        bus.write8(SB_ADDR, b'O');
        bus.write8(SC_ADDR, 0x80); // external clock: no transfer
        assert!(bus.serial_output().is_empty());

        bus.write8(SC_ADDR, 0x81);
        bus.write8(SB_ADDR, b'K');
        bus.write8(SC_ADDR, 0x81);
        assert_eq!(bus.serial_output(), b"OK");
        assert_eq!(bus.peek(SC_ADDR) & 0x80, 0);
        assert_eq!(interrupts.borrow().requested(), InterruptFlags::SERIAL);
    }

    #[test]
    fn load_rejects_overflowing_image() {
        let (mut bus, _) = bus();
        bus.load(0xFFF0, &[1, 2, 3]).unwrap();
        assert_eq!(bus.peek(0xFFF1), 2);
        assert!(bus.load(0xFFF0, &[0; 0x20]).is_err());
    }
}

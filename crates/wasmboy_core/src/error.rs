use thiserror::Error;

/// Fatal conditions raised by the CPU core.
///
/// Both variants are terminal for the emulated instance: once returned the
/// CPU stays locked until [`Cpu::reset`](crate::Cpu::reset) or a restore
/// from a snapshot taken before the fault.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },

    #[error("CPU is locked after opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    Locked { opcode: u8, pc: u16 },
}

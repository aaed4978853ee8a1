pub mod cpu;
pub mod error;
pub mod interrupt_regs;
pub mod machine;

pub use cpu::{
    decode, decode_extended, disassemble, Bus, Condition, Cpu, CpuSnapshot, Disassembly,
    ExecState, Flag, Flags, InstrClass, Instruction, InterruptController, InterruptSource,
    LockInfo, Reg16, Reg8, Registers,
};
pub use error::CpuError;
pub use interrupt_regs::{InterruptFlags, InterruptRegisters};
pub use machine::Machine;

/// Opcode that switches decoding to the extended (bit manipulation) table.
pub const PREFIX_CB: u8 = 0xCB;

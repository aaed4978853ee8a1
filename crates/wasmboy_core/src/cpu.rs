//! Sharp LR35902 CPU core.
//!
//! The CPU is driven one step at a time by [`Cpu::step`]. It never owns
//! memory or the interrupt registers: both are borrowed for the duration
//! of a step through the [`Bus`] and [`InterruptController`] traits.

mod alu;
mod bus;
mod cb;
mod decode;
mod exec;
mod flags;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod snapshot;
mod step;


pub use bus::Bus;
pub(crate) use decode::Outcome;
pub use decode::{decode, decode_extended, disassemble, Disassembly, InstrClass, Instruction};
pub use flags::{Condition, Flag, Flags};
pub use interrupts::{InterruptController, InterruptSource};
pub use regs::{Reg16, Reg8, Registers};
pub use snapshot::CpuSnapshot;

/// Execution-engine state between and during steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecState {
    Fetching,
    Executing,
    /// Waiting for an enabled interrupt to become pending.
    Halted,
    /// Waiting for an external wake signal.
    Stopped,
    ServicingInterrupt,
    /// An illegal opcode was executed; only `reset` or `restore` recovers.
    Locked,
}

/// Where the CPU locked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockInfo {
    pub opcode: u8,
    pub pc: u16,
}

#[derive(Clone, Debug)]
pub struct Cpu {
    pub(crate) regs: Registers,
    /// Interrupt master enable.
    pub(crate) ime: bool,
    /// Set by EI; IME turns on once the following instruction completes.
    pub(crate) ime_enable_pending: bool,
    pub(crate) state: ExecState,
    /// The next opcode fetch reads PC without incrementing it.
    pub(crate) halt_bug: bool,
    pub(crate) lock: Option<LockInfo>,
}

impl Cpu {
    #[inline]
    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    #[inline]
    pub fn read8(&self, reg: Reg8) -> u8 {
        self.regs.read8(reg)
    }

    #[inline]
    pub fn read16(&self, reg: Reg16) -> u16 {
        self.regs.read16(reg)
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    #[inline]
    pub fn ime_enable_pending(&self) -> bool {
        self.ime_enable_pending
    }

    #[inline]
    pub fn state(&self) -> ExecState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == ExecState::Halted
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ExecState::Stopped
    }

    pub fn lock_info(&self) -> Option<LockInfo> {
        self.lock
    }
}

use super::{Cpu, ExecState, LockInfo, Registers};

/// Complete, plain-data copy of the CPU's architectural and engine state.
///
/// Every field is independent, so a snapshot can be written and read in
/// any order by a save-state collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuSnapshot {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
    pub ime: bool,
    /// EI executed; IME turns on after the next instruction.
    pub ime_enable_pending: bool,
    pub halted: bool,
    pub stopped: bool,
    pub halt_bug: bool,
    pub lock: Option<LockInfo>,
}

impl Cpu {
    pub fn snapshot(&self) -> CpuSnapshot {
        let r = &self.regs;
        CpuSnapshot {
            a: r.a,
            f: r.f,
            b: r.b,
            c: r.c,
            d: r.d,
            e: r.e,
            h: r.h,
            l: r.l,
            sp: r.sp,
            pc: r.pc,
            ime: self.ime,
            ime_enable_pending: self.ime_enable_pending,
            halted: self.state == ExecState::Halted,
            stopped: self.state == ExecState::Stopped,
            halt_bug: self.halt_bug,
            lock: self.lock,
        }
    }

    /// Restore state captured by [`Cpu::snapshot`].
    ///
    /// A lock takes precedence over STOP, and STOP over HALT, should a
    /// hand-edited snapshot set more than one of them.
    pub fn restore(&mut self, snapshot: &CpuSnapshot) {
        debug_assert!(
            !(snapshot.halted && snapshot.stopped),
            "snapshot is both halted and stopped"
        );

        let mut regs = Registers {
            a: snapshot.a,
            f: 0,
            b: snapshot.b,
            c: snapshot.c,
            d: snapshot.d,
            e: snapshot.e,
            h: snapshot.h,
            l: snapshot.l,
            sp: snapshot.sp,
            pc: snapshot.pc,
        };
        regs.set_f(snapshot.f);
        self.regs = regs;

        self.ime = snapshot.ime;
        self.ime_enable_pending = snapshot.ime_enable_pending;
        self.halt_bug = snapshot.halt_bug;
        self.lock = snapshot.lock;
        self.state = if snapshot.lock.is_some() {
            ExecState::Locked
        } else if snapshot.stopped {
            ExecState::Stopped
        } else if snapshot.halted {
            ExecState::Halted
        } else {
            ExecState::Fetching
        };
    }
}

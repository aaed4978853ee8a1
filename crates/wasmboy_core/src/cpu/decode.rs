//! Opcode tables.
//!
//! Both tables are fixed 256-entry arrays of [`Instruction`] descriptors,
//! indexed by opcode and built once on first use. Construction goes through
//! a builder that panics on a slot assigned twice or left empty, so a table
//! that exists is total and collision-free.

mod base;
mod disasm;
mod extended;

use std::fmt;

use lazy_static::lazy_static;

use super::{Bus, Cpu};

pub use disasm::{disassemble, Disassembly};

/// What a handler reports back to the execution engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Instruction completed; charge the base cost.
    Done,
    /// A conditional branch was taken; charge base plus the branch penalty.
    Taken,
    /// HALT was executed.
    Halt,
    /// STOP was executed (padding byte already consumed).
    Stop,
    /// The opcode has no defined behaviour; the instance must stop.
    Illegal,
}

pub(crate) type Handler = fn(&mut Cpu, &mut dyn Bus, u8) -> Outcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstrClass {
    Normal,
    /// The 0xCB prefix: execution continues in the extended table.
    Prefix,
    /// One of the opcode holes that lock up the CPU.
    Illegal,
}

/// Static descriptor for one opcode.
#[derive(Clone)]
pub struct Instruction {
    pub opcode: u8,
    /// Assembler mnemonic with operand placeholders (`d8`, `d16`, `a8`,
    /// `a16`, `r8`). Diagnostics only.
    pub mnemonic: String,
    /// Number of immediate bytes following the opcode (or the CB opcode).
    pub operand_bytes: u8,
    /// Base cost in T-cycles. For CB instructions this includes the prefix.
    pub cycles: u32,
    /// Extra T-cycles charged when a conditional branch is taken.
    pub taken_cycles: u32,
    pub class: InstrClass,
    /// `true` for entries of the CB table.
    pub extended: bool,
    handler: Handler,
}

impl Instruction {
    pub(crate) fn new(
        opcode: u8,
        mnemonic: impl Into<String>,
        operand_bytes: u8,
        cycles: u32,
        handler: Handler,
    ) -> Self {
        Self {
            opcode,
            mnemonic: mnemonic.into(),
            operand_bytes,
            cycles,
            taken_cycles: 0,
            class: InstrClass::Normal,
            extended: false,
            handler,
        }
    }

    pub(crate) fn branch(mut self, taken_cycles: u32) -> Self {
        self.taken_cycles = taken_cycles;
        self
    }

    pub(crate) fn class(mut self, class: InstrClass) -> Self {
        self.class = class;
        self
    }

    pub(crate) fn extended(mut self) -> Self {
        self.extended = true;
        self
    }

    /// Total encoded length in bytes, prefix included.
    pub fn length(&self) -> u8 {
        1 + u8::from(self.extended) + self.operand_bytes
    }

    /// Cycles charged for the given handler outcome.
    #[inline]
    pub(crate) fn cost(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Taken => self.cycles + self.taken_cycles,
            _ => self.cycles,
        }
    }

    #[inline]
    pub(crate) fn execute(&self, cpu: &mut Cpu, bus: &mut dyn Bus) -> Outcome {
        (self.handler)(cpu, bus, self.opcode)
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("opcode", &format_args!("0x{:02X}", self.opcode))
            .field("mnemonic", &self.mnemonic)
            .field("operand_bytes", &self.operand_bytes)
            .field("cycles", &self.cycles)
            .field("taken_cycles", &self.taken_cycles)
            .field("class", &self.class)
            .field("extended", &self.extended)
            .finish_non_exhaustive()
    }
}

/// Collects descriptors for one table and checks totality on `finish`.
pub(crate) struct TableBuilder {
    name: &'static str,
    slots: Vec<Option<Instruction>>,
}

impl TableBuilder {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: vec![None; 256],
        }
    }

    pub(crate) fn insert(&mut self, instr: Instruction) {
        let slot = &mut self.slots[usize::from(instr.opcode)];
        if let Some(existing) = slot {
            panic!(
                "{} table: opcode 0x{:02X} assigned twice ({} / {})",
                self.name, instr.opcode, existing.mnemonic, instr.mnemonic
            );
        }
        *slot = Some(instr);
    }

    pub(crate) fn finish(self) -> Vec<Instruction> {
        let name = self.name;
        self.slots
            .into_iter()
            .enumerate()
            .map(|(opcode, slot)| {
                slot.unwrap_or_else(|| panic!("{name} table: opcode 0x{opcode:02X} has no descriptor"))
            })
            .collect()
    }
}

lazy_static! {
    static ref BASE_TABLE: Vec<Instruction> = base::build();
    static ref EXTENDED_TABLE: Vec<Instruction> = extended::build();
}

/// Look up the descriptor for a base-table opcode.
#[inline]
pub fn decode(opcode: u8) -> &'static Instruction {
    &BASE_TABLE[usize::from(opcode)]
}

/// Look up the descriptor for the byte following the 0xCB prefix.
#[inline]
pub fn decode_extended(opcode: u8) -> &'static Instruction {
    &EXTENDED_TABLE[usize::from(opcode)]
}

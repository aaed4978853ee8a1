//! Opcode handlers for the base table, grouped by instruction family.
//!
//! Every handler has the shape `fn(&mut Cpu, &mut dyn Bus, u8) -> Outcome`
//! so that it can be stored in an [`Instruction`](super::Instruction)
//! descriptor. The opcode is passed back in so that one handler can serve
//! a whole family, decoding its register/condition fields from the opcode
//! bits. Handlers never report cycles; the descriptor owns the timing.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

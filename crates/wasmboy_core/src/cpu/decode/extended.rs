use super::base::R8;
use super::{Instruction, TableBuilder};
use crate::cpu::Cpu;

const ROTATE: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

/// CB table. Register forms take 8 T-cycles including the prefix; (HL)
/// forms take 16, except BIT b,(HL) which only reads and takes 12.
pub(super) fn build() -> Vec<Instruction> {
    let mut t = TableBuilder::new("extended");

    for cb in 0u8..=0xFF {
        let y = usize::from((cb >> 3) & 0x07);
        let z = usize::from(cb & 0x07);
        let hl = z == 6;
        let instr = match cb >> 6 {
            0 => Instruction::new(
                cb,
                format!("{} {}", ROTATE[y], R8[z]),
                0,
                if hl { 16 } else { 8 },
                Cpu::exec_cb_rotate,
            ),
            1 => Instruction::new(cb, format!("BIT {y},{}", R8[z]), 0, if hl { 12 } else { 8 }, Cpu::exec_cb_bit),
            2 => Instruction::new(cb, format!("RES {y},{}", R8[z]), 0, if hl { 16 } else { 8 }, Cpu::exec_cb_res),
            _ => Instruction::new(cb, format!("SET {y},{}", R8[z]), 0, if hl { 16 } else { 8 }, Cpu::exec_cb_set),
        };
        t.insert(instr.extended());
    }

    t.finish()
}

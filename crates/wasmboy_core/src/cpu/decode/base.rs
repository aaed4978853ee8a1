use super::{InstrClass, Instruction, TableBuilder};
use crate::cpu::{Condition, Cpu};

pub(super) const R8: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const RP: [&str; 4] = ["BC", "DE", "HL", "SP"];
const RP2: [&str; 4] = ["BC", "DE", "HL", "AF"];
const INDIRECT: [&str; 4] = ["(BC)", "(DE)", "(HL+)", "(HL-)"];
const ALU: [&str; 8] = [
    "ADD A,", "ADC A,", "SUB ", "SBC A,", "AND ", "XOR ", "OR ", "CP ",
];
const ROTATE_A: [&str; 4] = ["RLCA", "RRCA", "RLA", "RRA"];

/// Opcode holes: no instruction is defined and the CPU locks up.
pub(crate) const ILLEGAL_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

/// (HL) operands cost an extra memory access.
#[inline]
fn mem_cycles(reg: usize, reg_cost: u32, mem_cost: u32) -> u32 {
    if reg == 6 {
        mem_cost
    } else {
        reg_cost
    }
}

pub(super) fn build() -> Vec<Instruction> {
    let mut t = TableBuilder::new("base");

    t.insert(Instruction::new(0x00, "NOP", 0, 4, Cpu::exec_nop));
    t.insert(Instruction::new(0x08, "LD (a16),SP", 2, 20, Cpu::exec_ld_a16_sp));
    t.insert(Instruction::new(0x10, "STOP", 1, 4, Cpu::exec_stop));
    t.insert(Instruction::new(0x18, "JR r8", 1, 12, Cpu::exec_jr));
    t.insert(Instruction::new(0x27, "DAA", 0, 4, Cpu::exec_daa));
    t.insert(Instruction::new(0x2F, "CPL", 0, 4, Cpu::exec_cpl));
    t.insert(Instruction::new(0x37, "SCF", 0, 4, Cpu::exec_scf));
    t.insert(Instruction::new(0x3F, "CCF", 0, 4, Cpu::exec_ccf));

    // Register-pair rows: one entry per pair in each column.
    for (p, row) in (0u8..4).map(|p| (usize::from(p), p << 4)) {
        t.insert(Instruction::new(0x01 | row, format!("LD {},d16", RP[p]), 2, 12, Cpu::exec_ld_rr_d16));
        t.insert(Instruction::new(0x02 | row, format!("LD {},A", INDIRECT[p]), 0, 8, Cpu::exec_ld_indirect_a));
        t.insert(Instruction::new(0x03 | row, format!("INC {}", RP[p]), 0, 8, Cpu::exec_inc16_rr));
        t.insert(Instruction::new(0x09 | row, format!("ADD HL,{}", RP[p]), 0, 8, Cpu::exec_add_hl_rr));
        t.insert(Instruction::new(0x0A | row, format!("LD A,{}", INDIRECT[p]), 0, 8, Cpu::exec_ld_a_indirect));
        t.insert(Instruction::new(0x0B | row, format!("DEC {}", RP[p]), 0, 8, Cpu::exec_dec16_rr));
        t.insert(Instruction::new(0xC1 | row, format!("POP {}", RP2[p]), 0, 12, Cpu::exec_pop_rr));
        t.insert(Instruction::new(0xC5 | row, format!("PUSH {}", RP2[p]), 0, 16, Cpu::exec_push_rr));
    }

    // Conditional control flow. Costs are (not taken, extra when taken).
    for y in (0u8..4).map(|c| c << 3) {
        let cc = Condition::from_opcode(y).name();
        t.insert(Instruction::new(0x20 | y, format!("JR {},r8", cc), 1, 8, Cpu::exec_jr_cc).branch(4));
        t.insert(Instruction::new(0xC0 | y, format!("RET {}", cc), 0, 8, Cpu::exec_ret_cc).branch(12));
        t.insert(Instruction::new(0xC2 | y, format!("JP {},a16", cc), 2, 12, Cpu::exec_jp_cc).branch(4));
        t.insert(Instruction::new(0xC4 | y, format!("CALL {},a16", cc), 2, 12, Cpu::exec_call_cc).branch(12));
    }

    // Columns indexed by the 3-bit register field.
    for (r, y) in (0u8..8).map(|r| (usize::from(r), r << 3)) {
        t.insert(Instruction::new(0x04 | y, format!("INC {}", R8[r]), 0, mem_cycles(r, 4, 12), Cpu::exec_inc8_reg));
        t.insert(Instruction::new(0x05 | y, format!("DEC {}", R8[r]), 0, mem_cycles(r, 4, 12), Cpu::exec_dec8_reg));
        t.insert(Instruction::new(0x06 | y, format!("LD {},d8", R8[r]), 1, mem_cycles(r, 8, 12), Cpu::exec_ld_r_d8));
        t.insert(Instruction::new(0xC6 | y, format!("{}d8", ALU[r]), 1, 8, Cpu::exec_alu_imm));
        t.insert(Instruction::new(0xC7 | y, format!("RST {:02X}H", y), 0, 16, Cpu::exec_rst));
    }

    for (i, name) in ROTATE_A.iter().enumerate() {
        let opcode = 0x07 | ((i as u8) << 3);
        t.insert(Instruction::new(opcode, *name, 0, 4, Cpu::exec_rotate_a));
    }

    // 0x40–0x7F: LD r,r' with HALT in the (HL),(HL) slot.
    for opcode in 0x40u8..=0x7F {
        if opcode == 0x76 {
            t.insert(Instruction::new(opcode, "HALT", 0, 4, Cpu::exec_halt));
            continue;
        }
        let dst = usize::from((opcode >> 3) & 0x07);
        let src = usize::from(opcode & 0x07);
        let cycles = if dst == 6 || src == 6 { 8 } else { 4 };
        t.insert(Instruction::new(opcode, format!("LD {},{}", R8[dst], R8[src]), 0, cycles, Cpu::exec_ld_r_r));
    }

    // 0x80–0xBF: accumulator ALU with a register or (HL) operand.
    for opcode in 0x80u8..=0xBF {
        let op = usize::from((opcode >> 3) & 0x07);
        let src = usize::from(opcode & 0x07);
        t.insert(Instruction::new(
            opcode,
            format!("{}{}", ALU[op], R8[src]),
            0,
            mem_cycles(src, 4, 8),
            Cpu::exec_alu_reg_group,
        ));
    }

    t.insert(Instruction::new(0xC3, "JP a16", 2, 16, Cpu::exec_jp_a16));
    t.insert(Instruction::new(0xC9, "RET", 0, 16, Cpu::exec_ret));
    t.insert(Instruction::new(0xCB, "PREFIX CB", 0, 4, Cpu::exec_prefix_cb).class(InstrClass::Prefix));
    t.insert(Instruction::new(0xCD, "CALL a16", 2, 24, Cpu::exec_call_a16));
    t.insert(Instruction::new(0xD9, "RETI", 0, 16, Cpu::exec_reti));
    t.insert(Instruction::new(0xE0, "LDH (a8),A", 1, 12, Cpu::exec_ldh_a8));
    t.insert(Instruction::new(0xF0, "LDH A,(a8)", 1, 12, Cpu::exec_ldh_a8));
    t.insert(Instruction::new(0xE2, "LD (C),A", 0, 8, Cpu::exec_ldh_c));
    t.insert(Instruction::new(0xF2, "LD A,(C)", 0, 8, Cpu::exec_ldh_c));
    t.insert(Instruction::new(0xE8, "ADD SP,r8", 1, 16, Cpu::exec_add_sp_r8));
    t.insert(Instruction::new(0xF8, "LD HL,SP+r8", 1, 12, Cpu::exec_ld_hl_sp_r8));
    t.insert(Instruction::new(0xE9, "JP HL", 0, 4, Cpu::exec_jp_hl));
    t.insert(Instruction::new(0xF9, "LD SP,HL", 0, 8, Cpu::exec_ld_sp_hl));
    t.insert(Instruction::new(0xEA, "LD (a16),A", 2, 16, Cpu::exec_ld_a16_a));
    t.insert(Instruction::new(0xFA, "LD A,(a16)", 2, 16, Cpu::exec_ld_a16_a));
    t.insert(Instruction::new(0xF3, "DI", 0, 4, Cpu::exec_di));
    t.insert(Instruction::new(0xFB, "EI", 0, 4, Cpu::exec_ei));

    for opcode in ILLEGAL_OPCODES {
        t.insert(
            Instruction::new(opcode, format!("ILLEGAL {opcode:02X}H"), 0, 4, Cpu::exec_illegal)
                .class(InstrClass::Illegal),
        );
    }

    t.finish()
}

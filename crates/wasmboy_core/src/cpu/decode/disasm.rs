use super::{decode, decode_extended, Instruction};
use crate::PREFIX_CB;

/// One disassembled instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    pub addr: u16,
    pub text: String,
    /// Encoded length in bytes, prefix and operands included.
    pub length: u8,
}

/// Disassemble the instruction at `addr`.
///
/// `peek` must read memory without side effects; the execution engine
/// never calls this, so disassembly does not perturb bus access order.
pub fn disassemble(mut peek: impl FnMut(u16) -> u8, addr: u16) -> Disassembly {
    let opcode = peek(addr);
    let instr = if opcode == PREFIX_CB {
        decode_extended(peek(addr.wrapping_add(1)))
    } else {
        decode(opcode)
    };

    let length = instr.length();
    let operand_start = addr.wrapping_add(u16::from(length - instr.operand_bytes));
    let operands: Vec<u8> = (0..u16::from(instr.operand_bytes))
        .map(|i| peek(operand_start.wrapping_add(i)))
        .collect();
    let next_pc = addr.wrapping_add(u16::from(length));

    Disassembly {
        addr,
        text: render(instr, &operands, next_pc),
        length,
    }
}

fn render(instr: &Instruction, operands: &[u8], next_pc: u16) -> String {
    let text = instr.mnemonic.as_str();
    match operands {
        [lo, hi] => {
            let word = format!("${:04X}", u16::from_le_bytes([*lo, *hi]));
            text.replace("d16", &word).replace("a16", &word)
        }
        [byte] if text.contains("r8") => {
            let offset = *byte as i8;
            if text.starts_with("JR") {
                let target = next_pc.wrapping_add_signed(i16::from(offset));
                text.replace("r8", &format!("${target:04X}"))
            } else if text.contains("+r8") {
                text.replace("+r8", &format!("{offset:+}"))
            } else {
                text.replace("r8", &offset.to_string())
            }
        }
        [byte] => text
            .replace("a8", &format!("$FF{byte:02X}"))
            .replace("d8", &format!("${byte:02X}")),
        _ => text.to_string(),
    }
}

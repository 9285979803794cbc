use crate::instruction::{AsmError, Instruction, Register};

/// Folds immediate bit characters into `word`, source order, one shift per
/// character. Width is not validated: a run longer or shorter than four
/// bits folds the same way, and bits shifted past the top are dropped.
fn pack_im(word: u8, im: &str) -> u8 {
    im.bytes().fold(word, |acc, bit| (acc << 1) | (bit - b'0'))
}

/// Maps one parsed instruction to its 8-bit code word.
///
/// The register-only forms are full byte literals, opcode nibble high and a
/// zero operand field low. Operand combinations the parser never produces
/// (a register slot the opcode does not accept) return
/// [`AsmError::NoEncoding`] instead of a nearby bit pattern.
pub fn encode(insn: Instruction) -> Result<u8, AsmError> {
    let mnemonic = insn.mnemonic();
    match insn {
        // ADD A, Im: 0000 | ADD B, Im: 0101
        Instruction::Add {
            reg: Register::A,
            im,
        } => Ok(pack_im(0b0000, &im)),
        Instruction::Add {
            reg: Register::B,
            im,
        } => Ok(pack_im(0b0101, &im)),
        // OUT Im: 1011 | OUT B: 1001
        Instruction::Out {
            reg: Register::None,
            im,
        } => Ok(pack_im(0b1011, &im)),
        Instruction::Out {
            reg: Register::B, ..
        } => Ok(0b1001_0000),
        // IN A: 0010 | IN B: 0110
        Instruction::In { reg: Register::A } => Ok(0b0010_0000),
        Instruction::In { reg: Register::B } => Ok(0b0110_0000),
        // MOV A, Im: 0011 | MOV B, Im: 0111. An immediate beats the source
        // register when both are present.
        Instruction::Mov {
            dst: Register::A,
            im,
            ..
        } if !im.is_empty() => Ok(pack_im(0b0011, &im)),
        Instruction::Mov {
            dst: Register::B,
            im,
            ..
        } if !im.is_empty() => Ok(pack_im(0b0111, &im)),
        // MOV A, B: 0001 | MOV B, A: 0100
        Instruction::Mov {
            dst: Register::A,
            src: Register::B,
            ..
        } => Ok(0b0001_0000),
        Instruction::Mov {
            dst: Register::B,
            src: Register::A,
            ..
        } => Ok(0b0100_0000),
        // JMP: 1111 | JNC: 1110
        Instruction::Jmp { im } => Ok(pack_im(0b1111, &im)),
        Instruction::Jnc { im } => Ok(pack_im(0b1110, &im)),
        _ => Err(AsmError::NoEncoding { mnemonic }),
    }
}

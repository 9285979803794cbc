use std::fmt;

// Code word layout, MSB first:
//   bit | 7 6 5 4 | 3 2 1 0 |
//       | opcode  | operand |
// The operand field holds immediate bits for the Im forms and zeroes for the
// register-only forms.

/// Operand register of the TD4. `None` marks an operand slot that carries an
/// immediate (or nothing) rather than a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    None,
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Add,
    Out,
    In,
    Mov,
    Jmp,
    Jnc,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mnemonic::Add => "ADD",
            Mnemonic::Out => "OUT",
            Mnemonic::In => "IN",
            Mnemonic::Mov => "MOV",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jnc => "JNC",
        })
    }
}

/// One parsed source line. Immediates are kept as the binary digit string
/// written in source; the encoder folds them bit by bit, so their length is
/// not fixed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Add { reg: Register, im: String },
    Out { reg: Register, im: String },
    In { reg: Register },
    Mov { dst: Register, src: Register, im: String },
    Jmp { im: String },
    Jnc { im: String },
}

impl Instruction {
    pub fn mnemonic(&self) -> Mnemonic {
        match self {
            Instruction::Add { .. } => Mnemonic::Add,
            Instruction::Out { .. } => Mnemonic::Out,
            Instruction::In { .. } => Mnemonic::In,
            Instruction::Mov { .. } => Mnemonic::Mov,
            Instruction::Jmp { .. } => Mnemonic::Jmp,
            Instruction::Jnc { .. } => Mnemonic::Jnc,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("unknown mnemonic {text:?}")]
    UnknownMnemonic { text: String },
    #[error("{mnemonic}: invalid operand")]
    BadOperand { mnemonic: Mnemonic },
    #[error("{mnemonic}: missing immediate data")]
    MissingImmediate { mnemonic: Mnemonic },
    #[error("{mnemonic}: operand combination has no encoding")]
    NoEncoding { mnemonic: Mnemonic },
}

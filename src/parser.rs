use crate::instruction::{AsmError, Instruction, Mnemonic, Register};

// Each keyword includes the trailing space separating it from the operand
// field, so a bare mnemonic with nothing after it never matches.
const MNEMONICS: [(&str, Mnemonic); 6] = [
    ("ADD ", Mnemonic::Add),
    ("OUT ", Mnemonic::Out),
    ("IN ", Mnemonic::In),
    ("MOV ", Mnemonic::Mov),
    ("JMP ", Mnemonic::Jmp),
    ("JNC ", Mnemonic::Jnc),
];

fn eat(rest: &mut &str, keyword: &str) -> bool {
    match rest.strip_prefix(keyword) {
        Some(tail) => {
            *rest = tail;
            true
        }
        None => false,
    }
}

/// Takes the run of binary digits at the head of `rest`, stopping at the
/// first non-binary character or end of line. The run may be empty; callers
/// decide whether that is an error.
fn take_binary_run<'a>(rest: &mut &'a str) -> &'a str {
    let len = rest
        .find(|c: char| c != '0' && c != '1')
        .unwrap_or(rest.len());
    let (run, tail) = rest.split_at(len);
    *rest = tail;
    run
}

/// Parses one trimmed, non-comment source line into an [`Instruction`].
///
/// Matching is a greedy, ordered literal-prefix test: candidate operand
/// shapes are tried in a fixed order per mnemonic, the first matching
/// literal wins, and there is no backtracking once digits have been
/// consumed. Text left over after a fully matched shape is ignored.
pub fn parse_line(line: &str) -> Result<Instruction, AsmError> {
    let mut rest = line;
    let mnemonic = match MNEMONICS.iter().find(|(keyword, _)| eat(&mut rest, keyword)) {
        Some(&(_, mnemonic)) => mnemonic,
        None => {
            let text = line.split_whitespace().next().unwrap_or_default();
            return Err(AsmError::UnknownMnemonic {
                text: text.to_string(),
            });
        }
    };

    match mnemonic {
        Mnemonic::Add => {
            let reg = if eat(&mut rest, "A, ") {
                Register::A
            } else if eat(&mut rest, "B, ") {
                Register::B
            } else {
                return Err(AsmError::BadOperand { mnemonic });
            };
            let im = take_binary_run(&mut rest);
            if im.is_empty() {
                return Err(AsmError::MissingImmediate { mnemonic });
            }
            Ok(Instruction::Add {
                reg,
                im: im.to_string(),
            })
        }
        Mnemonic::Out => {
            // A bare B register wins over an immediate.
            if eat(&mut rest, "B") {
                return Ok(Instruction::Out {
                    reg: Register::B,
                    im: String::new(),
                });
            }
            let im = take_binary_run(&mut rest);
            if im.is_empty() {
                return Err(AsmError::BadOperand { mnemonic });
            }
            Ok(Instruction::Out {
                reg: Register::None,
                im: im.to_string(),
            })
        }
        Mnemonic::In => {
            let reg = if eat(&mut rest, "A") {
                Register::A
            } else if eat(&mut rest, "B") {
                Register::B
            } else {
                return Err(AsmError::BadOperand { mnemonic });
            };
            Ok(Instruction::In { reg })
        }
        Mnemonic::Mov => {
            if eat(&mut rest, "A, ") {
                if eat(&mut rest, "B") {
                    return Ok(Instruction::Mov {
                        dst: Register::A,
                        src: Register::B,
                        im: String::new(),
                    });
                }
                let im = take_binary_run(&mut rest);
                if im.is_empty() {
                    return Err(AsmError::BadOperand { mnemonic });
                }
                Ok(Instruction::Mov {
                    dst: Register::A,
                    src: Register::None,
                    im: im.to_string(),
                })
            } else if eat(&mut rest, "B, ") {
                if eat(&mut rest, "A") {
                    return Ok(Instruction::Mov {
                        dst: Register::B,
                        src: Register::A,
                        im: String::new(),
                    });
                }
                let im = take_binary_run(&mut rest);
                if im.is_empty() {
                    return Err(AsmError::BadOperand { mnemonic });
                }
                Ok(Instruction::Mov {
                    dst: Register::B,
                    src: Register::None,
                    im: im.to_string(),
                })
            } else {
                Err(AsmError::BadOperand { mnemonic })
            }
        }
        Mnemonic::Jmp => {
            let im = take_binary_run(&mut rest);
            if im.is_empty() {
                return Err(AsmError::MissingImmediate { mnemonic });
            }
            Ok(Instruction::Jmp { im: im.to_string() })
        }
        Mnemonic::Jnc => {
            let im = take_binary_run(&mut rest);
            if im.is_empty() {
                return Err(AsmError::MissingImmediate { mnemonic });
            }
            Ok(Instruction::Jnc { im: im.to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eat_advances_only_on_match() {
        let mut rest = "A, 0010";
        assert!(eat(&mut rest, "A, "));
        assert_eq!(rest, "0010");
        assert!(!eat(&mut rest, "B"));
        assert_eq!(rest, "0010");
    }

    #[test]
    fn binary_run_stops_at_first_other_character() {
        let mut rest = "0010 1100";
        assert_eq!(take_binary_run(&mut rest), "0010");
        assert_eq!(rest, " 1100");

        let mut rest = "0110";
        assert_eq!(take_binary_run(&mut rest), "0110");
        assert_eq!(rest, "");

        let mut rest = "x01";
        assert_eq!(take_binary_run(&mut rest), "");
        assert_eq!(rest, "x01");
    }
}

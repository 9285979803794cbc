pub mod asm;
pub mod encoder;
pub mod image;
pub mod instruction;
pub mod parser;

pub use asm::assemble;
pub use encoder::encode;
pub use image::{ImageWriter, OutputFormat};
pub use instruction::{AsmError, Instruction, Mnemonic, Register};
pub use parser::parse_line;

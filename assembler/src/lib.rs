pub mod assembler;
pub mod instructions;
pub mod parser;

pub use crate::assembler::{
    assemble, translate, translate_line, AssemblerError, Diagnostic, LineOutcome, Record, TranslationReport, IMAGE_HEADER,
};
pub use crate::instructions::{lookup, InstructionSpec, INSTRUCTIONS};
pub use crate::parser::{parse_hex_byte, tokenize, ParsedInstruction};

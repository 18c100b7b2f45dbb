use std::fmt;
use std::io::{BufRead, Write};

use crate::instructions;
use crate::parser;

/// Magic number at the start of every memory image ("NDR" with a length
/// prefix), checked by the simulator's loader.
pub const IMAGE_HEADER: [u8; 4] = [0x03, 0x4E, 0x44, 0x52];

#[derive(Clone, Debug, thiserror::Error)]
pub enum AssemblerError {
    #[error("error reading source input: {0}")]
    Input(String),
    #[error("error writing memory image: {0}")]
    Output(String),
}

/// A problem with one source line.  Diagnostics are advisory: the line is
/// dropped from the image and translation carries on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    UnknownMnemonic {
        lineno: usize,
        mnemonic: String,
        line: String,
    },
    MissingOperand {
        lineno: usize,
        mnemonic: String,
        line: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::UnknownMnemonic { lineno, mnemonic, line } => {
                write!(f, "error at line {}: unknown mnemonic {:?} in {:?}", lineno, mnemonic, line)
            },
            Diagnostic::MissingOperand { lineno, mnemonic, line } => {
                write!(f, "error at line {}: operand expected for {} in {:?}", lineno, mnemonic, line)
            },
        }
    }
}

/// The binary unit produced for one successfully translated line.
///
/// Every slot in the image is two bytes with a zero in the high position,
/// so a record is either `[opcode, 0x00]` or `[opcode, 0x00, operand, 0x00]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub opcode: u8,
    pub operand: Option<u8>,
}

impl Record {
    pub fn to_bytes(self) -> Vec<u8> {
        match self.operand {
            Some(operand) => vec![self.opcode, 0x00, operand, 0x00],
            None => vec![self.opcode, 0x00],
        }
    }
}

/// What translating one source line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Record(Record),
    Blank,
    Invalid(Diagnostic),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub records: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate a single source line, without touching any output.
///
/// The line number is only used in diagnostics; the assembler keeps no
/// address counter and every line is translated independently.
pub fn translate_line(lineno: usize, line: &str) -> LineOutcome {
    let parsed = match parser::tokenize(line) {
        Some(parsed) => parsed,
        None => return LineOutcome::Blank,
    };

    let spec = match instructions::lookup(parsed.mnemonic) {
        Some(spec) => spec,
        None => {
            return LineOutcome::Invalid(Diagnostic::UnknownMnemonic {
                lineno,
                mnemonic: parsed.mnemonic.to_string(),
                line: line.to_string(),
            });
        },
    };

    let operand = if spec.has_operand {
        match parsed.operand {
            Some(token) => Some(parser::parse_hex_byte(token)),
            None => {
                return LineOutcome::Invalid(Diagnostic::MissingOperand {
                    lineno,
                    mnemonic: parsed.mnemonic.to_string(),
                    line: line.to_string(),
                });
            },
        }
    } else {
        None
    };

    LineOutcome::Record(Record {
        opcode: spec.opcode,
        operand,
    })
}

/// Translate a whole program, streaming the memory image to `sink`.
///
/// The header goes out first, before any line is read, so even an empty
/// input produces a valid (if empty) image.  Records follow in source
/// order as they are produced; nothing is buffered.  Per-line problems are
/// logged, collected into the report, and never abort the run; only stream
/// I/O failures do.
pub fn translate<R: BufRead, W: Write>(input: R, sink: &mut W) -> Result<TranslationReport, AssemblerError> {
    sink.write_all(&IMAGE_HEADER)
        .map_err(|err| AssemblerError::Output(err.to_string()))?;

    let mut report = TranslationReport::default();
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|err| AssemblerError::Input(err.to_string()))?;
        match translate_line(index + 1, &line) {
            LineOutcome::Blank => {},
            LineOutcome::Invalid(diagnostic) => {
                log::error!("{}", diagnostic);
                report.diagnostics.push(diagnostic);
            },
            LineOutcome::Record(record) => {
                sink.write_all(&record.to_bytes())
                    .map_err(|err| AssemblerError::Output(err.to_string()))?;
                report.records += 1;
            },
        }
    }
    Ok(report)
}

/// Assemble a program held in memory, returning the image bytes.
pub fn assemble(text: &str) -> Result<(Vec<u8>, TranslationReport), AssemblerError> {
    let mut output = vec![];
    let report = translate(text.as_bytes(), &mut output)?;
    Ok((output, report))
}

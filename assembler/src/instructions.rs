/// One entry in the Neander instruction set.
///
/// The opcode is the value written to the memory image, and `has_operand`
/// says whether the instruction is followed by a one-byte address or
/// immediate.  It could be derived from the mnemonic, but keeping it as an
/// explicit field means adding an instruction is a one-line change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InstructionSpec {
    pub mnemonic: &'static str,
    pub opcode: u8,
    pub has_operand: bool,
}

impl InstructionSpec {
    const fn new(mnemonic: &'static str, opcode: u8, has_operand: bool) -> Self {
        Self {
            mnemonic,
            opcode,
            has_operand,
        }
    }
}

#[rustfmt::skip]
pub const INSTRUCTIONS: [InstructionSpec; 11] = [
    InstructionSpec::new("NOP", 0x00, false),
    InstructionSpec::new("STA", 0x10, true),
    InstructionSpec::new("LDA", 0x20, true),
    InstructionSpec::new("ADD", 0x30, true),
    InstructionSpec::new("OR",  0x40, true),
    InstructionSpec::new("AND", 0x50, true),
    InstructionSpec::new("NOT", 0x60, false),
    InstructionSpec::new("JMP", 0x80, true),
    InstructionSpec::new("JN",  0x90, true),
    InstructionSpec::new("JZ",  0xA0, true),
    InstructionSpec::new("HLT", 0xF0, false),
];

/// Look up a mnemonic in the instruction table.
///
/// The match is exact and case-sensitive.  An unknown mnemonic returns
/// `None`; deciding whether that is an error is left to the caller.
pub fn lookup(mnemonic: &str) -> Option<&'static InstructionSpec> {
    INSTRUCTIONS.iter().find(|spec| spec.mnemonic == mnemonic)
}

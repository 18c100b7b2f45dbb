/// A single source line broken into its interesting fields.
///
/// The leading line-number field has already been discarded by the time
/// one of these exists.  The borrows point into the line buffer owned by
/// the driver loop, so a `ParsedInstruction` only lives for one iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParsedInstruction<'a> {
    pub mnemonic: &'a str,
    pub operand: Option<&'a str>,
}

/// Split one source line into its line-number, mnemonic, and operand
/// fields, returning `None` if there is nothing to translate.
///
/// Lines look like `1 LDA 80`, with fields separated by runs of spaces or
/// tabs.  The first field is a line number that the assembler ignores
/// entirely (it is not validated or checked for order).  A blank line, or
/// a line containing only the line-number field, yields `None` and is
/// skipped without a diagnostic.  Anything after the operand field is
/// ignored.
pub fn tokenize(line: &str) -> Option<ParsedInstruction<'_>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut fields = line.split([' ', '\t']).filter(|field| !field.is_empty());

    let _lineno = fields.next()?;
    let mnemonic = fields.next()?;
    let operand = fields.next();

    Some(ParsedInstruction { mnemonic, operand })
}

/// Decode a hexadecimal operand token into a single byte.
///
/// This deliberately mirrors the permissive scanning of C's
/// `sscanf("%x")`, which the original toolchain used: an optional sign, an
/// optional `0x` prefix, then as many hex digits as appear before the
/// first non-digit.  Values above 0xFF are silently truncated to their low
/// byte, and a token with no hex digits at all decodes to 0.  Neither case
/// is reported as an error.
pub fn parse_hex_byte(token: &str) -> u8 {
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);

    let mut value: u32 = 0;
    for ch in rest.chars() {
        match ch.to_digit(16) {
            Some(digit) => value = value.wrapping_mul(16).wrapping_add(digit),
            None => break,
        }
    }

    if negative {
        value = value.wrapping_neg();
    }
    value as u8
}

use neander_asm::{assemble, translate, Diagnostic, IMAGE_HEADER};

#[test]
fn empty_input_produces_a_bare_header() {
    let (output, report) = assemble("").unwrap();
    assert_eq!(output, IMAGE_HEADER.to_vec());
    assert_eq!(report.records, 0);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn a_small_program_round_trips() {
    let source = "\
1 LDA 80
2 ADD 81
3 STA 82
4 HLT
";
    let (output, report) = assemble(source).unwrap();

    #[rustfmt::skip]
    let expected = vec![
        0x03, 0x4E, 0x44, 0x52,
        0x20, 0x00, 0x80, 0x00,
        0x30, 0x00, 0x81, 0x00,
        0x10, 0x00, 0x82, 0x00,
        0xF0, 0x00,
    ];
    assert_eq!(output, expected);
    assert_eq!(report.records, 4);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn bad_lines_are_dropped_but_later_lines_still_translate() {
    let source = "\
1 XYZ 10
2 LDA
3 JZ 04
";
    let (output, report) = assemble(source).unwrap();

    assert_eq!(output, vec![0x03, 0x4E, 0x44, 0x52, 0xA0, 0x00, 0x04, 0x00]);
    assert_eq!(report.records, 1);
    assert_eq!(report.diagnostics.len(), 2);
    assert!(matches!(report.diagnostics[0], Diagnostic::UnknownMnemonic { lineno: 1, .. }));
    assert!(matches!(report.diagnostics[1], Diagnostic::MissingOperand { lineno: 2, .. }));
}

#[test]
fn blank_and_number_only_lines_leave_no_trace() {
    let source = "\n   \n7\n8 NOP\n";
    let (output, report) = assemble(source).unwrap();

    assert_eq!(output, vec![0x03, 0x4E, 0x44, 0x52, 0x00, 0x00]);
    assert_eq!(report.records, 1);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn truncated_operands_keep_their_low_byte() {
    let (output, _) = assemble("1 LDA 100").unwrap();
    assert_eq!(output, vec![0x03, 0x4E, 0x44, 0x52, 0x20, 0x00, 0x00, 0x00]);
}

#[test]
fn records_stream_in_source_order() {
    let source = "1 JMP 00\n2 JN 01\n3 JZ 02\n";
    let mut output = vec![];
    let report = translate(source.as_bytes(), &mut output).unwrap();

    assert_eq!(report.records, 3);
    assert_eq!(&output[4..], &[0x80, 0x00, 0x00, 0x00, 0x90, 0x00, 0x01, 0x00, 0xA0, 0x00, 0x02, 0x00]);
}

#[test]
fn a_fully_invalid_program_still_succeeds() {
    let (output, report) = assemble("1 FOO\n2 BAR 10\n").unwrap();
    assert_eq!(output, IMAGE_HEADER.to_vec());
    assert_eq!(report.records, 0);
    assert_eq!(report.diagnostics.len(), 2);
}

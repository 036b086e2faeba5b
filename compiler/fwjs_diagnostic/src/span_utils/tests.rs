use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_single_line() {
    let source = "print(1);";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.offset_to_line_col(source, 6), (1, 7));
}

#[test]
fn test_offset_at_line_start() {
    let source = "a;\nb;\nc;";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(3), 2);
    assert_eq!(table.line_from_offset(6), 3);
    assert_eq!(table.offset_to_line_col(source, 6), (3, 1));
}

#[test]
fn test_offset_past_end_clamps() {
    let source = "x;";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 50), (1, 3));
}

#[test]
fn test_line_text_strips_newline() {
    let source = "var x = 1;\r\nprint(x);\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("var x = 1;"));
    assert_eq!(table.line_text(source, 2), Some("print(x);"));
    assert_eq!(table.line_text(source, 3), Some(""));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}

#[test]
fn test_column_counts_chars() {
    let source = "/* é */ x";
    let table = LineOffsetTable::build(source);
    // 'x' is at byte 9 but only 8 characters precede it
    assert_eq!(table.offset_to_line_col(source, 9), (1, 9));
}

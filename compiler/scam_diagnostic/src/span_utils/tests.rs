use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_single_line() {
    let source = "(+ 1 2)";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 3), (1, 4));
}

#[test]
fn test_multi_line() {
    let source = "(+ 1 2)\n(len \"abc\")\n(- 4)";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_from_offset(7), 1);
    assert_eq!(table.line_from_offset(8), 2);
    assert_eq!(table.offset_to_line_col(source, 20), (3, 1));
    assert_eq!(table.line_text(source, 2), Some("(len \"abc\")"));
    assert_eq!(table.line_text(source, 4), None);
}

#[test]
fn test_columns_count_chars() {
    let source = "(len \"é\") x";
    let table = LineOffsetTable::build(source);
    let x = u32::try_from(source.find('x').unwrap()).unwrap();
    assert_eq!(table.offset_to_line_col(source, x), (1, 11));
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 99), (1, 3));
}

#[test]
fn test_crlf_line_text() {
    let source = "a\r\nb";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("a"));
    assert_eq!(table.line_text(source, 2), Some("b"));
}

#[test]
fn test_line_number_helper() {
    let source = "1\n2\n3";
    assert_eq!(line_number(source, Span::new(4, 5)), 3);
    assert_eq!(table_start(source, 0), None);
}

fn table_start(source: &str, line: u32) -> Option<u32> {
    LineOffsetTable::build(source).line_start_offset(line)
}

use super::*;

#[test]
fn test_position_ordering() {
    let a = SourcePosition::new(1, 0);
    let b = SourcePosition::new(1, 4);
    let c = SourcePosition::new(2, 0);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn test_lsp_position_is_zero_based() {
    let pos = SourcePosition::new(10, 4);
    assert_eq!(pos.as_lsp_position(), (9, 4));
}

#[test]
fn test_region_spans() {
    let region = SourceRegion::from_tuples((2, 3), (2, 10));
    assert_eq!(region.row_span(), 0);
    assert_eq!(region.col_span(), 7);
    assert!(region.is_single_row());

    let multi = SourceRegion::from_tuples((1, 8), (3, 2));
    assert_eq!(multi.row_span(), 2);
    assert!(!multi.is_single_row());
}

#[test]
fn test_line_index_first_line() {
    let index = LineIndex::new("abc\ndef\n");
    assert_eq!(index.position(TextSize::from(0)), SourcePosition::new(1, 0));
    assert_eq!(index.position(TextSize::from(2)), SourcePosition::new(1, 2));
}

#[test]
fn test_line_index_subsequent_lines() {
    let index = LineIndex::new("abc\ndef\nghi");
    assert_eq!(index.position(TextSize::from(4)), SourcePosition::new(2, 0));
    assert_eq!(index.position(TextSize::from(7)), SourcePosition::new(2, 3));
    assert_eq!(index.position(TextSize::from(8)), SourcePosition::new(3, 0));
}

#[test]
fn test_line_index_end_of_source() {
    let source = "x = 1\n";
    let index = LineIndex::new(source);
    let end = index.position(TextSize::from(source.len() as u32));
    assert_eq!(end, SourcePosition::new(2, 0));
}

#[test]
fn test_region_from_range() {
    let index = LineIndex::new("a\nbb\nccc\n");
    let range = TextRange::new(TextSize::from(2u32), TextSize::from(4u32));
    let region = index.region(range);
    assert_eq!(region.start, SourcePosition::new(2, 0));
    assert_eq!(region.end, SourcePosition::new(2, 2));
}

#[test]
fn test_empty_source() {
    let index = LineIndex::new("");
    assert_eq!(index.position(TextSize::from(0)), SourcePosition::new(1, 0));
}

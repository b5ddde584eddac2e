use dbgsym_core::model::LinePos;
use dbgsym_core::stream::{ByteCursor, DebugError};

#[test]
fn integers_are_big_endian() {
    let data = [0x12, 0x34, 0x56, 0xAB, 0xCD, 0x7F];
    let mut cursor = ByteCursor::new(&data);
    assert_eq!(cursor.read_u24().expect("u24"), 0x0012_3456);
    assert_eq!(cursor.read_u16().expect("u16"), 0xABCD);
    assert_eq!(cursor.read_u8().expect("u8"), 0x7F);
    assert!(cursor.at_end());
}

#[test]
fn line_pos_unpacks_file_line_column() {
    let data = [3, 0x01, 0x02, 9];
    let mut cursor = ByteCursor::new(&data);
    assert_eq!(cursor.read_line_pos().expect("linepos"), LinePos::new(3, 0x0102, 9));
}

#[test]
fn cstring_stops_at_terminator() {
    let data = b"Main\0\0rest";
    let mut cursor = ByteCursor::new(data);
    assert_eq!(cursor.read_cstring().expect("first"), "Main");
    assert_eq!(cursor.read_cstring().expect("empty"), "");
    assert_eq!(cursor.position(), 6);
}

#[test]
fn cstring_decodes_high_bytes_as_latin1() {
    let data = [b'c', 0xE9, 0];
    let mut cursor = ByteCursor::new(&data);
    assert_eq!(cursor.read_cstring().expect("latin1"), "c\u{e9}");
}

#[test]
fn unterminated_cstring_is_end_of_stream() {
    let data = b"abc";
    let mut cursor = ByteCursor::new(data);
    let err = cursor.read_cstring().unwrap_err();
    assert_eq!(err, DebugError::UnexpectedEndOfStream { offset: 0, needed: 4, remaining: 3 });
}

#[test]
fn short_read_reports_offset_and_does_not_advance() {
    let data = [1, 2, 3];
    let mut cursor = ByteCursor::new(&data);
    cursor.read_u8().expect("u8");
    let err = cursor.read_u24().unwrap_err();
    assert_eq!(err, DebugError::UnexpectedEndOfStream { offset: 1, needed: 3, remaining: 2 });
    assert_eq!(err.offset(), Some(1));
    assert_eq!(cursor.position(), 1);
}

use crate::env::Size;

use super::{ErrorKind, IStr, NonEmpty};

fn input(data: &'static str) -> IStr {
    IStr::new(data.as_bytes(), Size::ZERO)
}

#[test]
fn test_lines_keep_offsets() {
    let mut p = input("abc\nde\n\nf");

    let a = p.try_line::<IStr>().unwrap().unwrap();
    assert_eq!(a.as_data(), b"abc");
    assert_eq!(a.index().get(), 0);

    let b = p.try_line::<IStr>().unwrap().unwrap();
    assert_eq!(b.as_data(), b"de");
    assert_eq!(b.index().get(), 4);

    let c = p.try_line::<IStr>().unwrap().unwrap();
    assert!(c.is_empty());
    assert_eq!(c.index().get(), 7);

    let d = p.try_line::<IStr>().unwrap().unwrap();
    assert_eq!(d.as_data(), b"f");
    assert_eq!(d.index().get(), 8);

    assert!(p.try_line::<IStr>().unwrap().is_none());
    assert!(p.is_empty());
}

#[test]
fn test_trailing_newline_is_not_a_line() {
    let mut p = input("one\n");
    assert_eq!(p.try_line::<&[u8]>().unwrap(), Some(&b"one"[..]));
    assert_eq!(p.try_line::<&[u8]>().unwrap(), None);
}

#[test]
fn test_non_empty_stops_at_blank_line() {
    let mut p = input("one\n\ntwo\n");

    let Some(NonEmpty(line)) = p.try_line::<NonEmpty<&str>>().unwrap() else {
        panic!("expected a line");
    };

    assert_eq!(line, "one");
    assert!(p.try_line::<NonEmpty<&str>>().unwrap().is_none());
}

#[test]
fn test_line_at_eof() {
    let mut p = input("");
    let error = p.line::<&str>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedLine));
}

#[test]
fn test_not_utf8_span() {
    static DATA: &[u8] = b"ok\n\xff\xfe\n";

    let mut p = IStr::new(DATA, Size::ZERO);
    assert_eq!(p.line::<&str>().unwrap(), "ok");

    let error = p.line::<&str>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotUtf8));
    assert_eq!(Size::usize_range(error.span()), 3..5);
}

#[test]
fn test_error_relative_to_line() {
    let mut p = input("first\nsecond");
    p.line::<&[u8]>().unwrap();
    let line = p.line::<IStr>().unwrap();
    let error = line.error(1..3, ErrorKind::NotInteger("ec"));
    assert_eq!(Size::usize_range(error.span()), 7..9);
}

use lib::env::Size;
use lib::input::{ErrorKind, IStr};
use lib::prelude::ByteSlice;

use super::{
    scan_numbers, scan_symbols, Error, Gear, NumberToken, Schematic, SymbolClass, SymbolPosition,
    Window,
};

const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

fn schematic(input: &'static str) -> Schematic {
    IStr::new(input.as_bytes(), Size::ZERO)
        .next::<Schematic>()
        .unwrap()
}

fn token(row: usize, start: usize, end: usize, value: u64) -> NumberToken {
    NumberToken {
        row,
        start,
        end,
        value,
    }
}

#[test]
fn test_sample() {
    let s = schematic(SAMPLE);
    assert_eq!(s.rows_len(), 10);
    assert_eq!(s.part_number_sum().unwrap(), 4361);
    assert_eq!(s.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 467835);
}

#[test]
fn test_sample_head() {
    let rows: [&[u8]; 5] = [
        b"467..114..",
        b"...*......",
        b"..35..633.",
        b"......#...",
        b"617*......",
    ];

    let s = Schematic::from_rows(rows).unwrap();
    let parts = s.part_numbers().map(|t| t.value).collect::<Vec<_>>();
    assert_eq!(parts, [467, 35, 633, 617]);
    assert_eq!(s.part_number_sum().unwrap(), 1752);
}

#[test]
fn test_shipped_input() {
    let s = Schematic::from_rows(include_bytes!("../../inputs/d03.txt").lines()).unwrap();
    assert_eq!(s.part_number_sum().unwrap(), 4361);
    assert_eq!(s.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 467835);
}

#[test]
fn test_sample_part_numbers() {
    let s = schematic(SAMPLE);

    let parts = s.part_numbers().map(|t| t.value).collect::<Vec<_>>();
    assert_eq!(parts, [467, 35, 633, 617, 592, 755, 664, 598]);

    let skipped = s
        .numbers()
        .filter(|t| !s.is_part_number(t))
        .map(|t| t.value)
        .collect::<Vec<_>>();

    assert_eq!(skipped, [114, 58]);
}

#[test]
fn test_sample_gears() {
    let s = schematic(SAMPLE);
    let gears = s.gears(SymbolClass::GEAR).collect::<Vec<_>>();

    assert_eq!(
        gears,
        [
            Gear {
                position: SymbolPosition { row: 1, column: 3 },
                numbers: [467, 35],
            },
            Gear {
                position: SymbolPosition { row: 8, column: 5 },
                numbers: [755, 598],
            },
        ]
    );

    assert_eq!(gears[0].ratio(), Some(16345));

    let lonely = s.adjacent_numbers::<3>(SymbolPosition { row: 4, column: 3 });
    assert_eq!(&lonely[..], &[617]);
}

#[test]
fn test_sample_is_deterministic() {
    let a = schematic(SAMPLE);
    let b = schematic(SAMPLE);
    assert_eq!(a.part_number_sum().unwrap(), b.part_number_sum().unwrap());
    assert_eq!(
        a.gear_ratio_sum(SymbolClass::GEAR).unwrap(),
        b.gear_ratio_sum(SymbolClass::GEAR).unwrap()
    );
}

#[test]
fn test_empty_input() {
    let s = schematic("");
    assert_eq!(s.rows_len(), 0);
    assert_eq!(s.part_number_sum().unwrap(), 0);
    assert_eq!(s.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 0);
}

#[test]
fn test_scan_symbols() {
    let row = b"1.#*. $9*";
    assert_eq!(scan_symbols(row, SymbolClass::Any), [2, 3, 6, 8]);
    assert_eq!(scan_symbols(row, SymbolClass::GEAR), [3, 8]);
    assert!(scan_symbols(b"", SymbolClass::Any).is_empty());
    assert!(scan_symbols(b"123 ..\t", SymbolClass::Any).is_empty());
}

#[test]
fn test_markers_never_match_digits_or_gaps() {
    assert!(scan_symbols(b"1.1.", SymbolClass::Marker(b'.')).is_empty());
    assert!(scan_symbols(b"1.1.", SymbolClass::Marker(b'1')).is_empty());
    assert!(scan_symbols(b"  ", SymbolClass::Marker(b' ')).is_empty());
}

#[test]
fn test_scan_numbers() {
    assert_eq!(
        scan_numbers(3, b"467..114..").unwrap(),
        [token(3, 0, 2, 467), token(3, 5, 7, 114)]
    );

    assert_eq!(
        scan_numbers(0, b"..007*12").unwrap(),
        [token(0, 2, 4, 7), token(0, 6, 7, 12)]
    );

    assert!(scan_numbers(0, b"...*...").unwrap().is_empty());
    assert!(scan_numbers(0, b"").unwrap().is_empty());
}

#[test]
fn test_scan_wide_numbers() {
    let tokens = scan_numbers(0, b"18446744073709551615").unwrap();
    assert_eq!(tokens, [token(0, 0, 19, u64::MAX)]);

    let tokens = scan_numbers(0, b".4294967296.").unwrap();
    assert_eq!(tokens, [token(0, 1, 10, 4294967296)]);
}

#[test]
fn test_scan_overflow() {
    let error = scan_numbers(2, b"..18446744073709551616..").unwrap_err();

    assert!(matches!(
        error,
        Error::Overflow {
            row: 2,
            start: 2,
            end: 21
        }
    ));
}

#[test]
fn test_overflow_reports_span() {
    let mut input = IStr::new(b"1.\n..99999999999999999999*\n", Size::ZERO);
    let error = input.next::<Schematic>().unwrap_err();

    let ErrorKind::NotInteger(digits) = error.kind() else {
        panic!("unexpected error: {error}");
    };

    assert_eq!(*digits, "99999999999999999999");
    let span = error.span();
    assert_eq!((span.start.get(), span.end.get()), (5, 25));
}

#[test]
fn test_window_clamps_at_start() {
    let t = token(0, 0, 2, 467);
    assert_eq!(t.window(10), Some(Window { start: 0, end: 3 }));
}

#[test]
fn test_window_clamps_at_end() {
    let t = token(0, 7, 9, 633);
    assert_eq!(t.window(10), Some(Window { start: 6, end: 9 }));
    assert_eq!(t.window(0), None);
}

#[test]
fn test_window_against_shorter_row_is_empty() {
    let t = token(0, 6, 7, 12);
    let window = t.window(1).unwrap();
    assert!(!window.contains(0));
    assert!(!window.overlaps(&[0]));
}

#[test]
fn test_window_contains() {
    let window = Window { start: 2, end: 4 };
    assert!(!window.contains(1));
    assert!(window.contains(2));
    assert!(window.contains(4));
    assert!(!window.contains(5));
}

#[test]
fn test_edge_columns_are_adjacent() {
    let s = schematic("12.\n..#\n");
    assert_eq!(s.part_number_sum().unwrap(), 12);

    let s = schematic(".12\n#..\n");
    assert_eq!(s.part_number_sum().unwrap(), 12);

    let s = schematic("#12\n");
    assert_eq!(s.part_number_sum().unwrap(), 12);

    let s = schematic("12#\n");
    assert_eq!(s.part_number_sum().unwrap(), 12);
}

#[test]
fn test_distant_symbols_are_not_adjacent() {
    let s = schematic("12..\n...#\n");
    assert_eq!(s.part_number_sum().unwrap(), 0);

    let s = schematic("12\n..\n#.\n");
    assert_eq!(s.part_number_sum().unwrap(), 0);

    let s = schematic("..12\n#...\n");
    assert_eq!(s.part_number_sum().unwrap(), 0);
}

#[test]
fn test_ragged_rows_clamp_to_tested_row() {
    // The symbol sits past the end of the row holding the number.
    let s = schematic("12\n..#\n");
    assert_eq!(s.part_number_sum().unwrap(), 12);

    let s = schematic("....12\n....#\n");
    assert_eq!(s.part_number_sum().unwrap(), 12);

    let s = schematic("......12\n#\n");
    assert_eq!(s.part_number_sum().unwrap(), 0);

    let s = schematic("12\n\n#\n");
    assert_eq!(s.part_number_sum().unwrap(), 0);
}

#[test]
fn test_whitespace_is_not_a_symbol() {
    let s = schematic("12 \n   \n");
    assert_eq!(s.part_number_sum().unwrap(), 0);
}

#[test]
fn test_number_counted_once() {
    let s = schematic("#.#\n.5.\n#.#\n");
    assert_eq!(s.part_number_sum().unwrap(), 5);
}

#[test]
fn test_marker_needs_exactly_two_numbers() {
    let none = schematic("...\n.*.\n...\n");
    assert_eq!(none.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 0);

    let one = schematic("2..\n.*.\n...\n");
    assert_eq!(one.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 0);

    let two = schematic("2..\n.*.\n..3\n");
    assert_eq!(two.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 6);

    let three = schematic("2.4\n.*.\n..3\n");
    assert_eq!(three.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 0);
    assert_eq!(three.gears(SymbolClass::GEAR).count(), 0);
}

#[test]
fn test_marker_numbers_on_same_row() {
    let s = schematic("10*20\n");
    assert_eq!(s.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 200);
}

#[test]
fn test_markers_on_first_and_last_row() {
    let s = schematic(".*.\n2.3\n.*.\n");
    assert_eq!(s.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 12);
    assert_eq!(s.gears(SymbolClass::GEAR).count(), 2);
}

#[test]
fn test_other_symbols_are_not_gears() {
    let s = schematic("2..\n.#.\n..3\n");
    assert_eq!(s.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 0);
    assert_eq!(s.gear_ratio_sum(SymbolClass::Marker(b'#')).unwrap(), 6);
    assert_eq!(s.part_number_sum().unwrap(), 5);
}

#[test]
fn test_symbols_by_class() {
    let s = schematic("*.#\n..*\n");

    let all = s.symbols(SymbolClass::Any).collect::<Vec<_>>();
    assert_eq!(
        all,
        [
            SymbolPosition { row: 0, column: 0 },
            SymbolPosition { row: 0, column: 2 },
            SymbolPosition { row: 1, column: 2 },
        ]
    );

    let gears = s.symbols(SymbolClass::GEAR).collect::<Vec<_>>();
    assert_eq!(
        gears,
        [
            SymbolPosition { row: 0, column: 0 },
            SymbolPosition { row: 1, column: 2 },
        ]
    );
}

#[test]
fn test_gear_ratio_overflow() {
    let s = schematic("4294967296*4294967296\n");

    assert!(matches!(
        s.gear_ratio_sum(SymbolClass::GEAR),
        Err(Error::RatioOverflow(SymbolPosition { row: 0, column: 10 }))
    ));
}

#[test]
fn test_part_sum_overflow() {
    let s = schematic("18446744073709551615#1\n");
    assert!(matches!(s.part_number_sum(), Err(Error::SumOverflow)));
}

#[test]
fn test_from_rows() {
    let rows: [&[u8]; 3] = [b"467..114..", b"...*......", b"..35..633."];
    let s = Schematic::from_rows(rows).unwrap();
    // 633 is only adjacent to a symbol on the row which was left out.
    assert_eq!(s.part_number_sum().unwrap(), 467 + 35);
    assert_eq!(s.gear_ratio_sum(SymbolClass::GEAR).unwrap(), 16345);
}

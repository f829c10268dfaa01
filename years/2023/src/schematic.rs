//! Engine schematics: numbers and the symbols next to them.
//!
//! A schematic is a grid of rows made up of digits, gaps (`.`), whitespace and
//! symbols. Every maximal run of digits on a row is a [`NumberToken`]. A token
//! is adjacent to a symbol if the symbol is on the same row or one of its
//! immediate neighbours, and lies within the token's [`Window`].
//!
//! Adjacency is never materialized as a grid. Every row is scanned once for
//! its symbols and tokens, after which adjacency is tested through interval
//! overlap against at most three rows.

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::Range;

use lib::input::{ErrorKind, FromInput, IStr, IStrError};
use lib::prelude::{anyhow, ArrayVec};
use log::debug;
use thiserror::Error;

/// Errors raised while scanning or aggregating a schematic.
#[derive(Debug, Error)]
pub enum Error {
    /// A run of digits which doesn't fit in a `u64`.
    #[error("number at row {row}, columns {start}..={end} does not fit in 64 bits")]
    Overflow { row: usize, start: usize, end: usize },
    /// The sum of all part numbers does not fit in a `u64`.
    #[error("sum of part numbers overflows")]
    SumOverflow,
    /// The ratio of the gear at the given position does not fit in a `u64`.
    #[error("ratio of gear at {0} overflows")]
    RatioOverflow(SymbolPosition),
}

/// The class of a single byte in a schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// An ASCII digit, carrying its value.
    Digit(u8),
    /// The gap character `.`.
    Gap,
    /// ASCII whitespace.
    Blank,
    /// Anything else.
    Symbol(u8),
}

impl Cell {
    /// Classify a byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2023::schematic::Cell;
    ///
    /// assert_eq!(Cell::classify(b'7'), Cell::Digit(7));
    /// assert_eq!(Cell::classify(b'.'), Cell::Gap);
    /// assert_eq!(Cell::classify(b' '), Cell::Blank);
    /// assert_eq!(Cell::classify(b'#'), Cell::Symbol(b'#'));
    /// ```
    #[inline]
    pub fn classify(b: u8) -> Self {
        match b {
            b'0'..=b'9' => Cell::Digit(b - b'0'),
            b'.' => Cell::Gap,
            b if b.is_ascii_whitespace() => Cell::Blank,
            b => Cell::Symbol(b),
        }
    }
}

/// Which symbols to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// Any symbol.
    Any,
    /// Only the given symbol.
    Marker(u8),
}

impl SymbolClass {
    /// The marker used for gears.
    pub const GEAR: Self = Self::Marker(b'*');

    /// Test if the given byte belongs to this class.
    ///
    /// A marker only ever matches symbols, so digits and gaps never match
    /// regardless of the marker.
    #[inline]
    pub fn matches(self, b: u8) -> bool {
        match (self, Cell::classify(b)) {
            (SymbolClass::Any, Cell::Symbol(..)) => true,
            (SymbolClass::Marker(m), Cell::Symbol(s)) => m == s,
            _ => false,
        }
    }
}

/// The position of a single symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolPosition {
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A maximal run of digits on a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberToken {
    pub row: usize,
    /// Column of the first digit.
    pub start: usize,
    /// Column of the last digit, inclusive.
    pub end: usize,
    pub value: u64,
}

impl NumberToken {
    /// The window this token occupies when tested against a row of length
    /// `len`.
    ///
    /// Returns `None` for empty rows, since they have no columns to test.
    #[inline]
    pub fn window(&self, len: usize) -> Option<Window> {
        let last = len.checked_sub(1)?;

        Some(Window {
            start: self.start.saturating_sub(1),
            end: self.end.saturating_add(1).min(last),
        })
    }
}

/// An inclusive range of columns.
///
/// A window with `start > end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Test if the given column is inside of the window.
    #[inline]
    pub fn contains(&self, column: usize) -> bool {
        self.start <= column && column <= self.end
    }

    /// Test if any of the given columns are inside the window.
    ///
    /// `columns` must be sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2023::schematic::Window;
    ///
    /// let window = Window { start: 2, end: 5 };
    /// assert!(window.overlaps(&[0, 3, 9]));
    /// assert!(!window.overlaps(&[0, 1, 6]));
    /// assert!(!window.overlaps(&[]));
    /// ```
    #[inline]
    pub fn overlaps(&self, columns: &[usize]) -> bool {
        let n = columns.partition_point(|&c| c < self.start);
        columns.get(n).is_some_and(|&c| c <= self.end)
    }
}

/// Scan a row for the columns of the given class of symbols, in ascending
/// order.
pub fn scan_symbols(row: &[u8], class: SymbolClass) -> Vec<usize> {
    row.iter()
        .enumerate()
        .filter(|&(_, &b)| class.matches(b))
        .map(|(column, _)| column)
        .collect()
}

/// Scan a row for number tokens, ordered by their start column.
pub fn scan_numbers(row_index: usize, row: &[u8]) -> Result<Vec<NumberToken>, Error> {
    let mut output = Vec::new();
    let mut current: Option<NumberToken> = None;

    for (column, &b) in row.iter().enumerate() {
        let Cell::Digit(d) = Cell::classify(b) else {
            output.extend(current.take());
            continue;
        };

        let token = current.get_or_insert(NumberToken {
            row: row_index,
            start: column,
            end: column,
            value: 0,
        });

        let start = token.start;

        token.end = column;
        token.value = token
            .value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or_else(|| Error::Overflow {
                row: row_index,
                start,
                end: overflow_end(row, column),
            })?;
    }

    output.extend(current);
    Ok(output)
}

/// Find the last column of the digit run which overflowed at `column`.
fn overflow_end(row: &[u8], column: usize) -> usize {
    let rest = row.get(column..).unwrap_or_default();
    let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    column + len.saturating_sub(1)
}

/// A marker with exactly two adjacent numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gear {
    pub position: SymbolPosition,
    pub numbers: [u64; 2],
}

impl Gear {
    /// The product of the two adjacent numbers, or `None` on overflow.
    #[inline]
    pub fn ratio(&self) -> Option<u64> {
        let [a, b] = self.numbers;
        a.checked_mul(b)
    }
}

/// The scanned contents of a single row.
#[derive(Debug)]
struct Row {
    len: usize,
    /// Columns of every symbol, ascending.
    symbols: Vec<usize>,
    /// The symbol at each column in `symbols`.
    glyphs: Vec<u8>,
    numbers: Vec<NumberToken>,
}

impl Row {
    fn scan(index: usize, data: &[u8]) -> Result<Self, Error> {
        let symbols = scan_symbols(data, SymbolClass::Any);
        let glyphs = symbols.iter().filter_map(|&c| data.get(c).copied()).collect();

        Ok(Self {
            len: data.len(),
            symbols,
            glyphs,
            numbers: scan_numbers(index, data)?,
        })
    }
}

/// A scanned schematic.
#[derive(Debug)]
pub struct Schematic {
    rows: Vec<Row>,
}

impl Schematic {
    /// Scan the given rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2023::schematic::{Schematic, SymbolClass};
    ///
    /// let schematic = Schematic::from_rows([&b"12.."[..], &b"..*3"[..]])?;
    /// assert_eq!(schematic.part_number_sum()?, 15);
    /// assert_eq!(schematic.gear_ratio_sum(SymbolClass::GEAR)?, 36);
    /// # Ok::<_, y2023::schematic::Error>(())
    /// ```
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, data)| Row::scan(index, data))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    /// Number of rows in the schematic.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over every number token, row by row.
    pub fn numbers(&self) -> impl Iterator<Item = &NumberToken> + '_ {
        self.rows.iter().flat_map(|row| row.numbers.iter())
    }

    /// Iterate over the position of every symbol of the given class.
    pub fn symbols(&self, class: SymbolClass) -> impl Iterator<Item = SymbolPosition> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, r)| {
            r.symbols
                .iter()
                .zip(&r.glyphs)
                .filter(move |&(_, &b)| class.matches(b))
                .map(move |(&column, _)| SymbolPosition { row, column })
        })
    }

    /// The index range of rows neighbouring `row`, including itself.
    #[inline]
    fn neighbours(&self, row: usize) -> Range<usize> {
        row.saturating_sub(1)..row.saturating_add(2).min(self.rows.len())
    }

    /// Test if the given token is adjacent to any symbol.
    pub fn is_part_number(&self, token: &NumberToken) -> bool {
        let Some(rows) = self.rows.get(self.neighbours(token.row)) else {
            return false;
        };

        rows.iter().any(|row| {
            token
                .window(row.len)
                .is_some_and(|window| window.overlaps(&row.symbols))
        })
    }

    /// Iterate over all tokens adjacent to at least one symbol.
    pub fn part_numbers(&self) -> impl Iterator<Item = &NumberToken> + '_ {
        self.numbers().filter(move |token| self.is_part_number(token))
    }

    /// Sum of all numbers adjacent to at least one symbol.
    pub fn part_number_sum(&self) -> Result<u64, Error> {
        self.part_numbers()
            .try_fold(0u64, |sum, token| sum.checked_add(token.value))
            .ok_or(Error::SumOverflow)
    }

    /// Collect up to `N` numbers adjacent to the symbol at the given
    /// position.
    ///
    /// Collection stops once `N` numbers have been found, so to tell whether
    /// there are exactly `n` adjacent numbers collect `n + 1`.
    pub fn adjacent_numbers<const N: usize>(&self, position: SymbolPosition) -> ArrayVec<u64, N> {
        let mut output = ArrayVec::<u64, N>::new();

        let Some(len) = self.rows.get(position.row).map(|row| row.len) else {
            return output;
        };

        let Some(rows) = self.rows.get(self.neighbours(position.row)) else {
            return output;
        };

        let adjacent = rows
            .iter()
            .flat_map(|row| row.numbers.iter())
            .filter(|token| {
                token
                    .window(len)
                    .is_some_and(|window| window.contains(position.column))
            });

        for token in adjacent {
            if output.try_push(token.value).is_err() {
                break;
            }
        }

        output
    }

    /// Iterate over every marker of the given class which has exactly two
    /// adjacent numbers.
    pub fn gears(&self, class: SymbolClass) -> impl Iterator<Item = Gear> + '_ {
        self.symbols(class).filter_map(move |position| {
            let numbers = self.adjacent_numbers::<3>(position);

            let [a, b] = numbers[..] else {
                debug!("{position}: {} adjacent number(s), not a gear", numbers.len());
                return None;
            };

            Some(Gear {
                position,
                numbers: [a, b],
            })
        })
    }

    /// Sum of the ratios of every gear.
    pub fn gear_ratio_sum(&self, class: SymbolClass) -> Result<u64, Error> {
        let mut sum = 0u64;

        for gear in self.gears(class) {
            let ratio = gear.ratio().ok_or(Error::RatioOverflow(gear.position))?;
            sum = sum.checked_add(ratio).ok_or(Error::SumOverflow)?;
        }

        Ok(sum)
    }
}

impl FromInput for Schematic {
    /// Scan every remaining line of input as a row.
    ///
    /// Errors are reported against the span of the offending row.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>, IStrError> {
        let mut rows = Vec::new();

        while let Some(line) = p.try_line::<IStr>()? {
            let index = rows.len();

            let row = Row::scan(index, line.as_data()).map_err(|error| match error {
                Error::Overflow { start, end, .. } => {
                    let span = start..end.saturating_add(1);
                    let digits = line.as_data().get(span.clone()).unwrap_or_default();
                    let digits = core::str::from_utf8(digits).unwrap_or_default();
                    line.error(span, ErrorKind::NotInteger(digits))
                }
                error => line.error(0..line.len(), ErrorKind::Custom(anyhow!(error))),
            })?;

            debug!(
                "row {index}: {} symbol(s), {} number(s)",
                row.symbols.len(),
                row.numbers.len()
            );

            rows.push(row);
        }

        Ok(Some(Self { rows }))
    }
}

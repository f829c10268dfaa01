//! Calibration values hidden in lines of text.

use lib::prelude::*;
use log::debug;

/// Spelled out digits, indexed by their value minus one.
pub static DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// How digits are read from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Only ASCII digits.
    Digits,
    /// ASCII digits and the words in [`DIGIT_WORDS`].
    DigitsAndWords,
}

/// Match a spelled out digit at the start of `tail`.
///
/// # Examples
///
/// ```
/// use y2023::calibration::word_digit;
///
/// assert_eq!(word_digit(b"eightwo"), Some(8));
/// assert_eq!(word_digit(b"twone"), Some(2));
/// assert_eq!(word_digit(b"zero"), None);
/// ```
pub fn word_digit(tail: &[u8]) -> Option<u32> {
    DIGIT_WORDS
        .iter()
        .zip(1..)
        .find_map(|(word, d)| tail.starts_with(word.as_bytes()).then_some(d))
}

/// Iterate over every digit in a line, in order.
///
/// Words may overlap, so `eightwo` produces both `8` and `2`.
pub fn digits(line: &[u8], reading: Reading) -> impl Iterator<Item = u32> + '_ {
    (0..line.len()).filter_map(move |n| {
        let tail = line.get(n..)?;
        let &b = tail.first()?;

        if b.is_ascii_digit() {
            return Some(u32::from(b - b'0'));
        }

        match reading {
            Reading::Digits => None,
            Reading::DigitsAndWords => word_digit(tail),
        }
    })
}

/// The calibration value of a line: its first and last digit read as a two
/// digit number.
///
/// A line without digits has the value 0.
pub fn calibration_value(line: &[u8], reading: Reading) -> u32 {
    let mut it = digits(line, reading);

    let Some(first) = it.next() else {
        return 0;
    };

    let last = it.last().unwrap_or(first);
    first * 10 + last
}

/// Sum the calibration values of every line, reading only digits and then
/// digits and words.
pub fn calibration_sums(mut input: IStr) -> Result<(u32, u32)> {
    let mut o1 = 0u32;
    let mut o2 = 0u32;

    while let Some(line) = input.try_line::<&BStr>()? {
        let a = calibration_value(line, Reading::Digits);
        let b = calibration_value(line, Reading::DigitsAndWords);
        debug!("{line}: {a} {b}");

        o1 = o1.checked_add(a).context("part one overflow")?;
        o2 = o2.checked_add(b).context("part two overflow")?;
    }

    Ok((o1, o2))
}

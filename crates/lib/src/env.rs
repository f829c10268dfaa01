//! Loading input and mapping byte offsets back into it.

use core::ops::Range;

use anyhow::{anyhow, Context};

use crate::cli::error::LineCol;
use crate::input::{IStr, NL};


/// A byte offset into the input being processed.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    /// Get the raw offset.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column of the start of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let start = span.start.0;

    let Some(head) = data.get(..start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, head).count();
    let line_start = memchr::memrchr(NL, head).map_or(0, |n| n + 1);
    LineCol::new(line, start - line_start)
}

/// Read the input at `read_path`, reporting errors against `path`.
///
/// The contents are leaked since they live for the remainder of the process
/// anyway, which lets every parsed value borrow from it as `'static`.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    let data = std::fs::read(read_path).with_context(|| anyhow!(path))?;
    log::debug!("{path}: read {} bytes", data.len());
    Ok(IStr::new(Box::leak(data.into_boxed_slice()), Size::ZERO))
}

/// Load the named input file from the `inputs` directory of the calling
/// crate.
///
/// Evaluates to a tuple of the input and the path used in diagnostics.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::env::input(path, read_path)?, path)
    }};
}

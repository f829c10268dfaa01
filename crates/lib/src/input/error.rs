use core::fmt;
use core::ops::Range;

use crate::env::Size;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedLine,
    UnexpectedEof,
    Custom(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::Custom(error) => error.fmt(f),
        }
    }
}

impl From<anyhow::Error> for ErrorKind {
    #[inline]
    fn from(error: anyhow::Error) -> Self {
        Self::Custom(error)
    }
}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span of input this error refers to.
    #[inline]
    pub fn span(&self) -> Range<Size> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = Size::usize_range(self.span.clone());
        write!(f, "{} (at {:?})", self.kind, span)
    }
}

impl std::error::Error for IStrError {}

//! Support library for the daily solutions.
//!
//! Each solution is a binary annotated with [`prelude::entry`], which takes
//! care of loading its input, parsing command line options and reporting the
//! answers.

#[macro_use]
mod macros;
pub mod cli;
pub mod env;
pub mod input;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, IStr, NonEmpty};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
    pub use macros::entry;
}

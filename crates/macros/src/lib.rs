use proc_macro::TokenStream;

mod entry;
mod error;
mod into_tokens;

/// Turn a solution function into the `main` of a binary.
///
/// ```ignore
/// #[entry(input = "d03.txt", expect = (4361, 467835))]
/// fn main(input: IStr) -> Result<(u64, u64)> {
///     /* .. */
/// }
/// ```
///
/// `input` names a file in the `inputs` directory of the crate and is
/// required. `expect` is optional and checks the produced answers.
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}

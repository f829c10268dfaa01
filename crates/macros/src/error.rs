use core::fmt;

use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// An error raised while expanding a macro.
pub(crate) struct Error {
    span: Span,
    message: String,
}

impl Error {
    pub(crate) fn new(span: Span, message: impl fmt::Display) -> Self {
        Self {
            span,
            message: message.to_string(),
        }
    }

    /// Expand into a `compile_error!` invocation pointing at the span of the
    /// error.
    pub(crate) fn into_tokens(self) -> TokenStream {
        let span = self.span;

        let mut message = Literal::string(&self.message);
        message.set_span(span);

        let mut args = Group::new(
            Delimiter::Parenthesis,
            TokenStream::from(TokenTree::Literal(message)),
        );
        args.set_span(span);

        let mut bang = Punct::new('!', Spacing::Alone);
        bang.set_span(span);

        let mut semi = Punct::new(';', Spacing::Alone);
        semi.set_span(span);

        TokenStream::from_iter([
            TokenTree::Ident(Ident::new("compile_error", span)),
            TokenTree::Punct(bang),
            TokenTree::Group(args),
            TokenTree::Punct(semi),
        ])
    }
}

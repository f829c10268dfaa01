use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// Something that can be written as tokens.
///
/// Tokens which don't carry a span of their own are given `span`.
pub(crate) trait IntoTokens {
    fn into_tokens(self, stream: &mut TokenStream, span: Span);
}

/// Write the given tokens into a fresh stream.
pub(crate) fn to_stream<T>(tokens: T, span: Span) -> TokenStream
where
    T: IntoTokens,
{
    let mut stream = TokenStream::new();
    tokens.into_tokens(&mut stream, span);
    stream
}

impl IntoTokens for () {
    #[inline]
    fn into_tokens(self, _: &mut TokenStream, _: Span) {}
}

impl IntoTokens for TokenStream {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        stream.extend(self);
    }
}

impl IntoTokens for TokenTree {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        stream.extend([self]);
    }
}

impl IntoTokens for Ident {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        stream.extend([TokenTree::Ident(self)]);
    }
}

impl IntoTokens for Literal {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, _: Span) {
        stream.extend([TokenTree::Literal(self)]);
    }
}

/// An identifier or keyword.
impl IntoTokens for &str {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        stream.extend([TokenTree::Ident(Ident::new(self, span))]);
    }
}

/// A single punctuation.
impl IntoTokens for char {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let mut p = Punct::new(self, Spacing::Alone);
        p.set_span(span);
        stream.extend([TokenTree::Punct(p)]);
    }
}

/// A joint punctuation, like `::` or `=>`.
impl IntoTokens for [char; 2] {
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let [a, b] = self;

        let mut a = Punct::new(a, Spacing::Joint);
        a.set_span(span);

        let mut b = Punct::new(b, Spacing::Alone);
        b.set_span(span);

        stream.extend([TokenTree::Punct(a), TokenTree::Punct(b)]);
    }
}

impl<T> IntoTokens for Option<T>
where
    T: IntoTokens,
{
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        if let Some(tokens) = self {
            tokens.into_tokens(stream, span);
        }
    }
}

macro_rules! tuple {
    ($($ty:ident),*) => {
        impl<$($ty,)*> IntoTokens for ($($ty,)*)
        where
            $($ty: IntoTokens,)*
        {
            #[inline]
            #[allow(non_snake_case)]
            fn into_tokens(self, stream: &mut TokenStream, span: Span) {
                let ($($ty,)*) = self;
                $($ty.into_tokens(stream, span);)*
            }
        }
    };
}

tuple!(A, B);
tuple!(A, B, C);
tuple!(A, B, C, D);
tuple!(A, B, C, D, E);
tuple!(A, B, C, D, E, F);
tuple!(A, B, C, D, E, F, G);
tuple!(A, B, C, D, E, F, G, H);
tuple!(A, B, C, D, E, F, G, H, I);
tuple!(A, B, C, D, E, F, G, H, I, J);

/// Tokens wrapped in a delimited group.
pub(crate) struct Grouped<T> {
    delimiter: Delimiter,
    content: T,
}

/// Wrap tokens in parenthesis.
pub(crate) fn parens<T>(content: T) -> Grouped<T> {
    Grouped {
        delimiter: Delimiter::Parenthesis,
        content,
    }
}

/// Wrap tokens in braces.
pub(crate) fn braced<T>(content: T) -> Grouped<T> {
    Grouped {
        delimiter: Delimiter::Brace,
        content,
    }
}

impl<T> IntoTokens for Grouped<T>
where
    T: IntoTokens,
{
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        let inner = to_stream(self.content, span);
        let mut group = Group::new(self.delimiter, inner);
        group.set_span(span);
        stream.extend([TokenTree::Group(group)]);
    }
}

/// Write tokens through a closure.
pub(crate) struct FromFn<F>(F);

pub(crate) fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnOnce(&mut TokenStream, Span),
{
    FromFn(f)
}

impl<F> IntoTokens for FromFn<F>
where
    F: FnOnce(&mut TokenStream, Span),
{
    #[inline]
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        (self.0)(stream, span)
    }
}

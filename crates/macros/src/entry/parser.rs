use proc_macro::{token_stream, Ident, Literal, Span, TokenStream, TokenTree};

use crate::error::Error;

/// Arguments of the entry macro.
#[derive(Default)]
pub(crate) struct Config {
    pub(crate) input_file: Option<Literal>,
    pub(crate) expect: Option<TokenTree>,
}

impl Config {
    /// Validate the parsed configuration.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.input_file.is_none() {
            errors.push(Error::new(Span::call_site(), "missing `input` argument"));
        }
    }
}

/// A parser for the arguments provided to an entry macro.
pub(crate) struct ConfigParser<'a> {
    it: token_stream::IntoIter,
    errors: &'a mut Vec<Error>,
}

impl<'a> ConfigParser<'a> {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: TokenStream, errors: &'a mut Vec<Error>) -> Self {
        Self {
            it: stream.into_iter(),
            errors,
        }
    }

    /// Parse `name = value` pairs separated by commas.
    pub(crate) fn parse(mut self) -> Config {
        let mut config = Config::default();

        while let Some(tt) = self.it.next() {
            if self.parse_option(tt, &mut config).is_none() {
                self.recover();
                continue;
            }

            match self.it.next() {
                None => break,
                Some(TokenTree::Punct(p)) if p.as_char() == ',' => {}
                Some(tt) => {
                    self.errors.push(Error::new(tt.span(), "expected `,`"));
                    self.recover();
                }
            }
        }

        config
    }

    /// Recover by skipping past the next comma `,`, or to the end of input.
    fn recover(&mut self) {
        for tt in self.it.by_ref() {
            if matches!(&tt, TokenTree::Punct(p) if p.as_char() == ',') {
                break;
            }
        }
    }

    /// Parse a single option.
    fn parse_option(&mut self, tt: TokenTree, config: &mut Config) -> Option<()> {
        let ident = match tt {
            TokenTree::Ident(ident) => ident,
            tt => {
                self.errors.push(Error::new(tt.span(), "expected identifier"));
                return None;
            }
        };

        match ident.to_string().as_str() {
            "input" => {
                self.parse_eq(&ident)?;
                let literal = self.parse_string(&ident)?;

                if config.input_file.replace(literal).is_some() {
                    self.errors
                        .push(Error::new(ident.span(), "duplicate option `input`"));
                }
            }
            "expect" => {
                self.parse_eq(&ident)?;

                let Some(value) = self.it.next() else {
                    self.errors
                        .push(Error::new(ident.span(), "expected a value for `expect`"));
                    return None;
                };

                if config.expect.replace(value).is_some() {
                    self.errors
                        .push(Error::new(ident.span(), "duplicate option `expect`"));
                }
            }
            name => {
                self.errors
                    .push(Error::new(ident.span(), format!("unknown option `{name}`")));
                return None;
            }
        }

        Some(())
    }

    /// Parse the next element as a string literal.
    fn parse_string(&mut self, option: &Ident) -> Option<Literal> {
        match self.it.next() {
            Some(TokenTree::Literal(literal)) if literal.to_string().starts_with('"') => {
                Some(literal)
            }
            tt => {
                let span = tt.map_or_else(|| option.span(), |tt| tt.span());
                self.errors.push(Error::new(span, "expected string literal"));
                None
            }
        }
    }

    /// Parse the next element as an `=` punctuation.
    fn parse_eq(&mut self, option: &Ident) -> Option<()> {
        match self.it.next() {
            Some(TokenTree::Punct(p)) if p.as_char() == '=' => Some(()),
            tt => {
                let span = tt.map_or_else(|| option.span(), |tt| tt.span());
                self.errors
                    .push(Error::new(span, "expected assignment `=`"));
                None
            }
        }
    }
}

/// Find the name of the function the macro is attached to.
pub(crate) fn fn_name(item_stream: TokenStream) -> Option<Ident> {
    let mut it = item_stream.into_iter();

    while let Some(tt) = it.next() {
        if matches!(&tt, TokenTree::Ident(ident) if ident.to_string() == "fn") {
            return match it.next() {
                Some(TokenTree::Ident(name)) => Some(name),
                _ => None,
            };
        }
    }

    None
}

mod output;
mod parser;

use proc_macro::{Span, TokenStream};

use crate::error::Error;

/// Configurable macro code to build entry.
pub(crate) fn build(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    let mut errors = Vec::new();

    let config = parser::ConfigParser::new(args, &mut errors).parse();
    config.validate(&mut errors);

    let fn_name = parser::fn_name(item_stream.clone());

    if fn_name.is_none() {
        errors.push(Error::new(Span::call_site(), "expected a function"));
    }

    let mut stream = match (fn_name, &config.input_file) {
        (Some(fn_name), Some(input_file)) if errors.is_empty() => {
            output::expand(&config, input_file, &fn_name, item_stream)
        }
        _ => item_stream,
    };

    for error in errors {
        stream.extend(error.into_tokens());
    }

    stream
}

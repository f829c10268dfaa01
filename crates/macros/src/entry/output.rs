use proc_macro::{Ident, Literal, Span, TokenStream};

use crate::entry::parser::Config;
use crate::into_tokens::{braced, from_fn, parens, to_stream, IntoTokens};

const S: [char; 2] = [':', ':'];
const ARROW: [char; 2] = ['-', '>'];
const FAT: [char; 2] = ['=', '>'];

/// `::lib::`
#[derive(Clone, Copy)]
struct Lib;

impl IntoTokens for Lib {
    fn into_tokens(self, stream: &mut TokenStream, span: Span) {
        (S, "lib", S).into_tokens(stream, span);
    }
}

fn result(variant: &'static str) -> impl IntoTokens {
    (S, "core", S, "result", S, "Result", S, variant)
}

fn option(variant: &'static str) -> impl IntoTokens {
    (S, "core", S, "option", S, "Option", S, variant)
}

/// Call the annotated function with the loaded input.
fn call(fn_name: &Ident) -> impl IntoTokens {
    (fn_name.clone(), parens("input"))
}

/// Expand the annotated function into a `main` which parses options, loads
/// the input, and dispatches on the run mode.
///
/// The annotated function is kept as an item inside of the generated `main`,
/// which it shadows. Tokens of the `expect` value keep their spans, so type
/// errors in it point at the attribute argument.
pub(crate) fn expand(
    config: &Config,
    input_file: &Literal,
    fn_name: &Ident,
    item_stream: TokenStream,
) -> TokenStream {
    let parse_opts = (
        ("let", "opts", '='),
        (Lib, "cli", S, "Opts", S, "parse"),
        parens(()),
        ('?', ';'),
    );

    let load_input = (
        ("let", parens(("input", ',', "path")), '='),
        (Lib, "input", '!'),
        parens(input_file.clone()),
        ';',
    );

    let handle_error = (
        "return",
        result("Err"),
        parens((
            (Lib, "cli", S, "error_context"),
            parens(("path", ',', "input", ',', "error")),
        )),
        ';',
    );

    let value = (
        ("let", "value", '=', "match"),
        call(fn_name),
        braced((
            (result("Ok"), parens("value"), FAT, "value", ','),
            (result("Err"), parens("error"), FAT, braced(handle_error)),
        )),
        ';',
    );

    let check = config.expect.as_ref().map(|expect| {
        from_fn(move |s, _| {
            let span = expect.span();
            ("let", "expected", '=', expect.clone(), ';').into_tokens(s, span);

            (
                (Lib, "cli", S, "expect"),
                parens(('&', "value", ',', '&', "expected")),
                ('?', ';'),
            )
                .into_tokens(s, span);
        })
    });

    let answer = (
        (Lib, "cli", S, "answer"),
        parens(('&', "opts", ',', '&', "value")),
        ('?', ';'),
    );

    let default_mode = (
        (Lib, "cli", S, "Mode", S, "Default"),
        FAT,
        braced((value, check, answer)),
    );

    let expected = from_fn(|s, span| match &config.expect {
        Some(expect) => (option("Some"), parens(expect.clone())).into_tokens(s, expect.span()),
        None => option("None").into_tokens(s, span),
    });

    let bench = (
        ("let", "mut", "b", '='),
        (Lib, "cli", S, "Bencher", S, "new"),
        parens(()),
        ';',
        ("b", '.', "iter"),
        parens(('&', "opts", ',', expected, ',', ['|', '|'], call(fn_name))),
        ('?', ';'),
    );

    let bench_mode = (
        (Lib, "cli", S, "Mode", S, "Bench"),
        FAT,
        braced(bench),
    );

    let match_mode = (
        "match",
        ("opts", '.', "mode"),
        braced((default_mode, bench_mode)),
        ';',
    );

    let ok_return = (result("Ok"), parens(parens(())));

    let signature = (
        ("fn", "main", parens(()), ARROW),
        (Lib, "prelude", S, "Result", '<', parens(()), '>'),
    );

    let body = braced((item_stream, parse_opts, load_input, match_mode, ok_return));
    to_stream((signature, body), Span::call_site())
}

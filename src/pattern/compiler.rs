use crate::options::CompileOptions;
use crate::pattern::compiled::{CompiledPattern, Key};
use crate::pattern::lexer::tokenize;
use crate::pattern::token::{ParamKind, ParamToken, Token};

/// Compiles one route pattern into an anchored regex source plus its
/// capture descriptors. Translation never fails; whether the source is a
/// valid expression is the engine's verdict, not the compiler's.
#[tracing::instrument(level = "trace", fields(path = %path))]
pub fn compile(path: &str, options: &CompileOptions) -> CompiledPattern {
    let mut keys = Vec::new();
    let source = compile_source(path, options, &mut keys);
    CompiledPattern {
        source,
        keys,
        case_insensitive: !options.sensitive,
    }
}

/// Compiles several patterns into one alternation. Every branch keeps its
/// own anchors inside the `(?:...|...)` join; the descriptor list is the
/// concatenation across branches, in branch order.
pub fn compile_any<I, S>(paths: I, options: &CompileOptions) -> CompiledPattern
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keys = Vec::new();
    let branches: Vec<String> = paths
        .into_iter()
        .map(|path| compile_source(path.as_ref(), options, &mut keys))
        .collect();
    CompiledPattern {
        source: format!("(?:{})", branches.join("|")),
        keys,
        case_insensitive: !options.sensitive,
    }
}

fn compile_source(path: &str, options: &CompileOptions, keys: &mut Vec<Key>) -> String {
    let mut body = String::new();
    // Bare groups are named by position, starting over for every path.
    let mut bare_index = 0u32;

    for token in tokenize(path) {
        match token {
            Token::Text(text) => body.push_str(&text),
            Token::Escaped(ch) | Token::Metachar(ch) => {
                body.push('\\');
                body.push(ch);
            }
            Token::Parameter(param) => {
                body.push_str(&render_parameter(param, keys, &mut bare_index));
            }
        }
    }

    // Any slash in the body sits behind a backslash, so a trailing one
    // occupies two characters.
    let ends_with_slash = body.ends_with('/');
    if !options.strict {
        if ends_with_slash {
            body.truncate(body.len().saturating_sub(2));
        }
        body.push_str(r"(?:\/(?=$))?");
    }
    if !options.end && !(options.strict && ends_with_slash) {
        body.push_str(r"(?=\/|$)");
    }

    let mut source = String::with_capacity(body.len() + 2);
    source.push('^');
    source.push_str(&body);
    if options.end {
        source.push('$');
    }
    source
}

fn render_parameter(param: ParamToken, keys: &mut Vec<Key>, bare_index: &mut u32) -> String {
    let optional = param.quantifier.is_optional();
    let repeat = param.quantifier.is_repeating();
    let delimiter = param.prefix.unwrap_or('/');

    let (name, expression) = match param.kind {
        ParamKind::Named { name, expression } => (name, expression),
        ParamKind::Bare { expression } => {
            let name = bare_index.to_string();
            *bare_index += 1;
            (name, Some(expression))
        }
    };
    keys.push(Key::new(name, delimiter, optional, repeat));

    let prefix = match param.prefix {
        Some(ch) => format!("\\{ch}"),
        None => String::new(),
    };

    // An empty `()` expression falls back to the default body.
    let mut capture = match expression.filter(|expr| !expr.is_empty()) {
        Some(expr) => expr,
        None => {
            let class = if prefix.is_empty() {
                r"\/"
            } else {
                prefix.as_str()
            };
            format!("[^{class}]+?")
        }
    };
    if repeat {
        capture = format!("{capture}(?:{prefix}{capture})*");
    }

    if optional {
        format!("(?:{prefix}({capture}))?")
    } else {
        format!("{prefix}({capture})")
    }
}

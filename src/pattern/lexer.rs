use crate::pattern::token::{ParamKind, ParamToken, Quantifier, Token};

/// Scans a route pattern into typed tokens. At every position the scanner
/// tries, in order: an escape pair, a parameter, a metacharacter, plain
/// text. Failed parameter attempts rewind and fall through, so scanning
/// accepts any input string.
#[tracing::instrument(level = "trace", fields(pattern = %pattern))]
pub fn tokenize(pattern: &str) -> Vec<Token> {
    Lexer::new(pattern).run()
}

fn is_metachar(ch: char) -> bool {
    matches!(
        ch,
        '.' | '+' | '*' | '?' | '=' | '^' | '!' | ':' | '$' | '{' | '}' | '(' | ')' | '[' | ']'
            | '|' | '/'
    )
}

struct Lexer {
    chars: Vec<char>,
    index: usize,
}

impl Lexer {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            index: 0,
        }
    }

    fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch == '\\'
                && let Some(escaped) = self.peek_ahead(1)
            {
                flush_text(&mut tokens, &mut text);
                self.index += 2;
                tokens.push(Token::Escaped(escaped));
                continue;
            }
            if let Some(param) = self.parse_parameter() {
                flush_text(&mut tokens, &mut text);
                tokens.push(Token::Parameter(param));
                continue;
            }
            if is_metachar(ch) {
                flush_text(&mut tokens, &mut text);
                self.index += 1;
                tokens.push(Token::Metachar(ch));
                continue;
            }
            text.push(ch);
            self.index += 1;
        }

        flush_text(&mut tokens, &mut text);
        tokens
    }

    /// A parameter is an optional `/` or `.` prefix followed by `:name`,
    /// `:name(expr)` or `(expr)`, then an optional `+ * ?` modifier. The
    /// prefix only participates when a parameter core follows it.
    fn parse_parameter(&mut self) -> Option<ParamToken> {
        let checkpoint = self.index;
        let prefix = match self.peek() {
            Some(ch @ ('/' | '.')) => {
                self.index += 1;
                Some(ch)
            }
            _ => None,
        };

        let kind = match self.peek() {
            Some(':') => self.parse_named(),
            Some('(') => self
                .parse_expression()
                .map(|expression| ParamKind::Bare { expression }),
            _ => None,
        };

        match kind {
            Some(kind) => Some(ParamToken::new(prefix, kind, self.parse_quantifier())),
            None => {
                self.index = checkpoint;
                None
            }
        }
    }

    fn parse_named(&mut self) -> Option<ParamKind> {
        let checkpoint = self.index;
        self.index += 1;

        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.index += 1;
            } else {
                break;
            }
        }
        if name.is_empty() {
            self.index = checkpoint;
            return None;
        }

        // An unterminated `(...)` does not fail the parameter; the name
        // stands alone and the `(` is scanned again on its own.
        let expression = if self.peek() == Some('(') {
            self.parse_expression()
        } else {
            None
        };

        Some(ParamKind::Named { name, expression })
    }

    /// Reads a parenthesized expression. It ends at the first `)` that is
    /// not part of a backslash pair; unescaped nested parentheses are not
    /// balanced. Rewinds and yields nothing when no terminator exists.
    fn parse_expression(&mut self) -> Option<String> {
        let checkpoint = self.index;
        self.index += 1;

        let mut expression = String::new();
        while let Some(ch) = self.next() {
            match ch {
                '\\' => {
                    expression.push('\\');
                    if let Some(escaped) = self.next() {
                        expression.push(escaped);
                    }
                }
                ')' => return Some(expression),
                _ => expression.push(ch),
            }
        }

        self.index = checkpoint;
        None
    }

    fn parse_quantifier(&mut self) -> Quantifier {
        match self.peek() {
            Some('?') => {
                self.index += 1;
                Quantifier::ZeroOrOne
            }
            Some('*') => {
                self.index += 1;
                Quantifier::ZeroOrMore
            }
            Some('+') => {
                self.index += 1;
                Quantifier::OneOrMore
            }
            _ => Quantifier::One,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }
}

fn flush_text(tokens: &mut Vec<Token>, text: &mut String) {
    if !text.is_empty() {
        tokens.push(Token::Text(std::mem::take(text)));
    }
}

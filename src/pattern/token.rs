#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of characters with no pattern meaning, emitted as-is.
    Text(String),
    /// A backslash-protected character, emitted with its backslash.
    Escaped(char),
    /// A single regex metacharacter, emitted escaped.
    Metachar(char),
    /// A capture placeholder, named or bare.
    Parameter(ParamToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamToken {
    pub prefix: Option<char>,
    pub kind: ParamKind,
    pub quantifier: Quantifier,
}

impl ParamToken {
    pub fn new(prefix: Option<char>, kind: ParamKind, quantifier: Quantifier) -> Self {
        Self {
            prefix,
            kind,
            quantifier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// `:name` or `:name(expression)`.
    Named {
        name: String,
        expression: Option<String>,
    },
    /// `(expression)` with no name; named later by the compiler's counter.
    Bare { expression: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    One,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

impl Quantifier {
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::ZeroOrOne | Self::ZeroOrMore)
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

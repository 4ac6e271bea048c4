use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Match case-sensitively. Off by default.
    pub sensitive: bool,
    /// Refuse a trailing slash the pattern does not spell out.
    pub strict: bool,
    /// Anchor the match at the end of the candidate path.
    pub end: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            sensitive: false,
            strict: false,
            end: true,
        }
    }
}

impl CompileOptions {
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    pub fn sensitive(mut self, value: bool) -> Self {
        self.options.sensitive = value;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn end(mut self, value: bool) -> Self {
        self.options.end = value;
        self
    }

    pub fn build(self) -> CompileOptions {
        self.options
    }
}

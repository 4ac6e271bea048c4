//! Express-style route patterns compiled to anchored regular expressions.
//!
//! [`compile`] turns a pattern like `/user/:id` into a regex source plus
//! one [`Key`] per capture group; [`Route`] bundles that with an
//! executable engine and reports per-parameter values from [`Route::find`].

pub mod errors;
pub mod matcher;
pub mod options;
pub mod pattern;
pub mod types;

pub use errors::{RouteError, RouteResult};
pub use matcher::{RouteMatch, RouteRegex, ValueList};
pub use options::{CompileOptions, CompileOptionsBuilder};
pub use pattern::{CompiledPattern, Key, compile, compile_any, tokenize};
pub use types::RouteParams;

#[derive(Debug, Clone)]
pub struct Route {
    pattern: CompiledPattern,
    regex: RouteRegex,
}

impl Route {
    /// Compiles one pattern and builds its engine.
    pub fn new(path: &str, options: Option<CompileOptions>) -> RouteResult<Self> {
        Self::from_pattern(compile(path, &options.unwrap_or_default()))
    }

    /// Compiles several patterns into one alternation route.
    pub fn any<I, S>(paths: I, options: Option<CompileOptions>) -> RouteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_pattern(compile_any(paths, &options.unwrap_or_default()))
    }

    pub fn from_pattern(pattern: CompiledPattern) -> RouteResult<Self> {
        let regex = RouteRegex::new(&pattern.source, pattern.case_insensitive)?;
        Ok(Self { pattern, regex })
    }

    pub fn source(&self) -> &str {
        &self.pattern.source
    }

    pub fn keys(&self) -> &[Key] {
        &self.pattern.keys
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Runs the route against a candidate path. `Ok(None)` is "no match";
    /// an error means the engine could not finish.
    pub fn find(&self, path: &str) -> RouteResult<Option<RouteMatch>> {
        self.regex.find(path)
    }

    /// Like [`Route::find`], but pairs descriptor names with values.
    pub fn params(&self, path: &str) -> RouteResult<Option<RouteParams>> {
        Ok(self
            .find(path)?
            .map(|hit| hit.to_params(&self.pattern.keys)))
    }
}

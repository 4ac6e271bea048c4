use crate::errors::{RouteError, RouteResult};
use crate::matcher::result::{RouteMatch, ValueList};

/// Executable form of a compiled pattern. Sources the plain engine's
/// dialect covers run on it; sources using lookahead (every non-strict or
/// non-ending compilation emits one) fall up to the backtracking engine.
#[derive(Debug, Clone)]
pub enum RouteRegex {
    Standard(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl RouteRegex {
    pub fn new(source: &str, case_insensitive: bool) -> RouteResult<Self> {
        let expression = if case_insensitive {
            format!("(?i){source}")
        } else {
            source.to_string()
        };

        if let Ok(regex) = regex::Regex::new(&expression) {
            return Ok(Self::Standard(regex));
        }
        match fancy_regex::Regex::new(&expression) {
            Ok(regex) => Ok(Self::Fancy(regex)),
            Err(err) => Err(RouteError::ExpressionRejected {
                expression,
                reason: err.to_string(),
            }),
        }
    }

    #[tracing::instrument(level = "trace", skip(self), fields(path = %path))]
    pub fn find(&self, path: &str) -> RouteResult<Option<RouteMatch>> {
        let hit = match self {
            Self::Standard(regex) => regex.captures(path).map(collect_standard),
            Self::Fancy(regex) => regex.captures(path)?.map(collect_fancy),
        };
        Ok(hit.and_then(RouteMatch::non_empty))
    }
}

fn collect_standard(caps: regex::Captures<'_>) -> RouteMatch {
    let matched = caps
        .get(0)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let values: ValueList = (1..caps.len())
        .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
        .collect();
    RouteMatch::new(matched, values)
}

fn collect_fancy(caps: fancy_regex::Captures<'_>) -> RouteMatch {
    let matched = caps
        .get(0)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let values: ValueList = (1..caps.len())
        .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
        .collect();
    RouteMatch::new(matched, values)
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("compiled expression '{expression}' was rejected by the regex engine: {reason}")]
    ExpressionRejected { expression: String, reason: String },
    #[error("regex engine gave up while matching: {0}")]
    MatchAborted(#[from] fancy_regex::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;

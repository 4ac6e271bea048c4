mod engine;
mod result;

pub use engine::RouteRegex;
pub use result::{RouteMatch, ValueList};

mod compiled;
mod compiler;
mod lexer;
mod token;

pub use compiled::{CompiledPattern, Key};
pub use compiler::{compile, compile_any};
pub use lexer::tokenize;
pub use token::{ParamKind, ParamToken, Quantifier, Token};

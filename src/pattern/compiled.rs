use serde::{Deserialize, Serialize};

/// One descriptor per capture group, in emission order: descriptor `i`
/// pairs with capture group `i + 1` of the compiled source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub name: String,
    pub delimiter: char,
    pub optional: bool,
    pub repeat: bool,
}

impl Key {
    pub fn new(name: String, delimiter: char, optional: bool, repeat: bool) -> Self {
        Self {
            name,
            delimiter,
            optional,
            repeat,
        }
    }
}

/// The pure result of compiling a route pattern: an anchored regex source,
/// the capture descriptors, and the case rule. Building an executable
/// matcher from it is the matcher module's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledPattern {
    pub source: String,
    pub keys: Vec<Key>,
    pub case_insensitive: bool,
}

use smallvec::SmallVec;

use crate::pattern::Key;
use crate::types::RouteParams;

pub type ValueList = SmallVec<[Option<String>; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Slot zero: the full matched substring.
    pub matched: String,
    /// Slots 1..N: one entry per capture group, `None` when the group did
    /// not participate.
    pub values: ValueList,
}

impl RouteMatch {
    pub fn new(matched: String, values: ValueList) -> Self {
        Self { matched, values }
    }

    /// The engine can report a hit whose every slot is empty or absent,
    /// e.g. an all-optional pattern over the empty string. Such a hit
    /// carries no route information and counts as no match.
    pub(crate) fn non_empty(self) -> Option<Self> {
        let informative = !self.matched.is_empty()
            || self
                .values
                .iter()
                .any(|value| value.as_deref().is_some_and(|text| !text.is_empty()));
        informative.then_some(self)
    }

    /// Pairs descriptor names with captured values. Absent optionals are
    /// skipped; on a duplicated name the rightmost capture wins.
    pub fn to_params(&self, keys: &[Key]) -> RouteParams {
        let mut params = RouteParams::with_capacity(keys.len());
        for (key, value) in keys.iter().zip(self.values.iter()) {
            if let Some(value) = value {
                params.insert(key.name.clone(), value.clone());
            }
        }
        params
    }
}

use std::collections::BTreeSet;

use derive_getters::Getters;

#[derive(Getters, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterResult {
    filters: BTreeSet<&'static str>,
}

impl FilterResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, filter: &'static str) {
        debug_assert!(!filter.is_empty());
        self.filters.insert(filter);
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.filters.is_empty()
    }
}

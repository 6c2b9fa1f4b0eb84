use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::variant::{GenotypeEntry, VariantCall};
use crate::core::{Error, Result};

use super::FilterThresholds;

#[derive(Constructor, Getters, Clone, Debug)]
pub struct FilterContext {
    thresholds: FilterThresholds,
    tumor: String,
    // None selects tumor-only semantics
    normal: Option<String>,
    lod_key: String,
}

impl FilterContext {
    pub fn tumor_genotype<'a>(&self, call: &'a VariantCall) -> Result<&'a GenotypeEntry> {
        call.genotype(&self.tumor).ok_or_else(|| Error::UnknownSample(self.tumor.clone()))
    }
}

use std::collections::HashMap;

use bio_types::genome::Locus;
use derive_getters::Getters;
use derive_more::Constructor;

pub use attrs::{AttrMap, AttrValue};

pub mod attrs;

#[derive(Constructor, Getters, Clone, Debug)]
pub struct GenotypeEntry {
    // Reference depth first, then one depth per alternate
    allele_depths: Vec<u32>,
    // One fraction per alternate allele
    allele_fractions: Vec<f64>,
    attrs: AttrMap,
}

impl GenotypeEntry {
    // Index into the allele-fraction vector; ties resolve to the first occurrence
    pub fn dominant_alt_index(&self) -> usize {
        self.allele_fractions
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (ind, &af)| if af > best.1 { (ind, af) } else { best })
            .0
    }
}

#[derive(Constructor, Getters, Clone, Debug)]
pub struct VariantCall {
    locus: Locus,
    // Reference allele first
    alleles: Vec<String>,
    attrs: AttrMap,
    genotypes: HashMap<String, GenotypeEntry>,
}

impl VariantCall {
    #[inline]
    pub fn is_biallelic(&self) -> bool {
        self.alleles.len() == 2
    }

    pub fn genotype(&self, sample: &str) -> Option<&GenotypeEntry> {
        self.genotypes.get(sample)
    }
}

use crate::core::variant::VariantCall;
use crate::core::Result;

use super::{FilterContext, FilterResult};

pub mod mito;
pub mod somatic;

pub type Check = fn(&FilterContext, &VariantCall, &mut FilterResult) -> Result<()>;

// Upstream annotation keys consumed by the checks
pub mod keys {
    pub const DEPTH: &str = "DP";
    pub const MEDIAN_BASE_QUALITY: &str = "MBQ";
    pub const MEDIAN_MAPPING_QUALITY: &str = "MMQ";
    pub const NORMAL_ARTIFACT_LOD: &str = "N_ART_LOD";
    pub const UNIQUE_ALT_READS: &str = "UNIQ_ALT_READ_COUNT";
    pub const STRAND_ARTIFACT_POSTERIOR: &str = "SA_POST_PROB";
    pub const STRAND_ARTIFACT_AF: &str = "SA_MAP_AF";
    pub const CONTIG_MISMATCH: &str = "OCM";
}

pub const SOMATIC: &[Check] = &[
    somatic::insufficient_evidence,
    somatic::duplicated_alt_reads,
    somatic::artifact_in_normal,
    somatic::strand_artifact,
    somatic::base_quality,
    somatic::mapping_quality,
];

pub const MITOCHONDRIAL: &[Check] = &[mito::chimeric_original_alignment, mito::lod_by_depth];

// Ties resolve to the first occurrence of the maximum
fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (ind, &x)| if x > best.1 { (ind, x) } else { best })
        .0
}

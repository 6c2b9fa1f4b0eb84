use derive_getters::Getters;
use derive_more::Constructor;

#[derive(Constructor, Getters, Debug, PartialEq, Copy, Clone)]
pub struct FilterThresholds {
    min_lod: f64,
    min_unique_alt_reads: i64,
    max_normal_artifact_lod: f64,
    max_strand_artifact_prob: f64,
    min_strand_af: f64,
    min_median_base_quality: i64,
    min_median_mapping_quality: i64,
    max_contig_mismatch_ratio: f64,
    min_lod_by_depth: f64,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self::new(5.3, 0, 0.0, 0.99, 0.01, 20, 30, 0.85, 0.005)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let defaults = FilterThresholds::default();
        assert_eq!(*defaults.min_lod(), 5.3);
        assert_eq!(*defaults.min_unique_alt_reads(), 0);
        assert_eq!(*defaults.max_normal_artifact_lod(), 0.0);
        assert_eq!(*defaults.max_strand_artifact_prob(), 0.99);
        assert_eq!(*defaults.min_strand_af(), 0.01);
        assert_eq!(*defaults.min_median_base_quality(), 20);
        assert_eq!(*defaults.min_median_mapping_quality(), 30);
        assert_eq!(*defaults.max_contig_mismatch_ratio(), 0.85);
        assert_eq!(*defaults.min_lod_by_depth(), 0.005);
    }
}

// Stable tags recorded in the verdict when a call fails a check

pub const INSUFFICIENT_EVIDENCE: &str = "insufficient_evidence";
pub const DUPLICATED_EVIDENCE: &str = "duplicated_evidence";
pub const ARTIFACT_IN_NORMAL: &str = "artifact_in_normal";
pub const STRAND_ARTIFACT: &str = "strand_artifact";
pub const BASE_QUALITY: &str = "base_quality";
pub const MAPPING_QUALITY: &str = "mapping_quality";
pub const CHIMERIC_ORIGINAL_ALIGNMENT: &str = "chimeric_original_alignment";
pub const LOW_AVG_ALT_QUALITY: &str = "low_avg_alt_quality";

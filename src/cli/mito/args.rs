use clap::Arg;

use crate::cli::shared;
use crate::cli::shared::validate;

// Mitochondrial mode callers emit a plain LOD attribute
pub const LOD_KEY_DEFAULT: &str = "LOD";

pub mod organelle {
    use super::*;

    pub const MAX_CONTIG_MISMATCH_RATIO: &str = "max-contig-mismatch-ratio";
    pub const MIN_LOD_BY_DEPTH: &str = "min-lod-by-depth";

    pub const SECTION_NAME: &str = "Organelle thresholds";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(MAX_CONTIG_MISMATCH_RATIO)
                .long(MAX_CONTIG_MISMATCH_RATIO)
                .takes_value(true)
                .validator(validate::numeric(0f64, 1f64))
                .default_value("0.85")
                .long_help(
                    "Filter biallelic calls when the fraction of reads supporting the dominant alternate \
                    that align equally well to another contig (the OCM attribute, e.g. reads matching a \
                    nuclear copy of a mitochondrial segment) exceeds the threshold.",
                ),
            Arg::new(MIN_LOD_BY_DEPTH)
                .long(MIN_LOD_BY_DEPTH)
                .takes_value(true)
                .validator(validate::numeric(0f64, f64::MAX))
                .default_value("0.005")
                .long_help(
                    "Filter biallelic calls whose log-odds score per unit of read depth falls below the \
                    threshold. Guards against calls whose evidence is spread thinly over the extreme \
                    coverage typical for the mitochondrial contig.",
                ),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>() -> Vec<Arg<'a>> {
    shared::args::all(LOD_KEY_DEFAULT).into_iter().chain(organelle::args()).collect()
}

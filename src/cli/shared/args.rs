use clap::{Arg, ArgFlags, ArgSettings};

use super::validate;

pub fn reqdefaults() -> ArgFlags {
    ArgSettings::Required | ArgSettings::TakesValue
}

pub fn defaults() -> ArgFlags {
    ArgSettings::TakesValue.into()
}

pub mod core {
    use super::*;
    pub const INPUT: &str = "input";
    pub const TUMOR: &str = "tumor";
    pub const NORMAL: &str = "normal";
    pub const THREADS: &str = "threads";
    pub const SAVETO: &str = "saveto";

    pub const SECTION_NAME: &str = "Core";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(INPUT)
                .short('i')
                .long(INPUT)
                .setting(reqdefaults())
                .validator(validate::path)
                .long_about("Path to the input VCF/BCF with candidate variant calls. INFO/FORMAT attributes are typed according to the header declarations; attributes that a given check needs but the record lacks are simply skipped by that check."),
            Arg::new(TUMOR)
                .long(TUMOR)
                .setting(reqdefaults())
                .long_about("Name of the tumor sample. Must match one of the genotype columns in the input file."),
            Arg::new(NORMAL)
                .long(NORMAL)
                .setting(defaults())
                .long_about("Name of the matched normal sample. When omitted, checks contrasting tumor evidence against the normal are skipped (tumor-only mode)."),
            Arg::new(SAVETO)
                .short('o')
                .long(SAVETO)
                .setting(defaults())
                .validator(validate::writable)
                .default_value("/dev/stdout")
                .long_about("Path to the output TSV with one verdict row per candidate call. Defaults to stdout."),
            Arg::new(THREADS)
                .short('t')
                .long(THREADS)
                .setting(defaults())
                .validator(validate::numeric(1, usize::MAX))
                .default_value("1")
                .long_about("Number of worker threads for the filtering pass."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod thresholds {
    use super::*;
    pub const LOD_KEY: &str = "lod-key";
    pub const MIN_LOD: &str = "min-lod";
    pub const MIN_UNIQUE_ALT_READS: &str = "min-unique-alt-reads";
    pub const MAX_NORMAL_ARTIFACT_LOD: &str = "max-normal-artifact-lod";
    pub const MAX_STRAND_ARTIFACT_PROB: &str = "max-strand-artifact-prob";
    pub const MIN_STRAND_AF: &str = "min-strand-af";
    pub const MIN_MEDIAN_BASE_QUALITY: &str = "min-median-base-quality";
    pub const MIN_MEDIAN_MAPPING_QUALITY: &str = "min-median-mapping-quality";

    pub const SECTION_NAME: &str = "Thresholds";

    pub fn args<'a>(lod_default: &'a str) -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(LOD_KEY)
                .long(LOD_KEY)
                .setting(defaults())
                .default_value(lod_default)
                .long_about("Attribute holding the log-odds score of the candidate alternate allele(s). Somatic callers typically emit TLOD, mitochondrial ones plain LOD."),
            Arg::new(MIN_LOD)
                .long(MIN_LOD)
                .setting(defaults())
                .validator(validate::numeric(0f64, f64::MAX))
                .default_value("5.3")
                .long_about("Filter calls whose best alternate allele does not reach the given log-odds score. Skipped when the score attribute is absent from a record."),
            Arg::new(MIN_UNIQUE_ALT_READS)
                .long(MIN_UNIQUE_ALT_READS)
                .setting(defaults())
                .validator(validate::numeric(0i64, i64::MAX))
                .default_value("0")
                .long_about("Filter calls supported by at most X unique (non-duplicate) reads, as reported by the UNIQ_ALT_READ_COUNT attribute of the tumor sample."),
            Arg::new(MAX_NORMAL_ARTIFACT_LOD)
                .long(MAX_NORMAL_ARTIFACT_LOD)
                .setting(defaults())
                .validator(validate::numeric(f64::MIN, f64::MAX))
                .default_value("0.0")
                .long_about("Filter calls whose artifact-in-normal log-odds (N_ART_LOD) for the best alternate exceeds the threshold. Relevant only when a matched normal is given."),
            Arg::new(MAX_STRAND_ARTIFACT_PROB)
                .long(MAX_STRAND_ARTIFACT_PROB)
                .setting(defaults())
                .validator(validate::numeric(0f64, 1f64))
                .default_value("0.99")
                .long_about("Filter calls whose strand artifact posterior (SA_POST_PROB) exceeds the threshold, unless the strand-specific allele fraction rescues them."),
            Arg::new(MIN_STRAND_AF)
                .long(MIN_STRAND_AF)
                .setting(defaults())
                .validator(validate::numeric(0f64, 1f64))
                .default_value("0.01")
                .long_about("Strand-specific allele fraction (SA_MAP_AF) at or above which a call is kept despite a high strand artifact posterior."),
            Arg::new(MIN_MEDIAN_BASE_QUALITY)
                .long(MIN_MEDIAN_BASE_QUALITY)
                .setting(defaults())
                .validator(validate::numeric(0i64, 255i64))
                .default_value("20")
                .long_about("Filter calls whose alternate median base quality (MBQ) is below the threshold."),
            Arg::new(MIN_MEDIAN_MAPPING_QUALITY)
                .long(MIN_MEDIAN_MAPPING_QUALITY)
                .setting(defaults())
                .validator(validate::numeric(0i64, 255i64))
                .default_value("30")
                .long_about("Filter calls whose alternate median mapping quality (MMQ) is below the threshold."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>(lod_default: &'a str) -> Vec<Arg<'a>> {
    core::args().into_iter().chain(thresholds::args(lod_default).into_iter()).collect()
}

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::ArgMatches;

use indicatif::ProgressBar;

use super::parse;

pub struct CoreArgs {
    pub threads: usize,
    pub input: PathBuf,
    pub tumor: String,
    pub normal: Option<String>,
    pub saveto: BufWriter<File>,
}

impl CoreArgs {
    pub fn new(args: &ArgMatches, factory: impl Fn() -> ProgressBar) -> Self {
        Self {
            threads: parse::threads(factory(), args),
            input: parse::input(factory(), args),
            tumor: parse::tumor(factory(), args),
            normal: parse::normal(factory(), args),
            saveto: parse::saveto(factory(), args),
        }
    }
}

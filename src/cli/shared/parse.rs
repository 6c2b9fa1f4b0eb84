use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::ArgMatches;
use indicatif::ProgressBar;

use crate::core::filtering::FilterThresholds;

use super::args;

pub fn input(pbar: ProgressBar, matches: &ArgMatches) -> PathBuf {
    pbar.set_message("Parsing path to the input calls...");
    let result: PathBuf = matches.value_of(args::core::INPUT).unwrap().into();
    pbar.finish_with_message(format!("Input calls: {}", result.display()));
    result
}

pub fn tumor(pbar: ProgressBar, matches: &ArgMatches) -> String {
    pbar.set_message("Parsing the tumor sample name...");
    let result = matches.value_of(args::core::TUMOR).unwrap().to_owned();
    pbar.finish_with_message(format!("Tumor sample: {}", result));
    result
}

pub fn normal(pbar: ProgressBar, matches: &ArgMatches) -> Option<String> {
    pbar.set_message("Parsing the normal sample name...");
    let result = matches.value_of(args::core::NORMAL).map(|x| x.to_owned());
    match &result {
        Some(x) => pbar.finish_with_message(format!("Matched normal sample: {}", x)),
        None => pbar.finish_with_message("No matched normal, contrasting checks are disabled"),
    }
    result
}

pub fn saveto(pbar: ProgressBar, matches: &ArgMatches) -> BufWriter<File> {
    pbar.set_message("Parsing the output path...");
    let result = matches.value_of(args::core::SAVETO).unwrap();
    let file = BufWriter::new(File::create(result).unwrap());
    pbar.finish_with_message(format!("Verdicts will be saved to {}", result));
    file
}

pub fn threads(pbar: ProgressBar, matches: &ArgMatches) -> usize {
    pbar.set_message("Parsing the thread budget...");
    let result = matches.value_of(args::core::THREADS).and_then(|x| x.parse().ok()).unwrap();
    pbar.finish_with_message(format!("Thread pool capped at {} threads (+ 1 to render progress bars)", result));
    result
}

pub fn lod_key(pbar: ProgressBar, matches: &ArgMatches) -> String {
    pbar.set_message("Parsing the log-odds attribute key...");
    let result = matches.value_of(args::thresholds::LOD_KEY).unwrap().to_owned();
    pbar.finish_with_message(format!("Candidate log-odds scores are read from the {} attribute", result));
    result
}

pub fn thresholds(
    pbar: ProgressBar,
    matches: &ArgMatches,
    ratio_key: Option<&str>,
    lod_by_depth_key: Option<&str>,
) -> FilterThresholds {
    pbar.set_message("Parsing filtering thresholds...");
    let defaults = FilterThresholds::default();

    let (min_lod, min_unique_alt_reads, max_normal_artifact_lod) = (
        matches.value_of(args::thresholds::MIN_LOD).unwrap().parse().unwrap(),
        matches.value_of(args::thresholds::MIN_UNIQUE_ALT_READS).unwrap().parse().unwrap(),
        matches.value_of(args::thresholds::MAX_NORMAL_ARTIFACT_LOD).unwrap().parse().unwrap(),
    );
    let (max_strand_artifact_prob, min_strand_af) = (
        matches.value_of(args::thresholds::MAX_STRAND_ARTIFACT_PROB).unwrap().parse().unwrap(),
        matches.value_of(args::thresholds::MIN_STRAND_AF).unwrap().parse().unwrap(),
    );
    let (min_median_base_quality, min_median_mapping_quality) = (
        matches.value_of(args::thresholds::MIN_MEDIAN_BASE_QUALITY).unwrap().parse().unwrap(),
        matches.value_of(args::thresholds::MIN_MEDIAN_MAPPING_QUALITY).unwrap().parse().unwrap(),
    );

    // Organelle-only knobs, subcommands without them fall back to the defaults
    let max_contig_mismatch_ratio = ratio_key
        .map(|key| matches.value_of(key).unwrap().parse().unwrap())
        .unwrap_or(*defaults.max_contig_mismatch_ratio());
    let min_lod_by_depth = lod_by_depth_key
        .map(|key| matches.value_of(key).unwrap().parse().unwrap())
        .unwrap_or(*defaults.min_lod_by_depth());

    let result = FilterThresholds::new(
        min_lod,
        min_unique_alt_reads,
        max_normal_artifact_lod,
        max_strand_artifact_prob,
        min_strand_af,
        min_median_base_quality,
        min_median_mapping_quality,
        max_contig_mismatch_ratio,
        min_lod_by_depth,
    );
    pbar.finish_with_message(format!(
        "Thresholds: log-odds >= {}, unique supporting reads > {}, median base quality >= {}, median mapping quality >= {}",
        result.min_lod(),
        result.min_unique_alt_reads(),
        result.min_median_base_quality(),
        result.min_median_mapping_quality()
    ));
    result
}

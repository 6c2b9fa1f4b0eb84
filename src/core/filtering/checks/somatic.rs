use crate::core::filtering::{names, FilterContext, FilterResult};
use crate::core::variant::VariantCall;
use crate::core::{Error, Result};

use super::{argmax, keys};

pub fn insufficient_evidence(ctx: &FilterContext, call: &VariantCall, result: &mut FilterResult) -> Result<()> {
    let lods = match call.attrs().get(ctx.lod_key()).and_then(|x| x.as_floats()) {
        Some(x) if !x.is_empty() => x,
        _ => return Ok(()),
    };
    if lods[argmax(&lods)] < *ctx.thresholds().min_lod() {
        result.add(names::INSUFFICIENT_EVIDENCE);
    }
    Ok(())
}

pub fn duplicated_alt_reads(ctx: &FilterContext, call: &VariantCall, result: &mut FilterResult) -> Result<()> {
    let genotype = ctx.tumor_genotype(call)?;
    let unique = match genotype.attrs().get(keys::UNIQUE_ALT_READS) {
        None => return Ok(()),
        Some(x) => x.parse_int().ok_or_else(|| Error::malformed(keys::UNIQUE_ALT_READS, x))?,
    };
    if unique <= *ctx.thresholds().min_unique_alt_reads() {
        result.add(names::DUPLICATED_EVIDENCE);
    }
    Ok(())
}

pub fn artifact_in_normal(ctx: &FilterContext, call: &VariantCall, result: &mut FilterResult) -> Result<()> {
    if ctx.normal().is_none() {
        return Ok(());
    }
    let (lods, artifacts) = match (
        call.attrs().get(ctx.lod_key()).and_then(|x| x.as_floats()),
        call.attrs().get(keys::NORMAL_ARTIFACT_LOD).and_then(|x| x.as_floats()),
    ) {
        (Some(lods), Some(artifacts)) if !lods.is_empty() => (lods, artifacts),
        _ => return Ok(()),
    };
    // Artifact log-odds for the alternate best supported in the tumor
    if let Some(&artifact) = artifacts.get(argmax(&lods)) {
        if artifact > *ctx.thresholds().max_normal_artifact_lod() {
            result.add(names::ARTIFACT_IN_NORMAL);
        }
    }
    Ok(())
}

pub fn strand_artifact(ctx: &FilterContext, call: &VariantCall, result: &mut FilterResult) -> Result<()> {
    let genotype = ctx.tumor_genotype(call)?;
    let (posteriors, fractions) = match (
        genotype.attrs().get(keys::STRAND_ARTIFACT_POSTERIOR).and_then(|x| x.as_floats()),
        genotype.attrs().get(keys::STRAND_ARTIFACT_AF).and_then(|x| x.as_floats()),
    ) {
        (Some(posteriors), Some(fractions)) if posteriors.len() >= 2 => (posteriors, fractions),
        _ => return Ok(()),
    };
    // Forward and reverse artifact states only, the no-artifact state is never filtered on
    let state = argmax(&posteriors[..2]);
    let thresholds = ctx.thresholds();
    if let Some(&af) = fractions.get(state) {
        if posteriors[state] > *thresholds.max_strand_artifact_prob() && af < *thresholds.min_strand_af() {
            result.add(names::STRAND_ARTIFACT);
        }
    }
    Ok(())
}

pub fn base_quality(ctx: &FilterContext, call: &VariantCall, result: &mut FilterResult) -> Result<()> {
    if let Some(quality) = median_quality(call, keys::MEDIAN_BASE_QUALITY) {
        if quality < *ctx.thresholds().min_median_base_quality() {
            result.add(names::BASE_QUALITY);
        }
    }
    Ok(())
}

pub fn mapping_quality(ctx: &FilterContext, call: &VariantCall, result: &mut FilterResult) -> Result<()> {
    if let Some(quality) = median_quality(call, keys::MEDIAN_MAPPING_QUALITY) {
        if quality < *ctx.thresholds().min_median_mapping_quality() {
            result.add(names::MAPPING_QUALITY);
        }
    }
    Ok(())
}

// Median qualities are reference-first, the first alternate sits at index 1
fn median_quality(call: &VariantCall, key: &str) -> Option<i64> {
    call.attrs().get(key).and_then(|x| x.as_ints()).and_then(|x| x.get(1).copied())
}

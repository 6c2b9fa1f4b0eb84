use crate::core::filtering::{names, FilterContext, FilterResult};
use crate::core::variant::VariantCall;
use crate::core::{Error, Result};

use super::keys;

pub fn chimeric_original_alignment(ctx: &FilterContext, call: &VariantCall, result: &mut FilterResult) -> Result<()> {
    if !call.is_biallelic() {
        return Ok(());
    }
    let genotype = ctx.tumor_genotype(call)?;
    let mismatches = match genotype.attrs().get(keys::CONTIG_MISMATCH) {
        None => return Ok(()),
        Some(x) => x.parse_int().ok_or_else(|| Error::malformed(keys::CONTIG_MISMATCH, x))?,
    };
    // Depth of the dominant alternate, reference sits at index 0
    let dominant = genotype.dominant_alt_index();
    let altcount = match genotype.allele_depths().get(dominant + 1) {
        // Zero or missing alternate depth is inconclusive
        Some(&x) if x > 0 => x,
        _ => return Ok(()),
    };
    if mismatches as f64 / altcount as f64 > *ctx.thresholds().max_contig_mismatch_ratio() {
        result.add(names::CHIMERIC_ORIGINAL_ALIGNMENT);
    }
    Ok(())
}

pub fn lod_by_depth(ctx: &FilterContext, call: &VariantCall, result: &mut FilterResult) -> Result<()> {
    if !call.is_biallelic() {
        return Ok(());
    }
    let lod = call.attrs().get(ctx.lod_key()).and_then(|x| x.as_float()).unwrap_or(1.0);
    let depth = call.attrs().get(keys::DEPTH).and_then(|x| x.as_float()).unwrap_or(1.0);
    // An explicit zero depth is inconclusive
    if depth == 0.0 {
        return Ok(());
    }
    if lod / depth < *ctx.thresholds().min_lod_by_depth() {
        result.add(names::LOW_AVG_ALT_QUALITY);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bio_types::genome::Locus;

    use crate::core::filtering::FilterThresholds;
    use crate::core::variant::{AttrMap, AttrValue, GenotypeEntry};

    use super::*;

    const TUMOR: &str = "tumor";

    fn context(ratio: f64, lod_by_depth: f64) -> FilterContext {
        let thresholds = FilterThresholds::new(5.3, 0, 0.0, 0.99, 0.01, 20, 30, ratio, lod_by_depth);
        FilterContext::new(thresholds, TUMOR.into(), None, "LOD".into())
    }

    fn call(alleles: &[&str], attrs: AttrMap, genotype: GenotypeEntry) -> VariantCall {
        VariantCall::new(
            Locus::new("chrM".into(), 302),
            alleles.iter().map(|x| x.to_string()).collect(),
            attrs,
            HashMap::from([(TUMOR.to_owned(), genotype)]),
        )
    }

    #[test]
    fn chimeric_original_alignment() {
        let ctx = context(0.15, 0.005);
        for (mismatches, expected) in [
            (Some(AttrValue::Str("20".into())), true),
            (Some(AttrValue::Str("10".into())), false),
            (Some(AttrValue::Int(20)), true),
            (Some(AttrValue::Int(13)), false),
            (None, false),
        ] {
            let mut attrs = AttrMap::new();
            if let Some(mismatches) = mismatches.clone() {
                attrs.insert(keys::CONTIG_MISMATCH.to_owned(), mismatches);
            }
            let genotype = GenotypeEntry::new(vec![10, 90], vec![0.9], attrs);
            let call = call(&["A", "C"], AttrMap::new(), genotype);

            let mut result = FilterResult::new();
            super::chimeric_original_alignment(&ctx, &call, &mut result).unwrap();
            assert_eq!(result.filters().contains(names::CHIMERIC_ORIGINAL_ALIGNMENT), expected, "{:?}", mismatches);
        }
    }

    #[test]
    fn chimeric_malformed_attribute() {
        let ctx = context(0.15, 0.005);
        let attrs = AttrMap::from([(keys::CONTIG_MISMATCH.to_owned(), AttrValue::Str("abc".into()))]);
        let genotype = GenotypeEntry::new(vec![10, 90], vec![0.9], attrs);
        let call = call(&["A", "C"], AttrMap::new(), genotype);

        let mut result = FilterResult::new();
        let err = super::chimeric_original_alignment(&ctx, &call, &mut result).unwrap_err();
        assert!(matches!(err, Error::MalformedAttribute { ref key, ref value } if key == keys::CONTIG_MISMATCH && value == "abc"));
    }

    #[test]
    fn chimeric_degenerate_alt_depth() {
        let ctx = context(0.15, 0.005);
        let attrs = AttrMap::from([(keys::CONTIG_MISMATCH.to_owned(), AttrValue::Int(100))]);

        // Zero alternate depth
        let genotype = GenotypeEntry::new(vec![10, 0], vec![0.9], attrs.clone());
        let mut result = FilterResult::new();
        super::chimeric_original_alignment(&ctx, &call(&["A", "C"], AttrMap::new(), genotype), &mut result).unwrap();
        assert!(result.is_pass());

        // Truncated depths vector
        let genotype = GenotypeEntry::new(vec![10], vec![0.9], attrs);
        let mut result = FilterResult::new();
        super::chimeric_original_alignment(&ctx, &call(&["A", "C"], AttrMap::new(), genotype), &mut result).unwrap();
        assert!(result.is_pass());
    }

    #[test]
    fn non_biallelic_never_triggers() {
        let ctx = context(0.0, 1000.0);
        let attrs = AttrMap::from([
            ("LOD".to_owned(), AttrValue::Float(0.001)),
            (keys::DEPTH.to_owned(), AttrValue::Int(10000)),
        ]);
        let gattrs = AttrMap::from([(keys::CONTIG_MISMATCH.to_owned(), AttrValue::Int(1000))]);

        for alleles in [vec!["A"], vec!["A", "C", "T"]] {
            let genotype = GenotypeEntry::new(vec![10, 90, 5], vec![0.9, 0.05], gattrs.clone());
            let call = call(&alleles, attrs.clone(), genotype);

            let mut result = FilterResult::new();
            super::chimeric_original_alignment(&ctx, &call, &mut result).unwrap();
            super::lod_by_depth(&ctx, &call, &mut result).unwrap();
            assert!(result.is_pass(), "{:?}", alleles);
        }
    }

    #[test]
    fn lod_by_depth() {
        let ctx = context(0.85, 0.05);
        for (lod, depth, expected) in [
            (Some(6.0), Some(100), false),
            (Some(5.0), Some(100), false),
            (Some(2.0), Some(100), true),
            (Some(4.9), Some(100), true),
            // Absent attributes default to 1
            (None, None, false),
            (Some(0.01), None, true),
            (None, Some(100), true),
        ] {
            let mut attrs = AttrMap::new();
            if let Some(lod) = lod {
                attrs.insert("LOD".to_owned(), AttrValue::Float(lod));
            }
            if let Some(depth) = depth {
                attrs.insert(keys::DEPTH.to_owned(), AttrValue::Int(depth));
            }
            let genotype = GenotypeEntry::new(vec![10, 90], vec![0.9], AttrMap::new());
            let call = call(&["A", "C"], attrs, genotype);

            let mut result = FilterResult::new();
            super::lod_by_depth(&ctx, &call, &mut result).unwrap();
            assert_eq!(result.filters().contains(names::LOW_AVG_ALT_QUALITY), expected, "{:?} {:?}", lod, depth);
        }
    }

    #[test]
    fn lod_by_depth_zero_depth() {
        let ctx = context(0.85, 0.05);
        let attrs = AttrMap::from([
            ("LOD".to_owned(), AttrValue::Float(2.0)),
            (keys::DEPTH.to_owned(), AttrValue::Int(0)),
        ]);
        let genotype = GenotypeEntry::new(vec![10, 90], vec![0.9], AttrMap::new());
        let call = call(&["A", "C"], attrs, genotype);

        let mut result = FilterResult::new();
        super::lod_by_depth(&ctx, &call, &mut result).unwrap();
        assert!(result.is_pass());
    }
}

use std::collections::HashMap;
use std::path::Path;

use bio_types::genome::Locus;
use itertools::{izip, Itertools};
use linear_map::LinearMap;
use rust_htslib::bcf::header::HeaderRecord;
use rust_htslib::bcf::{Read, Reader, Record};
use rust_htslib::errors::Error as HtslibError;

use crate::core::io::RecordSource;
use crate::core::variant::{AttrMap, AttrValue, GenotypeEntry, VariantCall};
use crate::core::Result;

// BCF reserved int32 markers for missing values and vector tails
const MISSING_INTEGER: i32 = i32::MIN;
const VECTOR_END_INTEGER: i32 = i32::MIN + 1;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum TagKind {
    Integer,
    Float,
    Str,
}

// Flags carry no value to threshold, hence None
fn kindof(name: &str) -> Option<TagKind> {
    match name {
        "Integer" => Some(TagKind::Integer),
        "Float" => Some(TagKind::Float),
        "String" | "Character" => Some(TagKind::Str),
        _ => None,
    }
}

/// Streams VCF/BCF records as VariantCall-s, typing INFO/FORMAT attributes
/// from their header declarations.
pub struct VcfReader {
    inner: Reader,
    samples: Vec<String>,
    info: Vec<(String, TagKind)>,
    format: Vec<(String, TagKind)>,
    has_ad: bool,
    has_af: bool,
}

impl VcfReader {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let inner = Reader::from_path(path)?;
        let header = inner.header();

        let samples = header.samples().into_iter().map(|x| String::from_utf8_lossy(x).into_owned()).collect_vec();

        let typed = |values: &LinearMap<String, String>| {
            let id: &String = values.get("ID")?;
            let kind = values.get("Type").and_then(|x| kindof(x))?;
            Some((id.clone(), kind))
        };

        let (mut info, mut format) = (Vec::new(), Vec::new());
        let (mut has_ad, mut has_af) = (false, false);
        for record in header.header_records() {
            match record {
                HeaderRecord::Info { values, .. } => {
                    if let Some(tag) = typed(&values) {
                        info.push(tag);
                    }
                }
                HeaderRecord::Format { values, .. } => {
                    if let Some((id, kind)) = typed(&values) {
                        match id.as_str() {
                            "AD" => has_ad = true,
                            "AF" => has_af = true,
                            // Genotype calls themselves are never thresholded
                            "GT" => (),
                            _ => format.push((id, kind)),
                        }
                    }
                }
                _ => (),
            }
        }
        Ok(Self { inner, samples, info, format, has_ad, has_af })
    }

    fn parse(&self, record: &Record) -> Result<VariantCall> {
        let rid = record.rid().expect("VCF record without a contig");
        let contig = String::from_utf8_lossy(self.inner.header().rid2name(rid)?).into_owned();
        // htslib positions are 0-based
        let locus = Locus::new(contig, (record.pos() + 1) as u64);
        let alleles =
            record.alleles().into_iter().map(|x| String::from_utf8_lossy(x).into_owned()).collect();

        let attrs = self.site_attrs(record)?;
        let genotypes = self.genotypes(record)?;
        Ok(VariantCall::new(locus, alleles, attrs, genotypes))
    }

    fn site_attrs(&self, record: &Record) -> Result<AttrMap> {
        let mut attrs = AttrMap::with_capacity(self.info.len());
        for (tag, kind) in &self.info {
            let packed = match kind {
                TagKind::Integer => record.info(tag.as_bytes()).integer()?.and_then(|x| pack_ints(ints(&x))),
                TagKind::Float => record.info(tag.as_bytes()).float()?.and_then(|x| pack_floats(floats(&x))),
                TagKind::Str => record.info(tag.as_bytes()).string()?.and_then(|x| pack_text(&x)),
            };
            if let Some(value) = packed {
                attrs.insert(tag.clone(), value);
            }
        }
        Ok(attrs)
    }

    fn genotypes(&self, record: &Record) -> Result<HashMap<String, GenotypeEntry>> {
        let mut attrs = vec![AttrMap::new(); self.samples.len()];
        for (tag, kind) in &self.format {
            match kind {
                TagKind::Integer => match record.format(tag.as_bytes()).integer() {
                    Ok(values) => {
                        for (bag, raw) in izip!(&mut attrs, values.iter()) {
                            if let Some(value) = pack_ints(ints(raw)) {
                                bag.insert(tag.clone(), value);
                            }
                        }
                    }
                    Err(HtslibError::BcfMissingTag { .. }) => (),
                    Err(other) => return Err(other.into()),
                },
                TagKind::Float => match record.format(tag.as_bytes()).float() {
                    Ok(values) => {
                        for (bag, raw) in izip!(&mut attrs, values.iter()) {
                            if let Some(value) = pack_floats(floats(raw)) {
                                bag.insert(tag.clone(), value);
                            }
                        }
                    }
                    Err(HtslibError::BcfMissingTag { .. }) => (),
                    Err(other) => return Err(other.into()),
                },
                TagKind::Str => match record.format(tag.as_bytes()).string() {
                    Ok(values) => {
                        for (bag, raw) in izip!(&mut attrs, values.iter()) {
                            let text = String::from_utf8_lossy(raw);
                            if !text.is_empty() && text != "." {
                                bag.insert(tag.clone(), AttrValue::Str(text.into_owned()));
                            }
                        }
                    }
                    Err(HtslibError::BcfMissingTag { .. }) => (),
                    Err(other) => return Err(other.into()),
                },
            }
        }

        let depths = self.allele_depths(record)?;
        let fractions = self.allele_fractions(record)?;

        let mut genotypes = HashMap::with_capacity(self.samples.len());
        for (sample, depths, fractions, attrs) in izip!(&self.samples, depths, fractions, attrs) {
            genotypes.insert(sample.clone(), GenotypeEntry::new(depths, fractions, attrs));
        }
        Ok(genotypes)
    }

    fn allele_depths(&self, record: &Record) -> Result<Vec<Vec<u32>>> {
        if !self.has_ad {
            return Ok(vec![Vec::new(); self.samples.len()]);
        }
        match record.format(b"AD").integer() {
            Ok(values) => {
                Ok(values.iter().map(|raw| ints(raw).into_iter().map(|x| x.max(0) as u32).collect()).collect())
            }
            Err(HtslibError::BcfMissingTag { .. }) => Ok(vec![Vec::new(); self.samples.len()]),
            Err(other) => Err(other.into()),
        }
    }

    fn allele_fractions(&self, record: &Record) -> Result<Vec<Vec<f64>>> {
        if !self.has_af {
            return Ok(vec![Vec::new(); self.samples.len()]);
        }
        match record.format(b"AF").float() {
            Ok(values) => Ok(values.iter().map(|raw| floats(raw)).collect()),
            Err(HtslibError::BcfMissingTag { .. }) => Ok(vec![Vec::new(); self.samples.len()]),
            Err(other) => Err(other.into()),
        }
    }
}

impl RecordSource for VcfReader {
    fn read_all(&mut self) -> Result<Vec<VariantCall>> {
        let mut calls = Vec::new();
        let mut record = self.inner.empty_record();
        while let Some(status) = self.inner.read(&mut record) {
            status?;
            calls.push(self.parse(&record)?);
        }
        Ok(calls)
    }
}

fn ints(raw: &[i32]) -> Vec<i64> {
    raw.iter()
        .take_while(|&&x| x != VECTOR_END_INTEGER)
        .filter(|&&x| x != MISSING_INTEGER)
        .map(|&x| i64::from(x))
        .collect()
}

// htslib encodes missing floats and vector tails as reserved NaNs
fn floats(raw: &[f32]) -> Vec<f64> {
    raw.iter().filter(|x| x.is_finite()).map(|&x| f64::from(x)).collect()
}

fn pack_ints(values: Vec<i64>) -> Option<AttrValue> {
    match values.len() {
        0 => None,
        1 => Some(AttrValue::Int(values[0])),
        _ => Some(AttrValue::Ints(values)),
    }
}

fn pack_floats(values: Vec<f64>) -> Option<AttrValue> {
    match values.len() {
        0 => None,
        1 => Some(AttrValue::Float(values[0])),
        _ => Some(AttrValue::Floats(values)),
    }
}

fn pack_text(values: &[&[u8]]) -> Option<AttrValue> {
    let text = values
        .iter()
        .map(|x| String::from_utf8_lossy(x))
        .filter(|x| !x.is_empty() && x.as_ref() != ".")
        .join(",");
    (!text.is_empty()).then(|| AttrValue::Str(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_sentinels() {
        let raw = [10, MISSING_INTEGER, 90, VECTOR_END_INTEGER, 7];
        assert_eq!(ints(&raw), vec![10, 90]);
        assert_eq!(ints(&[]), Vec::<i64>::new());
        assert_eq!(ints(&[MISSING_INTEGER, VECTOR_END_INTEGER]), Vec::<i64>::new());
    }

    #[test]
    fn float_sentinels() {
        assert_eq!(floats(&[0.25, f32::NAN, 0.75, f32::INFINITY]), vec![0.25, 0.75]);
        assert!(floats(&[f32::NAN]).is_empty());
    }

    #[test]
    fn int_packing() {
        assert_eq!(pack_ints(vec![]), None);
        assert_eq!(pack_ints(vec![4]), Some(AttrValue::Int(4)));
        assert_eq!(pack_ints(vec![4, 2]), Some(AttrValue::Ints(vec![4, 2])));
    }

    #[test]
    fn float_packing() {
        assert_eq!(pack_floats(vec![]), None);
        assert_eq!(pack_floats(vec![0.5]), Some(AttrValue::Float(0.5)));
        assert_eq!(pack_floats(vec![0.5, 1.5]), Some(AttrValue::Floats(vec![0.5, 1.5])));
    }

    #[test]
    fn text_packing() {
        assert_eq!(pack_text(&[&b"20"[..]]), Some(AttrValue::Str("20".into())));
        assert_eq!(pack_text(&[&b"16"[..], &b"23"[..]]), Some(AttrValue::Str("16,23".into())));
        assert_eq!(pack_text(&[&b"."[..]]), None);
        assert_eq!(pack_text(&[]), None);
    }

    #[test]
    fn header_types() {
        assert_eq!(kindof("Integer"), Some(TagKind::Integer));
        assert_eq!(kindof("Float"), Some(TagKind::Float));
        assert_eq!(kindof("String"), Some(TagKind::Str));
        assert_eq!(kindof("Character"), Some(TagKind::Str));
        assert_eq!(kindof("Flag"), None);
    }
}

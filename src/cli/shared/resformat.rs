use std::io;

use bio_types::genome::AbstractLocus;
use itertools::Itertools;
use serde::Serialize;

use crate::core::filtering::FilterResult;
use crate::core::variant::VariantCall;

pub const PASS: &str = "PASS";

#[derive(Serialize)]
struct Row<'a> {
    chrom: &'a str,
    position: u64,
    reference: &'a str,
    alternates: String,
    verdict: String,
}

pub fn verdicts<W: io::Write>(
    saveto: &mut csv::Writer<W>,
    calls: &[VariantCall],
    verdicts: &[FilterResult],
) -> csv::Result<()> {
    debug_assert_eq!(calls.len(), verdicts.len());

    for (call, verdict) in calls.iter().zip(verdicts) {
        let (reference, alternates) = call.alleles().split_first().expect("Variant call without alleles");
        let verdict = if verdict.is_pass() { PASS.to_owned() } else { verdict.filters().iter().join(";") };
        saveto.serialize(Row {
            chrom: call.locus().contig(),
            position: call.locus().pos(),
            reference,
            alternates: alternates.iter().join(","),
            verdict,
        })?;
    }
    saveto.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use bio_types::genome::Locus;

    use crate::core::filtering::names;

    use super::*;

    #[test]
    fn verdicts() {
        let call = |contig: &str, pos, alleles: &[&str]| {
            VariantCall::new(
                Locus::new(contig.into(), pos),
                alleles.iter().map(|x| x.to_string()).collect(),
                HashMap::new(),
                HashMap::new(),
            )
        };
        let calls = vec![
            call("chr1", 100, &["A", "T"]),
            call("chrM", 302, &["C", "CA", "CAA"]),
            call("chr2", 500, &["G", "C"]),
        ];

        let mut failed = FilterResult::new();
        failed.add(names::STRAND_ARTIFACT);
        failed.add(names::BASE_QUALITY);
        let results = vec![FilterResult::new(), failed, FilterResult::new()];

        let mut saveto = csv::WriterBuilder::new().delimiter(b'\t').from_writer(Vec::new());
        super::verdicts(&mut saveto, &calls, &results).unwrap();

        let result = String::from_utf8(saveto.into_inner().unwrap()).unwrap();
        let expected = "chrom\tposition\treference\talternates\tverdict\n\
                        chr1\t100\tA\tT\tPASS\n\
                        chrM\t302\tC\tCA,CAA\tbase_quality;strand_artifact\n\
                        chr2\t500\tG\tC\tPASS\n";
        assert_eq!(&result, expected)
    }
}

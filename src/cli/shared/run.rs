use std::io;

use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::cli::shared;
use crate::cli::shared::resformat;
use crate::core::filtering::FilterEngine;
use crate::core::io::RecordSource;
use crate::core::Result;

pub fn run<S: RecordSource, W: io::Write>(
    source: &mut S,
    engine: &FilterEngine,
    pbar: ProgressBar,
    saveto: &mut csv::Writer<W>,
) -> Result<()> {
    pbar.set_style(shared::style::run::running());
    pbar.set_message("Reading candidate calls...");
    let calls = source.read_all()?;

    pbar.set_length(calls.len() as u64);
    pbar.set_message("Filtering...");
    let verdicts = calls
        .par_iter()
        .map(|call| {
            let verdict = engine.evaluate(call);
            pbar.inc(1);
            verdict
        })
        .collect::<Result<Vec<_>>>()?;

    pbar.set_style(shared::style::run::finished());
    let passed = verdicts.iter().filter(|x| x.is_pass()).count();
    pbar.finish_with_message(format!("Finished: {} of {} calls passed all filters", passed, calls.len()));

    resformat::verdicts(saveto, &calls, &verdicts)?;
    Ok(())
}

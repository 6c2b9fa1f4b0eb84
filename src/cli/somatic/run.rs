use clap::ArgMatches;
use indicatif::ProgressBar;

use crate::cli::shared;
use crate::cli::shared::args::CoreArgs;
use crate::core::filtering::{FilterContext, FilterEngine};
use crate::core::io::VcfReader;

const INPUT_IO_ERROR: &str = "Failed to open the input VCF/BCF file";

pub fn run(args: &ArgMatches, core: CoreArgs, factory: impl Fn() -> ProgressBar) {
    let thresholds = shared::parse::thresholds(factory(), args, None, None);
    let lodkey = shared::parse::lod_key(factory(), args);

    let engine = FilterEngine::somatic(FilterContext::new(thresholds, core.tumor, core.normal, lodkey));

    let mut source = VcfReader::from_path(&core.input).expect(INPUT_IO_ERROR);
    let mut saveto = csv::WriterBuilder::new().delimiter(b'\t').from_writer(core.saveto);

    shared::run(&mut source, &engine, factory(), &mut saveto).unwrap_or_else(|err| panic!("{}", err));
}

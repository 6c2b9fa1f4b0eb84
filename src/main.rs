use clap::{crate_name, crate_version, App, AppSettings};
use indicatif::{MultiProgress, ProgressBar};
use rayon::ThreadPoolBuilder;

use varsift::cli;
use varsift::cli::shared::args::CoreArgs;
use varsift::cli::shared::style;

const THREAD_POOL_ERROR: &str = "Failed to initialize thread pool";
const RENDER_ERROR: &str = "Failed to render progress bars. Leak?";

fn main() {
    let app = App::new(crate_name!())
        .version(crate_version!())
        .about("Hard-filters somatic and mitochondrial variant calls by the evidence behind them")
        .global_setting(AppSettings::DeriveDisplayOrder)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            App::new(cli::somatic::NAME)
                .about("Filter somatic calls made against a matched normal or in tumor-only mode")
                .args(cli::somatic::args()),
        )
        .subcommand(
            App::new(cli::mito::NAME)
                .about("Filter mitochondrial calls, appending organelle checks to the somatic battery")
                .args(cli::mito::args()),
        );
    let matches = app.get_matches();

    let mbar = MultiProgress::new();
    let style = style::parse::with_progress();
    let factory = || mbar.add(ProgressBar::new_spinner().with_style(style.clone()));

    let (subcommand, matches) = matches.subcommand().expect("Subcommand is required");
    let core = CoreArgs::new(matches, factory);

    let pool = ThreadPoolBuilder::new().num_threads(core.threads).build().expect(THREAD_POOL_ERROR);
    pool.scope(|_| match subcommand {
        cli::somatic::NAME => cli::somatic::run(matches, core, factory),
        cli::mito::NAME => cli::mito::run(matches, core, factory),
        _ => unreachable!("Unknown subcommand: {}", subcommand),
    });
    mbar.join_and_clear().expect(RENDER_ERROR);
}

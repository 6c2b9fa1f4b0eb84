use clap::Arg;

use crate::cli::shared;

// Somatic callers annotate the tumor log-odds as TLOD
pub const LOD_KEY_DEFAULT: &str = "TLOD";

pub fn all<'a>() -> Vec<Arg<'a>> {
    shared::args::all(LOD_KEY_DEFAULT)
}

pub use args::all as args;
pub use run::run;

pub mod args;
mod run;

pub const NAME: &str = "mito";

pub use run::run;

pub mod args;
pub mod parse;
pub mod resformat;
mod run;
pub mod style;
pub mod validate;

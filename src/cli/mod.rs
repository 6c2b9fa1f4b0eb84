pub mod mito;
pub mod shared;
pub mod somatic;

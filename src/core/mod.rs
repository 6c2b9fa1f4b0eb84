pub use error::{Error, Result};

pub mod error;
pub mod filtering;
pub mod io;
pub mod variant;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read the input VCF/BCF: {0}")]
    Htslib(#[from] rust_htslib::errors::Error),

    #[error("failed to write the verdicts TSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write the verdicts TSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("sample {0} is not present in the input VCF/BCF")]
    UnknownSample(String),

    #[error("attribute {key}={value} is not a valid integer")]
    MalformedAttribute { key: String, value: String },
}

impl Error {
    pub fn malformed(key: &str, value: impl ToString) -> Self {
        Self::MalformedAttribute { key: key.to_owned(), value: value.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

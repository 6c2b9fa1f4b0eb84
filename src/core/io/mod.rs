#[cfg(test)]
use mockall::automock;

pub use vcf::VcfReader;

use crate::core::variant::VariantCall;
use crate::core::Result;

mod vcf;

#[cfg_attr(test, automock)]
pub trait RecordSource {
    fn read_all(&mut self) -> Result<Vec<VariantCall>>;
}

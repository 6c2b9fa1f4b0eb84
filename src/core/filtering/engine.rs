use crate::core::variant::VariantCall;
use crate::core::Result;

use super::checks::{self, Check};
use super::{FilterContext, FilterResult};

#[derive(Clone)]
pub struct FilterEngine {
    ctx: FilterContext,
    checks: Vec<Check>,
}

impl FilterEngine {
    pub fn new(ctx: FilterContext, checks: Vec<Check>) -> Self {
        Self { ctx, checks }
    }

    pub fn somatic(ctx: FilterContext) -> Self {
        Self::new(ctx, checks::SOMATIC.to_vec())
    }

    // Organelle calls are screened by the somatic battery first
    pub fn mitochondrial(ctx: FilterContext) -> Self {
        let battery = checks::SOMATIC.iter().chain(checks::MITOCHONDRIAL).copied().collect();
        Self::new(ctx, battery)
    }

    pub fn ctx(&self) -> &FilterContext {
        &self.ctx
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn evaluate(&self, call: &VariantCall) -> Result<FilterResult> {
        let mut result = FilterResult::new();
        for check in &self.checks {
            check(&self.ctx, call, &mut result)?;
        }
        Ok(result)
    }
}

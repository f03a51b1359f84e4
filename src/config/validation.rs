use super::traits::ConfigSection;
use crate::error::Result;
use crate::splitters::{ExpandingConfig, RollingConfig, Splitter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMethod {
    Rolling,
    Expanding,
}

/// Cross-validation setup: which windowing policy to use and the parameters
/// for each. Only the section matching `method` is consulted when building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub method: SplitMethod,
    pub rolling: RollingConfig,
    pub expanding: ExpandingConfig,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            method: SplitMethod::Rolling,
            rolling: RollingConfig::default(),
            expanding: ExpandingConfig::default(),
        }
    }
}

impl ValidationConfig {
    /// Construct the configured splitter, failing fast on invalid parameters.
    pub fn build(&self) -> Result<Splitter> {
        match self.method {
            SplitMethod::Rolling => {
                let c = self.rolling;
                Splitter::rolling(c.train_size, c.test_size, c.step_size)
            }
            SplitMethod::Expanding => {
                let c = self.expanding;
                Splitter::expanding(c.test_size, c.step_size)
            }
        }
    }
}

impl ConfigSection for ValidationConfig {
    fn section_name() -> &'static str {
        "validation"
    }

    fn validate(&self) -> Result<()> {
        match self.method {
            SplitMethod::Rolling => self.rolling.validate(),
            SplitMethod::Expanding => self.expanding.validate(),
        }
    }
}

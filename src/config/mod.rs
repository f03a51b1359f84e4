pub mod manager;
pub mod traits;
pub mod validation;

pub use manager::ConfigManager;
pub use traits::ConfigSection;
pub use validation::{SplitMethod, ValidationConfig};

//! Interactive session settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(default)]
pub struct ReplConfig {
    #[validate(length(min = 1, max = 16))]
    pub prompt: String,

    /// Print the title and command list when the session starts.
    pub show_banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            show_banner: true,
        }
    }
}

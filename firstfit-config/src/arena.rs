//! Arena parameters.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(default)]
#[validate(schema(function = validation::validate_arena))]
pub struct ArenaConfig {
    /// Allocation sizes are rounded up to a multiple of this (power of two).
    #[validate(range(min = 1, max = 4096))]
    pub alignment: usize,

    /// Capacity to initialise the arena with at startup. `None` leaves the
    /// arena empty until the first `INIT`.
    pub initial_capacity: Option<usize>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            alignment: 4,
            initial_capacity: None,
        }
    }
}

//! User ↔ food relation kinds (likes and saves).

use serde::{Deserialize, Serialize};

/// A boolean relation a user can toggle on a food item.
///
/// Each kind owns its own denormalized counter on the food item. The two
/// relations are independent: liking a food does not save it and vice versa.
///
/// Storage format: `i16` (0 = Like, 1 = Save).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Like = 0,
    Save = 1,
}

impl RelationKind {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

/// Result of a single toggle: whether the relation now exists, and the
/// counter value after the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub active: bool,
    pub count: i64,
}

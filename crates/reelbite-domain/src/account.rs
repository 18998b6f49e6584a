//! Account domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which kind of account a session belongs to.
///
/// Wire format: `"user"` or `"food_partner"` (the `kind` claim of a session token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    User,
    FoodPartner,
}

impl AccountKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::FoodPartner => "food_partner",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

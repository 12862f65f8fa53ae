use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A stocked item: a name, days left to sell it, and its current quality.
///
/// Fields are public; callers build items themselves and read them back after
/// each update cycle. No validation is performed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }

    /// Whether the item is past its sell-by date.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

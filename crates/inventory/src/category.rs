//! Item categories, derived from the item name.

use serde::{Deserialize, Serialize};

/// Rule category an item belongs to.
///
/// Classification is by exact name match; anything not recognized is
/// [`Category::Regular`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AgedBrie,
    BackstagePass,
    Legendary,
    Conjured,
    Regular,
}

impl Category {
    pub const AGED_BRIE: &'static str = "Aged Brie";
    pub const BACKSTAGE_PASS: &'static str = "Backstage passes to a TAFKAL80ETC concert";
    pub const LEGENDARY: &'static str = "Sulfuras, Hand of Ragnaros";
    pub const CONJURED: &'static str = "Conjured Mama Cakes";

    /// Classify an item name.
    pub fn of(name: &str) -> Self {
        match name {
            Self::AGED_BRIE => Category::AgedBrie,
            Self::BACKSTAGE_PASS => Category::BackstagePass,
            Self::LEGENDARY => Category::Legendary,
            Self::CONJURED => Category::Conjured,
            _ => Category::Regular,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::AgedBrie => "aged_brie",
            Category::BackstagePass => "backstage_pass",
            Category::Legendary => "legendary",
            Category::Conjured => "conjured",
            Category::Regular => "regular",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Daily update engine.
//!
//! One call to [`advance`] is one elapsed day. Per item, in order:
//! 1. apply the category's baseline quality change (bounded unit steps),
//! 2. decrement `sell_in` (legendary items excepted),
//! 3. if `sell_in` is now negative, apply the category's expiry adjustment.

use tracing::{debug, trace};

use crate::category::Category;
use crate::item::Item;
use crate::quality::{self, BACKSTAGE_FIRST_TIER, BACKSTAGE_SECOND_TIER};

/// Advance every item in `items` by one day, in sequence order.
pub fn advance(items: &mut [Item]) {
    trace!(items = items.len(), "advancing inventory one day");

    for item in items.iter_mut() {
        advance_item(item);
    }
}

/// Advance a single item by one day.
pub fn advance_item(item: &mut Item) {
    let category = item.category();

    if !category.is_legendary() {
        apply_daily_change(category, item);

        item.sell_in = item.sell_in.saturating_sub(1);

        if item.is_expired() {
            apply_expiry(category, item);
        }
    }

    debug!(
        name = %item.name,
        category = %category,
        sell_in = item.sell_in,
        quality = item.quality,
        "item processed"
    );
}

fn apply_daily_change(category: Category, item: &mut Item) {
    match category {
        Category::AgedBrie => {
            quality::raise(&mut item.quality);
        }
        Category::BackstagePass => {
            // Tiers only apply when the baseline step itself went through.
            if quality::raise(&mut item.quality) {
                if item.sell_in < BACKSTAGE_FIRST_TIER {
                    quality::raise(&mut item.quality);
                }
                if item.sell_in < BACKSTAGE_SECOND_TIER {
                    quality::raise(&mut item.quality);
                }
            }
        }
        // Conjured items degrade at the regular rate.
        Category::Regular | Category::Conjured => {
            quality::lower(&mut item.quality);
        }
        Category::Legendary => {}
    }
}

fn apply_expiry(category: Category, item: &mut Item) {
    match category {
        Category::AgedBrie => {
            quality::raise(&mut item.quality);
        }
        Category::BackstagePass => {
            item.quality = 0;
        }
        Category::Regular | Category::Conjured => {
            quality::lower(&mut item.quality);
        }
        Category::Legendary => {}
    }
}

/// An owned, ordered collection of items advanced together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance all items by one day.
    pub fn advance(&mut self) {
        advance(&mut self.items);
    }

    /// Advance all items by `days` days, one day at a time.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance();
        }
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

use gildedrose_inventory::{Category, Item};

/// The standard shelf used by the daily report.
pub fn default_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(Category::AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(Category::LEGENDARY, 0, 80),
        Item::new(Category::LEGENDARY, -1, 80),
        Item::new(Category::BACKSTAGE_PASS, 15, 20),
        Item::new(Category::BACKSTAGE_PASS, 10, 49),
        Item::new(Category::BACKSTAGE_PASS, 5, 49),
        Item::new(Category::CONJURED, 3, 6),
    ]
}

use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, info};

use gildedrose_inventory::{Inventory, Item};

use crate::config::{FixtureConfig, OutputFormat};

/// One day's snapshot, as written in JSON mode.
#[derive(Debug, Serialize)]
struct DayReport<'a> {
    day: u32,
    items: &'a [Item],
}

/// Write the state of `items` at the end of `day`.
pub fn render_day<W: Write>(
    out: &mut W,
    day: u32,
    items: &[Item],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "-------- day {day} --------")?;
            writeln!(out, "name, sellIn, quality")?;
            for item in items {
                writeln!(out, "{item}")?;
            }
            writeln!(out)
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &DayReport { day, items })?;
            writeln!(out)
        }
    }
}

/// Render day 0, then advance one day at a time and render each day.
pub fn run<W: Write>(config: &FixtureConfig, items: Vec<Item>, out: &mut W) -> io::Result<()> {
    info!(days = config.days, items = items.len(), "running daily report");

    let mut inventory = Inventory::new(items);
    render_day(out, 0, inventory.items(), config.format)?;

    for day in 1..=config.days {
        inventory.advance();
        debug!(day, "day complete");
        render_day(out, day, inventory.items(), config.format)?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock::default_stock;

    fn render(config: &FixtureConfig, items: Vec<Item>) -> String {
        let mut out = Vec::new();
        run(config, items, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_day_layout() {
        let mut out = Vec::new();
        render_day(
            &mut out,
            3,
            &[Item::new("foo", 1, 2)],
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "-------- day 3 --------\nname, sellIn, quality\nfoo, 1, 2\n\n"
        );
    }

    #[test]
    fn json_day_is_one_line() {
        let mut out = Vec::new();
        render_day(
            &mut out,
            1,
            &[Item::new("Aged Brie", -1, 2)],
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"day\":1,\"items\":[{\"name\":\"Aged Brie\",\"sell_in\":-1,\"quality\":2}]}\n"
        );
    }

    #[test]
    fn zero_days_renders_initial_state_only() {
        let config = FixtureConfig {
            days: 0,
            format: OutputFormat::Text,
        };
        let text = render(&config, default_stock());
        assert!(text.starts_with("-------- day 0 --------\n"));
        assert!(!text.contains("day 1"));
    }

    #[test]
    fn default_run_matches_known_output() {
        let text = render(&FixtureConfig::default(), default_stock());
        let expected = "\
-------- day 0 --------
name, sellIn, quality
+5 Dexterity Vest, 10, 20
Aged Brie, 2, 0
Elixir of the Mongoose, 5, 7
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 15, 20
Backstage passes to a TAFKAL80ETC concert, 10, 49
Backstage passes to a TAFKAL80ETC concert, 5, 49
Conjured Mama Cakes, 3, 6

-------- day 1 --------
name, sellIn, quality
+5 Dexterity Vest, 9, 19
Aged Brie, 1, 1
Elixir of the Mongoose, 4, 6
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 14, 21
Backstage passes to a TAFKAL80ETC concert, 9, 50
Backstage passes to a TAFKAL80ETC concert, 4, 50
Conjured Mama Cakes, 2, 5

-------- day 2 --------
name, sellIn, quality
+5 Dexterity Vest, 8, 18
Aged Brie, 0, 2
Elixir of the Mongoose, 3, 5
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 13, 22
Backstage passes to a TAFKAL80ETC concert, 8, 50
Backstage passes to a TAFKAL80ETC concert, 3, 50
Conjured Mama Cakes, 1, 4

";
        assert_eq!(text, expected);
    }

    #[test]
    fn json_run_emits_one_line_per_day() {
        let config = FixtureConfig {
            days: 5,
            format: OutputFormat::Json,
        };
        let text = render(&config, default_stock());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);

        let last: serde_json::Value = serde_json::from_str(lines[5]).unwrap();
        assert_eq!(last["day"], 5);
        assert_eq!(last["items"].as_array().unwrap().len(), 9);
        assert_eq!(last["items"][1]["name"], "Aged Brie");
        assert_eq!(last["items"][1]["sell_in"], -3);
        assert_eq!(last["items"][1]["quality"], 8);
    }
}

//! Inventory update rules.
//!
//! This crate contains the daily aging rules for stocked items, implemented
//! purely as deterministic domain logic (no IO, no storage). Callers own the
//! item sequence and hand it to [`advance`] once per simulated day.

pub mod category;
pub mod engine;
pub mod item;
pub mod quality;

pub use category::Category;
pub use engine::{Inventory, advance, advance_item};
pub use item::Item;
pub use quality::{MAX_QUALITY, MIN_QUALITY};

//! Quality bounds and bounded unit steps.
//!
//! Every change to quality is a single ±1 step that is checked against the
//! bound *before* it is applied. A step that would cross the bound is skipped;
//! a value that is already outside the range is left where it is.

/// Lowest quality a non-legendary item can be decremented to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can be incremented to.
pub const MAX_QUALITY: i32 = 50;

/// Backstage passes gain an extra point when `sell_in` is below this.
pub const BACKSTAGE_FIRST_TIER: i32 = 11;

/// Backstage passes gain a second extra point when `sell_in` is below this.
pub const BACKSTAGE_SECOND_TIER: i32 = 6;

/// Raise quality by one if it is below [`MAX_QUALITY`].
///
/// Returns whether the step was applied.
pub fn raise(quality: &mut i32) -> bool {
    if *quality < MAX_QUALITY {
        *quality += 1;
        true
    } else {
        false
    }
}

/// Lower quality by one if it is above [`MIN_QUALITY`].
///
/// Returns whether the step was applied.
pub fn lower(quality: &mut i32) -> bool {
    if *quality > MIN_QUALITY {
        *quality -= 1;
        true
    } else {
        false
    }
}

//! Aged Rule - aged items gain quality as they get older

use crate::item::{clamp_quality, Item};
use crate::rules::is_expired;

/// Daily quality gain. Doubles once the sell-by date has passed.
pub fn aged_appreciation(sell_in: i32) -> i32 {
    if is_expired(sell_in) {
        2
    } else {
        1
    }
}

pub fn aged_rule(item: &Item) -> Item {
    item.with_values(
        item.sell_in.saturating_sub(1),
        clamp_quality(item.quality.saturating_add(aged_appreciation(item.sell_in))),
    )
}

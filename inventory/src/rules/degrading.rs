//! Degrading Rules - normal and conjured items lose quality every day

use crate::item::{clamp_quality, Item};
use crate::rules::is_expired;

/// Daily quality loss of a normal item. Doubles once the item has expired.
pub fn normal_degradation(sell_in: i32) -> i32 {
    if is_expired(sell_in) {
        2
    } else {
        1
    }
}

/// Conjured items degrade twice as fast as normal ones
pub fn conjured_degradation(sell_in: i32) -> i32 {
    2 * normal_degradation(sell_in)
}

pub fn normal_rule(item: &Item) -> Item {
    degrade(item, normal_degradation(item.sell_in))
}

pub fn conjured_rule(item: &Item) -> Item {
    degrade(item, conjured_degradation(item.sell_in))
}

fn degrade(item: &Item, loss: i32) -> Item {
    item.with_values(
        item.sell_in.saturating_sub(1),
        clamp_quality(item.quality.saturating_sub(loss)),
    )
}

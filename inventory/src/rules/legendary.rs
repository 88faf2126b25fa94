//! Legendary Rule - legendary items are never sold and never lose quality

use crate::item::{Item, LEGENDARY_QUALITY};

pub fn legendary_rule(item: &Item) -> Item {
    item.with_values(item.sell_in, LEGENDARY_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legendary_is_fixed() {
        for sell_in in [-1, 0, 10] {
            let item = Item::new("Sulfuras, Hand of Ragnaros", sell_in, 80);
            assert_eq!(legendary_rule(&item), item);
        }
    }
}

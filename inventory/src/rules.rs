//! Update Rules - compute each item's next-day values
//!
//! One module per rule family. Every rule is a pure function from the current
//! item to the next one; nothing is mutated in place.

pub mod aged;
pub mod degrading;
pub mod event_ticket;
pub mod legendary;

pub use aged::aged_rule;
pub use degrading::{conjured_rule, normal_rule};
pub use event_ticket::event_ticket_rule;
pub use legendary::legendary_rule;

use crate::item::{Category, Item};

/// Signature shared by every update rule
pub type UpdateRule = fn(&Item) -> Item;

/// An item is past its sell-by date when the countdown, read before this
/// tick's decrement, is no longer positive.
pub(crate) fn is_expired(sell_in: i32) -> bool {
    sell_in <= 0
}

/// Rule that applies to a category
pub fn rule_for(category: Category) -> UpdateRule {
    match category {
        Category::Normal => normal_rule,
        Category::Legendary => legendary_rule,
        Category::Aged => aged_rule,
        Category::EventTicket => event_ticket_rule,
        Category::Conjured => conjured_rule,
    }
}

/// Advance a single item by one day
pub fn advance_one_day(item: &Item) -> Item {
    rule_for(item.category())(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_name() {
        assert_eq!(
            advance_one_day(&Item::new("Aged Brie", 2, 0)),
            Item::new("Aged Brie", 1, 1)
        );
        assert_eq!(
            advance_one_day(&Item::new("Sulfuras, Hand of Ragnaros", -1, 80)),
            Item::new("Sulfuras, Hand of Ragnaros", -1, 80)
        );
        assert_eq!(
            advance_one_day(&Item::new("Conjured Mana Cake", 3, 6)),
            Item::new("Conjured Mana Cake", 2, 4)
        );
        assert_eq!(
            advance_one_day(&Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20)),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 14, 21)
        );
    }

    #[test]
    fn test_unknown_name_uses_normal_rule() {
        let item = Item::new("Elixir of the Mongoose", 5, 7);
        assert_eq!(advance_one_day(&item), normal_rule(&item));
        assert_eq!(advance_one_day(&item), Item::new("Elixir of the Mongoose", 4, 6));
    }

    #[test]
    fn test_input_is_untouched() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        let snapshot = item.clone();
        let _ = advance_one_day(&item);
        assert_eq!(item, snapshot);
    }

    #[test]
    fn test_expiry_boundary() {
        assert!(!is_expired(1));
        assert!(is_expired(0));
        assert!(is_expired(-1));
    }
}

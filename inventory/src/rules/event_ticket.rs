//! Event Ticket Rule
//!
//! Tickets gain value as the event approaches and are worthless afterwards.

use crate::item::{clamp_quality, Item, MIN_QUALITY};
use crate::rules::is_expired;

/// Days-left thresholds and the daily gain that applies at or below each one
const APPRECIATION_STEPS: &[(i32, i32)] = &[
    (5, 3),
    (10, 2),
];

/// Daily gain while the event is still ahead
fn ticket_appreciation(sell_in: i32) -> i32 {
    APPRECIATION_STEPS
        .iter()
        .find(|(days, _)| sell_in <= *days)
        .map(|(_, gain)| *gain)
        .unwrap_or(1)
}

pub fn event_ticket_rule(item: &Item) -> Item {
    let quality = if is_expired(item.sell_in) {
        MIN_QUALITY
    } else {
        clamp_quality(item.quality.saturating_add(ticket_appreciation(item.sell_in)))
    };

    item.with_values(item.sell_in.saturating_sub(1), quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

    #[test]
    fn test_appreciation_steps() {
        assert_eq!(ticket_appreciation(15), 1);
        assert_eq!(ticket_appreciation(11), 1);
        assert_eq!(ticket_appreciation(10), 2);
        assert_eq!(ticket_appreciation(6), 2);
        assert_eq!(ticket_appreciation(5), 3);
        assert_eq!(ticket_appreciation(1), 3);
    }

    #[test]
    fn test_ticket_gains() {
        assert_eq!(event_ticket_rule(&Item::new(PASSES, 15, 20)).quality, 21);
        assert_eq!(event_ticket_rule(&Item::new(PASSES, 10, 20)).quality, 22);
        assert_eq!(event_ticket_rule(&Item::new(PASSES, 5, 20)).quality, 23);
    }

    #[test]
    fn test_ticket_caps_at_max() {
        assert_eq!(event_ticket_rule(&Item::new(PASSES, 5, 49)).quality, 50);
    }

    #[test]
    fn test_ticket_worthless_after_event() {
        let next = event_ticket_rule(&Item::new(PASSES, 0, 50));
        assert_eq!((next.sell_in, next.quality), (-1, 0));
        let next = event_ticket_rule(&next);
        assert_eq!((next.sell_in, next.quality), (-2, 0));
    }
}

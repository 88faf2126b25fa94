//! Stock catalog
//!
//! Names the rules key off, the opening inventory of the inn, and random
//! stock generation for benchmarks.

use rand::Rng;

use crate::item::{Category, Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Everyday goods (normal rule)
const COMMON_GOODS: &[&str] = &[
    "+5 Dexterity Vest",
    "Elixir of the Mongoose",
    "Hearthstone Ale",
    "Traveller's Cloak",
    "Tin of Lamp Oil",
    "Potion of Minor Healing",
];

/// The inventory the inn opens with
pub fn standard_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED_MANA_CAKE, 3, 6),
    ]
}

/// Pick a random stock name, special items included
pub fn random_name<R: Rng>(rng: &mut R) -> &'static str {
    let specials = [AGED_BRIE, BACKSTAGE_PASSES, SULFURAS, CONJURED_MANA_CAKE];
    let idx = rng.gen_range(0..COMMON_GOODS.len() + specials.len());
    if idx < COMMON_GOODS.len() {
        COMMON_GOODS[idx]
    } else {
        specials[idx - COMMON_GOODS.len()]
    }
}

/// Generate `count` well-formed items
pub fn random_stock<R: Rng>(rng: &mut R, count: usize) -> Vec<Item> {
    (0..count)
        .map(|_| {
            let name = random_name(rng);
            let sell_in = rng.gen_range(-5..=30);
            let quality = match Category::from_name(name) {
                Category::Legendary => LEGENDARY_QUALITY,
                _ => rng.gen_range(MIN_QUALITY..=MAX_QUALITY),
            };
            Item::new(name, sell_in, quality)
        })
        .collect()
}

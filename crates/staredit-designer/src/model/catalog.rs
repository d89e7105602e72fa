//! Names for indexed attributes and the scale presets offered to users.

/// Planet sprite names, indexed by a planet's `sprite`.
pub const PLANET_SPRITES: [&str; 10] = [
    "Earth", "Europa", "Ganymede", "Io", "Jupiter", "Mars", "Moon", "Neptune", "Uranus", "Venus",
];

/// Pickup names, indexed by an item's `item_type`.
pub const ITEM_TYPES: [&str; 3] = ["Zipper", "Magnet", "Helmet"];

pub fn sprite_name(index: u32) -> Option<&'static str> {
    PLANET_SPRITES.get(index as usize).copied()
}

pub fn item_name(index: u32) -> Option<&'static str> {
    ITEM_TYPES.get(index as usize).copied()
}

/// Scale presets 0.1, 0.2, ..., 1.0.
pub fn scale_choices() -> Vec<f64> {
    (1..=10).map(|i| f64::from(i) / 10.0).collect()
}

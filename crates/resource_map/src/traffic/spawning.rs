use rand::Rng;

use crate::categories::{CategoryTables, Street};
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, VEHICLE_MAX_SPEED, VEHICLE_MIN_SPEED};

use super::types::{Direction, Vehicle};

/// Rare icons; the first vehicles always take these so every map shows them.
pub const SPECIAL_ICONS: &[&str] = &["🚌", "🚲"];
/// Rotation for the remaining vehicles.
pub const COMMON_ICONS: &[&str] = &["🚗", "🚕", "🚙"];

/// Street used when the tables define none on either axis.
const CENTER_LINE: &str = "Center Line";

/// Create the fixed vehicle set.
///
/// Path axis, street and speed are drawn here and never again. Horizontal
/// vehicles enter at the right edge, vertical ones at the top edge.
pub fn spawn_vehicles<R: Rng>(count: usize, tables: &CategoryTables, rng: &mut R) -> Vec<Vehicle> {
    (0..count)
        .map(|i| {
            let icon = match SPECIAL_ICONS.get(i) {
                Some(icon) => *icon,
                None => COMMON_ICONS[(i - SPECIAL_ICONS.len()) % COMMON_ICONS.len()],
            };

            let horizontal = match (
                tables.horizontal_streets.is_empty(),
                tables.vertical_streets.is_empty(),
            ) {
                (false, true) => true,
                (true, false) => false,
                _ => rng.gen_bool(0.5),
            };
            let speed = rng.gen_range(VEHICLE_MIN_SPEED..VEHICLE_MAX_SPEED);

            let (direction, x, y, street) = if horizontal {
                let (name, y) = pick(&tables.horizontal_streets, rng)
                    .unwrap_or_else(|| (CENTER_LINE.to_string(), CANVAS_HEIGHT / 2.0));
                (Direction::Left, CANVAS_WIDTH, y, name)
            } else {
                let (name, x) = pick(&tables.vertical_streets, rng)
                    .unwrap_or_else(|| (CENTER_LINE.to_string(), CANVAS_WIDTH / 2.0));
                (Direction::Down, x, 0.0, name)
            };

            Vehicle {
                id: i as u32,
                icon: icon.to_string(),
                x,
                y,
                direction,
                speed,
                street,
            }
        })
        .collect()
}

fn pick<R: Rng>(streets: &[Street], rng: &mut R) -> Option<(String, f32)> {
    if streets.is_empty() {
        return None;
    }
    let street = &streets[rng.gen_range(0..streets.len())];
    Some((street.name.clone(), street.offset))
}

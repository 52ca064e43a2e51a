use serde::{Deserialize, Serialize};

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Along a horizontal street, right edge to left edge.
    Left,
    /// Along a vertical street, top edge to bottom edge.
    Down,
}

/// A decorative marker driving along one fixed street.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    pub icon: String,
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    /// Canvas units per logical tick.
    pub speed: f32,
    pub street: String,
}

impl Vehicle {
    /// Move one logical tick along the vehicle's axis, wrapping to the
    /// opposite edge once it leaves the canvas.
    pub fn advance(&mut self) {
        match self.direction {
            Direction::Left => {
                self.x -= self.speed;
                if self.x < 0.0 {
                    self.x = CANVAS_WIDTH;
                }
            }
            Direction::Down => {
                self.y += self.speed;
                if self.y > CANVAS_HEIGHT {
                    self.y = 0.0;
                }
            }
        }
    }
}

use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// A position in diagram space. Plain value, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        point(self.x, self.y)
    }
}

impl From<Point> for Coordinate {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The side of a node an edge leaves from or enters through.
///
/// Serialized lowercase to match the host's handle positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Outward unit normal. Screen coordinates: y grows downward.
    pub fn normal(self) -> Vector {
        match self {
            Side::Left => vector(-1.0, 0.0),
            Side::Right => vector(1.0, 0.0),
            Side::Top => vector(0.0, -1.0),
            Side::Bottom => vector(0.0, 1.0),
        }
    }
}

//
//   Doubled-width layout, pointy top, lattice y grows upward:
//
//            -1, 1       1, 1
//      -2, 0        0, 0        2, 0
//            -1,-1       1,-1
//
//   A horizontal step changes x by 2, a diagonal step changes both x and y by 1.

use serde::{Deserialize, Serialize};
use std::fmt;

const SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// The six neighbor directions, clockwise starting from east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDirection {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
        HexDirection::NorthEast,
    ];

    /// Coordinate delta of a single step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            HexDirection::East => (2, 0),
            HexDirection::SouthEast => (1, -1),
            HexDirection::SouthWest => (-1, -1),
            HexDirection::West => (-2, 0),
            HexDirection::NorthWest => (-1, 1),
            HexDirection::NorthEast => (1, 1),
        }
    }

    pub const fn opposite(self) -> HexDirection {
        match self {
            HexDirection::East => HexDirection::West,
            HexDirection::SouthEast => HexDirection::NorthWest,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::West => HexDirection::East,
            HexDirection::NorthWest => HexDirection::SouthEast,
            HexDirection::NorthEast => HexDirection::SouthWest,
        }
    }
}

/// Doubled-width axial coordinates for a hexagonal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for HexCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl HexCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Find the coordinate closest to a cartesian position for the given tile size.
    ///
    /// The axes are rounded independently, thus near a cell boundary the result may be off grid.
    /// A non positive tile size maps everything to the origin.
    pub fn from_cartesian(x: f64, y: f64, tile_size: f64) -> Self {
        if !(tile_size > 0.0 && tile_size.is_finite() && x.is_finite() && y.is_finite()) {
            return Self::origin();
        }

        let half = tile_size / 2.0;
        Self {
            x: (x / SQRT3_2 / half).round() as i32,
            y: (y * 2.0 / 3.0 / half).round() as i32,
        }
    }

    /// Cartesian position of the coordinate origin for the given tile size.
    pub fn cartesian(&self, tile_size: f64) -> (f64, f64) {
        let half = tile_size / 2.0;
        (self.x as f64 * SQRT3_2 * half, self.y as f64 * 1.5 * half)
    }

    /// Check if the parity of the two components matches, i.e. the coordinate is a cell of the lattice.
    pub const fn is_on_grid(&self) -> bool {
        self.x.rem_euclid(2) == self.y.rem_euclid(2)
    }

    /// Calculate the distance between two hexes in the doubled-width coordinate system
    pub fn distance(&self, other: &HexCoord) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dy + ((dx - dy) / 2).max(0)
    }

    pub const fn neighbor(&self, direction: HexDirection) -> HexCoord {
        let (dx, dy) = direction.delta();
        HexCoord::new(self.x + dx, self.y + dy)
    }

    /// Get the coordinates of the hex neighbors in the order of [`HexDirection::ALL`].
    pub fn neighbors(&self) -> [HexCoord; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }

    /// Get the coordinates of all hexes in a ring at the given radius
    pub fn ring(&self, radius: u32) -> RingIterator {
        RingIterator::new(*self, radius)
    }

    /// Get the coordinates of all hexes within the given radius (inclusive)
    pub fn spiral(&self, radius: u32) -> SpiralIterator {
        SpiralIterator::new(*self, radius)
    }
}

/// Iterator that yields coordinates in a hexagonal ring, clockwise from the north-west corner
#[derive(Debug)]
pub struct RingIterator {
    radius: u32,
    current: HexCoord,
    direction_idx: usize,
    steps_taken: u32,
}

impl RingIterator {
    fn new(center: HexCoord, radius: u32) -> Self {
        let (dx, dy) = HexDirection::NorthWest.delta();
        let r = radius as i32;
        let current = HexCoord::new(center.x + dx * r, center.y + dy * r);

        Self {
            radius,
            current,
            direction_idx: 0,
            steps_taken: 0,
        }
    }
}

impl Iterator for RingIterator {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.direction_idx >= HexDirection::ALL.len() {
            return None;
        }

        if self.radius == 0 {
            self.direction_idx = HexDirection::ALL.len();
            return Some(self.current);
        }

        if self.steps_taken >= self.radius {
            self.direction_idx += 1;
            self.steps_taken = 0;
        }

        let direction = HexDirection::ALL.get(self.direction_idx)?;
        let result = self.current;
        self.current = self.current.neighbor(*direction);
        self.steps_taken += 1;
        Some(result)
    }
}

#[derive(Debug)]
pub struct SpiralIterator {
    center: HexCoord,
    radius: u32,
    current_radius: u32,
    ring: RingIterator,
}

impl SpiralIterator {
    fn new(center: HexCoord, radius: u32) -> Self {
        Self {
            center,
            radius,
            current_radius: 0,
            ring: center.ring(0),
        }
    }
}

impl Iterator for SpiralIterator {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(coord) = self.ring.next() {
            Some(coord)
        } else if self.current_radius < self.radius {
            self.current_radius += 1;
            self.ring = self.center.ring(self.current_radius);
            self.ring.next()
        } else {
            None
        }
    }
}

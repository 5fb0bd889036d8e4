/// A cell position on the unbounded integer lattice.
/// Used directly as a hash key, so equality and hashing are structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the 8 Moore-neighborhood cells
#[rustfmt::skip]
static MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by an offset. Returns None past the edge of the i32 lattice.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The 8 Moore neighbors, skipping any that would leave the i32 range
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        MOORE_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.checked_offset(dx, dy))
    }

    /// Both components are >= 0
    pub const fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

/// Inclusive rectangle of lattice cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub min: Coord,
    pub max: Coord,
}

impl Region {
    /// Build from any two corners
    pub fn spanning(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x) && (self.min.y..=self.max.y).contains(&coord.y)
    }

    pub fn width(&self) -> u64 {
        (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u64
    }

    pub fn height(&self) -> u64 {
        (i64::from(self.max.y) - i64::from(self.min.y) + 1) as u64
    }

    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// Grow to include a coordinate
    pub fn include(&mut self, coord: Coord) {
        self.min.x = self.min.x.min(coord.x);
        self.min.y = self.min.y.min(coord.y);
        self.max.x = self.max.x.max(coord.x);
        self.max.y = self.max.y.max(coord.y);
    }

    /// Row-major iteration over every cell in the rectangle
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Coord::new(x, y)))
    }
}

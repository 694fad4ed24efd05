//! The [`Tile`] alphabet of a reachability grid.

/// A single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    /// Free floor, written `.`.
    Open,
    /// Blocked cell, written `#`.
    Wall,
    /// The search origin, written `S`. Passable.
    Start,
    /// The search target, written `G`. Passable.
    Goal,
}

impl Tile {
    /// Decode a tile from its text form. Returns `None` for any other
    /// character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    /// Whether movement may enter this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

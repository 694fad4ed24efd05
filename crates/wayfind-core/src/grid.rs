//! The [`TileGrid`] type — an immutable rectangular matrix of [`Tile`]s
//! with exactly one start and one goal.
//!
//! Grids are parsed from text rows over the alphabet `. # S G`. Parsing
//! rejects malformed input up front so the solvers never see a grid
//! without endpoints or with ragged rows.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};
use crate::tile::Tile;

/// An immutable `height × width` grid of tiles.
///
/// With the `serde` feature a grid is (de)serialized as its list of text
/// rows, and deserialization goes through [`TileGrid::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct TileGrid {
    tiles: Vec<Tile>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl TileGrid {
    /// Parse a grid from its rows, top to bottom.
    ///
    /// Every row must have the same width, contain only `. # S G`, and the
    /// grid as a whole must hold exactly one `S` and one `G`.
    pub fn parse<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let mut x = 0usize;
            for ch in row.chars() {
                let pos = Point::new(x as i32, y as i32);
                let tile = Tile::from_char(ch).ok_or(GridError::InvalidTile { ch, pos })?;
                match tile {
                    Tile::Start => {
                        if let Some(first) = start {
                            return Err(GridError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                    }
                    Tile::Goal => {
                        if let Some(first) = goal {
                            return Err(GridError::DuplicateGoal { first, second: pos });
                        }
                        goal = Some(pos);
                    }
                    Tile::Open | Tile::Wall => {}
                }
                tiles.push(tile);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(GridError::InconsistentWidth {
                        row: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;

        Ok(Self {
            tiles,
            bounds: Range::with_size(width as i32, height as i32),
            start,
            goal,
        })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Position of the unique `S` tile.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the unique `G` tile.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The tile at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index_of(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }

    /// The grid's text rows, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width() as usize)
            .map(|row| row.iter().map(|t| t.to_char()).collect())
            .collect()
    }
}

impl TryFrom<Vec<String>> for TileGrid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(rows)
    }
}

impl From<TileGrid> for Vec<String> {
    fn from(grid: TileGrid) -> Self {
        grid.rows()
    }
}

impl FromStr for TileGrid {
    type Err = GridError;

    /// Parse newline-separated rows. Surrounding whitespace of the whole
    /// string is trimmed, individual rows are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim().lines())
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a [`TileGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows of zero width.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `. # S G`.
    InvalidTile { ch: char, pos: Point },
    MissingStart,
    MissingGoal,
    DuplicateStart { first: Point, second: Point },
    DuplicateGoal { first: Point, second: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid is empty"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "grid contains invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "grid has no start tile 'S'"),
            Self::MissingGoal => write!(f, "grid has no goal tile 'G'"),
            Self::DuplicateStart { first, second } => {
                write!(f, "grid has more than one start tile: {first} and {second}")
            }
            Self::DuplicateGoal { first, second } => {
                write!(f, "grid has more than one goal tile: {first} and {second}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_finds_endpoints() {
        let g = TileGrid::parse(["S..", "###", "..G"]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.goal(), Point::new(2, 2));
        assert_eq!(g.at(Point::new(1, 1)), Some(Tile::Wall));
        assert_eq!(g.at(Point::new(3, 0)), None);
    }

    #[test]
    fn passability() {
        let g: TileGrid = "S#G".parse().unwrap();
        assert!(g.is_passable(Point::new(0, 0)));
        assert!(!g.is_passable(Point::new(1, 0)));
        assert!(g.is_passable(Point::new(2, 0)));
        assert!(!g.is_passable(Point::new(-1, 0)));
        assert!(!g.is_passable(Point::new(0, 1)));
    }

    #[test]
    fn display_reproduces_rows() {
        let text = "S.#\n..G";
        let g: TileGrid = text.parse().unwrap();
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn adjacent_endpoints() {
        let g = TileGrid::parse(["SG"]).unwrap();
        assert_eq!(g.iter().count(), 2);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = TileGrid::parse(["S..", "..", "..G"]).unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = TileGrid::parse(["S.x", "..G"]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidTile {
                ch: 'x',
                pos: Point::new(2, 0)
            }
        );
    }

    #[test]
    fn rejects_missing_and_duplicate_endpoints() {
        assert_eq!(TileGrid::parse(["..G"]).unwrap_err(), GridError::MissingStart);
        assert_eq!(TileGrid::parse(["S.."]).unwrap_err(), GridError::MissingGoal);
        assert_eq!(
            TileGrid::parse(["S.S", "..G"]).unwrap_err(),
            GridError::DuplicateStart {
                first: Point::new(0, 0),
                second: Point::new(2, 0)
            }
        );
        assert!(matches!(
            TileGrid::parse(["SGG"]).unwrap_err(),
            GridError::DuplicateGoal { .. }
        ));
    }

    #[test]
    fn rejects_empty() {
        let none: [&str; 0] = [];
        assert_eq!(TileGrid::parse(none).unwrap_err(), GridError::Empty);
        assert_eq!(TileGrid::parse(["", ""]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = TileGrid::parse(["S?G"]).unwrap_err();
        assert!(err.to_string().contains("(1, 0)"));
        assert!(GridError::MissingGoal.to_string().contains("'G'"));
    }
}

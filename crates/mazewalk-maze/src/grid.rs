use std::fmt;

use crate::coords::Vec2;
use crate::error::MazeError;

/// Cell where carving begins; always a path cell in a generated maze.
pub const START_CELL: (usize, usize) = (1, 1);

/// State of one grid cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    Wall,
    Path,
}

impl Cell {
    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => ' ',
        }
    }
}

/// Rectangular maze grid stored row-major.
///
/// `x` indexes columns (world X), `y` indexes rows (world Z).
/// A generated grid is never mutated after carving finishes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell set to `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Parses a fixed layout: `#` is a wall, `.` or space is a path.
    ///
    /// All rows must have the same length. Unlike generated mazes, layouts are
    /// not required to have odd dimensions.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if width == 0 {
            return Err(MazeError::InvalidDimension { width, height: rows.len() });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedLayout { row, expected: width, found });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' | ' ' => Cell::Path,
                    _ => return Err(MazeError::UnknownCell { row, col, ch }),
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Signed lookup; negative or too-large coordinates yield `None`.
    #[inline]
    pub fn get_signed(&self, x: i64, y: i64) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    #[inline]
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_wall)
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = cell;
    }

    /// Wall cell coordinates in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_wall())
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    pub fn path_count(&self) -> usize {
        self.cells.len() - self.wall_count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Grid cell containing a ground-plane position (floor division).
#[inline]
pub fn cell_of(position: Vec2, cell_size: f32) -> (i64, i64) {
    (
        (position.x / cell_size).floor() as i64,
        (position.y / cell_size).floor() as i64,
    )
}

/// Ground-plane centre of cell `(x, y)`.
#[inline]
pub fn cell_center(x: usize, y: usize, cell_size: f32) -> Vec2 {
    Vec2::new((x as f32 + 0.5) * cell_size, (y as f32 + 0.5) * cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── from_rows ─────────────────────────────────────────────────────────

    #[test]
    fn parses_walls_and_paths() {
        let g = Grid::from_rows(&["###", "#.#", "# #"]).unwrap();
        assert_eq!((g.width(), g.height()), (3, 3));
        assert_eq!(g.get(1, 1), Some(Cell::Path));
        assert_eq!(g.get(1, 2), Some(Cell::Path));
        assert_eq!(g.get(0, 2), Some(Cell::Wall));
        assert_eq!(g.wall_count(), 7);
        assert_eq!(g.path_count(), 2);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::from_rows(&["###", "##"]).unwrap_err();
        assert_eq!(err, MazeError::RaggedLayout { row: 1, expected: 3, found: 2 });
    }

    #[test]
    fn unknown_glyph_rejected() {
        let err = Grid::from_rows(&["#x#"]).unwrap_err();
        assert_eq!(err, MazeError::UnknownCell { row: 0, col: 1, ch: 'x' });
    }

    #[test]
    fn empty_layout_rejected() {
        let rows: [&str; 0] = [];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(MazeError::InvalidDimension { .. })
        ));
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn out_of_range_lookups_are_none() {
        let g = Grid::filled(3, 3, Cell::Wall);
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get_signed(-1, 0), None);
        assert_eq!(g.get_signed(0, 3), None);
        assert!(!g.is_wall(5, 5));
    }

    #[test]
    fn walls_iterate_row_major() {
        let g = Grid::from_rows(&["#.", ".#"]).unwrap();
        let walls: Vec<_> = g.walls().collect();
        assert_eq!(walls, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn display_round_trips_layout() {
        let rows = ["###", "# #", "###"];
        let g = Grid::from_rows(&rows).unwrap();
        assert_eq!(g.to_string(), "###\n# #\n###\n");
    }

    // ── world mapping ─────────────────────────────────────────────────────

    #[test]
    fn cell_of_floors_negative_positions() {
        assert_eq!(cell_of(Vec2::new(-0.25, 0.5), 1.0), (-1, 0));
        assert_eq!(cell_of(Vec2::new(3.99, 2.0), 2.0), (1, 1));
    }

    #[test]
    fn cell_center_is_half_cell_in() {
        assert_eq!(cell_center(1, 19, 1.0), Vec2::new(1.5, 19.5));
        assert_eq!(cell_center(0, 0, 2.0), Vec2::new(1.0, 1.0));
    }
}

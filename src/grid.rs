//! Grid data model for the maze.
//!
//! This module contains the cell states, the coordinate type, the square grid container, and the
//! maze composite produced by the generator. The grid's topology is fixed once a maze has been
//! generated; the player and the items only move across it as overlays.

/// State of a single grid cell.
///
/// This enumeration holds the four states a cell of the maze grid can take. A valid maze grid
/// contains exactly one [`Entrance`](Cell::Entrance) and one [`Exit`](Cell::Exit), both placed at
/// two distinct corners of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell.
    ///
    /// This variant represents a cell that can never be entered or stood on.
    Wall,
    /// Traversable corridor cell.
    ///
    /// This variant represents a free cell the player can walk on and items can be placed on.
    Open,
    /// Starting corner of the maze.
    ///
    /// This variant marks where the player spawns. Traversal begins standing on it, but it is not
    /// a legal move destination.
    Entrance,
    /// Goal corner of the maze.
    ///
    /// This variant marks the cell that completes the level when the player enters it.
    Exit,
}

impl Cell {
    /// Returns whether a move may end on this cell.
    ///
    /// Only [`Open`](Cell::Open) and [`Exit`](Cell::Exit) cells are legal move destinations; the
    /// entrance is where traversal starts, never where a step lands during reachability checking.
    pub(crate) const fn is_enterable(self) -> bool {
        matches!(self, Self::Open | Self::Exit)
    }

    /// Returns whether the player may stand on this cell.
    ///
    /// Everything except a [`Wall`](Cell::Wall) can be stood on, the entrance included since the
    /// player spawns there.
    pub(crate) const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Integer coordinate pair into the grid.
///
/// This structure identifies a cell by row and column, both in `0..size`. It is used for the
/// entrance, the exit, the player location and the item locations, and hashes so it can be stored
/// in the item set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, counted from the top of the grid.
    pub row: usize,
    /// Column index, counted from the left of the grid.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and column index.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square matrix of cell states.
///
/// This structure holds the N×N cell matrix behind bounds-checked accessors. Out-of-bounds
/// positions are a caller bug everywhere in this crate, so the accessors surface them as [`None`]
/// rather than panicking mid-game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Side length of the square grid.
    size: usize,
    /// Cell states in row-major order, one inner vector per row.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid of the given side length with every cell set to the same state.
    pub fn filled(size: usize, cell: Cell) -> Self {
        Self {
            size,
            cells: vec![vec![cell; size]; size],
        }
    }

    /// Returns the side length of the grid.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at the given position, or [`None`] if it lies outside the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Overwrites the cell at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid; callers are expected to have validated
    /// bounds beforehand.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let slot = self
            .cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .expect("position out of grid bounds");
        *slot = cell;
    }

    /// Returns the four corners of the grid.
    ///
    /// The corners are the only candidate locations for the entrance and the exit.
    pub fn corners(&self) -> [Position; 4] {
        let last = self.size - 1;
        [
            Position::new(0, 0),
            Position::new(0, last),
            Position::new(last, 0),
            Position::new(last, last),
        ]
    }

    /// Returns the number of cells holding the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&current| current == cell)
            .count()
    }

    /// Returns the positions of every [`Open`](Cell::Open) cell in row-major order.
    pub fn open_cells(&self) -> Vec<Position> {
        let mut open = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Open {
                    open.push(Position::new(row, col));
                }
            }
        }
        open
    }
}

/// Composite of a grid and its two gates.
///
/// This structure is the generator's output: a validated grid together with the entrance the
/// player spawns on and the exit that completes the level. The topology never changes during
/// play; a fresh maze is generated for every level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// The validated cell matrix.
    pub grid: Grid,
    /// Corner cell the player spawns on.
    pub entrance: Position,
    /// Corner cell that completes the level.
    pub exit: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_grid_is_uniform() {
        let grid = Grid::filled(4, Cell::Wall);

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.count(Cell::Wall), 16);
        assert_eq!(grid.count(Cell::Open), 0);
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = Grid::filled(3, Cell::Open);

        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert_eq!(grid.get(Position::new(2, 2)), Some(Cell::Open));
    }

    #[test]
    fn test_set_overwrites_cell() {
        let mut grid = Grid::filled(3, Cell::Wall);
        grid.set(Position::new(1, 2), Cell::Open);

        assert_eq!(grid.get(Position::new(1, 2)), Some(Cell::Open));
        assert_eq!(grid.count(Cell::Open), 1);
    }

    #[test]
    fn test_corners_are_the_four_extremes() {
        let grid = Grid::filled(5, Cell::Wall);

        assert_eq!(
            grid.corners(),
            [
                Position::new(0, 0),
                Position::new(0, 4),
                Position::new(4, 0),
                Position::new(4, 4),
            ]
        );
    }

    #[test]
    fn test_open_cells_lists_only_open_positions() {
        let mut grid = Grid::filled(3, Cell::Wall);
        grid.set(Position::new(0, 1), Cell::Open);
        grid.set(Position::new(2, 2), Cell::Open);
        grid.set(Position::new(1, 1), Cell::Exit);

        assert_eq!(
            grid.open_cells(),
            vec![Position::new(0, 1), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_cell_enterable_and_traversable() {
        assert!(Cell::Open.is_enterable());
        assert!(Cell::Exit.is_enterable());
        assert!(!Cell::Entrance.is_enterable());
        assert!(!Cell::Wall.is_enterable());

        assert!(Cell::Entrance.is_traversable());
        assert!(!Cell::Wall.is_traversable());
    }
}

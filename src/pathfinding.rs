//! Reachability checking over the maze grid.
//!
//! This module contains the breadth-first traversal the generator uses to prove that a candidate
//! grid is solvable before it is ever shown to the player. The checker is a pure function and is
//! exposed on its own so it stays unit-testable and reusable against any grid.

use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Grid, Position};

/// Orthogonal step offsets: up, down, left, right. Diagonal moves are never legal.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Checks whether a path of traversable cells connects `start` to `goal`.
///
/// This function runs a breadth-first traversal from `start`, which is assumed to be a cell the
/// player can stand on (entrance or open). A step may only land on an in-bounds cell that is open
/// or the exit; the entrance and walls are never legal destinations. The traversal keeps a
/// visited set keyed by position so each cell is expanded at most once, giving O(N²) time and
/// space on an N×N grid. If `start == goal` the zero-length path makes the answer trivially true.
pub fn is_solvable(grid: &Grid, start: Position, goal: Position) -> bool {
    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);

    while let Some(pos) = frontier.pop_front() {
        if pos == goal {
            return true;
        }

        for neighbor in neighbors(pos) {
            if grid.get(neighbor).is_some_and(Cell::is_enterable) && visited.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    false
}

/// Yields the orthogonal neighbors of a position that do not underflow the coordinate space.
///
/// Upper bounds are not checked here; [`Grid::get`] already answers [`None`] for positions past
/// the grid's edge.
fn neighbors(pos: Position) -> impl Iterator<Item = Position> {
    DIRECTIONS
        .into_iter()
        .filter_map(move |(delta_row, delta_col)| {
            let row = pos.row.checked_add_signed(delta_row)?;
            let col = pos.col.checked_add_signed(delta_col)?;
            Some(Position::new(row, col))
        })
}

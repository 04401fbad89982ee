//! Maze generation and item placement.
//!
//! This module contains the rejection-sampling maze generator and the item placer. A candidate
//! grid is carved from uniformly random cells, gated at two random corners, and only returned
//! once the reachability checker has proven it solvable; unsolvable candidates are discarded
//! wholesale and generation starts over with fresh randomness. All sampling goes through a
//! caller-supplied random generator so seeded runs are reproducible.

use std::collections::HashSet;

use rand::{seq::index, seq::SliceRandom as _, Rng};

use crate::{
    grid::{Cell, Grid, Maze, Position},
    pathfinding::is_solvable,
};

/// Errors surfaced by the bounded generator and the item placer.
///
/// This enumeration covers the two recoverable failure modes of the core: exceeding the retry
/// ceiling of [`try_generate`] and asking [`place_items`] for more items than the grid has open
/// cells to hold.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    /// No solvable maze was found within the configured attempt ceiling.
    ///
    /// This variant only occurs through [`try_generate`]; the unbounded [`generate`] retries
    /// forever instead.
    #[error("no solvable maze found after {attempts} attempts; raise the open fraction")]
    GenerationFailed {
        /// Number of candidate grids that were built and rejected.
        attempts: usize,
    },
    /// The requested item count exceeds the number of open cells.
    ///
    /// This variant guards the item placer's sampling loop, which would otherwise never
    /// terminate.
    #[error("cannot place {requested} items on {available} open cells")]
    InsufficientOpenCells {
        /// Number of items the caller asked for.
        requested: usize,
        /// Number of open cells actually available on the grid.
        available: usize,
    },
}

/// Generates a solvable maze, retrying without bound until one is found.
///
/// This function keeps the reference semantics: it builds candidate grids until the reachability
/// check passes, drawing fresh randomness on every attempt. With the default open fraction of
/// 0.7 the first or second candidate is almost always solvable, but a caller passing a fraction
/// near zero risks effective non-termination; use [`try_generate`] to bound the retries instead.
pub fn generate<R: Rng>(size: usize, open_fraction: f64, rng: &mut R) -> Maze {
    loop {
        if let Some(maze) = attempt(size, open_fraction, rng) {
            return maze;
        }
    }
}

/// Generates a solvable maze, giving up after `max_attempts` rejected candidates.
///
/// This function is the defensive variant of [`generate`] for callers that cannot tolerate an
/// unbounded retry loop, such as the game binary reading the open fraction from the command
/// line.
///
/// # Errors
///
/// Returns [`GenerateError::GenerationFailed`] when every candidate within the ceiling was
/// unsolvable.
pub fn try_generate<R: Rng>(
    size: usize,
    open_fraction: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Maze, GenerateError> {
    for _ in 0..max_attempts {
        if let Some(maze) = attempt(size, open_fraction, rng) {
            return Ok(maze);
        }
    }

    Err(GenerateError::GenerationFailed {
        attempts: max_attempts,
    })
}

/// Builds one candidate maze and validates it, returning [`None`] when it is unsolvable.
fn attempt<R: Rng>(size: usize, open_fraction: f64, rng: &mut R) -> Option<Maze> {
    let mut grid = carve(size, open_fraction, rng);
    let (entrance, exit) = pick_gates(&grid, rng);

    // The gates overwrite whatever the carve left at those corners, so both are traversable no
    // matter how the random sample fell.
    grid.set(entrance, Cell::Entrance);
    grid.set(exit, Cell::Exit);

    is_solvable(&grid, entrance, exit).then(|| Maze {
        grid,
        entrance,
        exit,
    })
}

/// Carves a fresh all-wall grid by opening a uniformly random subset of cells.
///
/// The number of opened cells is `floor(size² · open_fraction)`, sampled without replacement so
/// the count is exact rather than probabilistic.
fn carve<R: Rng>(size: usize, open_fraction: f64, rng: &mut R) -> Grid {
    let mut grid = Grid::filled(size, Cell::Wall);

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The open fraction is validated to [0, 1] at the boundary, so the product is a non-negative cell count that fits the grid."
    )]
    let open_count = ((size * size) as f64 * open_fraction).floor() as usize;

    for flat in index::sample(rng, size * size, open_count) {
        grid.set(Position::new(flat / size, flat % size), Cell::Open);
    }

    grid
}

/// Picks two distinct corners uniformly at random: first the entrance, then the exit.
///
/// # Panics
///
/// Panics if the grid has fewer than two corners, which cannot happen for the square grids this
/// crate builds.
fn pick_gates<R: Rng>(grid: &Grid, rng: &mut R) -> (Position, Position) {
    let mut corners = grid.corners().to_vec();

    let entrance = *corners
        .choose(rng)
        .expect("grid must have at least one corner");
    corners.retain(|corner| *corner != entrance);
    let exit = *corners
        .choose(rng)
        .expect("grid must have a second corner for the exit");

    (entrance, exit)
}

/// Scatters `count` distinct items on uniformly random open cells of the grid.
///
/// This function rejection-samples positions until enough distinct open-cell hits have been
/// collected; walls, the entrance and the exit are rejected and redrawn. The precondition that
/// enough open cells exist is checked up front so the loop cannot run forever.
///
/// # Errors
///
/// Returns [`GenerateError::InsufficientOpenCells`] when `count` exceeds the number of open
/// cells on the grid.
pub fn place_items<R: Rng>(
    grid: &Grid,
    count: usize,
    rng: &mut R,
) -> Result<HashSet<Position>, GenerateError> {
    let available = grid.count(Cell::Open);
    if count > available {
        return Err(GenerateError::InsufficientOpenCells {
            requested: count,
            available,
        });
    }

    let mut items = HashSet::new();
    while items.len() < count {
        let pos = Position::new(rng.gen_range(0..grid.size()), rng.gen_range(0..grid.size()));
        if grid.get(pos) == Some(Cell::Open) {
            let _ = items.insert(pos);
        }
    }

    Ok(items)
}

//! Terminal maze game with timed, procedurally generated levels.
//!
//! Every level is a freshly generated square maze with a guaranteed path between two random
//! corners: candidate grids are carved from uniformly random cells and rejected until a
//! breadth-first reachability check proves them solvable. The player walks the maze against a
//! shrinking per-level clock, picking up scattered items for bonus score. The generator, the
//! reachability checker and the item placer are exposed as plain functions over a caller-supplied
//! random generator, so seeded runs are fully reproducible.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod events;
mod generator;
mod grid;
mod pathfinding;
mod session;
mod types;
mod ui;

pub use app::App;
pub use cli::{Cli, GameConfig};
pub use generator::{generate, place_items, try_generate, GenerateError};
pub use grid::{Cell, Grid, Maze, Position};
pub use pathfinding::is_solvable;
pub use session::{MoveOutcome, Session};
pub use types::Direction;

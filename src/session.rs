//! Per-level game session: player, items, score and countdown.
//!
//! This module owns everything that lives exactly as long as one level does. A session is built
//! from a freshly generated maze plus scattered items, runs the movement and pickup rules while
//! the level is played, and is discarded wholesale when the player reaches the exit or the clock
//! runs out.

use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use rand::Rng;

use crate::{
    cli::GameConfig,
    generator::{place_items, try_generate, GenerateError},
    grid::{Cell, Maze, Position},
    types::Direction,
};

/// Score awarded for reaching the exit, before the per-item bonus.
const LEVEL_COMPLETION_SCORE: u32 = 100;

/// Seconds shaved off the time budget for each level past the first.
const TIME_DECREMENT_SECS: u64 = 15;

/// Smallest time budget a level can have, regardless of depth.
const MIN_LEVEL_TIME_SECS: u64 = 30;

/// Result of applying one movement key to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto a traversable cell.
    Moved,
    /// The move hit a wall or the grid edge and was ignored.
    Blocked,
    /// The player stepped onto the exit; the level is complete.
    Completed,
}

/// State of the level currently being played.
///
/// This structure holds the maze the level runs on, the player and item overlays that move
/// across it, and the countdown. The maze topology is never mutated here; only the overlays
/// change.
pub struct Session {
    /// The generated maze this level is played on.
    maze: Maze,
    /// Current player location; starts on the entrance.
    player: Position,
    /// Items still waiting to be collected.
    items: HashSet<Position>,
    /// Number of items the player has picked up this level.
    collected: usize,
    /// One-based level number, used for the HUD and the time budget.
    level: u32,
    /// Moment the level started counting down.
    started: Instant,
    /// Total time budget of this level.
    budget: Duration,
}

impl Session {
    /// Builds the session for the given level: a fresh maze, fresh items, a fresh clock.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when no solvable maze was found within the configured attempt
    /// ceiling or the item count exceeds the open cells of the generated grid.
    pub fn new<R: Rng>(level: u32, config: &GameConfig, rng: &mut R) -> Result<Self, GenerateError> {
        let maze = try_generate(config.size, config.open_fraction, config.max_attempts, rng)?;
        let items = place_items(&maze.grid, config.items, rng)?;
        let player = maze.entrance;

        Ok(Self {
            maze,
            player,
            items,
            collected: 0,
            level,
            started: Instant::now(),
            budget: Duration::from_secs(level_time_secs(level, config.time_limit_secs)),
        })
    }

    /// Applies one movement step, resolving walls, item pickup and the exit.
    ///
    /// Steps off the grid or into a wall are ignored rather than rejected loudly; holding a key
    /// against a wall is a normal way to play.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let (delta_row, delta_col) = direction.delta();
        let target = self
            .player
            .row
            .checked_add_signed(delta_row)
            .zip(self.player.col.checked_add_signed(delta_col))
            .map(|(row, col)| Position::new(row, col));

        let Some(target) = target else {
            return MoveOutcome::Blocked;
        };
        let Some(cell) = self.maze.grid.get(target) else {
            return MoveOutcome::Blocked;
        };
        if !cell.is_traversable() {
            return MoveOutcome::Blocked;
        }

        self.player = target;
        if self.items.remove(&target) {
            self.collected += 1;
        }

        if cell == Cell::Exit {
            MoveOutcome::Completed
        } else {
            MoveOutcome::Moved
        }
    }

    /// Returns the score this level is worth once completed.
    ///
    /// Completion pays a flat bonus plus one point per item collected during the level.
    pub fn level_score(&self) -> u32 {
        let collected = u32::try_from(self.collected).unwrap_or(u32::MAX);
        LEVEL_COMPLETION_SCORE + collected
    }

    /// Returns the time still left on this level's clock.
    pub fn time_left(&self) -> Duration {
        self.budget.saturating_sub(self.started.elapsed())
    }

    /// Returns whether this level's clock has run out.
    pub fn out_of_time(&self) -> bool {
        self.time_left().is_zero()
    }

    /// Returns the maze this level is played on.
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the player's current location.
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Returns the items still waiting to be collected.
    pub const fn items(&self) -> &HashSet<Position> {
        &self.items
    }

    /// Returns the one-based level number.
    pub const fn level(&self) -> u32 {
        self.level
    }
}

/// Computes the time budget of a level in seconds.
///
/// The first level gets the configured budget; each deeper level loses a fixed slice, floored so
/// late levels stay physically winnable.
fn level_time_secs(level: u32, base_secs: u64) -> u64 {
    let decrement = u64::from(level.saturating_sub(1)) * TIME_DECREMENT_SECS;
    base_secs
        .saturating_sub(decrement)
        .max(MIN_LEVEL_TIME_SECS.min(base_secs))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::grid::Grid;

    /// Builds a session around a hand-made 3×3 maze with one corridor along the left and bottom
    /// edges and an item halfway down it.
    fn corridor_session() -> Session {
        let mut grid = Grid::filled(3, Cell::Wall);
        grid.set(Position::new(1, 0), Cell::Open);
        grid.set(Position::new(2, 0), Cell::Open);
        grid.set(Position::new(2, 1), Cell::Open);
        grid.set(Position::new(0, 0), Cell::Entrance);
        grid.set(Position::new(2, 2), Cell::Exit);

        let entrance = Position::new(0, 0);
        let exit = Position::new(2, 2);
        Session {
            maze: Maze {
                grid,
                entrance,
                exit,
            },
            player: entrance,
            items: HashSet::from([Position::new(2, 0)]),
            collected: 0,
            level: 1,
            started: Instant::now(),
            budget: Duration::from_secs(120),
        }
    }

    fn default_config() -> GameConfig {
        GameConfig {
            size: 10,
            open_fraction: 0.7,
            items: 5,
            time_limit_secs: 120,
            max_attempts: 10_000,
        }
    }

    #[test]
    fn test_new_session_spawns_player_on_entrance() {
        let mut rng = StdRng::seed_from_u64(17);
        let session = Session::new(1, &default_config(), &mut rng).expect("session builds");

        assert_eq!(session.player(), session.maze().entrance);
        assert_eq!(session.items().len(), 5);
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn test_moves_into_walls_and_edges_are_blocked() {
        let mut session = corridor_session();

        // Off the top edge, then into the wall on the right.
        assert_eq!(session.apply_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(session.apply_move(Direction::Right), MoveOutcome::Blocked);
        assert_eq!(session.player(), Position::new(0, 0));
    }

    #[test]
    fn test_walking_the_corridor_collects_and_completes() {
        let mut session = corridor_session();

        assert_eq!(session.apply_move(Direction::Down), MoveOutcome::Moved);
        // This step lands on the item cell.
        assert_eq!(session.apply_move(Direction::Down), MoveOutcome::Moved);
        assert!(session.items().is_empty());
        assert_eq!(session.apply_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(session.apply_move(Direction::Right), MoveOutcome::Completed);

        assert_eq!(session.level_score(), LEVEL_COMPLETION_SCORE + 1);
    }

    #[test]
    fn test_item_is_collected_only_once() {
        let mut session = corridor_session();

        assert_eq!(session.apply_move(Direction::Down), MoveOutcome::Moved);
        assert_eq!(session.apply_move(Direction::Down), MoveOutcome::Moved);
        assert_eq!(session.apply_move(Direction::Up), MoveOutcome::Moved);
        assert_eq!(session.apply_move(Direction::Down), MoveOutcome::Moved);

        assert_eq!(session.level_score(), LEVEL_COMPLETION_SCORE + 1);
    }

    #[test]
    fn test_level_time_shrinks_with_depth_and_floors() {
        assert_eq!(level_time_secs(1, 120), 120);
        assert_eq!(level_time_secs(2, 120), 105);
        assert_eq!(level_time_secs(7, 120), 30);
        // Level 9 would be negative without the floor.
        assert_eq!(level_time_secs(9, 120), 30);
    }

    #[test]
    fn test_level_time_floor_never_exceeds_the_base_budget() {
        assert_eq!(level_time_secs(1, 20), 20);
        assert_eq!(level_time_secs(5, 20), 20);
    }

    #[test]
    fn test_fresh_session_is_not_out_of_time() {
        let session = corridor_session();

        assert!(!session.out_of_time());
        assert!(session.time_left() <= Duration::from_secs(120));
    }
}

//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen with its currently highlighted item.
    MainMenu(MainMenuItem),
    /// In-game screen.
    ///
    /// This variant represents the screen where the maze, the player and the HUD are displayed
    /// and the current level is being played.
    InGame,
    /// End-of-run screen.
    ///
    /// This variant represents the screen shown once the run has ended, carrying the reason it
    /// ended so the message can say whether the clock ran out or the player gave up.
    GameOver(GameOutcome),
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which
/// items can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    StartGame,
    /// "Quit" menu option.
    Quit,
}

/// Reason the current run ended.
///
/// This enumeration distinguishes the two ways a run reaches the end screen; the score shown is
/// the same either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameOutcome {
    /// The per-level countdown reached zero.
    TimeUp,
    /// The player abandoned the run from the in-game screen.
    Abandoned,
}

/// Orthogonal movement direction.
///
/// This enumeration covers the four directions the player can step in; there are no diagonal
/// moves anywhere in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// Returns the `(row, col)` offset of one step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

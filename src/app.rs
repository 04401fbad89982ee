//! Core application state and logic for the maze game.

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    cli::GameConfig,
    events,
    session::Session,
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the
    /// user wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Game parameters shared by every level of a run.
    ///
    /// This field holds the validated command-line configuration: grid size, open fraction,
    /// item count, time budget and the generation retry ceiling.
    pub(crate) config: GameConfig,
    /// Random generator feeding every sampling step of the core.
    ///
    /// This field holds the seedable generator handed to maze generation and item placement, so
    /// a run started with `--seed` replays the same sequence of levels.
    pub(crate) rng: StdRng,
    /// Session of the level currently being played.
    ///
    /// This field holds the per-level state while the in-game screen is active and is [`None`]
    /// on the menu and end screens.
    pub(crate) session: Option<Session>,
    /// Score accumulated across the completed levels of this run.
    pub(crate) total_score: u32,
}

impl App {
    /// Creates a new instance of the App structure from the parsed configuration.
    ///
    /// The random generator is seeded from the command line when a seed was given and from the
    /// operating system otherwise.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            config,
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            session: None,
            total_score: 0,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues
    /// until the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Starts a fresh run at level one with a zeroed score.
    ///
    /// # Errors
    ///
    /// Returns the generation error when no solvable maze fits the configured retry ceiling.
    pub(crate) fn start_run(&mut self) -> Result<()> {
        self.total_score = 0;
        self.session = Some(Session::new(1, &self.config, &mut self.rng)?);
        self.screen = Screen::InGame;

        Ok(())
    }

    /// Banks the finished level's score and moves the run to the next level.
    ///
    /// # Errors
    ///
    /// Returns the generation error when the next level's maze cannot be generated.
    pub(crate) fn advance_level(&mut self) -> Result<()> {
        let next_level = self
            .session
            .as_ref()
            .map_or(1, |session| session.level() + 1);
        self.session = Some(Session::new(next_level, &self.config, &mut self.rng)?);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GameConfig {
        GameConfig {
            size: 8,
            open_fraction: 0.7,
            items: 3,
            time_limit_secs: 120,
            max_attempts: 10_000,
        }
    }

    #[test]
    fn test_new_app_starts_on_the_main_menu() {
        let app = App::new(test_config(), Some(1));

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert!(app.session.is_none());
        assert_eq!(app.total_score, 0);
    }

    #[test]
    fn test_start_run_enters_the_game_at_level_one() {
        let mut app = App::new(test_config(), Some(2));
        app.total_score = 500;

        app.start_run().expect("level one generates");

        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.total_score, 0);
        let session = app.session.as_ref().expect("session exists");
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn test_advance_level_increments_the_level_number() {
        let mut app = App::new(test_config(), Some(3));
        app.start_run().expect("level one generates");

        app.advance_level().expect("level two generates");

        let session = app.session.as_ref().expect("session exists");
        assert_eq!(session.level(), 2);
    }

    #[test]
    fn test_seeded_apps_generate_identical_levels() {
        let mut first = App::new(test_config(), Some(77));
        let mut second = App::new(test_config(), Some(77));

        first.start_run().expect("level one generates");
        second.start_run().expect("level one generates");

        let first_maze = first.session.as_ref().expect("session exists").maze();
        let second_maze = second.session.as_ref().expect("session exists").maze();
        assert_eq!(first_maze, second_maze);
    }
}

//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    session::{MoveOutcome, Session},
    types::{Direction, GameOutcome, MainMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the handler of the screen
/// currently shown. It uses a timeout to avoid blocking the UI, and checks the level countdown
/// on every pass so the clock runs out even while no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            match app.screen {
                Screen::MainMenu(item) => handle_menu_key(app, item, key.code)?,
                Screen::InGame => handle_game_key(app, key.code)?,
                Screen::GameOver(_) => handle_end_key(app, key.code),
            }
        }
    }

    // The countdown expires between keypresses too.
    if matches!(app.screen, Screen::InGame)
        && app
            .session
            .as_ref()
            .is_some_and(Session::out_of_time)
    {
        app.session = None;
        app.screen = Screen::GameOver(GameOutcome::TimeUp);
    }

    Ok(())
}

/// Handles key presses on the main menu screen.
///
/// This function moves the highlight with 'j' and 'k', confirms with 'l', and quits outright
/// with 'q'.
fn handle_menu_key(app: &mut App, item: MainMenuItem, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') | KeyCode::Down => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        KeyCode::Char('l') | KeyCode::Enter => match item {
            MainMenuItem::StartGame => app.start_run()?,
            MainMenuItem::Quit => app.exit = true,
        },
        _ => {}
    }

    Ok(())
}

/// Handles key presses on the in-game screen.
///
/// This function maps arrows and the vim movement keys to player steps, 'p' to abandoning the
/// run, and 'q' to quitting the program. Completing a level banks its score and rolls the run
/// into the next level.
fn handle_game_key(app: &mut App, code: KeyCode) -> Result<()> {
    let direction = match code {
        KeyCode::Char('q') => {
            app.exit = true;
            return Ok(());
        }
        KeyCode::Char('p') => {
            app.session = None;
            app.screen = Screen::GameOver(GameOutcome::Abandoned);
            return Ok(());
        }
        KeyCode::Char('k') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('j') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('h') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('l') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    };

    if let Some(direction) = direction {
        let outcome = app
            .session
            .as_mut()
            .map(|session| session.apply_move(direction));

        if outcome == Some(MoveOutcome::Completed) {
            if let Some(session) = app.session.as_ref() {
                app.total_score += session.level_score();
            }
            app.advance_level()?;
        }
    }

    Ok(())
}

/// Handles key presses on the end screen.
///
/// This function quits on 'q' and returns to the main menu on any other key.
fn handle_end_key(app: &mut App, code: KeyCode) {
    if code == KeyCode::Char('q') {
        app.exit = true;
    } else {
        app.screen = Screen::MainMenu(MainMenuItem::StartGame);
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::GameConfig;

    use super::*;

    fn test_app() -> App {
        App::new(
            GameConfig {
                size: 8,
                open_fraction: 0.7,
                items: 3,
                time_limit_secs: 120,
                max_attempts: 10_000,
            },
            Some(4),
        )
    }

    #[test]
    fn test_menu_navigation_moves_the_highlight() {
        let mut app = test_app();

        handle_menu_key(&mut app, MainMenuItem::StartGame, KeyCode::Char('j'))
            .expect("menu key handled");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Quit));

        handle_menu_key(&mut app, MainMenuItem::Quit, KeyCode::Char('k'))
            .expect("menu key handled");
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
    }

    #[test]
    fn test_menu_select_starts_the_game() {
        let mut app = test_app();

        handle_menu_key(&mut app, MainMenuItem::StartGame, KeyCode::Char('l'))
            .expect("run starts");

        assert_eq!(app.screen, Screen::InGame);
        assert!(app.session.is_some());
    }

    #[test]
    fn test_abandoning_ends_the_run() {
        let mut app = test_app();
        app.start_run().expect("run starts");

        handle_game_key(&mut app, KeyCode::Char('p')).expect("game key handled");

        assert_eq!(app.screen, Screen::GameOver(GameOutcome::Abandoned));
        assert!(app.session.is_none());
    }

    #[test]
    fn test_end_screen_returns_to_menu_on_any_key() {
        let mut app = test_app();
        app.screen = Screen::GameOver(GameOutcome::TimeUp);

        handle_end_key(&mut app, KeyCode::Char(' '));

        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert!(!app.exit);
    }

    #[test]
    fn test_end_screen_quits_on_q() {
        let mut app = test_app();
        app.screen = Screen::GameOver(GameOutcome::Abandoned);

        handle_end_key(&mut app, KeyCode::Char('q'));

        assert!(app.exit);
    }
}

//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::{
    grid::{Cell, Position},
    session::Session,
    types::{GameOutcome, MainMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::InGame => in_game(app, frame)?,
        Screen::GameOver(outcome) => end_screen(frame, outcome, app.total_score),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the centered bordered container shared by the menu and end screens.
///
/// This function creates the common layout and block structure: a block centered in the frame,
/// sized for the given number of content rows, with the title on top and the key hints below.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
fn init_panel(frame: &mut Frame, title: &str, hints: &str, rows: u16) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(rows + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title.to_owned())
        .title_bottom(hints.to_owned())
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); rows as usize]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game" and "Quit". It highlights
/// the currently selected option and provides visual feedback for user navigation.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_panel(frame, "mazecrawl", "(j) down / (k) up / (l) select", 2);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Start Game").centered();
    let mut opt2 = Line::raw("Quit").centered();
    match item {
        MainMenuItem::StartGame => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
        }
        MainMenuItem::Quit => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
}

/// Renders the in-game screen: the maze, the overlays and the HUD.
///
/// This function draws one text line per grid row with the player and item overlays applied on
/// top of the cell glyphs, a HUD line underneath, and everything inside a centered bordered
/// block. When the terminal cannot fit the grid it falls back to a resize prompt instead.
///
/// # Errors
///
/// This function may return errors when no session is active or a dimension conversion fails.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let session = app
        .session
        .as_ref()
        .ok_or_eyre("in-game screen without an active session")?;
    let size = u16::try_from(session.maze().grid.size())?;

    // Grid rows plus the HUD line, plus the block borders.
    let needed_width = size + 2;
    let needed_height = size + 3;
    if frame.area().width < needed_width || frame.area().height < needed_height {
        frame.render_widget(
            Paragraph::new("Terminal too small to display the maze. Enlarge the window.")
                .style(Color::Green),
            frame.area(),
        );
        return Ok(());
    }

    let space = Layout::vertical([Constraint::Length(needed_height)])
        .flex(Flex::Center)
        .split(frame.area())[0];
    let layout = Layout::horizontal([Constraint::Length(needed_width)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(format!("Level {}", session.level()))
        .title_bottom("(hjkl/arrows) move / (p) give up / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(layout);
    frame.render_widget(block, layout);

    let mut lines = maze_lines(session);
    lines.push(hud_line(session, app.total_score));
    frame.render_widget(Paragraph::new(lines), inner_space);

    Ok(())
}

/// Builds one styled text line per grid row, with the player and items overlaid.
fn maze_lines(session: &Session) -> Vec<Line<'static>> {
    let grid = &session.maze().grid;
    let mut lines = Vec::with_capacity(grid.size());

    for row in 0..grid.size() {
        let mut spans = Vec::with_capacity(grid.size());
        for col in 0..grid.size() {
            let pos = Position::new(row, col);
            spans.push(if pos == session.player() {
                Span::styled("o", Style::default().fg(Color::Yellow))
            } else if session.items().contains(&pos) {
                Span::styled(".", Style::default().fg(Color::White))
            } else {
                cell_span(grid.get(pos))
            });
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Returns the styled glyph of a bare grid cell.
fn cell_span(cell: Option<Cell>) -> Span<'static> {
    match cell {
        Some(Cell::Wall) => Span::styled("#", Style::default().fg(Color::Green)),
        Some(Cell::Entrance) => Span::styled("E", Style::default().fg(Color::White)),
        Some(Cell::Exit) => Span::styled("S", Style::default().fg(Color::Magenta)),
        Some(Cell::Open) | None => Span::raw(" "),
    }
}

/// Builds the HUD line: score, items left, rounded seconds remaining and level.
fn hud_line(session: &Session, total_score: u32) -> Line<'static> {
    let millis = u64::try_from(session.time_left().as_millis()).unwrap_or(u64::MAX);
    let seconds = rounded_div::u64(millis, 1000);

    Line::styled(
        format!(
            "Score: {} | Items left: {} | Time left: {}s | Level: {}",
            total_score,
            session.items().len(),
            seconds,
            session.level()
        ),
        Style::default().fg(Color::White),
    )
}

/// Renders the end screen with the outcome message and the final score.
///
/// This function reuses the centered panel of the main menu and waits for a key: anything
/// returns to the menu except 'q', which quits.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
fn end_screen(frame: &mut Frame, outcome: GameOutcome, total_score: u32) {
    clear(frame);

    let inner_layout = init_panel(frame, "Game Over", "(q) quit / any key for menu", 2);

    let message = match outcome {
        GameOutcome::TimeUp => "Time is up! You lost.",
        GameOutcome::Abandoned => "You left the game.",
    };

    frame.render_widget(
        Line::raw(message).centered().style(Color::Green),
        inner_layout[0],
    );
    frame.render_widget(
        Line::raw(format!("Total score: {total_score}"))
            .centered()
            .style(Color::Green),
        inner_layout[1],
    );
}

//! This crate contains the source code for the binary for the game mazecrawl.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazecrawl::{App, Cli};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();

    let mut terminal = ratatui::init();
    let result = App::new(cli.config(), cli.seed).run(&mut terminal);
    ratatui::restore();

    result
}

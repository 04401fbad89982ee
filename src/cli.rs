//! Command-line configuration for the game.
//!
//! This module contains the clap-derived argument parser and the validated configuration the
//! rest of the application consumes. Range checks live in the value parsers so a bad flag is
//! rejected before the terminal is ever put into raw mode.

use clap::Parser;

/// Command-line arguments of the game binary.
///
/// This structure is parsed once at startup; everything except the RNG seed is folded into a
/// [`GameConfig`] and handed to the application state.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Side length of the square maze grid.
    #[arg(long, default_value_t = 10, value_parser = parse_size)]
    pub size: usize,

    /// Fraction of cells carved open during generation.
    #[arg(long, default_value_t = 0.7, value_parser = parse_open_fraction)]
    pub open_fraction: f64,

    /// Number of collectible items scattered per level.
    #[arg(long, default_value_t = 5)]
    pub items: usize,

    /// Time budget for the first level, in seconds.
    #[arg(long, default_value_t = 120)]
    pub time_limit: u64,

    /// Ceiling on rejected maze candidates before generation gives up.
    #[arg(long, default_value_t = 10_000)]
    pub max_attempts: usize,

    /// Seed for the random generator; omit for a fresh run every time.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Folds the parsed arguments into the configuration the application carries.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            open_fraction: self.open_fraction,
            items: self.items,
            time_limit_secs: self.time_limit,
            max_attempts: self.max_attempts,
        }
    }
}

/// Game parameters shared by every level of a run.
///
/// This structure is the validated counterpart of [`Cli`]: by the time it exists, the size and
/// open fraction are known to be in range.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Side length of the square maze grid.
    pub size: usize,
    /// Fraction of cells carved open during generation.
    pub open_fraction: f64,
    /// Number of collectible items scattered per level.
    pub items: usize,
    /// Time budget for the first level, in seconds.
    pub time_limit_secs: u64,
    /// Ceiling on rejected maze candidates before generation gives up.
    pub max_attempts: usize,
}

/// Parses the grid size, requiring at least two rows so the corners are distinct.
fn parse_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw
        .parse()
        .map_err(|err| format!("`{raw}` is not a valid size: {err}"))?;
    if (2..=100).contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be between 2 and 100, got {size}"))
    }
}

/// Parses the open fraction, bounding it away from densities that cannot generate.
fn parse_open_fraction(raw: &str) -> Result<f64, String> {
    let fraction: f64 = raw
        .parse()
        .map_err(|err| format!("`{raw}` is not a valid fraction: {err}"))?;
    if (0.05..=1.0).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(format!(
            "open fraction must be between 0.05 and 1.0, got {fraction}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_defaults_match_the_reference_parameters() {
        let cli = Cli::try_parse_from(["mazecrawl"]).expect("defaults parse");
        let config = cli.config();

        assert_eq!(config.size, 10);
        assert!((config.open_fraction - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.items, 5);
        assert_eq!(config.time_limit_secs, 120);
        assert_eq!(config.max_attempts, 10_000);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_explicit_arguments_are_honored() {
        let cli = Cli::try_parse_from([
            "mazecrawl",
            "--size",
            "15",
            "--open-fraction",
            "0.8",
            "--items",
            "8",
            "--seed",
            "99",
        ])
        .expect("valid arguments parse");

        assert_eq!(cli.size, 15);
        assert_eq!(cli.seed, Some(99));
        assert_eq!(cli.items, 8);
    }

    #[test]
    fn test_out_of_range_size_is_rejected() {
        let result = Cli::try_parse_from(["mazecrawl", "--size", "1"]);

        assert_eq!(
            result.expect_err("size 1 must be rejected").kind(),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_unplayable_open_fraction_is_rejected() {
        let result = Cli::try_parse_from(["mazecrawl", "--open-fraction", "0.0"]);

        assert_eq!(
            result.expect_err("fraction 0.0 must be rejected").kind(),
            ErrorKind::ValueValidation
        );
    }
}

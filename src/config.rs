//! Command-line interface and resolved runtime configuration

use crate::error::AppError;
use crate::form::format_measure;
use crate::geometry::{Dimensions, Field, Measure, Shape, ShapeKind};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TICK_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Circle,
    Rectangle,
    Square,
    Triangle,
}

impl From<ShapeArg> for ShapeKind {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Circle => ShapeKind::Circle,
            ShapeArg::Rectangle => ShapeKind::Rectangle,
            ShapeArg::Square => ShapeKind::Square,
            ShapeArg::Triangle => ShapeKind::Triangle,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shapecalc", version, about = "Calculate area and perimeter of different shapes")]
pub struct Cli {
    /// Write log events to this file (TUI mode logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive calculator (default)
    Tui {
        /// Shape selected at startup
        #[arg(long, value_enum, default_value_t = ShapeArg::Circle)]
        shape: ShapeArg,

        /// Animation frame interval in milliseconds
        #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: u64,
    },

    /// Compute once and print the results
    Calc {
        #[arg(value_enum)]
        shape: ShapeArg,

        /// Dimension as NAME=VALUE, e.g. --dim radius=10
        #[arg(long = "dim", value_name = "NAME=VALUE")]
        dims: Vec<String>,
    },
}

/// Settings for the interactive mode
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub initial_shape: ShapeKind,
    pub tick_rate: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_shape: ShapeKind::Circle,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            log_file: None,
        }
    }
}

/// What the process should do
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Interactive(Config),
    Calculate {
        kind: ShapeKind,
        dimensions: Dimensions,
    },
}

impl Cli {
    /// Resolve the parsed arguments into a run mode
    pub fn into_mode(self) -> Result<Mode, AppError> {
        match self.command {
            None => Ok(Mode::Interactive(Config {
                log_file: self.log_file,
                ..Config::default()
            })),
            Some(Command::Tui { shape, tick_ms }) => Ok(Mode::Interactive(Config {
                initial_shape: shape.into(),
                tick_rate: Duration::from_millis(tick_ms),
                log_file: self.log_file,
            })),
            Some(Command::Calc { shape, dims }) => {
                let kind = ShapeKind::from(shape);
                Ok(Mode::Calculate {
                    kind,
                    dimensions: parse_dim_args(kind, &dims)?,
                })
            }
        }
    }
}

/// Parse `NAME=VALUE` pairs for `kind`.
///
/// The value goes through the lenient numeric parser, so it never fails; the
/// name must be one of the kind's fields. Later pairs override earlier ones.
pub fn parse_dim_args(kind: ShapeKind, args: &[String]) -> Result<Dimensions, AppError> {
    let mut dims = Dimensions::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| AppError::MalformedDimension(arg.clone()))?;
        let field: Field = name.trim().parse()?;
        if !kind.has_field(field) {
            return Err(AppError::not_applicable(kind, field));
        }
        dims.set_text(field, value);
    }
    Ok(dims)
}

/// Output of `shapecalc calc`: the shape name followed by area and perimeter
pub fn render_calc(kind: ShapeKind, dims: &Dimensions) -> String {
    let measurements = Shape::from_dimensions(kind, dims).measure();
    format!(
        "Shape: {}\nArea: {}\nPerimeter: {}\n",
        kind,
        format_measure(measurements.area),
        format_measure(measurements.perimeter)
    )
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Background shown where rays leave the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackgroundArg {
    /// Random color per escaping ray, seeded by --seed
    Starfield,
    /// Solid black
    Black,
}

#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Render a scene of spheres and rooms with recursive ray tracing")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Recursion budget per camera ray
    #[arg(short, long, default_value_t = 5)]
    pub depth: u32,

    /// Seed for the background generator
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// JSON scene description (defaults to the built-in demo scene)
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Write the scene as JSON to this path before rendering
    #[arg(long)]
    pub export_scene: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = BackgroundArg::Starfield)]
    pub background: BackgroundArg,

    /// Output file (.ppm keeps raw values, .png clamps to [0, 1])
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

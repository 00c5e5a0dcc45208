use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

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

#[derive(Parser)]
#[command(name = "phong")]
#[command(about = "Ray/sphere intersection kernel with Phong shading")]
pub struct Args {
    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a JSON scene, or the default world when no scene is given
    Render {
        scene: Option<PathBuf>,
        /// Output file (.ppm, .png or .jpg); a name under renders/ is generated when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Draw the twelve hour marks of a clock face
    Clock {
        #[arg(short, long, default_value = "clock.ppm")]
        output: PathBuf,
        #[arg(long, default_value_t = 400)]
        size: usize,
    },
    /// Plot a projectile under gravity and wind
    Trajectory {
        #[arg(short, long, default_value = "trajectory.ppm")]
        output: PathBuf,
    },
}

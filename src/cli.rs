use clap::{Parser, ValueEnum};
use log::LevelFilter;
use raytracer::config::RenderSettings;
use std::path::PathBuf;

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

/// Command line arguments. Anything given here overrides the scene file's `[render]` table.
#[derive(Debug, Parser)]
#[command(name = "raytracer")]
#[command(about = "Renders a scene of spheres lit by a single point light")]
pub struct Args {
    /// Scene file (TOML). The built-in demo scene is used when omitted.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum rays traced per sample, reflections included
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for the random sampler
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of worker threads
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Output PNG path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn apply(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(samples) = self.samples {
            settings.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(threads) = self.threads {
            settings.threads = Some(threads);
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
    }
}

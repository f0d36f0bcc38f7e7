//! Render settings and the TOML file that carries them alongside a scene.

use crate::{scene::SceneDescription, Error};
use anyhow::Context;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    /// Maximum number of rays traced per camera sample, the camera ray included.
    pub max_depth: u32,
    /// Seeds every random decision; equal seeds give identical images.
    pub seed: u64,
    /// Worker threads. `None` uses the global rayon pool.
    pub threads: Option<usize>,
    pub output: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            samples_per_pixel: 50,
            max_depth: 5,
            seed: 0,
            threads: None,
            output: PathBuf::from("render.png"),
        }
    }
}

impl RenderSettings {
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width < 2 || self.height < 2 {
            return Err(Error::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(Error::NoSamples);
        }
        if self.threads == Some(0) {
            return Err(Error::NoThreads);
        }
        Ok(())
    }
}

/// Contents of a scene file: an optional `[render]` table next to the scene itself.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(flatten)]
    pub scene: SceneDescription,
}

impl Config {
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {:?}", path))?;
        Self::from_toml(&source).with_context(|| format!("Failed to parse scene file {:?}", path))
    }
}

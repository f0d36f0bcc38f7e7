mod cli;

use anyhow::Context;
use clap::Parser;
use log::info;
use raytracer::{config::Config, render::render, scene::Scene};

use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let mut config = match &args.scene {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    args.apply(&mut config.render);
    let settings = config.render;

    settings.validate().context("Invalid render settings")?;
    let scene = Scene::build(&config.scene, settings.aspect_ratio()).context("Invalid scene")?;

    info!(
        "Rendering {} spheres at {}x{}, {} samples per pixel, depth {}",
        scene.world.len(),
        settings.width,
        settings.height,
        settings.samples_per_pixel,
        settings.max_depth
    );

    let image = render(&scene, &settings)?;

    image
        .save(&settings.output)
        .with_context(|| format!("Failed to write {:?}", settings.output))?;
    info!(
        "Wrote {}x{} image to {:?}",
        image.width(),
        image.height(),
        settings.output
    );

    Ok(())
}

//! The image driver: multi-sample accumulation per pixel, rows rendered in parallel.

use crate::{
    buffer::{write_pixel, PixelBuffer, COLOR_CHANNELS},
    config::RenderSettings,
    integrator::ray_color,
    math::Vec3,
    scene::Scene,
    DefaultRng, Error,
};
use log::{debug, info, trace, warn};
use rand::prelude::*;
use rayon::prelude::*;
use std::{
    sync::atomic::{AtomicU32, Ordering},
    time::Instant,
};

/// Seed for the generator of image row `row`.
///
/// Every row draws from its own stream, so the image doesn't depend on how rows are
/// scheduled across threads.
pub fn row_seed(seed: u64, row: u32) -> u64 {
    seed ^ u64::from(row).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Averages `settings.samples_per_pixel` jittered camera rays through pixel `(x, y)`,
/// where `y = 0` is the top row. The result is linear and not yet gamma corrected.
///
/// `settings` must already have passed [`RenderSettings::validate`].
pub(crate) fn sample_pixel<R: Rng + ?Sized>(
    scene: &Scene,
    settings: &RenderSettings,
    x: u32,
    y: u32,
    rng: &mut R,
) -> Vec3 {
    let width = f64::from(settings.width - 1);
    let height = f64::from(settings.height - 1);
    // Image rows run top to bottom, the camera's t runs bottom to top.
    let flipped = f64::from(settings.height - 1 - y);

    let mut color = Vec3::ZERO;

    // Antialiasing via multisampling
    for _ in 0..settings.samples_per_pixel {
        let s = (f64::from(x) + rng.gen::<f64>()) / width;
        let t = (flipped + rng.gen::<f64>()) / height;

        let ray = scene.camera.ray(s, t);
        color += ray_color(&ray, &scene.world, &scene.light, settings.max_depth, rng);
    }

    color / f64::from(settings.samples_per_pixel)
}

fn render_rows(scene: &Scene, settings: &RenderSettings, buffer: &mut PixelBuffer) {
    let row_len = buffer.row_len();
    let height = settings.height;
    let rows_done = AtomicU32::new(0);

    buffer
        .as_raw_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let seed = row_seed(settings.seed, y);
            trace!("Row {} seeded with {:#018x}", y, seed);
            let mut rng = DefaultRng::seed_from_u64(seed);

            row.chunks_mut(COLOR_CHANNELS)
                .enumerate()
                .for_each(|(x, pixel)| {
                    let color = sample_pixel(scene, settings, x as u32, y, &mut rng);
                    write_pixel(pixel, color);
                });

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Scanline {}/{}", done, height);
        });
}

/// Renders `scene` into a new pixel buffer.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Result<PixelBuffer, Error> {
    settings.validate()?;

    let mut buffer = PixelBuffer::new(settings.width, settings.height);
    let start = Instant::now();

    match settings.threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(|| render_rows(scene, settings, &mut buffer)),
            Err(err) => {
                warn!("Could not start {} worker threads ({}), using the global pool", threads, err);
                render_rows(scene, settings, &mut buffer);
            }
        },
        None => render_rows(scene, settings, &mut buffer),
    }

    let duration = start.elapsed();
    let samples = f64::from(settings.width)
        * f64::from(settings.height)
        * f64::from(settings.samples_per_pixel)
        / 1_000_000.0;
    info!(
        "Time elapsed: {:.2?}, total samples: {:.2}M, samples per second: {:.2}M",
        duration,
        samples,
        samples / duration.as_secs_f64().max(f64::EPSILON)
    );

    Ok(buffer)
}

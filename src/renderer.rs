use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;

use crate::{
    algebra::{point, Tuple},
    canvas::Canvas,
    error::Result,
    ray::Ray,
    scene::{RenderJson, Scene, ViewJson},
    world::World,
};

pub fn render_image_name(w: usize, h: usize, objects: usize) -> String {
    let suf: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("renders/render_{w}x{h}_{objects}obj_{suf}.ppm")
}

/// Cast the ray for pixel (x, y) through the wall and shade it.
///
/// Pixels are square: the wall's height spans the canvas height and its
/// width follows the canvas aspect ratio.
pub fn pixel_color(
    world: &World,
    view: &ViewJson,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) -> Result<Tuple> {
    let pixel_size = view.wall_size / h as f64;
    let half_w = pixel_size * w as f64 / 2.0;
    let half_h = view.wall_size / 2.0;

    let world_x = -half_w + pixel_size * x as f64;
    let world_y = half_h - pixel_size * y as f64;
    let target = point(world_x, world_y, view.wall_z);
    let direction = target.minus(view.origin)?.normalize()?;

    world.color_at(&Ray::new(view.origin, direction))
}

/// Render one row after another; the progress bar is hidden when `quiet`.
pub fn render(world: &World, view: &ViewJson, settings: RenderJson, quiet: bool) -> Result<Canvas> {
    let RenderJson { width, height } = settings;
    info!("Rendering {width}x{height} image of {} object(s)", world.objects.len());

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(height as u64);
        let template = "{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}";
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            pb.set_style(style);
        }
        pb
    };

    let mut canvas = Canvas::new(width, height);
    for y in 0..height {
        for x in 0..width {
            canvas.set_pixel_at(x, y, pixel_color(world, view, x, y, width, height)?);
        }
        bar.inc(1);
    }
    bar.finish_with_message("Rendering complete");
    Ok(canvas)
}

pub fn render_scene(scene: &Scene, quiet: bool) -> Result<Canvas> {
    render(&scene.world, &scene.view, scene.render, quiet)
}

mod cli;
mod logger;

use clap::Parser;
use log::{debug, info};

use phong_kernel::{apps, renderer, scene, scene::Scene, Result};

use crate::cli::{Args, Command};
use crate::logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    match args.command {
        Command::Render { scene: path, output } => {
            // ── load scene ────────────────────────────────────────────────
            let scene = match path {
                Some(p) => scene::load(&p)?,
                None => {
                    info!("No scene given, rendering the default world");
                    Scene::builtin()
                }
            };

            let view = &scene.view;
            info!(
                "=== VIEW === origin {} wall_z {:.2} wall_size {:.2}",
                view.origin, view.wall_z, view.wall_size
            );
            info!("=== OBJECTS ({}) ===", scene.world.objects.len());
            for (i, s) in scene.world.objects.iter().enumerate() {
                debug!(" [{}] Sphere '{}' {{ mat_color: {} }}", i, s.name, s.material.color);
            }
            if let Some(l) = &scene.world.light {
                info!("=== LIGHT === pos {} intensity {}", l.position, l.intensity);
            }

            // ── render ────────────────────────────────────────────────────
            let canvas = renderer::render_scene(&scene, args.quiet)?;
            let (w, h) = (scene.render.width, scene.render.height);
            let objects = scene.world.objects.len();
            let name = output.unwrap_or_else(|| renderer::render_image_name(w, h, objects).into());
            canvas.save(name)?;
        }
        Command::Clock { output, size } => apps::clock(size)?.save(output)?,
        Command::Trajectory { output } => apps::trajectory()?.save(output)?,
    }
    Ok(())
}

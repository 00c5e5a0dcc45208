//! Small demo programs that exercise the tuple and matrix algebra on a canvas.

use std::f64::consts::PI;

use log::debug;

use crate::{
    algebra::{point, vector, Tuple, WHITE},
    canvas::Canvas,
    error::Result,
    matrix::Matrix,
};

/// Twelve hour marks on a `size` x `size` canvas.
pub fn clock(size: usize) -> Result<Canvas> {
    let mut canvas = Canvas::new(size, size);
    let s = size as f64;
    let hour_angle = PI / 6.0;
    let shift = Matrix::identity().scale(s / 4.0, s / 4.0, 0.0)?.translate(s / 2.0, s / 2.0, 0.0)?;
    let mut rotation = Matrix::identity();

    for hour in 0..12 {
        let p = shift.times_tuple(rotation.times_tuple(point(0.0, -1.0, 0.0))?)?;
        debug!("hour {hour} at ({:.1}, {:.1})", p.x, p.y);
        canvas.set_pixel_at(p.x.round() as usize, p.y.round() as usize, WHITE);
        rotation = rotation.rotate_z(hour_angle)?;
    }
    Ok(canvas)
}

#[derive(Clone, Copy, Debug)]
pub struct Projectile {
    pub position: Tuple,
    pub velocity: Tuple,
}

#[derive(Clone, Copy, Debug)]
pub struct Environment {
    pub gravity: Tuple,
    pub wind: Tuple,
}

/// Advance one step: move by the velocity, then let gravity and wind act on it.
pub fn tick(proj: Projectile, env: &Environment) -> Result<Projectile> {
    Ok(Projectile {
        position: proj.position.plus(proj.velocity)?,
        velocity: proj.velocity.plus(env.gravity)?.plus(env.wind)?,
    })
}

/// Plot a projectile's flight until it lands.
pub fn trajectory() -> Result<Canvas> {
    let env = Environment { gravity: vector(0.0, -0.1, 0.0), wind: vector(-0.01, 0.0, 0.0) };
    let mut proj = Projectile {
        position: point(1.0, 1.0, 0.0),
        velocity: vector(1.0, 1.0, 0.0).normalize()? * 2.5,
    };
    let mut canvas = Canvas::new(64, 64);
    let height = canvas.height() as f64;

    while proj.position.y > 0.0 {
        proj = tick(proj, &env)?;
        let (x, y) = (proj.position.x.round(), (height - proj.position.y).round());
        if x >= 0.0 && y >= 0.0 {
            canvas.set_pixel_at(x as usize, y as usize, WHITE);
        }
    }
    Ok(canvas)
}

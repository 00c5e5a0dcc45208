//! src/canvas.rs
//! -------------
//! Flat pixel buffer with plain PPM (P3) serialization and PNG/JPEG export.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use log::{debug, info};

use crate::algebra::{Tuple, BLACK};
use crate::error::Result;

const PPM_LINE_LIMIT: usize = 70;

#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Tuple>,
}

impl Canvas {
    /// A `width` x `height` canvas, all black.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![BLACK; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Tuple> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Writes outside the canvas are dropped.
    pub fn set_pixel_at(&mut self, x: usize, y: usize, c: Tuple) {
        if x >= self.width || y >= self.height {
            debug!("dropping pixel ({x}, {y}) outside {}x{} canvas", self.width, self.height);
            return;
        }
        self.pixels[y * self.width + x] = c;
    }

    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n255\n", self.width, self.height);
        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line = String::new();
            for c in row {
                let [r, g, b] = c.to_rgb();
                let entry = format!("{r} {g} {b}");
                if !line.is_empty() && line.len() + 1 + entry.len() > PPM_LINE_LIMIT {
                    out.push_str(&line);
                    out.push('\n');
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&entry);
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgb(self.pixels[y as usize * self.width + x as usize].to_rgb())
        })
    }

    /// `.ppm` is written as plain text, any other extension goes through `image`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let is_ppm = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("ppm"));
        if is_ppm {
            fs::write(path, self.to_ppm())?;
        } else {
            self.to_image().save(path)?;
        }
        info!("Saved → {}", path.display());
        Ok(())
    }
}

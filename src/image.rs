use crate::domain::*;
use crate::error::*;

/// Iteration history, one row of pixels per recorded step.
/// Values are clamped into [0, 1] before coloring.
pub struct Image1D {
    img_buffer: image::RgbImage,
    stride: usize,
}

impl Image1D {
    /// Room for `lines` rows covering steps `0..=steps`,
    /// steps are sampled evenly when they don't all fit.
    pub fn new(len: usize, steps: usize, lines: usize) -> Self {
        let lines = lines.clamp(1, steps + 1);
        let stride = if lines > 1 {
            steps.div_ceil(lines - 1).max(1)
        } else {
            steps + 1
        };
        let rows = steps / stride + 1;
        Image1D {
            img_buffer: image::RgbImage::new(len as u32, rows.min(lines) as u32),
            stride,
        }
    }

    pub fn height(&self) -> u32 {
        self.img_buffer.height()
    }

    /// Record `sequence` if step `t` falls on a row.
    pub fn observe(&mut self, t: usize, sequence: &Sequence) {
        if t % self.stride == 0 {
            let l = (t / self.stride) as u32;
            if l < self.img_buffer.height() {
                self.add_line(l, sequence.buffer());
            }
        }
    }

    pub fn add_line(&mut self, l: u32, v: &[f64]) {
        debug_assert!(l < self.img_buffer.height());
        debug_assert_eq!(v.len(), self.img_buffer.width() as usize);
        let gradient = colorous::TURBO;
        for x in 0..self.img_buffer.width() {
            let r = v[x as usize].clamp(0.0, 1.0);
            let c = gradient.eval_continuous(r);
            self.img_buffer.put_pixel(x, l, image::Rgb(c.as_array()));
        }
    }

    pub fn write<F: AsRef<std::path::Path>>(self, s: &F) -> SmoothResult<()> {
        tracing::info!(path = ?s.as_ref(), "writing image");
        self.img_buffer.save(s)?;
        Ok(())
    }
}

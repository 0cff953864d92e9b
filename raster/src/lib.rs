use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, Rgba, RgbaImage};
use rakugaki_core::sketch::{Sketchpad, STROKE_COLOR, STROKE_WIDTH};

pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("png encode failed: {0}")]
    Encode(String),
    #[error("invalid canvas dimensions")]
    Dimensions,
}

pub fn render_rgba(pad: &Sketchpad) -> Result<RgbaImage, RasterError> {
    let width = pad.width();
    let height = pad.height();
    if width == 0 || height == 0 {
        return Err(RasterError::Dimensions);
    }
    // Background stays fully transparent; the service crops the drawing by alpha.
    let mut image = RgbaImage::new(width, height);
    let radius = STROKE_WIDTH * 0.5;
    for stroke in pad.strokes() {
        let Some(first) = stroke.points.first() else {
            continue;
        };
        stamp_disc(&mut image, first.0, first.1, radius);
        for pair in stroke.points.windows(2) {
            stamp_segment(&mut image, pair[0], pair[1], radius);
        }
    }
    Ok(image)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RasterError> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|err| RasterError::Encode(err.to_string()))?;
    Ok(out.into_inner())
}

pub fn snapshot_data_url(pad: &Sketchpad) -> Result<String, RasterError> {
    let image = render_rgba(pad)?;
    let png = encode_png(&image)?;
    Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(png)))
}

fn stamp_segment(image: &mut RgbaImage, from: (f32, f32), to: (f32, f32), radius: f32) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let dist = (dx * dx + dy * dy).sqrt();
    let step = (radius * 0.5).max(0.5);
    let steps = (dist / step).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp_disc(image, from.0 + dx * t, from.1 + dy * t, radius);
    }
}

fn stamp_disc(image: &mut RgbaImage, cx: f32, cy: f32, radius: f32) {
    let (width, height) = image.dimensions();
    let min_x = (cx - radius).floor().max(0.0) as u32;
    let max_x = ((cx + radius).ceil() as u32).min(width.saturating_sub(1));
    let min_y = (cy - radius).floor().max(0.0) as u32;
    let max_y = ((cy + radius).ceil() as u32).min(height.saturating_sub(1));
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32 + 0.5 - cx;
            let py = y as f32 + 0.5 - cy;
            if px * px + py * py <= radius * radius {
                image.put_pixel(x, y, Rgba(STROKE_COLOR));
            }
        }
    }
}

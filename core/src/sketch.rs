pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 400;

pub const STROKE_WIDTH: f32 = 5.0;
pub const STROKE_COLOR: [u8; 4] = [0, 0, 0, 255];

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<(f32, f32)>,
}

#[derive(Debug, Clone)]
pub struct Sketchpad {
    width: u32,
    height: u32,
    strokes: Vec<Stroke>,
    active: Option<Stroke>,
}

impl Sketchpad {
    pub fn new() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            strokes: Vec::new(),
            active: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        let point = self.clamp_point(x, y);
        self.active = Some(Stroke {
            points: vec![point],
        });
    }

    pub fn extend_stroke(&mut self, x: f32, y: f32) {
        let point = self.clamp_point(x, y);
        if let Some(stroke) = self.active.as_mut() {
            stroke.points.push(point);
        }
    }

    pub fn finish_stroke(&mut self) -> bool {
        match self.active.take() {
            Some(stroke) => {
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_blank(&self) -> bool {
        self.strokes.is_empty() && self.active.is_none()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = None;
    }

    fn clamp_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(0.0, (self.width.saturating_sub(1)) as f32),
            y.clamp(0.0, (self.height.saturating_sub(1)) as f32),
        )
    }
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new()
    }
}

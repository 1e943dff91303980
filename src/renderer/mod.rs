//! Rendering module
//!
//! The simulation never draws anything itself. Each frame it hands a
//! [`Renderer`] the rectangles produced by [`shapes::draw_list`], strictly
//! after the frame's simulation has completed.

pub mod shapes;

pub use shapes::{DrawRect, ShapeKind, colors, draw_list};

/// Backend that draws filled rectangles
pub trait Renderer {
    /// Clear the target to `clear` for a new frame
    fn prepare(&mut self, clear: [f32; 4]);
    fn fill_rect(&mut self, rect: &DrawRect);
    /// Show the finished frame
    fn present(&mut self);
}

/// Windowless renderer that keeps the last presented frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    clear_color: [f32; 4],
    pending: Vec<DrawRect>,
    last_frame: Vec<DrawRect>,
    frames_presented: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[DrawRect] {
        &self.last_frame
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Renderer for RecordingRenderer {
    fn prepare(&mut self, clear: [f32; 4]) {
        self.clear_color = clear;
        self.pending.clear();
    }

    fn fill_rect(&mut self, rect: &DrawRect) {
        self.pending.push(*rect);
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.last_frame);
        self.pending.clear();
        self.frames_presented += 1;
    }
}

/// Draw a whole frame
pub fn render_frame<R: Renderer + ?Sized>(renderer: &mut R, rects: &[DrawRect]) {
    renderer.prepare(colors::BACKGROUND);
    for rect in rects {
        renderer.fill_rect(rect);
    }
    renderer.present();
}

use std::collections::VecDeque;

use macroquad::prelude::{draw_line, Color, Vec2};

/// Half-width of the plus-shaped paint mark.
pub const PAINT_WIDTH: f32 = 4.0;

/// Stroke thickness of each mark's two crossing lines.
const MARK_THICKNESS: f32 = 2.0;

/// Default mark capacity. Old marks are evicted past this, which bounds
/// memory for long sessions without changing what a short session looks like.
pub const MAX_MARKS: usize = 200_000;

/// One paint mark: where the pen was and what color it was painting with.
#[derive(Clone, Copy, Debug)]
pub struct TraceMark {
    pub pos: Vec2,
    pub color: Color,
}

/// The accumulated spirograph pattern, as a capped ring buffer of marks
/// redrawn in full every frame.
pub struct Trace {
    marks: VecDeque<TraceMark>,
    capacity: usize,
}

impl Trace {
    pub fn new() -> Self {
        Self::with_capacity(MAX_MARKS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            marks: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, pos: Vec2, color: Color) {
        self.marks.push_back(TraceMark { pos, color });
        if self.marks.len() > self.capacity {
            self.marks.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Draw every mark as a small plus of crossing strokes centered on its
    /// position.
    pub fn draw(&self) {
        for mark in &self.marks {
            let TraceMark { pos, color } = *mark;
            draw_line(pos.x - PAINT_WIDTH, pos.y, pos.x + PAINT_WIDTH, pos.y, MARK_THICKNESS, color);
            draw_line(pos.x, pos.y - PAINT_WIDTH, pos.x, pos.y + PAINT_WIDTH, MARK_THICKNESS, color);
        }
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

use macroquad::prelude::Vec2;

use crate::error::ParamError;
use crate::segment::{Anchor, Segment};

/// Wheel radii closer to zero than this are rejected before they can reach
/// the gear-ratio division.
pub const MIN_WHEEL: f32 = 1e-3;

/// Spirograph geometry: outer ring radius, rolling wheel radius, and the pen
/// hole offset within the wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryParams {
    pub ring: f32,
    pub wheel: f32,
    pub hole: f32,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            ring: 105.0,
            wheel: 63.0,
            hole: 21.0,
        }
    }
}

/// Three chained segments: ring arm, wheel arm, and the pen (hole) arm.
/// Each frame the wheel arm re-anchors to the ring arm's far corner and the
/// pen arm to the wheel arm's, so the pen tip traces the rolling-circle
/// curve.
pub struct SegmentChain {
    segments: [Segment; 3],
}

impl SegmentChain {
    /// Build the chain with the ring arm anchored at `center`. All segments
    /// start at 90° so the arms hang downward on the first frame.
    pub fn new(center: Vec2) -> Self {
        let mut segments = [Segment::new(), Segment::new(), Segment::new()];
        for seg in &mut segments {
            seg.rotation_deg = 90.0;
        }
        segments[0].position = center;
        Self { segments }
    }

    /// Recompute segment lengths from the geometry parameters. Degenerate
    /// values (zero or negative ring/wheel) are legal here; they just make
    /// degenerate pictures.
    pub fn resize(&mut self, params: &GeometryParams, scale: f32) {
        self.segments[0].length = (params.ring - params.wheel) * scale;
        self.segments[1].length = params.wheel * scale;
        self.segments[2].length = -(params.hole * 2.3 + 10.0) * scale;
    }

    /// One kinematic step. The ring arm advances by `degrees_per_frame`, the
    /// wheel arm counter-rotates at the ring/wheel gear ratio, the pen arm is
    /// slaved to the wheel arm, and every segment re-anchors to its
    /// predecessor's far corner.
    ///
    /// Deterministic: no wall-clock input, so N steps from the same starting
    /// rotations always land in the same place.
    pub fn step(&mut self, degrees_per_frame: f32, params: &GeometryParams) -> Result<(), ParamError> {
        if params.wheel.abs() < MIN_WHEEL {
            return Err(ParamError::ZeroWheelRadius);
        }

        self.segments[0].rotate(degrees_per_frame);
        let gear_ratio = -(params.ring - params.wheel) / params.wheel;
        self.segments[1].rotate(degrees_per_frame * gear_ratio);
        self.segments[2].rotation_deg = self.segments[1].rotation_deg;

        for i in 1..self.segments.len() {
            self.segments[i].position = self.segments[i - 1].world_point(Anchor::Far);
        }
        Ok(())
    }

    /// World position of the pen tip: the far corner of the last segment.
    pub fn pen_position(&self) -> Vec2 {
        self.segments[2].world_point(Anchor::Far)
    }

    /// The wheel arm, exposed for the guide overlay (drawn segment plus the
    /// rolling-circle outline around its hub).
    pub fn wheel_arm(&self) -> &Segment {
        &self.segments[1]
    }

    pub fn segment(&self, index: usize) -> &Segment {
        &self.segments[index]
    }
}

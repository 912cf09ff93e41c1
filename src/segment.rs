use macroquad::prelude::Vec2;

/// Local corner anchors of a segment: `Near` is the segment origin, `Far`
/// sits at `length` along the local x axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Near,
    Far,
}

/// A rotating line segment. Only the two corner anchors matter for the
/// kinematics; the thickness is purely cosmetic and lives with the renderer.
#[derive(Clone, Debug)]
pub struct Segment {
    pub length: f32,
    pub rotation_deg: f32,
    pub position: Vec2,
}

impl Segment {
    pub fn new() -> Self {
        Self {
            length: 0.0,
            rotation_deg: 0.0,
            position: Vec2::ZERO,
        }
    }

    pub fn rotate(&mut self, delta_deg: f32) {
        self.rotation_deg += delta_deg;
    }

    /// World position of one of the local anchors under the segment's full
    /// transform. The raw local offset is not enough: the rotation has to be
    /// composed in, so a segment at 90° + R° lands where both rotations say.
    ///
    /// Screen convention (y down): at 0° the far anchor is offset (L, 0)
    /// from the position, at 90° it is offset (0, L).
    pub fn world_point(&self, anchor: Anchor) -> Vec2 {
        let local = match anchor {
            Anchor::Near => Vec2::ZERO,
            Anchor::Far => Vec2::new(self.length, 0.0),
        };
        let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
        Vec2::new(
            local.x * cos - local.y * sin,
            local.x * sin + local.y * cos,
        ) + self.position
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_vec2_eq(a: Vec2, b: Vec2) {
        assert!((a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn test_near_anchor_is_position() {
        let mut seg = Segment::new();
        seg.length = 50.0;
        seg.position = Vec2::new(10.0, 20.0);
        seg.rotation_deg = 137.0;
        assert_vec2_eq(seg.world_point(Anchor::Near), seg.position);
    }

    #[test]
    fn test_far_anchor_at_zero_degrees() {
        let mut seg = Segment::new();
        seg.length = 42.0;
        seg.position = Vec2::new(100.0, 200.0);
        assert_vec2_eq(seg.world_point(Anchor::Far), Vec2::new(142.0, 200.0));
    }

    #[test]
    fn test_far_anchor_at_ninety_degrees() {
        let mut seg = Segment::new();
        seg.length = 42.0;
        seg.position = Vec2::new(100.0, 200.0);
        seg.rotation_deg = 90.0;
        assert_vec2_eq(seg.world_point(Anchor::Far), Vec2::new(100.0, 242.0));
    }

    #[test]
    fn test_rotations_compose() {
        let mut seg = Segment::new();
        seg.length = 10.0;
        seg.rotate(90.0);
        seg.rotate(90.0);
        // 180° total: far anchor flips to (-L, 0).
        assert_vec2_eq(seg.world_point(Anchor::Far), Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn test_negative_length_points_backwards() {
        let mut seg = Segment::new();
        seg.length = -30.0;
        seg.position = Vec2::new(5.0, 5.0);
        assert_vec2_eq(seg.world_point(Anchor::Far), Vec2::new(-25.0, 5.0));
    }
}

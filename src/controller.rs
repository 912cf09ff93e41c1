use std::str::FromStr;

use log::warn;
use macroquad::prelude::Vec2;

use crate::chain::{GeometryParams, SegmentChain, MIN_WHEEL};
use crate::error::ParamError;
use crate::palette::ColorState;

/// Degrees-per-frame change per scroll notch.
pub const SCROLL_STEP: f32 = 0.1;
/// Upper speed bound.
pub const MAX_DEGREES_PER_FRAME: f32 = 1.0;

/// Animation speed and arm visibility. The two are linked through scrolling
/// (speed 0 hides the arms) but the visibility can also be toggled on its
/// own.
pub struct AnimationState {
    pub degrees_per_frame: f32,
    pub visible: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            degrees_per_frame: 0.0,
            visible: true,
        }
    }

    /// Scroll input: adjust speed by whole notches, clamped to
    /// [0, MAX_DEGREES_PER_FRAME]. Visibility follows the speed.
    pub fn apply_scroll(&mut self, delta: f32) {
        self.degrees_per_frame =
            (self.degrees_per_frame + delta * SCROLL_STEP).clamp(0.0, MAX_DEGREES_PER_FRAME);
        self.visible = self.degrees_per_frame != 0.0;
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which parameters a modal editor is collecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    AllGeometry,
    Ring,
    Wheel,
    Hole,
    ForegroundColor,
}

impl EditTarget {
    pub fn title(self) -> &'static str {
        match self {
            Self::AllGeometry => "Edit geometry",
            Self::Ring => "Edit ring",
            Self::Wheel => "Edit wheel",
            Self::Hole => "Edit hole",
            Self::ForegroundColor => "Edit color",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::AllGeometry => "Please input: ring wheel hole",
            Self::Ring => "Please input: ring",
            Self::Wheel => "Please input: wheel",
            Self::Hole => "Please input: hole",
            Self::ForegroundColor => "Please input: r g b",
        }
    }
}

/// An open modal edit. While one of these exists the kinematic update is
/// suspended; rendering keeps going so the window never freezes.
pub struct EditRequest {
    pub target: EditTarget,
    pub buffer: String,
    pub error: Option<String>,
}

/// All mutable spirograph state, owned in one place: geometry parameters,
/// the segment chain, speed/visibility, colors, and any open modal edit.
pub struct SpirographState {
    pub params: GeometryParams,
    pub scale: f32,
    pub chain: SegmentChain,
    pub animation: AnimationState,
    pub colors: ColorState,
    pub edit: Option<EditRequest>,
}

impl SpirographState {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        let params = GeometryParams::default();
        // Computed once: later ring edits deliberately keep this value.
        let scale = (window_height / 2.0 - 1.0) / params.ring;
        let center = Vec2::new(window_width / 2.0, window_height / 2.0);

        let mut chain = SegmentChain::new(center);
        chain.resize(&params, scale);

        Self {
            params,
            scale,
            chain,
            animation: AnimationState::new(),
            colors: ColorState::new(),
            edit: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Open a modal editor pre-filled with the current values.
    pub fn request_edit(&mut self, target: EditTarget) {
        let buffer = match target {
            EditTarget::AllGeometry => {
                format!("{} {} {}", self.params.ring, self.params.wheel, self.params.hole)
            }
            EditTarget::Ring => format!("{}", self.params.ring),
            EditTarget::Wheel => format!("{}", self.params.wheel),
            EditTarget::Hole => format!("{}", self.params.hole),
            EditTarget::ForegroundColor => {
                let fg = self.colors.foreground;
                format!(
                    "{} {} {}",
                    (fg.r * 255.0).round() as i64,
                    (fg.g * 255.0).round() as i64,
                    (fg.b * 255.0).round() as i64
                )
            }
        };
        self.edit = Some(EditRequest {
            target,
            buffer,
            error: None,
        });
    }

    /// Parse and apply the open edit. On success the editor closes; on a
    /// parse or validation error it stays open showing the message, so bad
    /// input re-prompts instead of crashing or half-applying.
    pub fn apply_edit(&mut self) {
        let (target, buffer) = match &self.edit {
            Some(edit) => (edit.target, edit.buffer.clone()),
            None => return,
        };
        match self.apply_edit_to(target, &buffer) {
            Ok(()) => self.edit = None,
            Err(err) => {
                warn!("rejected {}: {err}", target.title());
                if let Some(edit) = self.edit.as_mut() {
                    edit.error = Some(err.to_string());
                }
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    fn apply_edit_to(&mut self, target: EditTarget, buffer: &str) -> Result<(), ParamError> {
        match target {
            EditTarget::AllGeometry => {
                let v: Vec<f32> = parse_tokens(buffer, 3, "ring wheel hole")?;
                self.set_geometry(v[0], v[1], v[2])
            }
            EditTarget::Ring => {
                let v: Vec<f32> = parse_tokens(buffer, 1, "ring")?;
                self.set_geometry(v[0], self.params.wheel, self.params.hole)
            }
            EditTarget::Wheel => {
                let v: Vec<f32> = parse_tokens(buffer, 1, "wheel")?;
                self.set_geometry(self.params.ring, v[0], self.params.hole)
            }
            EditTarget::Hole => {
                let v: Vec<f32> = parse_tokens(buffer, 1, "hole")?;
                self.set_geometry(self.params.ring, self.params.wheel, v[0])
            }
            EditTarget::ForegroundColor => {
                let v: Vec<i64> = parse_tokens(buffer, 3, "r g b")?;
                self.colors.set_foreground_rgb(v[0], v[1], v[2]);
                Ok(())
            }
        }
    }

    /// Replace the geometry and resize the chain. Wheel radii near zero are
    /// rejected up front; anything else is accepted, degenerate or not.
    /// The startup scale is kept as-is even when ring changes.
    pub fn set_geometry(&mut self, ring: f32, wheel: f32, hole: f32) -> Result<(), ParamError> {
        if wheel.abs() < MIN_WHEEL {
            return Err(ParamError::ZeroWheelRadius);
        }
        self.params = GeometryParams { ring, wheel, hole };
        self.chain.resize(&self.params, self.scale);
        Ok(())
    }

    /// Step to the previous palette color. Each effective step also shrinks
    /// the hole by 2 and resizes the chain; at the first entry nothing
    /// happens at all.
    pub fn cycle_palette_prev(&mut self) {
        if self.colors.cycle_prev() {
            self.params.hole -= 2.0;
            self.chain.resize(&self.params, self.scale);
        }
    }
}

/// Split a line of whitespace-separated tokens and parse each one. Wrong
/// token count or an unparseable token both report the same way.
fn parse_tokens<T: FromStr>(
    input: &str,
    expected: usize,
    field: &'static str,
) -> Result<Vec<T>, ParamError> {
    let values: Vec<T> = input
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| ParamError::MalformedInput { field, expected })?;
    if values.len() != expected {
        return Err(ParamError::MalformedInput { field, expected });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use macroquad::prelude::Color;

    fn state() -> SpirographState {
        SpirographState::new(800.0, 600.0)
    }

    #[test]
    fn test_scroll_clamps_to_max() {
        let mut anim = AnimationState::new();
        for _ in 0..25 {
            anim.apply_scroll(1.0);
        }
        assert_eq!(anim.degrees_per_frame, MAX_DEGREES_PER_FRAME);
        assert!(anim.visible);
    }

    #[test]
    fn test_scroll_clamps_to_zero_and_hides() {
        let mut anim = AnimationState::new();
        anim.apply_scroll(3.0);
        for _ in 0..25 {
            anim.apply_scroll(-1.0);
        }
        assert_eq!(anim.degrees_per_frame, 0.0);
        assert!(!anim.visible);
    }

    #[test]
    fn test_toggle_is_independent_of_speed() {
        let mut anim = AnimationState::new();
        assert_eq!(anim.degrees_per_frame, 0.0);
        anim.toggle_visible();
        assert!(!anim.visible);
        anim.toggle_visible();
        assert!(anim.visible);
    }

    #[test]
    fn test_startup_scale_and_lengths() {
        let s = state();
        let scale = (600.0 / 2.0 - 1.0) / 105.0;
        assert_eq!(s.scale, scale);
        assert_eq!(s.chain.segment(0).length, (105.0 - 63.0) * scale);
        assert_eq!(s.chain.segment(1).length, 63.0 * scale);
        assert_eq!(s.chain.segment(2).length, -(21.0 * 2.3 + 10.0) * scale);
    }

    #[test]
    fn test_ring_edit_keeps_startup_scale() {
        let mut s = state();
        let startup_scale = s.scale;
        s.set_geometry(210.0, 63.0, 21.0).unwrap();
        assert_eq!(s.scale, startup_scale);
        assert_eq!(s.chain.segment(0).length, (210.0 - 63.0) * startup_scale);
    }

    #[test]
    fn test_wheel_edit_writes_wheel_field() {
        let mut s = state();
        s.request_edit(EditTarget::Wheel);
        s.edit.as_mut().unwrap().buffer = "40".to_string();
        s.apply_edit();

        assert!(s.edit.is_none());
        assert_eq!(s.params.wheel, 40.0);
        assert_eq!(s.params.ring, 105.0);
    }

    #[test]
    fn test_zero_wheel_edit_is_rejected() {
        let mut s = state();
        s.request_edit(EditTarget::Wheel);
        s.edit.as_mut().unwrap().buffer = "0".to_string();
        s.apply_edit();

        // The editor stays open with an error; the old value survives.
        let edit = s.edit.as_ref().unwrap();
        assert!(edit.error.is_some());
        assert_eq!(s.params.wheel, 63.0);
    }

    #[test]
    fn test_malformed_input_re_prompts() {
        let mut s = state();
        s.request_edit(EditTarget::AllGeometry);
        s.edit.as_mut().unwrap().buffer = "100 abc 20".to_string();
        s.apply_edit();

        assert!(s.edit.as_ref().unwrap().error.is_some());
        assert_eq!(s.params, GeometryParams::default());

        // Fixing the input succeeds and closes the editor.
        s.edit.as_mut().unwrap().buffer = "100 50 20".to_string();
        s.apply_edit();
        assert!(s.edit.is_none());
        assert_eq!(s.params.ring, 100.0);
        assert_eq!(s.params.wheel, 50.0);
        assert_eq!(s.params.hole, 20.0);
    }

    #[test]
    fn test_wrong_token_count_is_malformed() {
        let mut s = state();
        s.request_edit(EditTarget::AllGeometry);
        s.edit.as_mut().unwrap().buffer = "100 50".to_string();
        s.apply_edit();
        assert!(s.edit.as_ref().unwrap().error.is_some());
    }

    #[test]
    fn test_color_edit_clamps_channels() {
        let mut s = state();
        s.request_edit(EditTarget::ForegroundColor);
        s.edit.as_mut().unwrap().buffer = "999 -1 128".to_string();
        s.apply_edit();

        assert!(s.edit.is_none());
        assert_eq!(s.colors.foreground, Color::from_rgba(255, 0, 128, 255));
    }

    #[test]
    fn test_palette_cycle_shrinks_hole() {
        let mut s = state();
        let scale = s.scale;
        s.cycle_palette_prev();

        assert_eq!(s.colors.palette_index, 9);
        assert_eq!(s.colors.foreground, Palette::color(9));
        assert_eq!(s.params.hole, 19.0);
        assert_eq!(s.chain.segment(2).length, -(19.0 * 2.3 + 10.0) * scale);
    }

    #[test]
    fn test_palette_cycle_stops_at_zero() {
        let mut s = state();
        for _ in 0..20 {
            s.cycle_palette_prev();
        }
        assert_eq!(s.colors.palette_index, 0);
        // Only the ten effective steps shrank the hole.
        assert_eq!(s.params.hole, 21.0 - 2.0 * 10.0);
    }
}

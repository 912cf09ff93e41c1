use egui_macroquad::egui;
use log::{info, warn};
use macroquad::prelude::*;

mod chain;
mod controller;
mod error;
mod palette;
mod segment;
mod trace;

use controller::{EditTarget, SpirographState};
use segment::Anchor;
use trace::Trace;

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;

/// Thickness of the guide arm lines.
const LINE_WIDTH: f32 = 2.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Spirograph".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut state = SpirographState::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
    let mut paint = Trace::new();
    let mut show_help = false;

    info!("controls: scroll = speed, Space = toggle arms, Enter/R/W/H = geometry, C = color, N = palette, F1 = help");

    loop {
        // INPUT

        if is_key_pressed(KeyCode::Escape) {
            if state.is_editing() {
                state.cancel_edit();
            } else {
                break;
            }
        }
        if is_key_pressed(KeyCode::F1) {
            show_help = !show_help;
        }

        // While a modal editor is open the keys belong to the text field.
        if !state.is_editing() {
            let (_, wheel_y) = mouse_wheel();
            if wheel_y != 0.0 {
                state.animation.apply_scroll(wheel_y);
            }
            if is_key_pressed(KeyCode::Space) {
                state.animation.toggle_visible();
            }
            if is_key_pressed(KeyCode::Enter) {
                state.request_edit(EditTarget::AllGeometry);
            }
            if is_key_pressed(KeyCode::R) {
                state.request_edit(EditTarget::Ring);
            }
            if is_key_pressed(KeyCode::W) {
                state.request_edit(EditTarget::Wheel);
            }
            if is_key_pressed(KeyCode::H) {
                state.request_edit(EditTarget::Hole);
            }
            if is_key_pressed(KeyCode::C) {
                state.request_edit(EditTarget::ForegroundColor);
            }
            if is_key_pressed(KeyCode::N) {
                state.cycle_palette_prev();
            }
        }

        // LOGIC
        // Editing suspends the kinematics but never the rendering.

        if state.animation.visible && !state.is_editing() {
            match state.chain.step(state.animation.degrees_per_frame, &state.params) {
                Ok(()) => paint.push(state.chain.pen_position(), state.colors.foreground),
                Err(err) => warn!("kinematic step skipped: {err}"),
            }
        }

        // RENDER

        clear_background(state.colors.background);

        paint.draw();

        if state.animation.visible {
            let arm = state.chain.wheel_arm();
            let near = arm.world_point(Anchor::Near);
            let far = arm.world_point(Anchor::Far);
            draw_line(near.x, near.y, far.x, far.y, LINE_WIDTH, state.colors.guide);
            draw_circle_lines(near.x, near.y, arm.length, 1.0, state.colors.guide);
        }

        let center = state.chain.segment(0).position;
        draw_circle_lines(
            center.x,
            center.y,
            state.params.ring * state.scale,
            1.0,
            state.colors.guide,
        );

        // UI

        let mut apply = false;
        let mut cancel = false;
        egui_macroquad::ui(|ctx| {
            egui::TopBottomPanel::top("hud").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Speed: {:.1}°/frame", state.animation.degrees_per_frame));
                    ui.label(format!("Ring: {}", state.params.ring));
                    ui.label(format!("Wheel: {}", state.params.wheel));
                    ui.label(format!("Hole: {}", state.params.hole));
                    ui.label(format!("Palette: {}", state.colors.palette_index));
                    ui.label(format!("Marks: {}", paint.len()));
                    if !state.animation.visible {
                        ui.label("ARMS HIDDEN");
                    }
                    if state.is_editing() {
                        ui.label("EDITING");
                    }
                });
            });

            if let Some(edit) = state.edit.as_mut() {
                egui::Window::new(edit.target.title())
                    .collapsible(false)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui.label(edit.target.prompt());
                        ui.text_edit_singleline(&mut edit.buffer);
                        if let Some(err) = &edit.error {
                            ui.colored_label(egui::Color32::RED, err);
                        }
                        ui.horizontal(|ui| {
                            if ui.button("Apply").clicked() {
                                apply = true;
                            }
                            if ui.button("Cancel").clicked() {
                                cancel = true;
                            }
                        });
                    });
            }

            if show_help {
                egui::Window::new("Help").show(ctx, |ui| {
                    ui.label("Mouse Wheel: change speed");
                    ui.label("Space: show/hide arms");
                    ui.label("Enter: edit ring, wheel and hole");
                    ui.label("R / W / H: edit one parameter");
                    ui.label("C: edit paint color");
                    ui.label("N: previous palette color");
                    ui.label("F1: toggle help");
                    ui.label("Esc: quit");
                });
            }
        });
        if apply {
            state.apply_edit();
        }
        if cancel {
            state.cancel_edit();
        }

        egui_macroquad::draw();

        next_frame().await;
    }
}

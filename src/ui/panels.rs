use egui::{Color32, Context, RichText, ScrollArea, Ui};

use crate::renderer::CameraMode;
use crate::ui::state::{RenderStats, UiState};
use crate::ui::theme::*;

#[derive(Default)]
pub struct UiActions {
    pub rebuild_page: bool,
    pub reset_camera: bool,
}

pub fn draw_side_panel(
    ctx: &Context,
    state: &mut UiState,
    stats: &RenderStats,
    last_error: &Option<String>,
) -> UiActions {
    let mut actions = UiActions::default();

    egui::SidePanel::right("control_panel")
        .min_width(280.0)
        .max_width(380.0)
        .default_width(310.0)
        .frame(egui::Frame::default().fill(BG_PANEL).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new("Page Bend").strong());
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Parametric surface viewer")
                        .color(TEXT_MUTED)
                        .size(11.0),
                );
                ui.add_space(16.0);

                section_header(ui, "SHAPE");
                let mut changed = false;
                changed |= param_slider(ui, "Flat length 1", &mut state.params.flat_len_1, 1.0..=30.0);
                changed |= param_slider(ui, "Flat length 2", &mut state.params.flat_len_2, 1.0..=30.0);
                changed |= param_slider(ui, "Bend angle", &mut state.params.bend_angle_deg, 0.0..=360.0);
                changed |= param_slider(ui, "Bend radius", &mut state.params.bend_radius, 1.0..=30.0);
                ui.horizontal(|ui| {
                    ui.label("Bend segments");
                    changed |= ui
                        .add(egui::Slider::new(&mut state.params.bend_segments, 1..=60))
                        .changed();
                });
                changed |= param_slider(ui, "Width", &mut state.params.width, 1.0..=100.0);
                if changed {
                    actions.rebuild_page = true;
                }

                if let Some(err) = last_error {
                    ui.add_space(6.0);
                    egui::Frame::default()
                        .fill(Color32::from_rgb(40, 15, 15))
                        .stroke(egui::Stroke::new(1.0, ACCENT_RED))
                        .rounding(4.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(err).color(ACCENT_RED).size(11.0));
                        });
                }
                ui.add_space(16.0);

                ui.separator();
                ui.add_space(12.0);

                section_header(ui, "VIEW");
                ui.checkbox(&mut state.show_grid, "Show grid");
                camera_controls(ui, &mut state.camera_mode);
                if ui.button("Reset view").clicked() {
                    actions.reset_camera = true;
                }
                ui.add_space(16.0);

                section_header(ui, "PERFORMANCE");
                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.vsync_enabled, "VSync");
                    ui.checkbox(&mut state.show_stats, "Stats");
                });
                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.fps_cap_enabled, "FPS Cap:");
                    ui.add_enabled(
                        state.fps_cap_enabled,
                        egui::DragValue::new(&mut state.fps_cap)
                            .range(30..=500)
                            .suffix(" fps"),
                    );
                });
                ui.add_space(16.0);

                if state.show_stats {
                    ui.separator();
                    ui.add_space(12.0);
                    stats_panel(ui, stats);
                }
            });
        });

    actions
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

fn param_slider(
    ui: &mut Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::Slider::new(value, range).step_by(1.0))
            .changed();
    });
    changed
}

fn camera_controls(ui: &mut Ui, mode: &mut CameraMode) {
    ui.horizontal(|ui| {
        ui.label("Camera:");
        if ui
            .selectable_label(*mode == CameraMode::Orbital, "Orbital")
            .clicked()
        {
            *mode = CameraMode::Orbital;
        }
        if ui
            .selectable_label(*mode == CameraMode::Free, "Free")
            .clicked()
        {
            *mode = CameraMode::Free;
        }
    });
}

fn stats_panel(ui: &mut Ui, stats: &RenderStats) {
    section_header(ui, "STATISTICS");
    egui::Frame::default()
        .fill(BG_WIDGET)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.style_mut().override_font_id =
                Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));

            let fps_color = if stats.fps >= 60.0 {
                ACCENT_GREEN
            } else {
                ACCENT_RED
            };

            egui::Grid::new("stats")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("FPS").color(TEXT_MUTED));
                    ui.label(RichText::new(format!("{:.0}", stats.fps)).color(fps_color));
                    ui.end_row();

                    ui.label(RichText::new("Vertices").color(TEXT_MUTED));
                    ui.label(RichText::new(format!("{}", stats.vertex_count)).color(TEXT_PRIMARY));
                    ui.end_row();

                    ui.label(RichText::new("Triangles").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{}", stats.triangle_count)).color(TEXT_PRIMARY),
                    );
                    ui.end_row();
                });
        });
}

pub fn draw_help_overlay(ctx: &Context, pos: [f32; 3], mode: CameraMode) {
    let controls = match mode {
        CameraMode::Free => "WASD - Move | RMB+Drag - Look | Scroll - Speed | R - Reset",
        CameraMode::Orbital => "RMB+Drag - Orbit | Scroll - Zoom | R - Reset",
    };

    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_black_alpha(180))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    ui.label(RichText::new(controls).color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!(
                            "Pos: ({:.0}, {:.0}, {:.0})",
                            pos[0], pos[1], pos[2]
                        ))
                        .color(TEXT_MUTED),
                    );
                });
        });
}

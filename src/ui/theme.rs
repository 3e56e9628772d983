use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub const BG_PANEL: Color32 = Color32::from_rgb(24, 26, 27);
pub const BG_WIDGET: Color32 = Color32::from_rgb(38, 41, 42);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(205, 207, 203);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 133, 128);

pub const ACCENT_GREEN: Color32 = Color32::from_rgb(110, 200, 50);
pub const ACCENT_RED: Color32 = Color32::from_rgb(200, 70, 60);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(55, 58, 56);

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = Style::default();

    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.faint_bg_color = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.window_rounding = Rounding::same(6.0);
    visuals.error_fg_color = ACCENT_RED;
    visuals.slider_trailing_fill = true;

    visuals.widgets.inactive.bg_fill = BG_WIDGET;
    visuals.widgets.inactive.weak_bg_fill = BG_WIDGET;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT_GREEN);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, ACCENT_GREEN);

    visuals.selection = egui::style::Selection {
        bg_fill: ACCENT_GREEN.gamma_multiply(0.35),
        stroke: Stroke::new(1.0, ACCENT_GREEN),
    };

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.slider_width = 190.0;

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Heading,
            FontId::new(18.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
    ]
    .into();

    ctx.set_style(style);
}

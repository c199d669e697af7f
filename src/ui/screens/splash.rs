use std::f32::consts::TAU;
use std::time::Instant;

use eframe::egui;

use crate::splash::{Splash, FALL_DISTANCE, FALL_START_Y};
use crate::ui::theme::{BRAND_DARK, BRAND_LIGHT, BRAND_RED, SHOP_NAME, TYRE_GREY};

/// Horizontal extent the path's x values are mapped onto.
const PATH_WIDTH: f32 = 2000.0;
const TYRE_RADIUS: f32 = 60.0;
const SPOKES: usize = 5;

pub struct SplashScreen;

impl SplashScreen {
    pub fn show(ctx: &egui::Context, splash: &Splash, now: Instant) {
        let frame = splash.frame(now);
        let fade = (splash.progress(now) * 4.0).min(1.0);

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BRAND_DARK))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                let scale = rect.width() / PATH_WIDTH;

                // rest height of the fall sits on the ground line
                let ground = rect.bottom() - rect.height() * 0.2;
                let rest_y = FALL_START_Y + FALL_DISTANCE;
                let center = egui::pos2(
                    rect.left() + TYRE_RADIUS + frame.x * scale,
                    ground - TYRE_RADIUS + (frame.y - rest_y) * scale,
                );

                painter.line_segment(
                    [
                        egui::pos2(rect.left(), ground),
                        egui::pos2(rect.right(), ground),
                    ],
                    egui::Stroke::new(2.0, BRAND_RED),
                );

                painter.circle_filled(center, TYRE_RADIUS, TYRE_GREY);
                painter.circle_stroke(
                    center,
                    TYRE_RADIUS * 0.55,
                    egui::Stroke::new(4.0, BRAND_LIGHT.gamma_multiply(0.8)),
                );
                let base_angle = frame.rotation.to_radians();
                for spoke in 0..SPOKES {
                    let angle = base_angle + spoke as f32 * TAU / SPOKES as f32;
                    let tip = center + egui::vec2(angle.cos(), angle.sin()) * TYRE_RADIUS * 0.55;
                    painter.line_segment([center, tip], egui::Stroke::new(3.0, BRAND_LIGHT));
                }

                let title_pos = rect.center() - egui::vec2(0.0, rect.height() * 0.15);
                painter.text(
                    title_pos,
                    egui::Align2::CENTER_CENTER,
                    SHOP_NAME,
                    egui::FontId::proportional(40.0),
                    BRAND_LIGHT.gamma_multiply(fade),
                );
                painter.text(
                    title_pos + egui::vec2(0.0, 48.0),
                    egui::Align2::CENTER_CENTER,
                    "Tyre Inventory & Storage",
                    egui::FontId::proportional(22.0),
                    BRAND_RED.gamma_multiply(fade),
                );
            });
    }
}

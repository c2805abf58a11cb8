use chrono::{NaiveTime, Timelike};
use eframe::egui::{Align2, Color32, FontId, Sense, Stroke, Vec2, Widget};

/// angle of the hour hand in degrees, clockwise from 12 o'clock
#[must_use]
pub fn hour_hand_angle(hour: u32, minute: u32) -> f32 {
    30.0 * ((hour % 12) as f32 + minute as f32 / 60.0)
}

/// angle of the minute hand in degrees, clockwise from 12 o'clock
#[must_use]
pub fn minute_hand_angle(minute: u32, second: u32) -> f32 {
    6.0 * (minute as f32 + second as f32 / 60.0)
}

/// angle of the second hand in degrees, clockwise from 12 o'clock
#[must_use]
pub fn second_hand_angle(second: u32) -> f32 {
    6.0 * second as f32
}

/// an analog clock face
///
/// purely a function of the time passed in; repaint it every frame with the
/// current wall-clock time to make it run
pub struct ClockFace {
    time: NaiveTime,
    radius: Option<f32>,
}

impl ClockFace {
    #[must_use]
    pub const fn new(time: NaiveTime) -> Self {
        Self { time, radius: None }
    }

    #[must_use]
    pub const fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }
}

impl Widget for ClockFace {
    fn ui(self, ui: &mut eframe::egui::Ui) -> eframe::egui::Response {
        let radius = self
            .radius
            .unwrap_or_else(|| ui.spacing().slider_width * 1.5);
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(radius * 2.), Sense::hover());
        let center = rect.center();
        let painter = ui.painter();

        painter.circle_filled(center, radius, Color32::from_rgb(30, 30, 30));
        painter.circle_stroke(center, radius, Stroke::new(2.0, Color32::WHITE));

        // Vec2::angled measures from 3 o'clock, so shift by -90 to put 12 at the top
        for numeral in 1..=12 {
            let angle = (30.0 * numeral as f32 - 90.).to_radians();
            painter.text(
                center + Vec2::angled(angle) * (radius * 0.8),
                Align2::CENTER_CENTER,
                numeral.to_string(),
                FontId::proportional(radius * 0.16),
                Color32::WHITE,
            );
        }

        let hand = |angle: f32, length: f32, stroke: Stroke| {
            let tip = center + Vec2::angled((angle - 90.).to_radians()) * (radius * length);
            painter.line_segment([center, tip], stroke);
        };
        hand(
            hour_hand_angle(self.time.hour(), self.time.minute()),
            0.5,
            Stroke::new(4.0, Color32::WHITE),
        );
        hand(
            minute_hand_angle(self.time.minute(), self.time.second()),
            0.75,
            Stroke::new(3.0, Color32::WHITE),
        );
        hand(
            second_hand_angle(self.time.second()),
            0.85,
            Stroke::new(1.5, Color32::RED),
        );
        painter.circle_filled(center, radius * 0.03, Color32::WHITE);

        response
    }
}

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use eframe::egui::{self, TextEdit, Widget};

/// the date and time being picked for the next alarm
///
/// each field keeps a text buffer alongside its value so typed input only
/// commits once the edit box loses focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmDraft {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    year_string: String,
    month_string: String,
    day_string: String,
    hour_string: String,
    minute_string: String,
    second_string: String,
}

impl Default for AlarmDraft {
    fn default() -> Self {
        Self::starting_at(chrono::Local::now().naive_local())
    }
}

impl AlarmDraft {
    #[must_use]
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            year: now.year() as u32,
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            year_string: now.year().to_string(),
            month_string: now.month().to_string(),
            day_string: now.day().to_string(),
            hour_string: now.hour().to_string(),
            minute_string: now.minute().to_string(),
            second_string: now.second().to_string(),
        }
    }

    /// combines the picked fields into one timestamp
    /// `None` when the day doesn't exist in the picked month (e.g. April 31)
    #[must_use]
    pub fn build(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(self.year as i32, self.month, self.day)?;
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, self.second)?;
        Some(NaiveDateTime::new(date, time))
    }

    pub(crate) fn render_date_editor(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            number_field(ui, "Year", &mut self.year, &mut self.year_string, 1970..=9999);
            number_field(ui, "Month", &mut self.month, &mut self.month_string, 1..=12);
            number_field(ui, "Day", &mut self.day, &mut self.day_string, 1..=31);
        });
    }

    pub(crate) fn render_time_editor(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            number_field(ui, "Hour", &mut self.hour, &mut self.hour_string, 0..=23);
            number_field(ui, "Minute", &mut self.minute, &mut self.minute_string, 0..=59);
            number_field(ui, "Second", &mut self.second, &mut self.second_string, 0..=59);
        });
    }
}

fn number_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut u32,
    buffer: &mut String,
    range: RangeInclusive<u32>,
) {
    ui.vertical(|ui| {
        ui.label(label);
        if ui.button("Up").clicked() && *value < *range.end() {
            *value += 1;
            *buffer = value.to_string();
        }
        let digits = range.end().to_string().len();
        if {
            TextEdit::singleline(buffer)
                .desired_width(10.0 * digits as f32 + 8.0)
                .char_limit(digits)
                .ui(&mut *ui)
        }
        .lost_focus()
        {
            // if the input value is valid, update the value
            if let Ok(parsed_value) = buffer.parse::<u32>() {
                *value = parsed_value.clamp(*range.start(), *range.end());
            }
            // sync the input value and the value regardless
            *buffer = value.to_string();
        }
        if ui.button("Down").clicked() && *value > *range.start() {
            *value -= 1;
            *buffer = value.to_string();
        }
    });
}

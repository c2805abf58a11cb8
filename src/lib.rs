#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![deny(clippy::use_self, rust_2018_idioms)]
#![allow(clippy::multiple_crate_versions, clippy::module_name_repetitions)]

use std::{
    ops::Not,
    path::Path,
    sync::mpsc::{Receiver, Sender},
    time::Duration,
};

use chrono::Local;
use eframe::egui::{self, Button, CentralPanel, Grid, ScrollArea, TopBottomPanel};

use alarm::{AlarmManager, MissingSoundSelection};
use alarm_edit::AlarmDraft;
use communication::{PlayRequest, PlaybackFailure};
use widgets::ClockFace;

pub mod alarm;
pub mod alarm_edit;
pub mod communication;
pub mod widgets;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Not for Theme {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl From<Theme> for egui::Visuals {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}

pub struct Chime {
    manager: AlarmManager,
    draft: AlarmDraft,
    theme: Theme,
    requests: Sender<PlayRequest>,
    failures: Receiver<PlaybackFailure>,
}

impl Chime {
    #[must_use]
    pub fn new(requests: Sender<PlayRequest>, failures: Receiver<PlaybackFailure>) -> Self {
        Self {
            manager: AlarmManager::new(),
            draft: AlarmDraft::default(),
            theme: Theme::default(),
            requests,
            failures,
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("time_and_ctrl").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let theme_btn = ui.add(Button::new({
                    if self.theme == Theme::Dark {
                        "🌞"
                    } else {
                        "🌙"
                    }
                }));
                if theme_btn.clicked() {
                    self.theme = !self.theme;
                }
                ui.centered_and_justified(|ui| {
                    ui.label(format!(
                        "Time: {}",
                        Local::now().naive_local().format(TIME_FORMAT)
                    ));
                });
            });
        });
    }

    fn choose_sound(&mut self) {
        let file_dialog = rfd::FileDialog::new()
            .set_title("Choose Alarm Sound")
            .add_filter("Audio Files", &["mp3", "wav"])
            .add_filter("All Files", &["*"]);
        let file_dialog = match directories::UserDirs::new()
            .and_then(|u| u.audio_dir().map(Path::to_path_buf))
        {
            Some(audio_path) => file_dialog.set_directory(audio_path),
            None => file_dialog,
        };

        if let Some(path) = file_dialog.pick_file() {
            log::info!("alarm sound set to {}", path.display());
            alert(
                rfd::MessageLevel::Info,
                "Alarm Sound",
                format!("Alarm sound set to: {}", path.display()),
            );
            self.manager.choose_sound(path);
        }
    }

    fn set_alarm(&mut self) {
        let Some(at) = self.draft.build() else {
            alert(
                rfd::MessageLevel::Warning,
                "Invalid Date",
                "The chosen day does not exist in that month.".to_string(),
            );
            return;
        };
        match self.manager.set_alarm(at.date(), at.time()) {
            Ok(at) => {
                log::info!("alarm set for {at}");
                alert(
                    rfd::MessageLevel::Info,
                    "Alarm Set",
                    format!("Alarm set for {}", at.format(TIME_FORMAT)),
                );
            }
            Err(MissingSoundSelection) => {
                alert(
                    rfd::MessageLevel::Warning,
                    "No Alarm Sound",
                    "Please choose an alarm sound before setting an alarm.".to_string(),
                );
            }
        }
    }

    /// drains due alarms and hands each one to the playback thread
    /// a due entry is consumed whether or not its sound can be played
    fn check_alarms(&mut self) {
        for due in self.manager.tick(Local::now().naive_local()) {
            match due.sound {
                Some(path) if path.exists() => {
                    log::info!("alarm for {} ringing with {}", due.at, path.display());
                    if self.requests.send(PlayRequest::new(path)).is_err() {
                        log::error!("playback thread is gone, alarm dropped");
                    }
                }
                Some(path) => {
                    log::error!("alarm sound file not found: {}", path.display());
                    alert(
                        rfd::MessageLevel::Warning,
                        "Error",
                        format!("Alarm sound file not found: {}", path.display()),
                    );
                }
                None => {
                    log::error!("alarm fired with no sound chosen");
                    alert(
                        rfd::MessageLevel::Warning,
                        "Error",
                        "No alarm sound is chosen.".to_string(),
                    );
                }
            }
        }
    }

    fn drain_playback_failures(&self) {
        while let Ok(failure) = self.failures.try_recv() {
            alert(
                rfd::MessageLevel::Warning,
                "Error",
                format!("Failed to play alarm sound: {}", failure.error),
            );
        }
    }
}

impl eframe::App for Chime {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // keep the face and the alarm scan moving even without input
        ctx.request_repaint_after(Duration::from_secs(1));
        ctx.set_visuals(self.theme.into());

        self.drain_playback_failures();
        self.check_alarms();

        self.render_header(ctx);
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(ClockFace::new(Local::now().naive_local().time()).radius(110.0));
            });
            ui.separator();

            ui.label("Set Date and Time:");
            self.draft.render_date_editor(ui);
            self.draft.render_time_editor(ui);

            if ui.button("Set Alarm").clicked() {
                self.set_alarm();
            }
            if ui.button("Choose Alarm Sound").clicked() {
                self.choose_sound();
            }

            ui.separator();
            if let Some(path) = self.manager.sound() {
                ui.label(format!("Alarm sound: {}", path.display()));
            }
            ScrollArea::vertical().show(ui, |ui| {
                Grid::new("alarms").show(ui, |ui| {
                    for entry in self.manager.alarms() {
                        ui.label(entry.at.format(TIME_FORMAT).to_string());
                        ui.end_row();
                    }
                });
            });
        });
    }
}

fn alert(level: rfd::MessageLevel, title: &str, description: String) {
    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

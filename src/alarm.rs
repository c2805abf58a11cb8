use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// a scheduled one-shot alarm
/// holds the absolute local timestamp it should go off at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmEntry {
    pub at: NaiveDateTime,
}

/// returned by [`AlarmManager::set_alarm`] when no sound has been picked yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no alarm sound has been chosen")]
pub struct MissingSoundSelection;

/// an alarm drained by [`AlarmManager::tick`], paired with the sound
/// selection that was active when it came due
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueAlarm {
    pub at: NaiveDateTime,
    pub sound: Option<PathBuf>,
}

/// owns the alarm list and the active sound selection
///
/// all mutation goes through this struct; the UI only gets read views
#[derive(Debug, Default)]
pub struct AlarmManager {
    alarms: Vec<AlarmEntry>,
    sound: Option<PathBuf>,
}

impl AlarmManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// records `path` as the active sound, replacing any previous pick
    /// the file is not checked until an alarm actually fires
    pub fn choose_sound(&mut self, path: PathBuf) {
        self.sound = Some(path);
    }

    #[must_use]
    pub fn sound(&self) -> Option<&Path> {
        self.sound.as_deref()
    }

    /// schedules a one-shot alarm for `date` at `time`
    ///
    /// # Errors
    /// fails without touching the list while no sound is selected
    pub fn set_alarm(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<NaiveDateTime, MissingSoundSelection> {
        if self.sound.is_none() {
            return Err(MissingSoundSelection);
        }
        let at = NaiveDateTime::new(date, time);
        self.alarms.push(AlarmEntry { at });
        Ok(at)
    }

    #[must_use]
    pub fn alarms(&self) -> &[AlarmEntry] {
        &self.alarms
    }

    /// drains every entry with `now >= at`, in list order
    ///
    /// each due entry is removed before its playback outcome is known, so an
    /// alarm goes off at most once no matter how often this is called
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<DueAlarm> {
        let sound = self.sound.clone();
        let mut due = Vec::new();
        self.alarms.retain(|entry| {
            if now >= entry.at {
                due.push(DueAlarm {
                    at: entry.at,
                    sound: sound.clone(),
                });
                false
            } else {
                true
            }
        });
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    fn manager_with_sound() -> AlarmManager {
        let mut manager = AlarmManager::new();
        manager.choose_sound(PathBuf::from("x.wav"));
        manager
    }

    #[test]
    fn set_alarm_without_sound_leaves_list_untouched() {
        let mut manager = AlarmManager::new();
        let when = make_time(7, 0, 0);
        assert_eq!(
            manager.set_alarm(when.date(), when.time()),
            Err(MissingSoundSelection)
        );
        assert!(manager.alarms().is_empty());
    }

    #[test]
    fn set_alarm_appends_combined_timestamp() {
        let mut manager = manager_with_sound();
        let when = make_time(6, 30, 15);
        let scheduled = manager.set_alarm(when.date(), when.time()).unwrap();
        assert_eq!(scheduled, when);
        assert_eq!(manager.alarms(), &[AlarmEntry { at: when }]);
    }

    #[test]
    fn choosing_again_replaces_the_selection() {
        let mut manager = manager_with_sound();
        manager.choose_sound(PathBuf::from("y.mp3"));
        assert_eq!(manager.sound(), Some(Path::new("y.mp3")));
    }

    #[test]
    fn future_alarms_survive_repeated_ticks() {
        let mut manager = manager_with_sound();
        let when = make_time(9, 0, 0);
        manager.set_alarm(when.date(), when.time()).unwrap();
        for sec in 0..5 {
            assert!(manager.tick(make_time(8, 59, sec)).is_empty());
        }
        assert_eq!(manager.alarms().len(), 1);
    }

    #[test]
    fn tick_drains_due_entries_exactly_once() {
        let mut manager = manager_with_sound();
        let when = make_time(9, 0, 0);
        manager.set_alarm(when.date(), when.time()).unwrap();

        let due = manager.tick(when);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].at, when);
        assert_eq!(due[0].sound, Some(PathBuf::from("x.wav")));
        assert!(manager.alarms().is_empty());

        // long past due by now, but the entry is already gone
        assert!(manager.tick(make_time(9, 5, 0)).is_empty());
    }

    #[test]
    fn tick_fires_at_timestamp_or_later() {
        let mut manager = manager_with_sound();
        let when = make_time(9, 0, 0);
        manager.set_alarm(when.date(), when.time()).unwrap();
        // observed one second late, still fires
        assert_eq!(manager.tick(make_time(9, 0, 1)).len(), 1);
    }

    #[test]
    fn simultaneously_due_alarms_drain_in_list_order() {
        let mut manager = manager_with_sound();
        let first = make_time(9, 0, 0);
        let second = make_time(9, 0, 30);
        manager.set_alarm(first.date(), first.time()).unwrap();
        manager.set_alarm(second.date(), second.time()).unwrap();

        let future = make_time(10, 0, 0);
        let due: Vec<_> = manager.tick(future).into_iter().map(|d| d.at).collect();
        assert_eq!(due, vec![first, second]);
        assert!(manager.alarms().is_empty());
    }

    #[test]
    fn tick_keeps_only_entries_still_in_the_future() {
        let mut manager = manager_with_sound();
        let past = make_time(9, 0, 0);
        let future = make_time(11, 0, 0);
        manager.set_alarm(past.date(), past.time()).unwrap();
        manager.set_alarm(future.date(), future.time()).unwrap();

        let due = manager.tick(make_time(10, 0, 0));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].at, past);
        assert_eq!(manager.alarms(), &[AlarmEntry { at: future }]);
    }

    #[test]
    fn due_alarm_captures_the_selection_at_fire_time() {
        let mut manager = manager_with_sound();
        let when = make_time(9, 0, 0);
        manager.set_alarm(when.date(), when.time()).unwrap();
        manager.choose_sound(PathBuf::from("late.mp3"));

        let due = manager.tick(when);
        assert_eq!(due[0].sound, Some(PathBuf::from("late.mp3")));
    }
}

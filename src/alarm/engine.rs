use log::{info, warn};

use crate::alarm::model::{AlarmSetting, ReminderSetting, TimeOfDay};
use crate::time_source::ClockTime;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickOutcome {
    pub alarm_fired: bool,
    pub reminder_fired: bool,
    pub should_beep: bool,
}

pub struct AlarmReminderEngine {
    alarm: AlarmSetting,
    reminder: ReminderSetting,
    last_cue_minute: Option<u32>,
}

impl AlarmReminderEngine {
    pub fn new(alarm: AlarmSetting, reminder: ReminderSetting) -> Self {
        Self {
            alarm,
            reminder,
            last_cue_minute: None,
        }
    }

    /// Evaluates both triggers against `now`. Runs once per tick before drawing.
    pub fn tick(&mut self, now: &ClockTime) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.alarm.enabled && self.alarm.time.matches(now) {
            self.alarm.enabled = false;
            outcome.alarm_fired = true;
            warn!(
                "alarm fired at {:02}:{:02}, now disarmed",
                self.alarm.time.hour, self.alarm.time.minute
            );
        }

        if self.reminder.enabled && self.reminder.time.matches(now) {
            outcome.reminder_fired = true;
            if self.last_cue_minute != Some(now.minute) {
                self.last_cue_minute = Some(now.minute);
                outcome.should_beep = true;
                info!(
                    "reminder due at {:02}:{:02}",
                    self.reminder.time.hour, self.reminder.time.minute
                );
            }
        } else if !self.reminder.time.matches(now) {
            self.last_cue_minute = None;
        }

        outcome
    }

    pub fn alarm(&self) -> AlarmSetting {
        self.alarm
    }

    pub fn reminder(&self) -> ReminderSetting {
        self.reminder
    }

    pub fn set_reminder_enabled(&mut self, enabled: bool) {
        self.reminder.enabled = enabled;
    }

    /// Commits a new reminder time and arms it.
    pub fn commit_reminder(&mut self, time: TimeOfDay) {
        self.reminder = ReminderSetting {
            time,
            enabled: true,
        };
        info!(
            "reminder saved: {:02}:{:02} (enabled)",
            time.hour, time.minute
        );
    }
}

impl Default for AlarmReminderEngine {
    fn default() -> Self {
        Self::new(AlarmSetting::default(), ReminderSetting::default())
    }
}

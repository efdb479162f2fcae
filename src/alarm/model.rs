use crate::time_source::ClockTime;

/// Hour and minute of a daily trigger point.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    /// Callers pass `hour < 24` and `minute < 60`; the wrapping helpers keep it so.
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn matches(&self, now: &ClockTime) -> bool {
        now.hour == self.hour && now.minute == self.minute
    }

    pub fn wrapping_add_hours(self, delta: i32) -> Self {
        Self {
            hour: wrap(self.hour, delta, 24),
            ..self
        }
    }

    pub fn wrapping_add_minutes(self, delta: i32) -> Self {
        Self {
            minute: wrap(self.minute, delta, 60),
            ..self
        }
    }
}

fn wrap(value: u32, delta: i32, modulus: i32) -> u32 {
    (value as i32 + delta).rem_euclid(modulus) as u32
}

/// One-shot alarm: disables itself after firing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AlarmSetting {
    pub time: TimeOfDay,
    pub enabled: bool,
}

/// Daily reminder: reported on every tick of the matching minute.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ReminderSetting {
    pub time: TimeOfDay,
    pub enabled: bool,
}

impl Default for AlarmSetting {
    fn default() -> Self {
        Self {
            time: TimeOfDay::new(7, 30),
            enabled: true,
        }
    }
}

impl Default for ReminderSetting {
    fn default() -> Self {
        Self {
            time: TimeOfDay::new(12, 20),
            enabled: true,
        }
    }
}

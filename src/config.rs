use std::time::Duration;

use crate::alarm::model::{AlarmSetting, ReminderSetting};

pub const WINDOW_TITLE: &str = "Clock with Mouse Menu (Alarm & Reminder)";

/// Startup settings. Nothing here is persisted; every launch starts from these values.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub tick_interval: Duration,
    pub alarm: AlarmSetting,
    pub reminder: ReminderSetting,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            window_size: [700.0, 500.0],
            tick_interval: Duration::from_millis(250),
            alarm: AlarmSetting::default(),
            reminder: ReminderSetting::default(),
        }
    }
}

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, Timelike, Weekday};

/// Wall-clock reading broken into the fields the clock face needs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub weekday: Weekday,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, second: u32, weekday: Weekday) -> Result<Self> {
        if hour > 23 {
            bail!("hour out of range: {hour}");
        }
        if minute > 59 {
            bail!("minute out of range: {minute}");
        }
        if second > 59 {
            bail!("second out of range: {second}");
        }
        Ok(Self {
            hour,
            minute,
            second,
            weekday,
        })
    }

    pub fn from_datetime<T>(value: &T) -> Result<Self>
    where
        T: Timelike + Datelike,
    {
        Self::new(value.hour(), value.minute(), value.second(), value.weekday())
    }

    pub fn hour12(&self) -> (bool, u32) {
        let is_pm = self.hour >= 12;
        let hour12 = match self.hour % 12 {
            0 => 12,
            other => other,
        };
        (is_pm, hour12)
    }

    pub fn header_text(&self) -> String {
        let (is_pm, hour12) = self.hour12();
        let meridiem = if is_pm { "PM" } else { "AM" };
        format!(
            "{:02}:{:02}:{:02} {}",
            hour12, self.minute, self.second, meridiem
        )
    }

    pub fn weekday_name(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

pub trait TimeSource {
    fn now(&self) -> Result<ClockTime>;
}

/// Host local time via chrono.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTimeSource;

impl TimeSource for LocalTimeSource {
    fn now(&self) -> Result<ClockTime> {
        ClockTime::from_datetime(&Local::now()).context("host clock produced an invalid time")
    }
}

#[cfg(test)]
pub(crate) struct FixedTimeSource(pub ClockTime);

#[cfg(test)]
impl TimeSource for FixedTimeSource {
    fn now(&self) -> Result<ClockTime> {
        Ok(self.0)
    }
}

use eframe::egui::Color32;
use log::debug;

use crate::alarm::engine::{AlarmReminderEngine, TickOutcome};
use crate::beep::Beeper;
use crate::geometry::{
    DIAL_CENTER, DIAL_RADIUS, HOUR_HAND_LENGTH, HandAngles, MINUTE_HAND_LENGTH, Ndc,
    SECOND_HAND_LENGTH, dial_labels, dial_outline, hand_tip,
};
use crate::time_source::ClockTime;
use crate::ui::button::{Button, NdcRect, PANEL_X1, PANEL_X2, PANEL_Y1, PANEL_Y2};
use crate::ui::state::{UiScreen, UiStateMachine};

const DIAL_SEGMENTS: usize = 120;

const TEXT: Color32 = Color32::WHITE;
const DIAL: Color32 = Color32::from_rgb(153, 153, 153);
const HOUR_HAND: Color32 = Color32::from_rgb(255, 0, 0);
const MINUTE_HAND: Color32 = Color32::from_rgb(0, 255, 0);
const SECOND_HAND: Color32 = Color32::from_rgb(0, 0, 255);
const REMINDER_BANNER: Color32 = Color32::from_rgb(255, 255, 0);
const ALARM_BANNER: Color32 = Color32::from_rgb(255, 0, 0);
const PANEL_FILL: Color32 = Color32::from_rgb(26, 26, 26);
const PANEL_BORDER: Color32 = Color32::from_rgb(89, 89, 89);
const BUTTON_FILL: Color32 = Color32::from_rgb(46, 46, 46);
const BUTTON_BORDER: Color32 = Color32::from_rgb(204, 204, 204);
const STATUS_ON: Color32 = Color32::from_rgb(104, 218, 131);
const STATUS_OFF: Color32 = Color32::from_rgb(255, 187, 99);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FontSize {
    Small,
    Large,
}

impl FontSize {
    pub fn points(self) -> f32 {
        match self {
            FontSize::Small => 12.0,
            FontSize::Large => 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Immediate-mode drawing target addressed in normalized device coordinates.
pub trait Surface {
    fn draw_line(&mut self, from: Ndc, to: Ndc, width: f32, color: Color32);
    fn fill_rect(&mut self, rect: NdcRect, color: Color32);
    fn stroke_rect(&mut self, rect: NdcRect, color: Color32);
    fn draw_text(&mut self, at: Ndc, size: FontSize, align: TextAlign, text: &str, color: Color32);
}

pub struct RenderCoordinator {
    beeper: Box<dyn Beeper>,
    reminder_active: bool,
    /// (hour, minute) the alarm fired in; the banner stays up for that minute.
    alarm_banner: Option<(u32, u32)>,
}

impl RenderCoordinator {
    pub fn new(beeper: Box<dyn Beeper>) -> Self {
        Self {
            beeper,
            reminder_active: false,
            alarm_banner: None,
        }
    }

    /// Takes the result of one engine tick: latches banners and plays the cue.
    pub fn present_tick(&mut self, now: &ClockTime, outcome: &TickOutcome) {
        self.reminder_active = outcome.reminder_fired;
        if outcome.alarm_fired {
            self.alarm_banner = Some((now.hour, now.minute));
        } else if self.alarm_banner != Some((now.hour, now.minute)) {
            self.alarm_banner = None;
        }

        if outcome.should_beep
            && let Err(err) = self.beeper.beep()
        {
            debug!("audio cue unavailable: {err:#}");
        }
    }

    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        now: &ClockTime,
        ui: &mut UiStateMachine,
        engine: &AlarmReminderEngine,
    ) {
        draw_header(surface, now);
        if self.reminder_active {
            surface.draw_text(
                Ndc::new(-0.15, -0.80),
                FontSize::Large,
                TextAlign::Left,
                "Reminder!",
                REMINDER_BANNER,
            );
        }
        if self.alarm_banner.is_some() {
            surface.draw_text(
                Ndc::new(-0.10, -0.86),
                FontSize::Large,
                TextAlign::Left,
                "ALARM!!!",
                ALARM_BANNER,
            );
        }
        draw_dial(surface, now);

        ui.recompute_visibility();
        draw_panel(surface, ui, engine);
    }
}

fn draw_header(surface: &mut dyn Surface, now: &ClockTime) {
    surface.draw_text(
        Ndc::new(-0.35, 0.82),
        FontSize::Large,
        TextAlign::Left,
        &now.header_text(),
        TEXT,
    );
    surface.draw_text(
        Ndc::new(-0.20, 0.72),
        FontSize::Small,
        TextAlign::Left,
        now.weekday_name(),
        TEXT,
    );
}

fn draw_dial(surface: &mut dyn Surface, now: &ClockTime) {
    let outline = dial_outline(DIAL_CENTER, DIAL_RADIUS, DIAL_SEGMENTS);
    for pair in outline.windows(2) {
        surface.draw_line(pair[0], pair[1], 1.0, DIAL);
    }

    for (number, at) in dial_labels(DIAL_CENTER) {
        surface.draw_text(
            at,
            FontSize::Large,
            TextAlign::Center,
            &number.to_string(),
            TEXT,
        );
    }

    let angles = HandAngles::from_time(now);
    let hands = [
        (angles.hour, HOUR_HAND_LENGTH, 5.0, HOUR_HAND),
        (angles.minute, MINUTE_HAND_LENGTH, 3.0, MINUTE_HAND),
        (angles.second, SECOND_HAND_LENGTH, 1.0, SECOND_HAND),
    ];
    for (angle, length, width, color) in hands {
        surface.draw_line(DIAL_CENTER, hand_tip(DIAL_CENTER, angle, length), width, color);
    }
}

fn draw_panel(surface: &mut dyn Surface, ui: &UiStateMachine, engine: &AlarmReminderEngine) {
    let panel = NdcRect::new(PANEL_X1, PANEL_Y1, PANEL_X2, PANEL_Y2);
    surface.fill_rect(panel, PANEL_FILL);
    surface.stroke_rect(panel, PANEL_BORDER);
    surface.draw_text(
        Ndc::new(PANEL_X1 + 0.03, PANEL_Y1 - 0.05),
        FontSize::Large,
        TextAlign::Left,
        "Menu Panel",
        TEXT,
    );

    for button in ui.buttons().iter().filter(|button| button.visible) {
        draw_button(surface, button);
    }

    let left = PANEL_X1 + 0.05;
    if ui.screen() == UiScreen::Main {
        let alarm = engine.alarm();
        let (status, status_color) = status_badge(alarm.enabled);
        surface.draw_text(
            Ndc::new(left, 0.30),
            FontSize::Small,
            TextAlign::Left,
            &format!("Alarm {:02}:{:02} {status}", alarm.time.hour, alarm.time.minute),
            status_color,
        );
    }

    if ui.screen() == UiScreen::SetReminder {
        let selection = ui.selection();
        let reminder = engine.reminder();
        let (status, status_color) = status_badge(reminder.enabled);
        surface.draw_text(
            Ndc::new(left, 0.30),
            FontSize::Small,
            TextAlign::Left,
            &format!(
                "Reminder {:02}:{:02} {status}",
                reminder.time.hour, reminder.time.minute
            ),
            status_color,
        );
        surface.draw_text(
            Ndc::new(left, 0.20),
            FontSize::Large,
            TextAlign::Left,
            &format!("Hour: {:02}", selection.hour),
            TEXT,
        );
        surface.draw_text(
            Ndc::new(left, 0.12),
            FontSize::Large,
            TextAlign::Left,
            &format!("Min : {:02}", selection.minute),
            TEXT,
        );
        surface.draw_text(
            Ndc::new(left, -0.50),
            FontSize::Small,
            TextAlign::Left,
            "Tip: adjust with +/-, then press Save",
            TEXT,
        );
    }
}

fn status_badge(enabled: bool) -> (&'static str, Color32) {
    if enabled {
        ("ON", STATUS_ON)
    } else {
        ("OFF", STATUS_OFF)
    }
}

fn draw_button(surface: &mut dyn Surface, button: &Button) {
    surface.fill_rect(button.rect, BUTTON_FILL);
    surface.stroke_rect(button.rect, BUTTON_BORDER);
    surface.draw_text(
        button.rect.center(),
        FontSize::Large,
        TextAlign::Center,
        button.label,
        TEXT,
    );
}

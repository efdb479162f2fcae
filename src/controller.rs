use log::debug;

use crate::alarm::engine::{AlarmReminderEngine, TickOutcome};
use crate::config::ClockConfig;
use crate::geometry::Viewport;
use crate::time_source::ClockTime;
use crate::ui::button::ButtonId;
use crate::ui::state::UiStateMachine;

/// Owns all mutable clock state. The host calls `on_tick` on its timer and
/// `on_click` on mouse-down; both run on the same thread, never interleaved.
pub struct ClockController {
    pub ui: UiStateMachine,
    pub engine: AlarmReminderEngine,
    viewport: Viewport,
}

impl ClockController {
    pub fn new(config: &ClockConfig) -> Self {
        let engine = AlarmReminderEngine::new(config.alarm, config.reminder);
        let ui = UiStateMachine::new(engine.reminder().time);
        Self {
            ui,
            engine,
            viewport: Viewport::new(config.window_size[0], config.window_size[1]),
        }
    }

    pub fn on_tick(&mut self, now: &ClockTime) -> TickOutcome {
        self.engine.tick(now)
    }

    /// `px`/`py` are pixels from the top-left of the drawing area.
    pub fn on_click(&mut self, px: f32, py: f32) -> Option<ButtonId> {
        let point = self.viewport.to_ndc(px, py);
        let hit = self.ui.handle_click(point, &mut self.engine);
        if let Some(id) = hit {
            debug!("clicked {:?} at ({px:.0}, {py:.0})", id);
        }
        hit
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

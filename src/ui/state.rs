use log::debug;

use crate::alarm::engine::AlarmReminderEngine;
use crate::alarm::model::TimeOfDay;
use crate::geometry::Ndc;
use crate::ui::button::{Button, ButtonId, panel_layout};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum UiScreen {
    #[default]
    Main,
    MenuOpen,
    SetReminder,
}

/// Navigation buttons are tested first, editing controls only on the SetReminder screen.
const NAVIGATION_ORDER: [ButtonId; 3] = [ButtonId::Menu, ButtonId::Back, ButtonId::SetReminder];
const EDITING_ORDER: [ButtonId; 7] = [
    ButtonId::HourUp,
    ButtonId::HourDown,
    ButtonId::MinuteUp,
    ButtonId::MinuteDown,
    ButtonId::Enable,
    ButtonId::Disable,
    ButtonId::Save,
];

pub struct UiStateMachine {
    screen: UiScreen,
    selection: TimeOfDay,
    buttons: Vec<Button>,
}

impl UiStateMachine {
    pub fn new(selection: TimeOfDay) -> Self {
        let mut machine = Self {
            screen: UiScreen::Main,
            selection,
            buttons: panel_layout(),
        };
        machine.recompute_visibility();
        machine
    }

    pub fn screen(&self) -> UiScreen {
        self.screen
    }

    /// Pending reminder time being edited; committed only by Save.
    pub fn selection(&self) -> TimeOfDay {
        self.selection
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.iter().find(|button| button.id == id)
    }

    pub fn recompute_visibility(&mut self) {
        let screen = self.screen;
        for button in &mut self.buttons {
            button.visible = owning_screen_matches(button.id, screen);
        }
    }

    /// Routes a click in NDC to at most one action and returns the button that fired.
    pub fn handle_click(
        &mut self,
        point: Ndc,
        engine: &mut AlarmReminderEngine,
    ) -> Option<ButtonId> {
        self.recompute_visibility();

        let hit = NAVIGATION_ORDER
            .into_iter()
            .find(|id| self.is_hit(*id, point))
            .or_else(|| {
                (self.screen == UiScreen::SetReminder)
                    .then(|| EDITING_ORDER.into_iter().find(|id| self.is_hit(*id, point)))
                    .flatten()
            })?;

        self.apply(hit, engine);
        self.recompute_visibility();
        Some(hit)
    }

    fn is_hit(&self, id: ButtonId, point: Ndc) -> bool {
        self.button(id).is_some_and(|button| button.contains(point))
    }

    fn apply(&mut self, id: ButtonId, engine: &mut AlarmReminderEngine) {
        match id {
            ButtonId::Menu => self.go_to(UiScreen::MenuOpen),
            ButtonId::Back => self.go_to(UiScreen::Main),
            ButtonId::SetReminder => {
                self.selection = engine.reminder().time;
                self.go_to(UiScreen::SetReminder);
            }
            ButtonId::HourUp => self.selection = self.selection.wrapping_add_hours(1),
            ButtonId::HourDown => self.selection = self.selection.wrapping_add_hours(-1),
            ButtonId::MinuteUp => self.selection = self.selection.wrapping_add_minutes(1),
            ButtonId::MinuteDown => self.selection = self.selection.wrapping_add_minutes(-1),
            ButtonId::Enable => engine.set_reminder_enabled(true),
            ButtonId::Disable => engine.set_reminder_enabled(false),
            ButtonId::Save => {
                engine.commit_reminder(self.selection);
                self.go_to(UiScreen::Main);
            }
        }
    }

    fn go_to(&mut self, screen: UiScreen) {
        debug!("screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }
}

fn owning_screen_matches(id: ButtonId, screen: UiScreen) -> bool {
    match id {
        ButtonId::Menu => screen == UiScreen::Main,
        ButtonId::SetReminder => screen == UiScreen::MenuOpen,
        ButtonId::Back => matches!(screen, UiScreen::MenuOpen | UiScreen::SetReminder),
        ButtonId::HourUp
        | ButtonId::HourDown
        | ButtonId::MinuteUp
        | ButtonId::MinuteDown
        | ButtonId::Enable
        | ButtonId::Disable
        | ButtonId::Save => screen == UiScreen::SetReminder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::model::{AlarmSetting, ReminderSetting};

    fn setup() -> (UiStateMachine, AlarmReminderEngine) {
        let engine = AlarmReminderEngine::default();
        let machine = UiStateMachine::new(engine.reminder().time);
        (machine, engine)
    }

    fn center_of(machine: &UiStateMachine, id: ButtonId) -> Ndc {
        machine.button(id).expect("button exists").rect.center()
    }

    fn click(
        machine: &mut UiStateMachine,
        engine: &mut AlarmReminderEngine,
        id: ButtonId,
    ) -> Option<ButtonId> {
        let point = center_of(machine, id);
        machine.handle_click(point, engine)
    }

    fn open_set_reminder(machine: &mut UiStateMachine, engine: &mut AlarmReminderEngine) {
        assert_eq!(click(machine, engine, ButtonId::Menu), Some(ButtonId::Menu));
        assert_eq!(
            click(machine, engine, ButtonId::SetReminder),
            Some(ButtonId::SetReminder)
        );
        assert_eq!(machine.screen(), UiScreen::SetReminder);
    }

    #[test]
    fn starts_on_main_with_only_menu_visible() {
        let (machine, _) = setup();
        assert_eq!(machine.screen(), UiScreen::Main);
        let visible: Vec<_> = machine
            .buttons()
            .iter()
            .filter(|button| button.visible)
            .map(|button| button.id)
            .collect();
        assert_eq!(visible, vec![ButtonId::Menu]);
    }

    #[test]
    fn menu_then_back_returns_to_main() {
        let (mut machine, mut engine) = setup();
        click(&mut machine, &mut engine, ButtonId::Menu);
        assert_eq!(machine.screen(), UiScreen::MenuOpen);
        click(&mut machine, &mut engine, ButtonId::Back);
        assert_eq!(machine.screen(), UiScreen::Main);
    }

    #[test]
    fn back_is_visible_on_both_sub_screens() {
        let (mut machine, mut engine) = setup();
        click(&mut machine, &mut engine, ButtonId::Menu);
        assert!(machine.button(ButtonId::Back).expect("back").visible);
        click(&mut machine, &mut engine, ButtonId::SetReminder);
        assert!(machine.button(ButtonId::Back).expect("back").visible);
        assert!(!machine.button(ButtonId::Menu).expect("menu").visible);
    }

    #[test]
    fn hidden_controls_do_not_respond() {
        let (mut machine, mut engine) = setup();
        let save = center_of(&machine, ButtonId::Save);
        assert_eq!(machine.handle_click(save, &mut engine), None);
        let back = center_of(&machine, ButtonId::Back);
        assert_eq!(machine.handle_click(back, &mut engine), None);
        assert_eq!(machine.screen(), UiScreen::Main);
    }

    #[test]
    fn clicks_outside_buttons_are_ignored() {
        let (mut machine, mut engine) = setup();
        assert_eq!(machine.handle_click(Ndc::new(-0.2, -0.05), &mut engine), None);
        assert_eq!(machine.handle_click(Ndc::new(5.0, 5.0), &mut engine), None);
        assert_eq!(machine.screen(), UiScreen::Main);
    }

    #[test]
    fn hour_up_is_cyclic_of_order_24() {
        let (mut machine, mut engine) = setup();
        open_set_reminder(&mut machine, &mut engine);
        let original = machine.selection();
        for _ in 0..24 {
            click(&mut machine, &mut engine, ButtonId::HourUp);
        }
        assert_eq!(machine.selection(), original);
    }

    #[test]
    fn minute_up_is_cyclic_of_order_60() {
        let (mut machine, mut engine) = setup();
        open_set_reminder(&mut machine, &mut engine);
        let original = machine.selection();
        for _ in 0..60 {
            click(&mut machine, &mut engine, ButtonId::MinuteUp);
        }
        assert_eq!(machine.selection(), original);
    }

    #[test]
    fn decrement_wraps_below_zero() {
        let mut engine = AlarmReminderEngine::new(
            AlarmSetting::default(),
            ReminderSetting {
                time: TimeOfDay::new(0, 0),
                enabled: false,
            },
        );
        let mut machine = UiStateMachine::new(engine.reminder().time);
        open_set_reminder(&mut machine, &mut engine);
        click(&mut machine, &mut engine, ButtonId::HourDown);
        click(&mut machine, &mut engine, ButtonId::MinuteDown);
        assert_eq!(machine.selection(), TimeOfDay::new(23, 59));
    }

    #[test]
    fn entering_set_reminder_discards_abandoned_edits() {
        let (mut machine, mut engine) = setup();
        let committed = engine.reminder().time;
        open_set_reminder(&mut machine, &mut engine);
        click(&mut machine, &mut engine, ButtonId::HourUp);
        click(&mut machine, &mut engine, ButtonId::MinuteUp);
        assert_ne!(machine.selection(), committed);

        click(&mut machine, &mut engine, ButtonId::Back);
        assert_eq!(machine.screen(), UiScreen::Main);
        open_set_reminder(&mut machine, &mut engine);
        assert_eq!(machine.selection(), committed);
    }

    #[test]
    fn save_commits_selection_and_returns_to_main() {
        let (mut machine, mut engine) = setup();
        engine.set_reminder_enabled(false);
        open_set_reminder(&mut machine, &mut engine);
        click(&mut machine, &mut engine, ButtonId::HourUp);
        click(&mut machine, &mut engine, ButtonId::MinuteDown);
        let pending = machine.selection();
        assert_eq!(pending, TimeOfDay::new(13, 19));

        assert_eq!(
            click(&mut machine, &mut engine, ButtonId::Save),
            Some(ButtonId::Save)
        );
        let reminder = engine.reminder();
        assert!(reminder.enabled);
        assert_eq!(reminder.time, pending);
        assert_eq!(machine.screen(), UiScreen::Main);
    }

    #[test]
    fn enable_and_disable_apply_without_save() {
        let (mut machine, mut engine) = setup();
        open_set_reminder(&mut machine, &mut engine);
        click(&mut machine, &mut engine, ButtonId::Disable);
        assert!(!engine.reminder().enabled);
        assert_eq!(machine.screen(), UiScreen::SetReminder);
        click(&mut machine, &mut engine, ButtonId::Enable);
        assert!(engine.reminder().enabled);
        assert_eq!(engine.reminder().time, TimeOfDay::new(12, 20));
    }

    #[test]
    fn editing_controls_inert_outside_set_reminder() {
        let (mut machine, mut engine) = setup();
        click(&mut machine, &mut engine, ButtonId::Menu);
        let hour_up = center_of(&machine, ButtonId::HourUp);
        assert_eq!(machine.handle_click(hour_up, &mut engine), None);
        assert_eq!(machine.selection(), TimeOfDay::new(12, 20));
    }
}

use crate::geometry::Ndc;

pub const PANEL_X1: f32 = 0.55;
pub const PANEL_X2: f32 = 0.98;
pub const PANEL_Y1: f32 = 0.90;
pub const PANEL_Y2: f32 = -0.90;

const PANEL_INSET: f32 = 0.04;
const BUTTON_HEIGHT: f32 = 0.09;
const ROW_GAP: f32 = 0.02;
const GUTTER: f32 = 0.01;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ButtonId {
    Menu,
    SetReminder,
    Back,
    HourUp,
    HourDown,
    MinuteUp,
    MinuteDown,
    Enable,
    Disable,
    Save,
}

impl ButtonId {
    pub fn label(self) -> &'static str {
        match self {
            ButtonId::Menu => "Menu",
            ButtonId::SetReminder => "Set Reminder",
            ButtonId::Back => "Back",
            ButtonId::HourUp => "+Hour",
            ButtonId::HourDown => "-Hour",
            ButtonId::MinuteUp => "+Min",
            ButtonId::MinuteDown => "-Min",
            ButtonId::Enable => "Enable",
            ButtonId::Disable => "Disable",
            ButtonId::Save => "Save",
        }
    }
}

/// Axis-aligned rectangle with `x1 <= x2` and `y1 >= y2` (y1 is the top edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl NdcRect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.max(y2),
            x2: x1.max(x2),
            y2: y1.min(y2),
        }
    }

    pub fn contains(&self, point: Ndc) -> bool {
        point.x >= self.x1 && point.x <= self.x2 && point.y <= self.y1 && point.y >= self.y2
    }

    pub fn center(&self) -> Ndc {
        Ndc::new((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }

    pub fn top_left(&self) -> Ndc {
        Ndc::new(self.x1, self.y1)
    }

    pub fn bottom_right(&self) -> Ndc {
        Ndc::new(self.x2, self.y2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub id: ButtonId,
    pub rect: NdcRect,
    pub label: &'static str,
    pub visible: bool,
}

impl Button {
    pub fn new(id: ButtonId, rect: NdcRect) -> Self {
        Self {
            id,
            rect,
            label: id.label(),
            visible: false,
        }
    }

    /// Hidden buttons never match, whatever their geometry.
    pub fn contains(&self, point: Ndc) -> bool {
        self.visible && self.rect.contains(point)
    }
}

/// Builds every button of the right-hand panel, all initially hidden.
pub fn panel_layout() -> Vec<Button> {
    let left = PANEL_X1 + PANEL_INSET;
    let right = PANEL_X2 - PANEL_INSET;
    let width = right - left;
    let half_left_end = left + width * 0.45 - GUTTER;
    let half_right_start = left + width * 0.55 + GUTTER;

    let full_row = |top: f32| NdcRect::new(left, top, right, top - BUTTON_HEIGHT);
    let left_half = |top: f32| NdcRect::new(left, top, half_left_end, top - BUTTON_HEIGHT);
    let right_half = |top: f32| NdcRect::new(half_right_start, top, right, top - BUTTON_HEIGHT);

    let mut buttons = vec![
        Button::new(ButtonId::Menu, full_row(0.70)),
        Button::new(ButtonId::SetReminder, full_row(0.50)),
        Button::new(ButtonId::Back, full_row(-0.75)),
    ];

    let mut row_top = 0.05;
    buttons.push(Button::new(ButtonId::HourUp, left_half(row_top)));
    buttons.push(Button::new(ButtonId::HourDown, right_half(row_top)));

    row_top -= BUTTON_HEIGHT + ROW_GAP;
    buttons.push(Button::new(ButtonId::MinuteUp, left_half(row_top)));
    buttons.push(Button::new(ButtonId::MinuteDown, right_half(row_top)));

    row_top -= BUTTON_HEIGHT + ROW_GAP;
    buttons.push(Button::new(ButtonId::Enable, left_half(row_top)));
    buttons.push(Button::new(ButtonId::Disable, right_half(row_top)));

    row_top -= BUTTON_HEIGHT + ROW_GAP;
    buttons.push(Button::new(ButtonId::Save, full_row(row_top)));

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_uses_inclusive_bounds() {
        let mut button = Button::new(ButtonId::Menu, NdcRect::new(0.0, 1.0, 1.0, 0.0));
        button.visible = true;
        assert!(button.contains(Ndc::new(0.0, 0.0)));
        assert!(button.contains(Ndc::new(1.0, 1.0)));
        assert!(button.contains(Ndc::new(0.5, 0.5)));
        assert!(!button.contains(Ndc::new(1.01, 0.5)));
        assert!(!button.contains(Ndc::new(0.5, -0.01)));
    }

    #[test]
    fn hidden_button_never_matches() {
        let rect = NdcRect::new(-0.5, 0.5, 0.5, -0.5);
        let mut shown = Button::new(ButtonId::Save, rect);
        shown.visible = true;
        let hidden = Button::new(ButtonId::Save, rect);

        let center = rect.center();
        assert!(shown.contains(center));
        assert!(!hidden.contains(center));
    }

    #[test]
    fn rect_normalises_swapped_corners() {
        let rect = NdcRect::new(0.8, -0.2, 0.2, 0.4);
        assert_eq!(rect, NdcRect::new(0.2, 0.4, 0.8, -0.2));
        assert!(rect.x1 <= rect.x2);
        assert!(rect.y1 >= rect.y2);
    }

    #[test]
    fn layout_fits_inside_panel_without_overlaps() {
        let buttons = panel_layout();
        assert_eq!(buttons.len(), 10);
        for button in &buttons {
            assert!(!button.visible);
            assert!(button.rect.x1 >= PANEL_X1 && button.rect.x2 <= PANEL_X2);
            assert!(button.rect.y1 <= PANEL_Y1 && button.rect.y2 >= PANEL_Y2);
        }
        for (idx, a) in buttons.iter().enumerate() {
            for b in &buttons[idx + 1..] {
                assert!(!a.rect.contains(b.rect.center()), "{:?} / {:?}", a.id, b.id);
            }
        }
    }

    #[test]
    fn labels_match_button_ids() {
        let buttons = panel_layout();
        let save = buttons
            .iter()
            .find(|button| button.id == ButtonId::Save)
            .expect("save button");
        assert_eq!(save.label, "Save");
    }
}

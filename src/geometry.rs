//! Pure mapping from time of day to dial geometry, in normalized device
//! coordinates (origin at the window center, +y up, both axes in [-1, 1]).

use std::f32::consts::PI;

use crate::time_source::ClockTime;

pub const DIAL_CENTER: Ndc = Ndc { x: -0.20, y: -0.05 };
pub const DIAL_RADIUS: f32 = 0.5;
pub const LABEL_RADIUS: f32 = 0.43;

pub const HOUR_HAND_LENGTH: f32 = 0.25;
pub const MINUTE_HAND_LENGTH: f32 = 0.35;
pub const SECOND_HAND_LENGTH: f32 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ndc {
    pub x: f32,
    pub y: f32,
}

impl Ndc {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Hand angles in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_time(now: &ClockTime) -> Self {
        let hour = (now.hour % 12) as f32 + now.minute as f32 / 60.0;
        let minute = now.minute as f32 + now.second as f32 / 60.0;
        Self {
            hour: hour * 30.0,
            minute: minute * 6.0,
            second: now.second as f32 * 6.0,
        }
    }
}

pub fn hand_tip(center: Ndc, angle_deg: f32, length: f32) -> Ndc {
    let rad = (90.0 - angle_deg) * PI / 180.0;
    center.offset(length * rad.cos(), length * rad.sin())
}

/// Dial numbers 1..=12 with their label anchor, 12 at the top, clockwise.
pub fn dial_labels(center: Ndc) -> [(u32, Ndc); 12] {
    std::array::from_fn(|idx| {
        let number = idx as u32 + 1;
        (number, hand_tip(center, number as f32 * 30.0, LABEL_RADIUS))
    })
}

/// Closed polyline approximating the dial circle; the last point repeats the first.
pub fn dial_outline(center: Ndc, radius: f32, segments: usize) -> Vec<Ndc> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|step| {
            let theta = step as f32 / segments as f32 * 2.0 * PI;
            center.offset(theta.cos() * radius, theta.sin() * radius)
        })
        .collect()
}

/// Window size in pixels, used to map pointer positions into NDC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel origin is top-left with +y down; the result is flipped to +y up.
    pub fn to_ndc(&self, px: f32, py: f32) -> Ndc {
        if self.width <= 0.0 || self.height <= 0.0 {
            // Outside every button, so a degenerate window swallows clicks.
            return Ndc::new(f32::INFINITY, f32::INFINITY);
        }
        Ndc {
            x: (px / self.width) * 2.0 - 1.0,
            y: ((self.height - py) / self.height) * 2.0 - 1.0,
        }
    }
}

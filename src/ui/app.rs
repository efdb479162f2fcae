use std::time::{Duration, Instant};

use anyhow::Result;
use eframe::egui::{
    self, Align2, Color32, FontId, Painter, PointerButton, Pos2, Rect, Stroke, StrokeKind,
};
use log::{debug, warn};

use crate::beep::Beeper;
use crate::config::ClockConfig;
use crate::controller::ClockController;
use crate::error::HostError;
use crate::geometry::{Ndc, Viewport};
use crate::time_source::{ClockTime, TimeSource};
use crate::ui::button::NdcRect;
use crate::ui::render::{FontSize, RenderCoordinator, Surface, TextAlign};

pub fn run_gui(
    config: ClockConfig,
    time_source: Box<dyn TimeSource>,
    beeper: Box<dyn Beeper>,
) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    let app = DialClockApp::new(&config, time_source, beeper)?;

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            configure_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| HostError::Unavailable(err.to_string()))?;

    Ok(())
}

fn configure_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(Color32::WHITE);
    visuals.panel_fill = Color32::BLACK;
    ctx.set_visuals(visuals);
}

struct DialClockApp {
    time_source: Box<dyn TimeSource>,
    controller: ClockController,
    renderer: RenderCoordinator,
    latest_now: ClockTime,
    tick_interval: Duration,
    next_tick: Instant,
}

impl DialClockApp {
    fn new(
        config: &ClockConfig,
        time_source: Box<dyn TimeSource>,
        beeper: Box<dyn Beeper>,
    ) -> Result<Self> {
        let latest_now = time_source.now()?;
        Ok(Self {
            time_source,
            controller: ClockController::new(config),
            renderer: RenderCoordinator::new(beeper),
            latest_now,
            tick_interval: config.tick_interval.max(Duration::from_millis(1)),
            next_tick: Instant::now(),
        })
    }

    /// Runs the engine at most once per tick interval; other repaints reuse the last result.
    fn run_due_tick(&mut self) {
        let now = Instant::now();
        if now < self.next_tick {
            return;
        }

        match self.time_source.now() {
            Ok(sample) => {
                self.latest_now = sample;
                let outcome = self.controller.on_tick(&sample);
                self.renderer.present_tick(&sample, &outcome);
            }
            Err(err) => warn!("skipping tick: {err:#}"),
        }

        while self.next_tick <= now {
            self.next_tick += self.tick_interval;
        }
    }

    fn sync_viewport(&mut self, rect: Rect) {
        let viewport = Viewport::new(rect.width(), rect.height());
        if self.controller.viewport() != viewport {
            debug!("drawing area resized to {:.0}x{:.0}", rect.width(), rect.height());
            self.controller.on_resize(viewport.width, viewport.height);
        }
    }

    fn forward_presses(&mut self, presses: &[Pos2], rect: Rect) {
        for pos in presses {
            self.controller.on_click(pos.x - rect.min.x, pos.y - rect.min.y);
        }
    }
}

impl eframe::App for DialClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_due_tick();

        let fill = ctx.style().visuals.panel_fill;
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(fill))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.sync_viewport(rect);

                let presses: Vec<Pos2> = ui.input(|input| {
                    input
                        .events
                        .iter()
                        .filter_map(|event| match event {
                            egui::Event::PointerButton {
                                pos,
                                button: PointerButton::Primary,
                                pressed: true,
                                ..
                            } => Some(*pos),
                            _ => None,
                        })
                        .collect()
                });
                self.forward_presses(&presses, rect);

                let mut surface = PainterSurface {
                    painter: ui.painter(),
                    rect,
                };
                self.renderer.draw(
                    &mut surface,
                    &self.latest_now,
                    &mut self.controller.ui,
                    &self.controller.engine,
                );
            });

        let wait = self.next_tick.saturating_duration_since(Instant::now());
        ctx.request_repaint_after(wait);
    }
}

struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl PainterSurface<'_> {
    fn screen_rect(&self, rect: NdcRect) -> Rect {
        Rect::from_two_pos(
            ndc_to_screen(self.rect, rect.top_left()),
            ndc_to_screen(self.rect, rect.bottom_right()),
        )
    }
}

impl Surface for PainterSurface<'_> {
    fn draw_line(&mut self, from: Ndc, to: Ndc, width: f32, color: Color32) {
        self.painter.line_segment(
            [ndc_to_screen(self.rect, from), ndc_to_screen(self.rect, to)],
            Stroke::new(width, color),
        );
    }

    fn fill_rect(&mut self, rect: NdcRect, color: Color32) {
        self.painter.rect_filled(self.screen_rect(rect), 0.0, color);
    }

    fn stroke_rect(&mut self, rect: NdcRect, color: Color32) {
        self.painter.rect_stroke(
            self.screen_rect(rect),
            0.0,
            Stroke::new(1.0, color),
            StrokeKind::Inside,
        );
    }

    fn draw_text(&mut self, at: Ndc, size: FontSize, align: TextAlign, text: &str, color: Color32) {
        let anchor = match align {
            TextAlign::Left => Align2::LEFT_BOTTOM,
            TextAlign::Center => Align2::CENTER_CENTER,
        };
        self.painter.text(
            ndc_to_screen(self.rect, at),
            anchor,
            text,
            FontId::proportional(size.points()),
            color,
        );
    }
}

/// Maps NDC onto `area`, flipping y so +1 is the top edge.
fn ndc_to_screen(area: Rect, point: Ndc) -> Pos2 {
    Pos2::new(
        area.min.x + (point.x + 1.0) * 0.5 * area.width(),
        area.min.y + (1.0 - point.y) * 0.5 * area.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_map_to_area_corners() {
        let area = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(700.0, 500.0));
        assert_eq!(ndc_to_screen(area, Ndc::new(-1.0, 1.0)), Pos2::new(10.0, 20.0));
        assert_eq!(ndc_to_screen(area, Ndc::new(1.0, -1.0)), Pos2::new(710.0, 520.0));
        assert_eq!(ndc_to_screen(area, Ndc::new(0.0, 0.0)), Pos2::new(360.0, 270.0));
    }

    #[test]
    fn screen_mapping_inverts_click_mapping() {
        let area = Rect::from_min_size(Pos2::ZERO, egui::vec2(700.0, 500.0));
        let viewport = Viewport::new(area.width(), area.height());
        let point = Ndc::new(0.765, 0.655);
        let screen = ndc_to_screen(area, point);
        let back = viewport.to_ndc(screen.x, screen.y);
        assert!((back.x - point.x).abs() < 1e-4);
        assert!((back.y - point.y).abs() < 1e-4);
    }
}

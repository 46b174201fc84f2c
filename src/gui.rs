// src/gui.rs
use std::time::{Duration, Instant};
use eframe::egui;
use egui::{Color32, RichText, Rounding, Stroke, Vec2};
use rand::{rngs::StdRng, SeedableRng};
use crate::config::ConsoleConfig;
use crate::drivers::{ConsoleError, GraphRenderer, Surface, TickOutcome};
use crate::panel::{build_panels, SensorPanel};
use crate::types::*;

const LOG_LINES: usize = 8;

pub struct ConsoleApp {
    // sensor panels, each with its own feed and timer
    panels: Vec<SensorPanel>,
    renderer: GraphRenderer,
    canvas_size: Vec2,
    refresh_period: Duration,
    started_at: Instant,

    // static controls
    start_button: ToggleButton,
    timing: [TimingEntry; 2],

    // on-screen log
    log_messages: Vec<String>,
}

impl ConsoleApp {
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        let mut rng = match config.feed.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let now = Instant::now();
        let panels = build_panels(config, &mut rng, now)?;
        let [w, h] = config.canvas_size;
        Ok(Self {
            panels,
            renderer: GraphRenderer::new(config.line),
            canvas_size: Vec2::new(w, h),
            refresh_period: config.refresh_period(),
            started_at: now,
            start_button: ToggleButton::default(),
            timing: TimingEntry::defaults(),
            log_messages: vec![format!("{} ready.", config.window_title)],
        })
    }

    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > LOG_LINES {
            self.log_messages.remove(0);
        }
    }

    fn next_repaint(&self, now: Instant) -> Duration {
        // the clock label wants at least one repaint per second
        self.panels
            .iter()
            .filter_map(|p| p.task().time_until_next(now))
            .min()
            .unwrap_or(Duration::from_secs(1))
            .min(Duration::from_secs(1))
    }
}

fn accent_color(accent: Accent) -> (Color32, Color32) {
    match accent {
        Accent::Green => (Color32::from_rgb(0, 128, 0), Color32::WHITE),
        Accent::Red => (Color32::from_rgb(200, 0, 0), Color32::WHITE),
        Accent::Neutral => (Color32::from_gray(210), Color32::BLACK),
    }
}

fn accent_button(ui: &mut egui::Ui, label: &str, accent: Accent) -> egui::Response {
    let (fill, text) = accent_color(accent);
    ui.add(
        egui::Button::new(RichText::new(label).color(text))
            .fill(fill)
            .min_size(Vec2::new(90.0, 36.0)),
    )
}

// Sizes the canvas to its allocated rect, ticks the panel if due, then
// paints labels and the retained segments. Returns a message for the log.
fn draw_panel(
    ui: &mut egui::Ui,
    panel: &mut SensorPanel,
    renderer: &GraphRenderer,
    canvas_size: Vec2,
    now: Instant,
) -> Option<String> {
    let mut event = None;
    ui.vertical(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&panel.title).strong());
        });
        ui.label(&panel.status);
        ui.label(panel.reading_label());

        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::hover());
        let rect = response.rect;
        panel.canvas_mut().resize(rect.width(), rect.height());
        event = match panel.refresh(now, renderer) {
            Ok(Some(TickOutcome::Rendered { .. })) => {
                // reading label above was laid out before this tick
                ui.ctx().request_repaint();
                panel
                    .feed()
                    .is_empty()
                    .then(|| format!("{}: feed exhausted", panel.title))
            }
            Ok(_) => None,
            Err(e) => {
                log::error!("{}: {e}", panel.title);
                Some(format!("{}: {e}", panel.title))
            }
        };

        painter.rect_filled(rect, Rounding::same(0.0), Color32::WHITE);
        for seg in panel.canvas().segments() {
            let color = Color32::from_rgb(seg.style.color.0, seg.style.color.1, seg.style.color.2);
            painter.line_segment(
                [
                    rect.min + Vec2::new(seg.from.x, seg.from.y),
                    rect.min + Vec2::new(seg.to.x, seg.to.y),
                ],
                Stroke::new(seg.style.width, color),
            );
        }
        let (w, h) = panel.canvas().size();
        let state = if panel.is_stopped() { "stopped" } else { "live" };
        response.on_hover_text(format!(
            "{} batches left, {w:.0}x{h:.0}, {state}",
            panel.feed().len()
        ));
    });
    event
}

// "Record Data": in-memory PNG of every graph, sizes go to the log
fn snapshot_panels(panels: &[SensorPanel]) -> Vec<String> {
    panels
        .iter()
        .map(|panel| match panel.snapshot_png() {
            Ok(png) => format!("{}: snapshot {} bytes", panel.title, png.len()),
            Err(e) => {
                log::error!("{}: snapshot failed: {e}", panel.title);
                format!("{}: snapshot failed: {e}", panel.title)
            }
        })
        .collect()
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut events: Vec<String> = Vec::new();

        // 1. Status column: refresh rate, clock, log
        egui::SidePanel::right("status").min_width(180.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.label(format!(
                "refresh rate: {:.1} s",
                self.refresh_period.as_secs_f32()
            ));
            ui.label(format!(
                "time: {:.0} s",
                now.duration_since(self.started_at).as_secs_f32()
            ));
            ui.separator();
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                for m in &self.log_messages {
                    ui.monospace(m);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // 2. Sensor grid, three panels per row, lone last panel centred
            egui::Grid::new("sensor_grid")
                .num_columns(3)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    for row in self.panels.chunks_mut(3) {
                        if row.len() == 1 {
                            ui.label("");
                        }
                        for panel in row {
                            events.extend(draw_panel(
                                ui,
                                panel,
                                &self.renderer,
                                self.canvas_size,
                                now,
                            ));
                        }
                        ui.end_row();
                    }
                });

            ui.separator();

            // 3. Start / Abort
            ui.horizontal(|ui| {
                let start = &mut self.start_button;
                if accent_button(ui, start.label(), start.accent()).clicked() {
                    start.activate();
                    events.push(format!(
                        "Start button: {} ({})",
                        start.label(),
                        start.accent().name()
                    ));
                }
                let abort = ControlButton::Abort;
                if accent_button(ui, abort.label(), abort.accent()).clicked() {
                    // freezes every graph on its last drawing
                    for panel in &self.panels {
                        panel.stop();
                    }
                    events.push(format!("{} pressed, graph refresh stopped", abort.label()));
                }
            });

            ui.add_space(10.0);

            // 4. Valves and auxiliaries
            egui::Grid::new("control_grid")
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    for row in ControlButton::GRID {
                        for cell in row {
                            match cell {
                                Some(ControlButton::RecordData) => {
                                    let button = ControlButton::RecordData;
                                    if accent_button(ui, button.label(), button.accent()).clicked() {
                                        events.extend(snapshot_panels(&self.panels));
                                    }
                                }
                                Some(button) => {
                                    if accent_button(ui, button.label(), button.accent()).clicked() {
                                        events.push(format!("{} pressed", button.label()));
                                    }
                                }
                                None => {
                                    ui.label("");
                                }
                            }
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(10.0);

            // 5. Timing entries
            ui.horizontal(|ui| {
                for entry in &mut self.timing {
                    ui.vertical(|ui| {
                        ui.label(entry.label);
                        ui.add(egui::TextEdit::singleline(&mut entry.text).desired_width(80.0));
                    });
                }
            });
        });

        for e in events {
            self.log(&e);
        }
        ctx.request_repaint_after(self.next_repaint(now));
    }
}

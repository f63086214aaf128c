//! Desktop preview app for infinity mirror effects
//!
//! Renders the square LED loop in a window with interactive controls.
//! All changes go through the command channel, the distance sensor is a
//! slider.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use infinity_mirror::{
    CommandChannel, CommandSender, ConfigError, EffectId, Instant, Mirror, MirrorCommand,
    MirrorConfig, Override, Preset, PresenceConfig, Rgb, Side, Style,
};

/// Maximum number of LEDs the mirror supports
const MAX_LEDS: usize = 200;

/// Maximum number of presets
const MAX_PRESETS: usize = 16;

/// Command channel size
const COMMANDS: usize = 16;

/// Default number of LEDs per side
const DEFAULT_SIDE: usize = 13;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 16.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Number of log lines kept on screen
const LOG_LINES: usize = 8;

const PRESETS: [Preset; 8] = [
    Preset::new(EffectId::Rainbow, Style::FullStrip, 8_000),
    Preset::new(EffectId::Rainbow, Style::PeriodicOppositeCorners2, 13_000),
    Preset::new(EffectId::Sinelon, Style::BidirectionalSideToSide, 13_000),
    Preset::new(EffectId::Juggle, Style::HalfwayPeriodicSplit2, 13_000),
    Preset::new(EffectId::Bpm, Style::CopiedSides, 13_000),
    Preset::new(EffectId::Sinelon, Style::UnidirectionalSideToSide, 13_000),
    Preset::until_finished(EffectId::FadeToRed, Style::FullStrip),
    Preset::until_finished(EffectId::FadeToBlack, Style::FullStrip),
];

const OVERRIDES: [Override; 6] = [
    Override::None,
    Override::AllBlack,
    Override::AllWhite,
    Override::DistanceTest,
    Override::TestPattern,
    Override::SleepAwaitingPresence,
];

/// Static command channel between the UI and the mirror
static COMMAND_CHANNEL: CommandChannel<COMMANDS> = CommandChannel::<COMMANDS>::new();

type PreviewMirror = Mirror<'static, MAX_LEDS, MAX_PRESETS, COMMANDS>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 760.0])
            .with_title("Infinity Mirror Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "infinity-mirror-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

fn build_mirror(side: usize, auto_advance: bool) -> Result<PreviewMirror, ConfigError> {
    let config = MirrorConfig::new(side, &PRESETS)
        .with_presence(PresenceConfig::default())
        .with_auto_advance(auto_advance);
    Mirror::new(COMMAND_CHANNEL.receiver(), &config)
}

/// Grid cell of strip index `idx` on a square with `side` LEDs per side
///
/// The grid is `side + 2` cells wide, corners stay empty.
fn loop_cell(idx: usize, side: usize) -> (usize, usize) {
    let offset = idx % side;
    match Side::ALL[(idx / side) % Side::ALL.len()] {
        Side::Bottom => (1 + offset, side + 1),
        Side::Right => (side + 1, side - offset),
        Side::Top => (side - offset, 0),
        Side::Left => (0, 1 + offset),
    }
}

struct PreviewApp {
    mirror: Result<PreviewMirror, ConfigError>,
    commands: CommandSender<'static, COMMANDS>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
    /// LEDs per side
    side: usize,
    /// Simulated smoothed sensor reading
    distance_cm: u16,
    /// Selected override
    override_mode: Override,
    /// Recent effect changes
    log: Vec<String>,
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            mirror: build_mirror(DEFAULT_SIDE, true),
            commands: COMMAND_CHANNEL.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            side: DEFAULT_SIDE,
            distance_cm: 60,
            override_mode: Override::None,
            log: Vec::new(),
        }
    }

    fn send(&self, command: MirrorCommand) {
        let _ = self.commands.try_send(command);
    }

    /// Rebuild the mirror for a new side length, keeping auto-advance
    fn rebuild(&mut self) {
        let auto_advance = self
            .mirror
            .as_ref()
            .map(|mirror| mirror.watch().auto_advance())
            .unwrap_or(true);
        COMMAND_CHANNEL.clear();
        self.mirror = build_mirror(self.side, auto_advance);
        self.override_mode = Override::None;
        self.reset_time();
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > LOG_LINES {
            self.log.remove(0);
        }
    }

    /// Tick the mirror and return the frame
    fn render(&mut self) -> Vec<Rgb> {
        let now = Instant::from_millis(self.t_ms);
        let distance_cm = self.distance_cm;
        let Ok(mirror) = self.mirror.as_mut() else {
            return Vec::new();
        };
        let frame = mirror.tick(now, distance_cm).map(<[Rgb]>::to_vec).unwrap_or_default();

        if let Some(action) = mirror.last_action() {
            let line = format!("{:>8} ms  {action:?}", self.t_ms);
            self.push_log(line);
        }
        let Ok(mirror) = self.mirror.as_mut() else {
            return frame;
        };
        if mirror.scheduler_mut().fx_has_changed() {
            let scheduler = mirror.scheduler();
            let line = if scheduler.override_mode().is_active() {
                format!(
                    "{:>8} ms  * {} ({})",
                    self.t_ms,
                    scheduler.effect_id().as_str(),
                    scheduler.style().label()
                )
            } else {
                format!(
                    "{:>8} ms  {} {} ({})",
                    self.t_ms,
                    scheduler.preset_index(),
                    scheduler.effect_id().as_str(),
                    scheduler.style().label()
                )
            };
            self.override_mode = scheduler.override_mode();
            self.push_log(line);
        }

        frame
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        let frame = self.render();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.rebuild();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);
                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <GeometryControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size:");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label("LEDs per side:");
                        let old_side = self.side;
                        ui.add(egui::Slider::new(&mut self.side, 1usize..=MAX_LEDS / 4));
                        if self.side != old_side {
                            self.rebuild();
                        }
                    });

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label("Distance (cm):");
                        ui.add(egui::Slider::new(&mut self.distance_cm, 0u16..=200u16));
                    });
                });
                // </GeometryControls>
            });

            ui.add_space(16.0);

            let Ok(mirror) = self.mirror.as_ref() else {
                if let Err(err) = &self.mirror {
                    ui.label(format!("Invalid configuration: {err:?}"));
                }
                return;
            };
            let scheduler = mirror.scheduler();
            let presence = mirror.presence();
            let mut auto_advance = mirror.watch().auto_advance();
            let status = format!(
                "Preset {} / {}: {}   Style: {} (s = {})   Override: {}",
                scheduler.preset_index(),
                scheduler.presets().count(),
                scheduler.effect_id().as_str(),
                scheduler.style().label(),
                mirror.canvas().base_len(),
                scheduler.override_mode().as_str(),
            );
            let sensor = format!(
                "Sensor: {} cm, fraction {}, audience {}",
                presence.distance_cm,
                presence.fraction,
                if presence.present { "present" } else { "absent" },
            );

            // <EffectControls>
            ui.horizontal(|ui| {
                ui.label("Preset:");
                if ui.button("◀").clicked() {
                    self.send(MirrorCommand::PrevPreset);
                }
                if ui.button("▶").clicked() {
                    self.send(MirrorCommand::NextPreset);
                }

                ui.add_space(8.0);
                ui.label("Style:");
                if ui.button("◀").clicked() {
                    self.send(MirrorCommand::PrevStyle);
                }
                if ui.button("▶").clicked() {
                    self.send(MirrorCommand::NextStyle);
                }

                ui.add_space(8.0);
                if ui.checkbox(&mut auto_advance, "Auto advance").changed() {
                    self.send(MirrorCommand::SetAutoAdvance(auto_advance));
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Override:");
                let mut selected = self.override_mode;
                egui::ComboBox::from_id_salt("override_selector")
                    .selected_text(selected.as_str())
                    .show_ui(ui, |ui| {
                        for mode in OVERRIDES {
                            ui.selectable_value(&mut selected, mode, mode.as_str());
                        }
                    });
                if selected != self.override_mode {
                    self.override_mode = selected;
                    self.send(MirrorCommand::SetOverride(selected));
                }
            });
            // </EffectControls>

            ui.add_space(4.0);
            ui.label(status);
            ui.label(sensor);
            ui.add_space(16.0);

            // === LED Display ===
            let led_pitch = self.led_size + LED_GAP;
            let cells = self.side + 2;
            #[allow(clippy::cast_precision_loss)]
            let extent = cells as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(extent, extent), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let (col, row) = loop_cell(i, self.side);
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }

            ui.add_space(16.0);
            for line in &self.log {
                ui.monospace(line);
            }
        });
    }
}

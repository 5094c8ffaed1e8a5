//! Desktop preview app for sparkle-composer modes
//!
//! Drives a `FrameLoop` on synthetic time and paints the strip in a window.
//! The "Button" control stands in for the physical mode button.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use sparkle_composer::{
    EngineConfig, FrameLoop, Instant, OutputDriver, Rgb, RngSource, SmallRngSource,
};

/// Maximum number of LEDs the preview supports
const MAX_LEDS: usize = 300;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 200;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Display only gets a dim strip, so brighten the painted colors
const DISPLAY_GAIN: f32 = 3.0;

/// Keeps the last flushed frame for painting
#[derive(Default)]
struct PreviewOutput {
    frame: Vec<Rgb>,
    writes: u64,
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
        self.writes += 1;
    }
}

type PreviewLoop = FrameLoop<PreviewOutput, SmallRngSource, MAX_LEDS>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 500.0])
            .with_title("Sparkle Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "sparkle-composer-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    frame_loop: PreviewLoop,
    /// Synthetic time of the next frame in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Wall-clock time not yet turned into frames
    backlog_ms: f64,
    /// Button sample fed into the next tick
    pressed: bool,
    playing: bool,
    seed: u64,
    led_count: usize,
    led_size: f32,
    /// Whether to apply `DISPLAY_GAIN`
    boost: bool,
}

impl PreviewApp {
    fn new() -> Self {
        let seed = 1;
        Self {
            frame_loop: build_loop(DEFAULT_LED_COUNT, seed),
            t_ms: 0,
            last_frame: StdInstant::now(),
            backlog_ms: 0.0,
            pressed: false,
            playing: true,
            seed,
            led_count: DEFAULT_LED_COUNT,
            led_size: LED_SIZE,
            boost: true,
        }
    }

    /// Restart from the first mode with the current strip settings
    fn restart(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.frame_loop = build_loop(self.led_count, self.seed);
        self.t_ms = 0;
        self.backlog_ms = 0.0;
    }

    /// Run as many frames as the elapsed wall-clock time allows
    fn advance(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if !self.playing {
            return;
        }

        let frame_ms = self.frame_loop.frame_duration().as_millis().max(1);
        #[allow(clippy::cast_precision_loss)]
        let frame_ms_f64 = frame_ms as f64;
        // Cap the backlog so a stalled window does not replay seconds of frames
        self.backlog_ms = (self.backlog_ms + delta.as_secs_f64() * 1000.0).min(frame_ms_f64 * 4.0);

        while self.backlog_ms >= frame_ms_f64 {
            self.backlog_ms -= frame_ms_f64;
            let result = self
                .frame_loop
                .tick(Instant::from_millis(self.t_ms), self.pressed);
            self.t_ms = result.next_deadline.as_millis();
        }
    }
}

fn build_loop(led_count: usize, seed: u64) -> PreviewLoop {
    let config = EngineConfig::default().with_led_count(led_count);
    match FrameLoop::new(&config, RngSource::seeded(seed), PreviewOutput::default()) {
        Ok(frame_loop) => frame_loop,
        Err(error) => panic!("invalid preview configuration: {error}"),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn display_color(pixel: Rgb, boost: bool) -> egui::Color32 {
    let gain = if boost { DISPLAY_GAIN } else { 1.0 };
    let channel = |value: u8| (f32::from(value) * gain).min(255.0) as u8;
    egui::Color32::from_rgb(channel(pixel.r), channel(pixel.g), channel(pixel.b))
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button = ui.add(egui::Button::new("● Button").sense(egui::Sense::drag()));
                self.pressed = button.is_pointer_button_down_on();

                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                if ui.button("⏮ Restart").clicked() {
                    self.restart();
                }

                ui.add_space(16.0);
                ui.label(format!("Mode: {}", self.frame_loop.mode().as_str()));
                ui.add_space(8.0);
                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));
                ui.label(format!("Flushes: {}", self.frame_loop.output().writes));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("LEDs:");
                let old_led_count = self.led_count;
                ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
                if self.led_count != old_led_count {
                    self.restart();
                }

                ui.add_space(8.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));

                ui.add_space(8.0);
                ui.checkbox(&mut self.boost, "Boost dim colors");
            });

            ui.add_space(16.0);

            // === LED Display ===
            let frame = &self.frame_loop.output().frame;
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                painter.rect_filled(rect, 3.0, display_color(*pixel, self.boost));
            }
        });
    }
}

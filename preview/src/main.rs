//! Desktop preview app for myrtio-fire-composer
//!
//! Renders the 5x16 fire lamp in a window. Palette changes go through the
//! intent channel and the mode button, the same way the firmware does it.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_fire_composer::{
    FireConfig, FireIntent, FireRenderer, Instant, IntentChannel, IntentSender, ModeButton,
    PaletteId, Rgb, layout::serpentine_index,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Grid width of the previewed lamp
const WIDTH: usize = 5;

/// Grid height of the previewed lamp
const HEIGHT: usize = 16;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 24.0;

/// Gap between LEDs
const LED_GAP: f32 = 3.0;

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 8;

/// Static intent channel for communication between UI and renderer
static INTENTS_CHANNEL: IntentChannel<INTENT_CHANNEL_SIZE> =
    IntentChannel::<INTENT_CHANNEL_SIZE>::new();

const PALETTES: [PaletteId; 6] = [
    PaletteId::Realistic,
    PaletteId::Deep,
    PaletteId::Green,
    PaletteId::Aqua,
    PaletteId::Funky,
    PaletteId::XMas,
];

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_title("Fire Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-fire-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    renderer: FireRenderer<'static, SmallRng, WIDTH, HEIGHT, INTENT_CHANNEL_SIZE>,
    intent_sender: IntentSender<'static, INTENT_CHANNEL_SIZE>,
    button: ModeButton<'static, INTENT_CHANNEL_SIZE>,

    /// Last rendered strip, kept while paused
    pixels: Vec<Rgb>,
    /// Global brightness of the last frame
    brightness: u8,
    /// Wall-clock start, used as the button clock
    started: StdInstant,
    /// Wall-clock time of the last simulated frame
    last_frame: StdInstant,
    playing: bool,
    /// Simulated sensor value
    reading: u16,
    sensor_fitted: bool,
    /// Apply the global brightness to the drawn LEDs
    apply_brightness: bool,
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let renderer = FireRenderer::new(
            INTENTS_CHANNEL.receiver(),
            &FireConfig::NARROW,
            SmallRng::from_entropy(),
        );

        Self {
            renderer,
            intent_sender: INTENTS_CHANNEL.sender(),
            button: ModeButton::new(INTENTS_CHANNEL.sender()),
            pixels: vec![Rgb::default(); WIDTH * HEIGHT],
            brightness: 0,
            started: StdInstant::now(),
            last_frame: StdInstant::now(),
            playing: true,
            reading: 500,
            sensor_fitted: true,
            apply_brightness: true,
            led_size: LED_SIZE,
        }
    }

    fn send_intent(&self, intent: FireIntent) {
        let _ = self.intent_sender.try_send(intent);
    }

    fn press_button(&mut self) {
        #[allow(clippy::cast_possible_truncation)]
        let now = Instant::from_millis(self.started.elapsed().as_millis() as u64);
        let _ = self.button.press(now);
    }

    fn step_frame(&mut self) {
        let reading = self.sensor_fitted.then_some(self.reading);
        let frame = self.renderer.render(reading);
        self.brightness = frame.brightness;
        self.pixels.clear();
        self.pixels.extend_from_slice(frame.pixels);
    }

    /// Render as many frames as the wall clock asks for
    fn update_frames(&mut self) {
        let frame_duration =
            std::time::Duration::from_millis(self.renderer.config().frame_duration.as_millis());
        if !self.playing {
            self.last_frame = StdInstant::now();
            return;
        }
        // Cap catch-up after the window was hidden
        let mut budget = 4;
        while self.last_frame.elapsed() >= frame_duration && budget > 0 {
            self.step_frame();
            self.last_frame += frame_duration;
            budget -= 1;
        }
        if budget == 0 {
            self.last_frame = StdInstant::now();
        }
    }

    fn led_color(&self, x: usize, y: usize) -> egui::Color32 {
        let pixel = self.pixels[serpentine_index(x, y, HEIGHT)];
        let pixel = if self.apply_brightness {
            scale(pixel, self.brightness)
        } else {
            pixel
        };
        egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b)
    }
}

fn scale(color: Rgb, brightness: u8) -> Rgb {
    #[allow(clippy::cast_possible_truncation)]
    let channel = |c: u8| (u16::from(c) * (u16::from(brightness) + 1) / 256) as u8;
    Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_frames();
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            // <PlaybackControls>
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                if ui
                    .add_enabled(!self.playing, egui::Button::new("⏭ Step"))
                    .clicked()
                {
                    self.step_frame();
                }
                ui.add_space(8.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 8.0..=40.0));
            });
            // </PlaybackControls>

            ui.add_space(8.0);

            // <FireControls>
            ui.horizontal(|ui| {
                ui.label("Palette:");
                let current = PALETTES[self.renderer.palette_index() % PALETTES.len()];
                let mut selected = current;
                egui::ComboBox::from_id_salt("palette_selector")
                    .selected_text(current.as_str())
                    .show_ui(ui, |ui| {
                        for id in PALETTES {
                            ui.selectable_value(&mut selected, id, id.as_str());
                        }
                    });
                if selected != current {
                    self.send_intent(FireIntent::SelectPalette(selected.index()));
                }

                if ui.button("Mode").clicked() {
                    self.press_button();
                }
                if ui.button("Flare").clicked() {
                    self.send_intent(FireIntent::Flare);
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.sensor_fitted, "Sensor");
                ui.add_enabled(
                    self.sensor_fitted,
                    egui::Slider::new(
                        &mut self.reading,
                        0..=self.renderer.config().intensity.max_reading,
                    ),
                );
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.apply_brightness, "Apply brightness");
                let params = self.renderer.params();
                ui.label(format!(
                    "brightness {} / {}, cadence {}, divider {:.2}",
                    self.brightness,
                    params.brightness_ceiling,
                    params.ejection_cadence,
                    params.divider
                ));
            });
            // </FireControls>

            ui.add_space(16.0);

            // === LED Display ===
            let led_pitch = self.led_size + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let size = egui::vec2(WIDTH as f32 * led_pitch, HEIGHT as f32 * led_pitch);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for x in 0..WIDTH {
                for y in 0..HEIGHT {
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(
                            origin.x + x as f32 * led_pitch,
                            origin.y + y as f32 * led_pitch,
                        ),
                        egui::vec2(self.led_size, self.led_size),
                    );
                    painter.rect_filled(rect, 3.0, self.led_color(x, y));
                }
            }
        });
    }
}

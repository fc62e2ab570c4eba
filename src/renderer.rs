#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::RngCore;

use crate::color::Rgb;
use crate::config::{ConfigError, FireConfig};
use crate::grid::Grid;
use crate::intensity::{IntensityController, RuntimeParameters};
use crate::intent_processor::{IntentEffects, IntentProcessor, IntentReceiver};
use crate::layout::{self, Frame};
use crate::palette::{Palette, PaletteSelector};
use crate::simulation::{BrightnessOscillator, Compositor, ParticleInjector, advance};

/// Mutable simulation state shared by the pipeline stages
#[derive(Debug, Clone)]
pub struct FireState<const W: usize, const H: usize> {
    /// Currently simulated and displayed grid
    pub front: Grid<W, H>,
    /// Scratch buffer for the next diffusion result
    pub working: Grid<W, H>,
    pub palette: PaletteSelector,
    pub params: RuntimeParameters,
}

impl<const W: usize, const H: usize> FireState<W, H> {
    /// Reset both buffers to black
    pub fn clear(&mut self) {
        self.front.clear();
        self.working.clear();
    }
}

/// One rendered frame, ready for the output driver
#[derive(Debug, Clone, Copy)]
pub struct RenderedFrame<'a> {
    /// Colors in strip order
    pub pixels: &'a [Rgb],
    /// Global brightness scalar for the driver
    pub brightness: u8,
}

/// Fire renderer - the main orchestrator
///
/// Runs the full pipeline once per [`render`](Self::render) call: derive
/// parameters, drain intents, inject embers, diffuse, post-process and map
/// the result onto the strip.
pub struct FireRenderer<'a, R, const W: usize, const H: usize, const INTENT_CHANNEL_SIZE: usize>
where
    R: RngCore,
{
    // External dependencies and configuration
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    config: FireConfig<W, H>,
    rng: R,

    // Internal state
    state: FireState<W, H>,
    frame_buffer: Frame<W, H>,

    // Pipeline stages
    intensity: IntensityController,
    injector: ParticleInjector,
    compositor: Compositor<W>,
}

impl<'a, R, const W: usize, const H: usize, const INTENT_CHANNEL_SIZE: usize>
    FireRenderer<'a, R, W, H, INTENT_CHANNEL_SIZE>
where
    R: RngCore,
{
    /// Create a renderer from a validated configuration
    ///
    /// The built-in presets are always valid; use [`try_new`](Self::try_new)
    /// for hand-written configurations.
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &FireConfig<W, H>,
        rng: R,
    ) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid fire configuration");

        let intensity = IntensityController::new(config.intensity);
        let params = intensity.parameters(config.intensity.default_reading);
        let oscillator = BrightnessOscillator::new(
            config.min_brightness,
            params.brightness_ceiling,
            config.brightness_step,
        );

        Self {
            intent_processor: IntentProcessor::new(intents),
            config: *config,
            rng,
            state: FireState {
                front: Grid::new(),
                working: Grid::new(),
                palette: PaletteSelector::new(config.palette_index, config.palettes.len()),
                params,
            },
            frame_buffer: [[Rgb::default(); H]; W],
            intensity,
            injector: ParticleInjector::new(),
            compositor: Compositor::new(oscillator),
        }
    }

    /// Validate the configuration, then create the renderer
    pub fn try_new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &FireConfig<W, H>,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(intents, config, rng))
    }

    /// Process one frame
    ///
    /// `reading` is the latest intensity sensor value, `None` when no sensor
    /// is fitted.
    pub fn render(&mut self, reading: Option<u16>) -> RenderedFrame<'_> {
        // Intents see this frame's parameters, so a flare hits the current ceiling
        self.adjust_intensity(reading);
        self.process_intents();

        let palette = self.active_palette();
        self.injector.inject(
            &mut self.state.front,
            &palette,
            self.state.params.ejection_cadence,
            &mut self.rng,
        );
        advance(
            &mut self.state.front,
            &mut self.state.working,
            &self.config.kernel,
            self.state.params.divider,
        );
        self.compositor.step(
            self.config.glow_mask,
            &palette,
            &self.state.params,
            &mut self.rng,
        );

        layout::render(
            &self.state.front,
            self.compositor.overlay(),
            self.config.glow_mask,
            self.config.vignette,
            &mut self.frame_buffer,
        );

        RenderedFrame {
            pixels: self.frame_buffer.as_flattened(),
            brightness: self.compositor.brightness(),
        }
    }

    /// Advance to the next palette and restart the fire from black
    ///
    /// The glow overlay is recomputed in the new palette on the next frame.
    pub fn next_palette(&mut self) -> usize {
        let index = self.state.palette.advance();
        self.restart_fire();
        index
    }

    /// Jump to a palette and restart the fire from black
    pub fn select_palette(&mut self, index: usize) -> usize {
        let index = self.state.palette.select(index);
        self.restart_fire();
        index
    }

    pub fn active_palette(&self) -> Palette {
        self.config.palettes[self.state.palette.index()]
    }

    pub fn palette_index(&self) -> usize {
        self.state.palette.index()
    }

    pub fn state(&self) -> &FireState<W, H> {
        &self.state
    }

    pub fn params(&self) -> &RuntimeParameters {
        &self.state.params
    }

    pub fn config(&self) -> &FireConfig<W, H> {
        &self.config
    }

    pub fn compositor(&self) -> &Compositor<W> {
        &self.compositor
    }

    /// Current global brightness
    pub fn brightness(&self) -> u8 {
        self.compositor.brightness()
    }

    /// Drain pending intents from the channel (non-blocking)
    fn process_intents(&mut self) {
        let effects = self.intent_processor.process_pending();
        self.apply_effects(&effects);
    }

    /// Apply side effects from intent processing
    fn apply_effects(&mut self, effects: &IntentEffects) {
        if !effects.has_effects() {
            return;
        }

        if effects.changes_palette() {
            if let Some(index) = effects.palette_select {
                self.state.palette.select(index);
            }
            for _ in 0..effects.palette_steps {
                self.state.palette.advance();
            }
            self.restart_fire();
            #[cfg(feature = "esp32-log")]
            println!(
                "[FireRenderer] palette switched to {}",
                self.state.palette.index()
            );
        }

        if effects.flare {
            self.compositor.flare(self.state.params.brightness_ceiling);
        }
    }

    /// Cold start: black grids, glow redrawn in the active palette on the next step
    fn restart_fire(&mut self) {
        self.state.clear();
        self.compositor.restart();
    }

    /// Re-derive runtime parameters from the sensor
    fn adjust_intensity(&mut self, reading: Option<u16>) {
        let adjustment = self.intensity.adjust(reading);
        self.state.params = adjustment.params;

        if adjustment.flare {
            #[cfg(feature = "esp32-log")]
            println!(
                "[FireRenderer] flare at reading {:?}, ceiling {}",
                reading, adjustment.params.brightness_ceiling
            );
            self.compositor.flare(adjustment.params.brightness_ceiling);
        }
    }
}

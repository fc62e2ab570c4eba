//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use rand::RngCore;

use crate::OutputDriver;
use crate::input::IntensitySensor;
use crate::renderer::FireRenderer;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Every tick reads the intensity sensor, renders one frame, hands the
/// brightness and the pixels to the output driver and returns how long to
/// wait before the next frame.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, sensor, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O, S, R, const W: usize, const H: usize, const INTENT_CHANNEL_SIZE: usize>
where
    O: OutputDriver,
    S: IntensitySensor,
    R: RngCore,
{
    output: O,
    sensor: S,
    renderer: FireRenderer<'a, R, W, H, INTENT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O, S, R, const W: usize, const H: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, S, R, W, H, INTENT_CHANNEL_SIZE>
where
    O: OutputDriver,
    S: IntensitySensor,
    R: RngCore,
{
    /// Create a new frame scheduler.
    ///
    /// Uses the frame duration from the renderer configuration.
    pub fn new(renderer: FireRenderer<'a, R, W, H, INTENT_CHANNEL_SIZE>, sensor: S, driver: O) -> Self {
        let frame_duration = renderer.config().frame_duration;
        Self::with_frame_duration(renderer, sensor, driver, frame_duration)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: FireRenderer<'a, R, W, H, INTENT_CHANNEL_SIZE>,
        sensor: S,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            sensor,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let reading = self.sensor.read();
        let frame = self.renderer.render(reading);
        self.output.set_brightness(frame.brightness);
        self.output.write(frame.pixels);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &FireRenderer<'a, R, W, H, INTENT_CHANNEL_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut FireRenderer<'a, R, W, H, INTENT_CHANNEL_SIZE> {
        &mut self.renderer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}

//! Input collaborators: intensity sensor and mode button

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::intent_processor::{FireIntent, IntentSender};

/// Default debounce window of the mode button
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Source of the raw intensity signal
///
/// Implement this for the analog input of the target board.
pub trait IntensitySensor {
    /// Latest reading, or `None` when no sensor is fitted
    fn read(&mut self) -> Option<u16>;
}

/// Build without an intensity sensor
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl IntensitySensor for NoSensor {
    fn read(&mut self) -> Option<u16> {
        None
    }
}

/// Sensor stand-in that always reports the same value
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIntensity(pub u16);

impl IntensitySensor for FixedIntensity {
    fn read(&mut self) -> Option<u16> {
        Some(self.0)
    }
}

/// Outcome of a button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPress {
    /// Palette advance queued
    Accepted,
    /// Edge arrived inside the debounce window and was ignored
    Debounced,
    /// Intent queue was full; the press is lost
    Dropped,
}

/// Debounced mode button
///
/// Call [`press`](Self::press) from the edge interrupt. At most one palette
/// advance is queued per debounce window.
pub struct ModeButton<'a, const SIZE: usize> {
    intents: IntentSender<'a, SIZE>,
    debounce: Duration,
    last_press: Option<Instant>,
}

impl<'a, const SIZE: usize> ModeButton<'a, SIZE> {
    pub const fn new(intents: IntentSender<'a, SIZE>) -> Self {
        Self::with_debounce(intents, DEFAULT_DEBOUNCE)
    }

    pub const fn with_debounce(intents: IntentSender<'a, SIZE>, debounce: Duration) -> Self {
        Self {
            intents,
            debounce,
            last_press: None,
        }
    }

    /// Handle a button edge at `now`
    pub fn press(&mut self, now: Instant) -> ButtonPress {
        if let Some(last) = self.last_press {
            if now.saturating_duration_since(last) < self.debounce {
                return ButtonPress::Debounced;
            }
        }
        self.last_press = Some(now);

        match self.intents.try_send(FireIntent::NextPalette) {
            Ok(()) => ButtonPress::Accepted,
            Err(_) => {
                #[cfg(feature = "esp32-log")]
                println!("[ModeButton] intent queue full, press dropped");
                ButtonPress::Dropped
            }
        }
    }
}

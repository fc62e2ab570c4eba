//! Intent processing module
//!
//! Input collaborators never touch the simulation directly. They queue
//! [`FireIntent`]s, and the renderer folds every pending intent into one set
//! of [`IntentEffects`] at the start of a frame.

use crate::channel::{Channel, Receiver, Sender};

/// Requested change coming from outside the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireIntent {
    /// Advance to the next palette (mode button)
    NextPalette,
    /// Jump to a palette by index, wrapping out-of-range values
    SelectPalette(usize),
    /// Push the brightness to the current ceiling
    Flare,
}

/// Combined effect of all intents drained in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentEffects {
    /// Explicit palette to jump to before advancing
    pub palette_select: Option<usize>,
    /// Number of palette advances to apply
    pub palette_steps: usize,
    /// Brightness flare requested
    pub flare: bool,
}

impl IntentEffects {
    /// Check if the palette changes, which also resets the grid
    pub const fn changes_palette(&self) -> bool {
        self.palette_select.is_some() || self.palette_steps > 0
    }

    pub const fn has_effects(&self) -> bool {
        self.changes_palette() || self.flare
    }

    fn apply(&mut self, intent: FireIntent) {
        match intent {
            FireIntent::NextPalette => {
                self.palette_steps += 1;
            }
            FireIntent::SelectPalette(index) => {
                // A later selection overrides earlier presses
                self.palette_select = Some(index);
                self.palette_steps = 0;
            }
            FireIntent::Flare => {
                self.flare = true;
            }
        }
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, FireIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, FireIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<FireIntent, SIZE>;

/// Drains queued intents once per frame
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Fold all pending intents into their combined effects (non-blocking)
    pub fn process_pending(&mut self) -> IntentEffects {
        let mut effects = IntentEffects::default();
        for intent in self.intents.drain() {
            effects.apply(intent);
        }
        effects
    }
}

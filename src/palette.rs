//! Ember palettes
//!
//! A palette is a small fixed set of representative ember colors. Embers and
//! glow cells pick one of them uniformly at random and dim it.

use rand::{Rng, RngCore};

use crate::color::Rgb;

/// Number of colors in every palette
pub const PALETTE_SIZE: usize = 3;

/// Set of ember colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    pub const fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    pub const fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// Pick one of the palette colors uniformly at random
    pub fn pick<R: RngCore + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.colors[rng.gen_range(0..PALETTE_SIZE)]
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

pub const REALISTIC_FIRE: Palette =
    Palette::new([rgb(207, 116, 14), rgb(212, 152, 48), rgb(140, 48, 8)]);
pub const DEEP_FIRE: Palette =
    Palette::new([rgb(218, 51, 0), rgb(100, 55, 0), rgb(254, 200, 0)]);
pub const GREEN_FIRE: Palette =
    Palette::new([rgb(50, 80, 22), rgb(111, 121, 21), rgb(30, 60, 30)]);
pub const AQUA_FIRE: Palette =
    Palette::new([rgb(119, 194, 193), rgb(62, 172, 236), rgb(23, 41, 105)]);
pub const FUNKY: Palette = Palette::new([rgb(0, 0, 255), rgb(0, 255, 0), rgb(255, 0, 0)]);
pub const X_MAS: Palette =
    Palette::new([rgb(125, 125, 125), rgb(0, 255, 0), rgb(255, 0, 0)]);

/// Built-in palettes, ordered by [`PaletteId`]
pub static BUILTIN_PALETTES: [Palette; 6] =
    [REALISTIC_FIRE, DEEP_FIRE, GREEN_FIRE, AQUA_FIRE, FUNKY, X_MAS];

const PALETTE_NAME_REALISTIC: &str = "realistic";
const PALETTE_NAME_DEEP: &str = "deep";
const PALETTE_NAME_GREEN: &str = "green";
const PALETTE_NAME_AQUA: &str = "aqua";
const PALETTE_NAME_FUNKY: &str = "funky";
const PALETTE_NAME_X_MAS: &str = "x_mas";

const PALETTE_ID_REALISTIC: u8 = 0;
const PALETTE_ID_DEEP: u8 = 1;
const PALETTE_ID_GREEN: u8 = 2;
const PALETTE_ID_AQUA: u8 = 3;
const PALETTE_ID_FUNKY: u8 = 4;
const PALETTE_ID_X_MAS: u8 = 5;

/// Known built-in palettes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PaletteId {
    Realistic = PALETTE_ID_REALISTIC,
    Deep = PALETTE_ID_DEEP,
    Green = PALETTE_ID_GREEN,
    Aqua = PALETTE_ID_AQUA,
    Funky = PALETTE_ID_FUNKY,
    XMas = PALETTE_ID_X_MAS,
}

impl PaletteId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PALETTE_ID_REALISTIC => Self::Realistic,
            PALETTE_ID_DEEP => Self::Deep,
            PALETTE_ID_GREEN => Self::Green,
            PALETTE_ID_AQUA => Self::Aqua,
            PALETTE_ID_FUNKY => Self::Funky,
            PALETTE_ID_X_MAS => Self::XMas,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Realistic => PALETTE_NAME_REALISTIC,
            Self::Deep => PALETTE_NAME_DEEP,
            Self::Green => PALETTE_NAME_GREEN,
            Self::Aqua => PALETTE_NAME_AQUA,
            Self::Funky => PALETTE_NAME_FUNKY,
            Self::XMas => PALETTE_NAME_X_MAS,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PALETTE_NAME_REALISTIC => Some(Self::Realistic),
            PALETTE_NAME_DEEP => Some(Self::Deep),
            PALETTE_NAME_GREEN => Some(Self::Green),
            PALETTE_NAME_AQUA => Some(Self::Aqua),
            PALETTE_NAME_FUNKY => Some(Self::Funky),
            PALETTE_NAME_X_MAS => Some(Self::XMas),
            _ => None,
        }
    }

    /// Position in [`BUILTIN_PALETTES`]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn palette(self) -> Palette {
        BUILTIN_PALETTES[self.index()]
    }
}

/// Active palette index, wrapping modulo the palette count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSelector {
    index: usize,
    count: usize,
}

impl PaletteSelector {
    /// Create a selector over `count` palettes
    ///
    /// The initial index wraps into range. A zero count is treated as one.
    pub const fn new(index: usize, count: usize) -> Self {
        let count = if count == 0 { 1 } else { count };
        Self {
            index: index % count,
            count,
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// Move to the next palette, wrapping after the last one
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }

    /// Jump to a palette, wrapping out-of-range indices
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index % self.count;
        self.index
    }
}

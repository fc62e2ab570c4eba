mod utils;

use smart_leds::RGB8;

pub use utils::{BLACK, dim_color, rgb_from_u32, scale_color};

pub type Rgb = RGB8;

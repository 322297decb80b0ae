//! Core types for the pixtile pattern gallery.
//!
//! This crate holds the pieces every other crate agrees on: colors and
//! palettes, the owned raster [`Surface`] that generators paint into, the
//! seeded LCG shuffle used to order the catalogue, and the fixed two-row
//! tile layout.

mod color;
mod layout;
mod path;
mod shuffle;
mod speed;
mod surface;

pub use color::{CREAM, NAVY, Palette, ParseColorError, Rgb};
pub use layout::{GRID_ROWS, GridLayout, TILE_SIZE};
pub use path::Path;
pub use shuffle::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER, Lcg, shuffle, shuffle_in_place};
pub use speed::AnimationSpeed;
pub use surface::Surface;

/*
 * Graphics
 *
 * Turns the game's 320x200 palette-indexed frames into native pixel words
 * on a linear framebuffer, scaled by a whole factor.
 */

#![cfg_attr(not(test), no_std)]

pub mod blit;
pub mod color;
pub mod error;
pub mod format;
pub mod frame;
pub mod framebuffer;
pub mod gamma;
pub mod palette;
pub mod scale;

pub use blit::ScalingBlitter;
pub use color::{ColorTable, ColorTableManager};
pub use error::GraphicsError;
pub use format::{Channel, DeviceFormat, ModeInfo, BYTES_PER_PIXEL};
pub use frame::{IndexedFrame, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};
pub use framebuffer::Framebuffer;
pub use gamma::{GammaLevel, GAMMA_LEVELS};
pub use palette::{Palette, Rgb, PALETTE_BYTES, PALETTE_ENTRIES};
pub use scale::{Layout, Placement, ScaleMode};

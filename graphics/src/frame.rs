/*
 * Indexed Frame
 *
 * Read-only view of the game's 320x200 software-rendered screen, one
 * palette index per pixel, rows stored top to bottom.
 */

use crate::error::GraphicsError;

pub const SCREEN_WIDTH: usize = 320;
pub const SCREEN_HEIGHT: usize = 200;
pub const SCREEN_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

#[derive(Debug, Clone, Copy)]
pub struct IndexedFrame<'a> {
	pixels: &'a [u8; SCREEN_PIXELS],
}

impl<'a> IndexedFrame<'a> {
	pub fn new(pixels: &'a [u8]) -> Result<Self, GraphicsError> {
		let pixels = pixels
			.try_into()
			.map_err(|_| GraphicsError::FrameSize(pixels.len()))?;
		Ok(IndexedFrame { pixels })
	}

	pub fn from_array(pixels: &'a [u8; SCREEN_PIXELS]) -> Self {
		IndexedFrame { pixels }
	}

	#[inline]
	pub fn get(&self, x: usize, y: usize) -> u8 {
		self.pixels[y * SCREEN_WIDTH + x]
	}

	pub fn rows(&self) -> core::slice::ChunksExact<'a, u8> {
		self.pixels.chunks_exact(SCREEN_WIDTH)
	}

	pub fn pixels(&self) -> &'a [u8; SCREEN_PIXELS] {
		self.pixels
	}
}

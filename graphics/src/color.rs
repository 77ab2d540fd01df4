/*
 * Device Color Table
 *
 * Precomputed native pixel word for each of the 256 palette indices.
 */

use crate::format::DeviceFormat;
use crate::gamma::GammaLevel;
use crate::palette::{Palette, PALETTE_ENTRIES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
	words: [u32; PALETTE_ENTRIES],
}

impl ColorTable {
	pub const fn zeroed() -> Self {
		ColorTable {
			words: [0; PALETTE_ENTRIES],
		}
	}

	/*
	 * build - Convert a palette to native pixel words
	 * @palette: source colors
	 * @format: channel layout of the device
	 * @gamma: lookup applied to each channel before packing
	 */
	pub fn build(palette: &Palette, format: &DeviceFormat, gamma: GammaLevel) -> Self {
		let curve = gamma.table();
		let mut table = Self::zeroed();
		for (word, rgb) in table.words.iter_mut().zip(palette.entries()) {
			*word = format.pack(
				curve[rgb.r as usize],
				curve[rgb.g as usize],
				curve[rgb.b as usize],
			);
		}
		table
	}

	#[inline(always)]
	pub fn get(&self, index: u8) -> u32 {
		self.words[index as usize]
	}

	pub fn words(&self) -> &[u32; PALETTE_ENTRIES] {
		&self.words
	}
}

/*
 * struct ColorTableManager - Keeps the color table in step with the palette
 *
 * The new table is computed in full before it replaces the old one, so
 * a reader never sees a half-converted palette.
 */
#[derive(Debug, Clone)]
pub struct ColorTableManager {
	format: DeviceFormat,
	gamma: GammaLevel,
	table: ColorTable,
}

impl ColorTableManager {
	pub fn new(format: DeviceFormat, gamma: GammaLevel) -> Self {
		ColorTableManager {
			format,
			gamma,
			table: ColorTable::zeroed(),
		}
	}

	pub fn gamma(&self) -> GammaLevel {
		self.gamma
	}

	/* Takes effect with the next set_palette() */
	pub fn set_gamma(&mut self, gamma: GammaLevel) {
		self.gamma = gamma;
	}

	pub fn set_palette(&mut self, palette: &Palette) -> &ColorTable {
		self.table = ColorTable::build(palette, &self.format, self.gamma);
		&self.table
	}

	pub fn table(&self) -> &ColorTable {
		&self.table
	}
}

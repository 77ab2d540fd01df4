/*
 * Palette
 *
 * 256 RGB triples as delivered by the game, 8 bits per channel.
 */

use crate::error::GraphicsError;

pub const PALETTE_ENTRIES: usize = 256;
pub const PALETTE_BYTES: usize = PALETTE_ENTRIES * 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	pub const BLACK: Rgb = Rgb::new(0, 0, 0);

	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Rgb { r, g, b }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	entries: [Rgb; PALETTE_ENTRIES],
}

impl Default for Palette {
	fn default() -> Self {
		Self::grayscale()
	}
}

impl Palette {
	pub const fn black() -> Self {
		Palette {
			entries: [Rgb::BLACK; PALETTE_ENTRIES],
		}
	}

	//Index i maps to gray level i; shown until the game sets its own
	pub fn grayscale() -> Self {
		let mut palette = Self::black();
		for (i, entry) in palette.entries.iter_mut().enumerate() {
			let level = i as u8;
			*entry = Rgb::new(level, level, level);
		}
		palette
	}

	/*
	 * from_bytes - Build a palette from consecutive R,G,B bytes
	 * @bytes: exactly 768 bytes
	 */
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, GraphicsError> {
		if bytes.len() != PALETTE_BYTES {
			return Err(GraphicsError::PaletteSize(bytes.len()));
		}
		let mut palette = Self::black();
		palette.set_range(0, bytes)?;
		Ok(palette)
	}

	/*
	 * set_range - Replace entries [first, first + bytes.len() / 3)
	 * @first: first palette index to overwrite
	 * @bytes: consecutive R,G,B bytes
	 */
	pub fn set_range(&mut self, first: usize, bytes: &[u8]) -> Result<(), GraphicsError> {
		if bytes.len() % 3 != 0 {
			return Err(GraphicsError::PaletteSize(bytes.len()));
		}
		let count = bytes.len() / 3;
		let end = match first.checked_add(count) {
			Some(end) if end <= PALETTE_ENTRIES => end,
			_ => {
				return Err(GraphicsError::PaletteRange {
					first,
					end: first.saturating_add(count),
				});
			}
		};
		for (entry, rgb) in self.entries[first..end].iter_mut().zip(bytes.chunks_exact(3)) {
			*entry = Rgb::new(rgb[0], rgb[1], rgb[2]);
		}
		Ok(())
	}

	pub fn entries(&self) -> &[Rgb; PALETTE_ENTRIES] {
		&self.entries
	}

	pub fn get(&self, index: u8) -> Rgb {
		self.entries[index as usize]
	}

	pub fn set(&mut self, index: u8, rgb: Rgb) {
		self.entries[index as usize] = rgb;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bytes_are_read_as_triples() {
		let bytes: Vec<u8> = (0..PALETTE_BYTES).map(|i| (i % 251) as u8).collect();
		let palette = Palette::from_bytes(&bytes).unwrap();
		assert_eq!(palette.get(0), Rgb::new(0, 1, 2));
		assert_eq!(palette.get(1), Rgb::new(3, 4, 5));
		let last = 255 * 3;
		assert_eq!(
			palette.get(255),
			Rgb::new(bytes[last], bytes[last + 1], bytes[last + 2])
		);
	}

	#[test]
	fn wrong_sizes_are_rejected() {
		assert_eq!(Palette::from_bytes(&[0; 767]), Err(GraphicsError::PaletteSize(767)));
		let mut palette = Palette::black();
		assert_eq!(palette.set_range(0, &[1, 2]), Err(GraphicsError::PaletteSize(2)));
		assert_eq!(
			palette.set_range(255, &[1, 2, 3, 4, 5, 6]),
			Err(GraphicsError::PaletteRange { first: 255, end: 257 })
		);
		assert_eq!(
			palette.set_range(usize::MAX, &[1, 2, 3]),
			Err(GraphicsError::PaletteRange { first: usize::MAX, end: usize::MAX })
		);
		assert_eq!(
			palette.set_range(usize::MAX - 1, &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
			Err(GraphicsError::PaletteRange { first: usize::MAX - 1, end: usize::MAX })
		);
		assert_eq!(palette, Palette::black());
	}

	#[test]
	fn partial_update_leaves_other_entries() {
		let mut palette = Palette::grayscale();
		palette.set_range(10, &[255, 0, 0, 0, 255, 0]).unwrap();
		assert_eq!(palette.get(9), Rgb::new(9, 9, 9));
		assert_eq!(palette.get(10), Rgb::new(255, 0, 0));
		assert_eq!(palette.get(11), Rgb::new(0, 255, 0));
		assert_eq!(palette.get(12), Rgb::new(12, 12, 12));
	}
}

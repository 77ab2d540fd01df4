/*
 * Linear Framebuffer
 *
 * The mapped video memory as a slice of native pixel words, y_res rows of
 * pitch words each.
 */

use crate::error::GraphicsError;
use crate::format::DeviceFormat;

pub struct Framebuffer<'a> {
	words: &'a mut [u32],
	format: DeviceFormat,
}

impl<'a> Framebuffer<'a> {
	pub fn new(words: &'a mut [u32], format: DeviceFormat) -> Result<Self, GraphicsError> {
		let need = format.len_words();
		if words.len() < need {
			return Err(GraphicsError::FramebufferTooSmall {
				len: words.len(),
				need,
			});
		}
		Ok(Framebuffer {
			words: &mut words[..need],
			format,
		})
	}

	/*
	 * from_raw - Wrap video memory mapped by the boot loader
	 * @base: virtual address of the first pixel
	 * @format: validated layout of that memory
	 *
	 * Safety: @base must point to at least format.len_words() writable,
	 * 4-byte aligned words that nothing else accesses for 'a.
	 */
	pub unsafe fn from_raw(base: *mut u32, format: DeviceFormat) -> Self {
		let words = unsafe { core::slice::from_raw_parts_mut(base, format.len_words()) };
		Framebuffer { words, format }
	}

	pub fn format(&self) -> &DeviceFormat {
		&self.format
	}

	pub fn words(&self) -> &[u32] {
		self.words
	}

	pub fn words_mut(&mut self) -> &mut [u32] {
		self.words
	}

	pub fn clear(&mut self) {
		self.words.fill(0);
	}

	/* Writes each word's own index, a quick check that the mapping is live */
	pub fn fill_test_pattern(&mut self) {
		for (i, word) in self.words.iter_mut().enumerate() {
			*word = i as u32;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_buffers_are_rejected() {
		let format = DeviceFormat::xrgb8888(640, 480, 660).unwrap();
		let mut words = vec![0u32; 660 * 480 - 1];
		assert_eq!(
			Framebuffer::new(&mut words, format).err(),
			Some(GraphicsError::FramebufferTooSmall { len: 660 * 480 - 1, need: 660 * 480 })
		);
	}

	#[test]
	fn extra_memory_is_not_exposed() {
		let format = DeviceFormat::xrgb8888(320, 200, 320).unwrap();
		let mut words = vec![7u32; 320 * 200 + 64];
		let mut fb = Framebuffer::new(&mut words, format).unwrap();
		assert_eq!(fb.words().len(), 320 * 200);
		fb.fill_test_pattern();
		assert_eq!(fb.words()[1234], 1234);
		fb.clear();
		assert!(fb.words().iter().all(|&w| w == 0));
		drop(fb);
		assert_eq!(words[320 * 200], 7);
	}
}

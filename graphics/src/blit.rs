/*
 * Scaling Blitter
 *
 * Expands the indexed frame into the framebuffer through the color
 * table. Each output scanline of an N x N block row has its own cursor;
 * all cursors advance together and jump by the layout's row offset at
 * the end of a source row, so a pitch that is not a multiple of the
 * scaled width never makes the rows drift.
 */

use crate::color::ColorTable;
use crate::error::GraphicsError;
use crate::format::DeviceFormat;
use crate::frame::IndexedFrame;
use crate::framebuffer::Framebuffer;
use crate::scale::{Layout, Placement, ScaleMode};

#[derive(Debug, Clone)]
pub struct ScalingBlitter {
	format: DeviceFormat,
	layout: Layout,
}

impl ScalingBlitter {
	pub fn new(format: DeviceFormat, mode: ScaleMode, placement: Placement) -> Result<Self, GraphicsError> {
		let layout = Layout::new(&format, mode, placement)?;
		Ok(ScalingBlitter { format, layout })
	}

	pub fn mode(&self) -> ScaleMode {
		self.layout.mode
	}

	pub fn layout(&self) -> &Layout {
		&self.layout
	}

	/*
	 * present - Draw one frame
	 * @frame: the game's indexed picture
	 * @colors: palette index to pixel word
	 * @fb: target; must be built for the same DeviceFormat
	 *
	 * Only writes to the framebuffer, never reads it.
	 */
	pub fn present(&self, frame: IndexedFrame<'_>, colors: &ColorTable, fb: &mut Framebuffer<'_>) {
		assert_eq!(fb.format(), &self.format, "framebuffer format mismatch");
		let out = &mut fb.words_mut()[..self.layout.extent];
		match self.layout.mode {
			ScaleMode::X1 => self.blit_1x(frame, colors, out),
			ScaleMode::X2 => self.blit_blocks::<2>(frame, colors, out),
			ScaleMode::X3 => self.blit_blocks::<3>(frame, colors, out),
		}
	}

	fn blit_1x(&self, frame: IndexedFrame<'_>, colors: &ColorTable, out: &mut [u32]) {
		let mut cursor = self.layout.origin;
		for row in frame.rows() {
			let line = &mut out[cursor..cursor + row.len()];
			for (word, &index) in line.iter_mut().zip(row) {
				*word = colors.get(index);
			}
			cursor += row.len() + self.layout.row_offset;
		}
	}

	fn blit_blocks<const N: usize>(&self, frame: IndexedFrame<'_>, colors: &ColorTable, out: &mut [u32]) {
		let pitch = self.layout.pitch;
		let mut cursors: [usize; N] = core::array::from_fn(|r| self.layout.origin + r * pitch);
		for row in frame.rows() {
			for &index in row {
				let pixel = colors.get(index);
				for cursor in cursors.iter_mut() {
					out[*cursor..*cursor + N].fill(pixel);
					*cursor += N;
				}
			}
			for cursor in cursors.iter_mut() {
				*cursor += self.layout.row_offset;
			}
		}
	}
}

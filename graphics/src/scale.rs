/*
 * Scale Mode and Screen Layout
 *
 * Blocky scaling: every source pixel becomes an N x N block, N in 1..=3.
 * The layout records where the scaled picture starts in the framebuffer
 * and how far each row cursor jumps at the end of a scaled row.
 */

use crate::error::GraphicsError;
use crate::format::DeviceFormat;
use crate::frame::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScaleMode {
	X1 = 1,
	X2 = 2,
	X3 = 3,
}

impl ScaleMode {
	pub const ALL: [ScaleMode; 3] = [ScaleMode::X1, ScaleMode::X2, ScaleMode::X3];

	pub const fn factor(self) -> usize {
		self as usize
	}

	pub fn fits(self, format: &DeviceFormat) -> bool {
		let n = self.factor();
		SCREEN_WIDTH * n <= format.x_res() as usize && SCREEN_HEIGHT * n <= format.y_res() as usize
	}

	/*
	 * select - Pick the scale factor for a device
	 * @forced: factor from the configuration, if any
	 *
	 * Without a forced factor the largest one that fits is used.
	 */
	pub fn select(format: &DeviceFormat, forced: Option<ScaleMode>) -> Result<Self, GraphicsError> {
		if let Some(mode) = forced {
			if mode.fits(format) {
				return Ok(mode);
			}
			let n = mode.factor() as u32;
			return Err(GraphicsError::ScaleDoesNotFit {
				factor: mode as u8,
				need_width: SCREEN_WIDTH as u32 * n,
				need_height: SCREEN_HEIGHT as u32 * n,
				width: format.x_res(),
				height: format.y_res(),
			});
		}
		Self::ALL
			.iter()
			.rev()
			.copied()
			.find(|mode| mode.fits(format))
			.ok_or(GraphicsError::ResolutionTooSmall {
				width: format.x_res(),
				height: format.y_res(),
			})
	}
}

impl TryFrom<u8> for ScaleMode {
	type Error = GraphicsError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(ScaleMode::X1),
			2 => Ok(ScaleMode::X2),
			3 => Ok(ScaleMode::X3),
			other => Err(GraphicsError::UnsupportedScale(other)),
		}
	}
}

/*
 * enum Placement - Where the scaled picture sits on a larger screen
 * @TopLeft: flush with the first pixel of the framebuffer
 * @Centered: equal margins left/right and top/bottom
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
	#[default]
	TopLeft,
	Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
	pub mode: ScaleMode,
	/* Word index of the first output pixel */
	pub origin: usize,
	pub pitch: usize,
	/* Words each row cursor skips after finishing a scaled source row */
	pub row_offset: usize,
	/* One past the last word written */
	pub extent: usize,
}

impl Layout {
	pub fn new(format: &DeviceFormat, mode: ScaleMode, placement: Placement) -> Result<Self, GraphicsError> {
		ScaleMode::select(format, Some(mode))?;
		let n = mode.factor();
		let pitch = format.pitch() as usize;
		let width = SCREEN_WIDTH * n;
		let height = SCREEN_HEIGHT * n;
		let origin = match placement {
			Placement::TopLeft => 0,
			Placement::Centered => {
				let top = (format.y_res() as usize - height) / 2;
				let left = (format.x_res() as usize - width) / 2;
				top * pitch + left
			}
		};
		Ok(Layout {
			mode,
			origin,
			pitch,
			row_offset: n * pitch - width,
			extent: origin + (height - 1) * pitch + width,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fmt(w: u32, h: u32) -> DeviceFormat {
		DeviceFormat::xrgb8888(w, h, w).unwrap()
	}

	#[test]
	fn largest_fitting_factor_wins() {
		assert_eq!(ScaleMode::select(&fmt(320, 200), None), Ok(ScaleMode::X1));
		assert_eq!(ScaleMode::select(&fmt(640, 480), None), Ok(ScaleMode::X2));
		assert_eq!(ScaleMode::select(&fmt(959, 600), None), Ok(ScaleMode::X2));
		assert_eq!(ScaleMode::select(&fmt(1024, 768), None), Ok(ScaleMode::X3));
		assert_eq!(ScaleMode::select(&fmt(1920, 1080), None), Ok(ScaleMode::X3));
	}

	#[test]
	fn tiny_screens_are_rejected() {
		assert_eq!(
			ScaleMode::select(&fmt(320, 199), None),
			Err(GraphicsError::ResolutionTooSmall { width: 320, height: 199 })
		);
	}

	#[test]
	fn forced_factor_must_fit() {
		assert_eq!(ScaleMode::select(&fmt(1024, 768), Some(ScaleMode::X1)), Ok(ScaleMode::X1));
		assert_eq!(
			ScaleMode::select(&fmt(800, 600), Some(ScaleMode::X3)),
			Err(GraphicsError::ScaleDoesNotFit {
				factor: 3,
				need_width: 960,
				need_height: 600,
				width: 800,
				height: 600,
			})
		);
	}

	#[test]
	fn factor_parsing() {
		assert_eq!(ScaleMode::try_from(2), Ok(ScaleMode::X2));
		assert_eq!(ScaleMode::try_from(0), Err(GraphicsError::UnsupportedScale(0)));
		assert_eq!(ScaleMode::try_from(4), Err(GraphicsError::UnsupportedScale(4)));
	}

	#[test]
	fn row_offset_accounts_for_pitch() {
		let native = Layout::new(&fmt(320, 200), ScaleMode::X1, Placement::TopLeft).unwrap();
		assert_eq!(native.row_offset, 0);
		assert_eq!(native.extent, 320 * 200);

		let padded = DeviceFormat::xrgb8888(1024, 768, 1040).unwrap();
		let x3 = Layout::new(&padded, ScaleMode::X3, Placement::TopLeft).unwrap();
		assert_eq!(x3.row_offset, 3 * 1040 - 960);
		assert_eq!(x3.extent, 599 * 1040 + 960);
	}

	#[test]
	fn centered_origin() {
		let layout = Layout::new(&fmt(800, 600), ScaleMode::X2, Placement::Centered).unwrap();
		// 640x400 inside 800x600: 100 rows down, 80 pixels in
		assert_eq!(layout.origin, 100 * 800 + 80);
		assert!(layout.extent <= 800 * 600);
	}
}

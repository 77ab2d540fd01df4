/*
 * Device Pixel Format
 *
 * Geometry and channel layout of the linear framebuffer, fixed for the
 * whole session. Only one-word-per-pixel (32 bpp) modes are handled.
 */

use core::fmt;

use crate::error::GraphicsError;

/*
 * struct ModeInfo - Raw mode description as reported by the boot loader
 *
 * Mirrors the fields of a VBE mode info block / limine framebuffer that
 * matter here. Converted into a DeviceFormat after validation.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInfo {
	pub width: u32,
	pub height: u32,
	pub bytes_per_line: u32,
	pub bits_per_pixel: u16,
	pub red: Channel,
	pub green: Channel,
	pub blue: Channel,
}

/*
 * struct Channel - Position of one color channel inside a pixel word
 * @shift: bit offset of the channel's least significant bit
 * @len: channel width in bits
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
	pub shift: u8,
	pub len: u8,
}

impl Channel {
	pub const fn new(shift: u8, len: u8) -> Self {
		Channel { shift, len }
	}

	fn check(self, name: &'static str) -> Result<Self, GraphicsError> {
		if self.len == 0 || self.len > 8 || self.shift as u32 + self.len as u32 > 32 {
			return Err(GraphicsError::UnsupportedChannel {
				name,
				shift: self.shift,
				len: self.len,
			});
		}
		Ok(self)
	}

	//Keep the top @len bits of @value, moved up to @shift
	#[inline]
	fn place(self, value: u8) -> u32 {
		((value >> (8 - self.len)) as u32) << self.shift
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceFormat {
	x_res: u32,
	y_res: u32,
	pitch: u32,
	red: Channel,
	green: Channel,
	blue: Channel,
}

pub const BYTES_PER_PIXEL: u32 = 4;

impl DeviceFormat {
	/*
	 * xrgb8888 - Common little-endian XRGB layout
	 * @width, @height: resolution in pixels
	 * @pitch: scanline length in pixels
	 */
	pub fn xrgb8888(width: u32, height: u32, pitch: u32) -> Result<Self, GraphicsError> {
		Self::from_mode(ModeInfo {
			width,
			height,
			bytes_per_line: pitch * BYTES_PER_PIXEL,
			bits_per_pixel: 32,
			red: Channel::new(16, 8),
			green: Channel::new(8, 8),
			blue: Channel::new(0, 8),
		})
	}

	pub fn from_mode(mode: ModeInfo) -> Result<Self, GraphicsError> {
		if mode.bits_per_pixel != 32 {
			return Err(GraphicsError::UnsupportedDepth(mode.bits_per_pixel));
		}
		if mode.bytes_per_line % BYTES_PER_PIXEL != 0 {
			return Err(GraphicsError::PitchAlignment {
				bytes: mode.bytes_per_line,
			});
		}
		let pitch = mode.bytes_per_line / BYTES_PER_PIXEL;
		if pitch < mode.width {
			return Err(GraphicsError::PitchTooSmall {
				pitch,
				width: mode.width,
			});
		}
		Ok(DeviceFormat {
			x_res: mode.width,
			y_res: mode.height,
			pitch,
			red: mode.red.check("red")?,
			green: mode.green.check("green")?,
			blue: mode.blue.check("blue")?,
		})
	}

	pub fn x_res(&self) -> u32 {
		self.x_res
	}

	pub fn y_res(&self) -> u32 {
		self.y_res
	}

	/* Scanline length in pixel words */
	pub fn pitch(&self) -> u32 {
		self.pitch
	}

	/* Pixel words the whole visible surface spans */
	pub fn len_words(&self) -> usize {
		self.y_res as usize * self.pitch as usize
	}

	pub fn red(&self) -> Channel {
		self.red
	}

	pub fn green(&self) -> Channel {
		self.green
	}

	pub fn blue(&self) -> Channel {
		self.blue
	}

	//Reduce 8-bit channel values to each channel's width and place them
	#[inline]
	pub fn pack(&self, r: u8, g: u8, b: u8) -> u32 {
		self.red.place(r) | self.green.place(g) | self.blue.place(b)
	}
}

impl fmt::Display for DeviceFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}x{} pitch {} px, 32 bpp, red {}:{} green {}:{} blue {}:{}",
			self.x_res,
			self.y_res,
			self.pitch,
			self.red.shift,
			self.red.len,
			self.green.shift,
			self.green.len,
			self.blue.shift,
			self.blue.len
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn mode() -> ModeInfo {
		ModeInfo {
			width: 1024,
			height: 768,
			bytes_per_line: 4096,
			bits_per_pixel: 32,
			red: Channel::new(16, 8),
			green: Channel::new(8, 8),
			blue: Channel::new(0, 8),
		}
	}

	#[test]
	fn pitch_is_converted_to_words() {
		let fmt = DeviceFormat::from_mode(ModeInfo { bytes_per_line: 4160, ..mode() }).unwrap();
		assert_eq!(fmt.pitch(), 1040);
		assert_eq!(fmt.len_words(), 1040 * 768);
	}

	#[test]
	fn other_depths_are_rejected() {
		for bpp in [8, 15, 16, 24] {
			assert_eq!(
				DeviceFormat::from_mode(ModeInfo { bits_per_pixel: bpp, ..mode() }),
				Err(GraphicsError::UnsupportedDepth(bpp))
			);
		}
	}

	#[test]
	fn bad_geometry_is_rejected() {
		assert_eq!(
			DeviceFormat::from_mode(ModeInfo { bytes_per_line: 4098, ..mode() }),
			Err(GraphicsError::PitchAlignment { bytes: 4098 })
		);
		assert_eq!(
			DeviceFormat::from_mode(ModeInfo { bytes_per_line: 2048, ..mode() }),
			Err(GraphicsError::PitchTooSmall { pitch: 512, width: 1024 })
		);
	}

	#[test]
	fn channels_must_fit_the_word() {
		let err = DeviceFormat::from_mode(ModeInfo { blue: Channel::new(28, 8), ..mode() });
		assert_eq!(
			err,
			Err(GraphicsError::UnsupportedChannel { name: "blue", shift: 28, len: 8 })
		);
	}

	#[test]
	fn pack_uses_channel_shifts() {
		let xrgb = DeviceFormat::xrgb8888(640, 480, 640).unwrap();
		assert_eq!(xrgb.pack(0x12, 0x34, 0x56), 0x0012_3456);
		let xbgr = DeviceFormat::from_mode(ModeInfo {
			red: Channel::new(0, 8),
			blue: Channel::new(16, 8),
			..mode()
		})
		.unwrap();
		assert_eq!(xbgr.pack(0x12, 0x34, 0x56), 0x0056_3412);
	}

	#[test]
	fn narrow_channels_keep_their_high_bits() {
		// 2:10:10:10 style layout with 6 significant bits per channel
		let fmt = DeviceFormat::from_mode(ModeInfo {
			red: Channel::new(20, 6),
			green: Channel::new(10, 6),
			blue: Channel::new(0, 6),
			..mode()
		})
		.unwrap();
		assert_eq!(fmt.pack(0xFF, 0, 0), 0x3F << 20);
		assert_eq!(fmt.pack(0, 0xFF, 0), 0x3F << 10);
		assert_eq!(fmt.pack(0, 0, 0xFF), 0x3F);
		assert_eq!(fmt.pack(0x84, 0x84, 0x84), 0x21 << 20 | 0x21 << 10 | 0x21);

		let rgb565 = DeviceFormat::from_mode(ModeInfo {
			red: Channel::new(11, 5),
			green: Channel::new(5, 6),
			blue: Channel::new(0, 5),
			..mode()
		})
		.unwrap();
		assert_eq!(rgb565.pack(0xFF, 0xFF, 0xFF), 0xFFFF);
		assert_eq!(rgb565.pack(0x07, 0x03, 0x07), 0);
	}
}

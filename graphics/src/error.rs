use thiserror::Error;

/*
 * enum GraphicsError - Display configuration failures
 *
 * All of these are detected while setting up the display. Nothing on the
 * per-frame path returns an error.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphicsError {
	#[error("unsupported scale factor {0}, expected 1, 2 or 3")]
	UnsupportedScale(u8),
	#[error("unsupported pixel depth of {0} bits, only 32 bpp is handled")]
	UnsupportedDepth(u16),
	#[error("{name} channel at bit {shift} with {len} bits does not fit a pixel word")]
	UnsupportedChannel { name: &'static str, shift: u8, len: u8 },
	#[error("scanline of {bytes} bytes is not a whole number of pixel words")]
	PitchAlignment { bytes: u32 },
	#[error("pitch of {pitch} pixels is narrower than the {width} pixel wide mode")]
	PitchTooSmall { pitch: u32, width: u32 },
	#[error("{width}x{height} cannot hold a 320x200 picture")]
	ResolutionTooSmall { width: u32, height: u32 },
	#[error("{factor}x scaling needs {need_width}x{need_height}, display is {width}x{height}")]
	ScaleDoesNotFit {
		factor: u8,
		need_width: u32,
		need_height: u32,
		width: u32,
		height: u32,
	},
	#[error("framebuffer holds {len} pixel words, mode needs {need}")]
	FramebufferTooSmall { len: usize, need: usize },
	#[error("frame of {0} bytes, expected 320x200")]
	FrameSize(usize),
	#[error("palette data of {0} bytes is not a list of RGB triples")]
	PaletteSize(usize),
	#[error("palette entries {first}..{end} run past index 255")]
	PaletteRange { first: usize, end: usize },
	#[error("gamma level {0} out of range 0..=4")]
	GammaLevel(u8),
}

/*
 * Frame Driver
 *
 * Owns everything between the hardware and the game: the scan code
 * source and its decoder, the palette and its device color table, the
 * blitter and the framebuffer. Driven once per tic.
 */

use alloc::vec::Vec;

use graphics::{
	ColorTable, ColorTableManager, DeviceFormat, Framebuffer, GammaLevel, GraphicsError, IndexedFrame, Palette,
	ScaleMode, ScalingBlitter,
};
use keyboard::{KeyEvent, KeyStream, ScancodeSource, Scanset};

use crate::config::{ScansetPolicy, VideoConfig};
use crate::error::DriverError;

/*
 * trait Engine - The game side of a tic
 *
 * respond() sees the input gathered this tic, render() hands back the
 * finished frame and may change the palette through @palette.
 */
pub trait Engine {
	fn respond(&mut self, events: &[KeyEvent]);
	fn render<'e>(&'e mut self, palette: &mut PaletteUpdate<'_>) -> IndexedFrame<'e>;
}

/* Palette access for the engine; any write marks the color table stale */
pub struct PaletteUpdate<'a> {
	palette: &'a mut Palette,
	dirty: &'a mut bool,
}

impl PaletteUpdate<'_> {
	pub fn current(&self) -> &Palette {
		self.palette
	}

	pub fn replace(&mut self, palette: &Palette) {
		self.palette.clone_from(palette);
		*self.dirty = true;
	}

	pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<(), GraphicsError> {
		*self.palette = Palette::from_bytes(bytes)?;
		*self.dirty = true;
		Ok(())
	}

	pub fn set_range(&mut self, first: usize, bytes: &[u8]) -> Result<(), GraphicsError> {
		self.palette.set_range(first, bytes)?;
		*self.dirty = true;
		Ok(())
	}
}

pub struct FrameDriver<'fb, S: ScancodeSource> {
	source: S,
	keys: KeyStream,
	palette: Palette,
	palette_dirty: bool,
	colors: ColorTableManager,
	blitter: ScalingBlitter,
	framebuffer: Framebuffer<'fb>,
}

impl<'fb, S: ScancodeSource> FrameDriver<'fb, S> {
	/*
	 * new - Set up the display and input path
	 * @source: non-blocking scan code byte source
	 * @framebuffer: video memory, already validated against its format
	 * @config: scale, gamma, placement and scan set policy
	 *
	 * Fails when the configured scale does not fit the device or the
	 * device is smaller than 320x200.
	 */
	pub fn new(source: S, framebuffer: Framebuffer<'fb>, config: &VideoConfig) -> Result<Self, DriverError> {
		let format = *framebuffer.format();
		hal::log_info!("video", "framebuffer {}", format);

		let mode = ScaleMode::select(&format, config.scale)?;
		let blitter = ScalingBlitter::new(format, mode, config.placement)?;
		let layout = blitter.layout();
		hal::log_info!(
			"video",
			"scale {}x{} placement {:?}, origin {} row offset {}",
			mode.factor(),
			mode.factor(),
			config.placement,
			layout.origin,
			layout.row_offset
		);

		let keys = match config.scanset {
			ScansetPolicy::Detect => KeyStream::detecting(),
			ScansetPolicy::Fixed(scanset) => {
				hal::log_info!("ps2", "scan code set {} fixed by configuration", scanset.number());
				KeyStream::with_scanset(scanset)
			}
		};

		Ok(FrameDriver {
			source,
			keys,
			palette: Palette::default(),
			palette_dirty: true,
			colors: ColorTableManager::new(format, config.gamma),
			blitter,
			framebuffer,
		})
	}

	pub fn format(&self) -> &DeviceFormat {
		self.framebuffer.format()
	}

	pub fn scale_mode(&self) -> ScaleMode {
		self.blitter.mode()
	}

	/* None while the scan set is still being detected */
	pub fn scanset(&self) -> Option<Scanset> {
		self.keys.scanset()
	}

	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	pub fn palette_dirty(&self) -> bool {
		self.palette_dirty
	}

	/* The table used by the last present_frame() */
	pub fn color_table(&self) -> &ColorTable {
		self.colors.table()
	}

	pub fn framebuffer(&self) -> &Framebuffer<'fb> {
		&self.framebuffer
	}

	pub fn source_mut(&mut self) -> &mut S {
		&mut self.source
	}

	/*
	 * pump_input - Drain the scan code source
	 *
	 * Returns the decoded events in arrival order; empty when no bytes
	 * were waiting. Only fails while the scan set is undetermined and
	 * the first keystroke matched neither set.
	 */
	pub fn pump_input(&mut self) -> Result<Vec<KeyEvent>, DriverError> {
		let mut events = Vec::new();
		self.keys.drain(&mut self.source, &mut events)?;
		Ok(events)
	}

	pub fn set_palette(&mut self, bytes: &[u8]) -> Result<(), DriverError> {
		self.palette = Palette::from_bytes(bytes)?;
		self.palette_dirty = true;
		Ok(())
	}

	pub fn set_palette_range(&mut self, first: usize, bytes: &[u8]) -> Result<(), DriverError> {
		self.palette.set_range(first, bytes)?;
		self.palette_dirty = true;
		Ok(())
	}

	pub fn set_gamma(&mut self, gamma: GammaLevel) {
		if gamma == self.colors.gamma() {
			return;
		}
		hal::log_info!("video", "gamma level {}", gamma.level());
		self.colors.set_gamma(gamma);
		self.palette_dirty = true;
	}

	/* Draw the word index pattern over the whole screen */
	pub fn show_test_pattern(&mut self) {
		self.framebuffer.fill_test_pattern();
	}

	/*
	 * present_frame - Put @frame on screen
	 *
	 * Rebuilds the color table first if the palette or gamma changed
	 * since the last call. Presenting the same frame twice writes the
	 * same words.
	 */
	pub fn present_frame(&mut self, frame: IndexedFrame<'_>) {
		if self.palette_dirty {
			self.colors.set_palette(&self.palette);
			self.palette_dirty = false;
		}
		self.blitter.present(frame, self.colors.table(), &mut self.framebuffer);
	}

	/*
	 * run_tic - One pass of the game loop
	 * @engine: consumes input, produces the next frame
	 *
	 * Input is pumped before the engine runs and the frame is presented
	 * once, after the engine has finished drawing it.
	 */
	pub fn run_tic<E: Engine + ?Sized>(&mut self, engine: &mut E) -> Result<(), DriverError> {
		let events = self.pump_input()?;
		engine.respond(&events);

		let mut palette = PaletteUpdate {
			palette: &mut self.palette,
			dirty: &mut self.palette_dirty,
		};
		let frame = engine.render(&mut palette);
		self.present_frame(frame);
		Ok(())
	}
}

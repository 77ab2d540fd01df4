/*
 * Test Picture
 *
 * Stand-in engine for bringing up a machine: a scrolling XOR pattern in
 * a color ramp with a white border, moved with the arrow keys. Every key
 * event is echoed to the serial log.
 */

use alloc::boxed::Box;

use driver::{Engine, PaletteUpdate};
use graphics::{IndexedFrame, Palette, Rgb, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};
use keyboard::{KeyEvent, Vkey};

const BORDER: u8 = 255;

pub struct TestPicture {
	pixels: Box<[u8; SCREEN_PIXELS]>,
	dx: usize,
	dy: usize,
	palette_sent: bool,
}

impl TestPicture {
	pub fn new() -> Self {
		TestPicture {
			pixels: Box::new([0; SCREEN_PIXELS]),
			dx: 0,
			dy: 0,
			palette_sent: false,
		}
	}

	fn ramp() -> Palette {
		let mut palette = Palette::black();
		for i in 0..BORDER {
			palette.set(i, Rgb::new(i, i.wrapping_mul(2), 255 - i));
		}
		palette.set(BORDER, Rgb::new(0xFF, 0xFF, 0xFF));
		palette
	}

	fn draw(&mut self) {
		for (y, row) in self.pixels.chunks_exact_mut(SCREEN_WIDTH).enumerate() {
			for (x, pixel) in row.iter_mut().enumerate() {
				let edge = x == 0 || y == 0 || x == SCREEN_WIDTH - 1 || y == SCREEN_HEIGHT - 1;
				*pixel = if edge {
					BORDER
				} else {
					((x.wrapping_add(self.dx) ^ y.wrapping_add(self.dy)) % usize::from(BORDER)) as u8
				};
			}
		}
	}
}

impl Engine for TestPicture {
	fn respond(&mut self, events: &[KeyEvent]) {
		for event in events {
			hal::log_info!("input", "{}", event);
			if !event.pressed {
				continue;
			}
			match event.vkey {
				Vkey::LEFT_ARROW => self.dx = self.dx.wrapping_add(1),
				Vkey::RIGHT_ARROW => self.dx = self.dx.wrapping_sub(1),
				Vkey::UP_ARROW => self.dy = self.dy.wrapping_add(1),
				Vkey::DOWN_ARROW => self.dy = self.dy.wrapping_sub(1),
				Vkey::ESCAPE => (self.dx, self.dy) = (0, 0),
				_ => {}
			}
		}
	}

	fn render<'e>(&'e mut self, palette: &mut PaletteUpdate<'_>) -> IndexedFrame<'e> {
		if !self.palette_sent {
			palette.replace(&Self::ramp());
			self.palette_sent = true;
		}
		self.draw();
		IndexedFrame::from_array(&self.pixels)
	}
}

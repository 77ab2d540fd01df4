/*
 * Scan Code Tables
 *
 * Maps raw make codes of scan code sets 1 and 2 to virtual keys. Plain
 * codes index `base`, codes that followed an 0xE0 prefix index
 * `extended`. A missing entry means the key is not reported.
 */

use crate::error::KeyboardError;
use crate::vkey::Vkey;

pub const RELEASE_PREFIX: u8 = 0xF0;
pub const EXTENDED_PREFIX: u8 = 0xE0;
pub const EXTENDED_PAUSE_PREFIX: u8 = 0xE1;

/* Set 1 marks a break code by setting the top bit of the make code */
pub const SET1_BREAK_BIT: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scanset {
	Set1 = 1,
	Set2 = 2,
}

impl Scanset {
	pub fn table(self) -> &'static ScanTable {
		match self {
			Scanset::Set1 => &SET1,
			Scanset::Set2 => &SET2,
		}
	}

	/* Bytes of the Pause sequence still to come after its 0xE1 lead byte */
	pub const fn pause_tail(self) -> u8 {
		match self {
			Scanset::Set1 => 5,
			Scanset::Set2 => 7,
		}
	}

	pub const fn number(self) -> u8 {
		self as u8
	}
}

impl TryFrom<u8> for Scanset {
	type Error = KeyboardError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(Scanset::Set1),
			2 => Ok(Scanset::Set2),
			other => Err(KeyboardError::UnsupportedScanset(other)),
		}
	}
}

pub struct ScanTable {
	base: [Option<Vkey>; 256],
	extended: [Option<Vkey>; 256],
}

impl ScanTable {
	/*
	 * lookup - Translate an effective scan code
	 * @code: raw byte, or 0xE000 | byte after an extended prefix
	 */
	pub fn lookup(&self, code: u16) -> Option<Vkey> {
		let low = (code & 0xFF) as usize;
		match code >> 8 {
			0 => self.base[low],
			0xE0 => self.extended[low],
			_ => None,
		}
	}
}

const fn build(pairs: &[(u8, Vkey)]) -> [Option<Vkey>; 256] {
	let mut table = [None; 256];
	let mut i = 0;
	while i < pairs.len() {
		table[pairs[i].0 as usize] = Some(pairs[i].1);
		i += 1;
	}
	table
}

const fn a(c: u8) -> Vkey {
	Vkey::ascii(c)
}

static SET1: ScanTable = ScanTable {
	base: build(&[
		(0x01, Vkey::ESCAPE),
		(0x02, a(b'1')), (0x03, a(b'2')), (0x04, a(b'3')), (0x05, a(b'4')),
		(0x06, a(b'5')), (0x07, a(b'6')), (0x08, a(b'7')), (0x09, a(b'8')),
		(0x0A, a(b'9')), (0x0B, a(b'0')),
		(0x0C, Vkey::MINUS), (0x0D, Vkey::EQUALS),
		(0x0E, Vkey::BACKSPACE), (0x0F, Vkey::TAB),
		(0x10, a(b'q')), (0x11, a(b'w')), (0x12, a(b'e')), (0x13, a(b'r')),
		(0x14, a(b't')), (0x15, a(b'y')), (0x16, a(b'u')), (0x17, a(b'i')),
		(0x18, a(b'o')), (0x19, a(b'p')), (0x1A, a(b'[')), (0x1B, a(b']')),
		(0x1C, Vkey::ENTER), (0x1D, Vkey::RCTRL),
		(0x1E, a(b'a')), (0x1F, a(b's')), (0x20, a(b'd')), (0x21, a(b'f')),
		(0x22, a(b'g')), (0x23, a(b'h')), (0x24, a(b'j')), (0x25, a(b'k')),
		(0x26, a(b'l')), (0x27, a(b';')), (0x28, a(b'\'')), (0x29, a(b'`')),
		(0x2A, Vkey::RSHIFT), (0x2B, a(b'\\')),
		(0x2C, a(b'z')), (0x2D, a(b'x')), (0x2E, a(b'c')), (0x2F, a(b'v')),
		(0x30, a(b'b')), (0x31, a(b'n')), (0x32, a(b'm')), (0x33, a(b',')),
		(0x34, a(b'.')), (0x35, a(b'/')), (0x36, Vkey::RSHIFT),
		(0x37, a(b'*')), (0x38, Vkey::RALT), (0x39, Vkey::SPACE),
		(0x3B, Vkey::F1), (0x3C, Vkey::F2), (0x3D, Vkey::F3), (0x3E, Vkey::F4),
		(0x3F, Vkey::F5), (0x40, Vkey::F6), (0x41, Vkey::F7), (0x42, Vkey::F8),
		(0x43, Vkey::F9), (0x44, Vkey::F10),
		(0x4A, Vkey::MINUS), //keypad
		(0x4E, a(b'+')),     //keypad
		(0x57, Vkey::F11), (0x58, Vkey::F12),
	]),
	extended: build(&[
		(0x1C, Vkey::ENTER), //keypad
		(0x1D, Vkey::RCTRL),
		(0x35, a(b'/')), //keypad
		(0x38, Vkey::RALT),
		(0x48, Vkey::UP_ARROW),
		(0x4B, Vkey::LEFT_ARROW),
		(0x4D, Vkey::RIGHT_ARROW),
		(0x50, Vkey::DOWN_ARROW),
		(0x53, Vkey::BACKSPACE), //delete
	]),
};

static SET2: ScanTable = ScanTable {
	base: build(&[
		(0x01, Vkey::F9), (0x03, Vkey::F5), (0x04, Vkey::F3), (0x05, Vkey::F1),
		(0x06, Vkey::F2), (0x07, Vkey::F12), (0x09, Vkey::F10), (0x0A, Vkey::F8),
		(0x0B, Vkey::F6), (0x0C, Vkey::F4), (0x0D, Vkey::TAB), (0x0E, a(b'`')),
		(0x11, Vkey::RALT), (0x12, Vkey::RSHIFT), (0x14, Vkey::RCTRL),
		(0x15, a(b'q')), (0x16, a(b'1')),
		(0x1A, a(b'z')), (0x1B, a(b's')), (0x1C, a(b'a')), (0x1D, a(b'w')),
		(0x1E, a(b'2')),
		(0x21, a(b'c')), (0x22, a(b'x')), (0x23, a(b'd')), (0x24, a(b'e')),
		(0x25, a(b'4')), (0x26, a(b'3')),
		(0x29, Vkey::SPACE), (0x2A, a(b'v')), (0x2B, a(b'f')), (0x2C, a(b't')),
		(0x2D, a(b'r')), (0x2E, a(b'5')),
		(0x31, a(b'n')), (0x32, a(b'b')), (0x33, a(b'h')), (0x34, a(b'g')),
		(0x35, a(b'y')), (0x36, a(b'6')),
		(0x3A, a(b'm')), (0x3B, a(b'j')), (0x3C, a(b'u')), (0x3D, a(b'7')),
		(0x3E, a(b'8')),
		(0x41, a(b',')), (0x42, a(b'k')), (0x43, a(b'i')), (0x44, a(b'o')),
		(0x45, a(b'0')), (0x46, a(b'9')),
		(0x49, a(b'.')), (0x4A, a(b'/')), (0x4B, a(b'l')), (0x4C, a(b';')),
		(0x4D, a(b'p')), (0x4E, Vkey::MINUS),
		(0x52, a(b'\'')), (0x54, a(b'[')), (0x55, Vkey::EQUALS),
		(0x59, Vkey::RSHIFT), (0x5A, Vkey::ENTER), (0x5B, a(b']')),
		(0x5D, a(b'\\')),
		(0x66, Vkey::BACKSPACE),
		(0x76, Vkey::ESCAPE), (0x78, Vkey::F11),
		(0x79, a(b'+')),     //keypad
		(0x7B, Vkey::MINUS), //keypad
		(0x7C, a(b'*')),     //keypad
		(0x83, Vkey::F7),
	]),
	extended: build(&[
		(0x11, Vkey::RALT),
		(0x14, Vkey::RCTRL),
		(0x4A, a(b'/')), //keypad
		(0x5A, Vkey::ENTER), //keypad
		(0x6B, Vkey::LEFT_ARROW),
		(0x71, Vkey::BACKSPACE), //delete
		(0x72, Vkey::DOWN_ARROW),
		(0x74, Vkey::RIGHT_ARROW),
		(0x75, Vkey::UP_ARROW),
	]),
};

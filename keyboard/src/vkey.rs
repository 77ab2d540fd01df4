/*
 * Virtual Keys
 *
 * Device-independent key identifiers handed to the game engine. Printable
 * keys use their lowercase ASCII code; everything else lives above 0x7F
 * in the engine's own key space. Left and right modifiers collapse into
 * a single "right" variant.
 */

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vkey(pub u16);

impl Vkey {
	pub const TAB: Vkey = Vkey(9);
	pub const ENTER: Vkey = Vkey(13);
	pub const ESCAPE: Vkey = Vkey(27);
	pub const SPACE: Vkey = Vkey(b' ' as u16);
	pub const MINUS: Vkey = Vkey(b'-' as u16);
	pub const EQUALS: Vkey = Vkey(b'=' as u16);
	pub const BACKSPACE: Vkey = Vkey(127);

	pub const LEFT_ARROW: Vkey = Vkey(0xAC);
	pub const UP_ARROW: Vkey = Vkey(0xAD);
	pub const RIGHT_ARROW: Vkey = Vkey(0xAE);
	pub const DOWN_ARROW: Vkey = Vkey(0xAF);

	pub const F1: Vkey = Vkey(0x80 + 0x3B);
	pub const F2: Vkey = Vkey(0x80 + 0x3C);
	pub const F3: Vkey = Vkey(0x80 + 0x3D);
	pub const F4: Vkey = Vkey(0x80 + 0x3E);
	pub const F5: Vkey = Vkey(0x80 + 0x3F);
	pub const F6: Vkey = Vkey(0x80 + 0x40);
	pub const F7: Vkey = Vkey(0x80 + 0x41);
	pub const F8: Vkey = Vkey(0x80 + 0x42);
	pub const F9: Vkey = Vkey(0x80 + 0x43);
	pub const F10: Vkey = Vkey(0x80 + 0x44);
	pub const F11: Vkey = Vkey(0x80 + 0x57);
	pub const F12: Vkey = Vkey(0x80 + 0x58);

	pub const RSHIFT: Vkey = Vkey(0x80 + 0x36);
	pub const RCTRL: Vkey = Vkey(0x80 + 0x1D);
	pub const RALT: Vkey = Vkey(0x80 + 0x38);

	pub const PAUSE: Vkey = Vkey(0xFF);

	/*
	 * ascii - Key for a printable character
	 *
	 * Letters are folded to lowercase, the engine never sees capitals.
	 */
	pub const fn ascii(c: u8) -> Vkey {
		Vkey(c.to_ascii_lowercase() as u16)
	}

	pub const fn code(self) -> u16 {
		self.0
	}

	pub fn is_printable(self) -> bool {
		(0x20..0x7F).contains(&self.0)
	}

	fn name(self) -> Option<&'static str> {
		let name = match self {
			Vkey::TAB => "tab",
			Vkey::ENTER => "enter",
			Vkey::ESCAPE => "escape",
			Vkey::SPACE => "space",
			Vkey::BACKSPACE => "backspace",
			Vkey::LEFT_ARROW => "left",
			Vkey::UP_ARROW => "up",
			Vkey::RIGHT_ARROW => "right",
			Vkey::DOWN_ARROW => "down",
			Vkey::F1 => "f1",
			Vkey::F2 => "f2",
			Vkey::F3 => "f3",
			Vkey::F4 => "f4",
			Vkey::F5 => "f5",
			Vkey::F6 => "f6",
			Vkey::F7 => "f7",
			Vkey::F8 => "f8",
			Vkey::F9 => "f9",
			Vkey::F10 => "f10",
			Vkey::F11 => "f11",
			Vkey::F12 => "f12",
			Vkey::RSHIFT => "shift",
			Vkey::RCTRL => "ctrl",
			Vkey::RALT => "alt",
			Vkey::PAUSE => "pause",
			_ => return None,
		};
		Some(name)
	}
}

impl fmt::Display for Vkey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None if self.is_printable() => write!(f, "'{}'", self.0 as u8 as char),
			None => write!(f, "vkey {:#x}", self.0),
		}
	}
}

/*
 * struct KeyEvent - One key transition
 * @vkey: Which key
 * @pressed: true on make, false on break
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
	pub vkey: Vkey,
	pub pressed: bool,
}

impl KeyEvent {
	pub const fn press(vkey: Vkey) -> Self {
		KeyEvent { vkey, pressed: true }
	}

	pub const fn release(vkey: Vkey) -> Self {
		KeyEvent { vkey, pressed: false }
	}
}

impl fmt::Display for KeyEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let action = if self.pressed { "down" } else { "up" };
		write!(f, "{} {}", self.vkey, action)
	}
}

/*
 * PS/2 Scan Code Decoder
 *
 * Byte-at-a-time state machine turning a locked scan set's byte stream
 * into key events. Prefix bytes only update the pending flags; the byte
 * that completes a sequence produces at most one event. Anything the
 * tables do not know is dropped and the machine returns to normal.
 */

use bitflags::bitflags;

use crate::scancode::{
	Scanset, EXTENDED_PAUSE_PREFIX, EXTENDED_PREFIX, RELEASE_PREFIX, SET1_BREAK_BIT,
};
use crate::vkey::{KeyEvent, Vkey};

bitflags! {
	/* Prefixes seen but not yet consumed by a completing byte */
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	pub struct Pending: u8 {
		const EXTENDED = 0x01;
		const RELEASE = 0x02;
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
	Normal,
	Pending(Pending),
	Ignoring(u8),
}

#[derive(Debug, Clone)]
pub struct Ps2Decoder {
	scanset: Scanset,
	pending: Pending,
	ignore: u8,
}

impl Ps2Decoder {
	pub const fn new(scanset: Scanset) -> Self {
		Ps2Decoder {
			scanset,
			pending: Pending::empty(),
			ignore: 0,
		}
	}

	pub fn scanset(&self) -> Scanset {
		self.scanset
	}

	pub fn state(&self) -> DecoderState {
		if self.ignore > 0 {
			DecoderState::Ignoring(self.ignore)
		} else if self.pending.is_empty() {
			DecoderState::Normal
		} else {
			DecoderState::Pending(self.pending)
		}
	}

	pub fn reset(&mut self) {
		self.pending = Pending::empty();
		self.ignore = 0;
	}

	/*
	 * push - Feed one raw byte
	 * @byte: next byte read from the keyboard data port
	 *
	 * Returns the event completed by this byte, if any.
	 */
	pub fn push(&mut self, byte: u8) -> Option<KeyEvent> {
		if self.ignore > 0 {
			self.ignore -= 1;
			return None;
		}

		match byte {
			RELEASE_PREFIX if self.scanset == Scanset::Set2 => {
				self.pending |= Pending::RELEASE;
				return None;
			}
			EXTENDED_PREFIX => {
				self.pending |= Pending::EXTENDED;
				return None;
			}
			EXTENDED_PAUSE_PREFIX => {
				//Pause has no break code worth waiting for: report it once
				self.pending = Pending::empty();
				self.ignore = self.scanset.pause_tail();
				return Some(KeyEvent::press(Vkey::PAUSE));
			}
			_ => {}
		}

		let mut code = byte as u16;
		if self.pending.contains(Pending::EXTENDED) {
			code |= 0xE000;
			self.pending.remove(Pending::EXTENDED);
		}

		let pressed = match self.scanset {
			Scanset::Set1 => {
				let pressed = byte & SET1_BREAK_BIT == 0;
				code &= !(SET1_BREAK_BIT as u16);
				pressed
			}
			Scanset::Set2 => !self.pending.contains(Pending::RELEASE),
		};

		let Some(vkey) = self.scanset.table().lookup(code) else {
			hal::log_debug!("ps2", "unmapped scan code {:#06x}", code);
			self.reset();
			return None;
		};

		self.pending.remove(Pending::RELEASE);
		Some(KeyEvent { vkey, pressed })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn feed(decoder: &mut Ps2Decoder, bytes: &[u8]) -> Vec<KeyEvent> {
		bytes.iter().filter_map(|&b| decoder.push(b)).collect()
	}

	#[test]
	fn set2_make_and_break() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		assert_eq!(dec.push(0x1C), Some(KeyEvent::press(Vkey::ascii(b'a'))));
		assert_eq!(dec.push(0xF0), None);
		assert_eq!(dec.state(), DecoderState::Pending(Pending::RELEASE));
		assert_eq!(dec.push(0x1C), Some(KeyEvent::release(Vkey::ascii(b'a'))));
		assert_eq!(dec.state(), DecoderState::Normal);
	}

	#[test]
	fn set2_extended_press_is_silent_until_complete() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		assert_eq!(dec.push(0xE0), None);
		assert_eq!(dec.state(), DecoderState::Pending(Pending::EXTENDED));
		assert_eq!(dec.push(0x75), Some(KeyEvent::press(Vkey::UP_ARROW)));
		assert_eq!(dec.state(), DecoderState::Normal);
	}

	#[test]
	fn set2_extended_release_sets_both_flags() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		assert_eq!(dec.push(0xE0), None);
		assert_eq!(dec.push(0xF0), None);
		assert_eq!(dec.state(), DecoderState::Pending(Pending::EXTENDED | Pending::RELEASE));
		assert_eq!(dec.push(0x6B), Some(KeyEvent::release(Vkey::LEFT_ARROW)));
		assert_eq!(dec.state(), DecoderState::Normal);
	}

	#[test]
	fn set2_pause_reports_once() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		let events = feed(&mut dec, &[0xE1, 0x14, 0x77, 0xE1, 0xF0, 0x14, 0xF0, 0x77]);
		assert_eq!(events, vec![KeyEvent::press(Vkey::PAUSE)]);
		assert_eq!(dec.state(), DecoderState::Normal);
		assert_eq!(dec.push(0x1C), Some(KeyEvent::press(Vkey::ascii(b'a'))));
	}

	#[test]
	fn pause_event_arrives_on_lead_byte() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		assert_eq!(dec.push(0xE1), Some(KeyEvent::press(Vkey::PAUSE)));
		assert_eq!(dec.state(), DecoderState::Ignoring(7));
		// Prefix bytes inside the sequence are swallowed, not interpreted.
		assert_eq!(dec.push(0xE0), None);
		assert_eq!(dec.state(), DecoderState::Ignoring(6));
	}

	#[test]
	fn set1_pause_ignores_five_bytes() {
		let mut dec = Ps2Decoder::new(Scanset::Set1);
		let events = feed(&mut dec, &[0xE1, 0x1D, 0x45, 0xE1, 0x9D, 0xC5]);
		assert_eq!(events, vec![KeyEvent::press(Vkey::PAUSE)]);
		assert_eq!(dec.state(), DecoderState::Normal);
	}

	#[test]
	fn set1_break_bit() {
		let mut dec = Ps2Decoder::new(Scanset::Set1);
		assert_eq!(dec.push(0x1E), Some(KeyEvent::press(Vkey::ascii(b'a'))));
		assert_eq!(dec.push(0x9E), Some(KeyEvent::release(Vkey::ascii(b'a'))));
		let events = feed(&mut dec, &[0xE0, 0x48, 0xE0, 0xC8]);
		assert_eq!(
			events,
			vec![KeyEvent::press(Vkey::UP_ARROW), KeyEvent::release(Vkey::UP_ARROW)]
		);
	}

	#[test]
	fn set1_has_no_release_prefix() {
		let mut dec = Ps2Decoder::new(Scanset::Set1);
		// 0xF0 is an ordinary (unmapped) code in set 1.
		assert_eq!(dec.push(0xF0), None);
		assert_eq!(dec.state(), DecoderState::Normal);
		assert_eq!(dec.push(0x1E), Some(KeyEvent::press(Vkey::ascii(b'a'))));
	}

	#[test]
	fn unknown_code_is_absorbed() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		assert_eq!(dec.push(0x7F), None);
		assert_eq!(dec.state(), DecoderState::Normal);
		assert_eq!(dec.push(0x1C), Some(KeyEvent::press(Vkey::ascii(b'a'))));
	}

	#[test]
	fn unknown_code_clears_pending_release() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		assert_eq!(dec.push(0xF0), None);
		assert_eq!(dec.push(0x7F), None);
		assert_eq!(dec.state(), DecoderState::Normal);
		// The stale release prefix must not turn the next make into a break.
		assert_eq!(dec.push(0x1C), Some(KeyEvent::press(Vkey::ascii(b'a'))));
	}

	#[test]
	fn unknown_extended_code_is_absorbed() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		assert_eq!(feed(&mut dec, &[0xE0, 0x1F]), vec![]);
		assert_eq!(dec.state(), DecoderState::Normal);
		assert_eq!(dec.push(0x5A), Some(KeyEvent::press(Vkey::ENTER)));
	}

	#[test]
	fn typing_a_word() {
		let mut dec = Ps2Decoder::new(Scanset::Set2);
		// i, d, d, q, d with releases
		let bytes = [
			0x43, 0xF0, 0x43, 0x23, 0xF0, 0x23, 0x23, 0xF0, 0x23, 0x15, 0xF0, 0x15, 0x23, 0xF0, 0x23,
		];
		let pressed: Vec<u8> = feed(&mut dec, &bytes)
			.into_iter()
			.filter(|e| e.pressed)
			.map(|e| e.vkey.code() as u8)
			.collect();
		assert_eq!(pressed, b"iddqd");
	}
}

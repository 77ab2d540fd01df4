/*
 * Scan Set Probe
 *
 * Not every keyboard (or emulator) honours the "set scan code set"
 * command, so the active set is inferred from the first keystroke:
 *
 *   set 1:  make, make | 0x80
 *   set 2:  make, 0xF0, make
 *
 * Controller chatter (ACKs, BAT results, zero bytes) ahead of the
 * keystroke is skipped.
 */

use crate::error::KeyboardError;
use crate::scancode::{Scanset, RELEASE_PREFIX, SET1_BREAK_BIT};
use crate::vkey::Vkey;

const KEYBOARD_ACK: u8 = 0xFA;
const KEYBOARD_BAT_OK: u8 = 0xAA;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
	First,
	Second { first: u8 },
	Third { first: u8 },
}

/*
 * enum ProbeStep - Outcome of feeding one byte to the probe
 * @Pending: more bytes needed
 * @Locked: scan set identified; @key is the probing keystroke, if mapped
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStep {
	Pending,
	Locked { scanset: Scanset, key: Option<Vkey> },
}

#[derive(Debug, Clone)]
pub struct ScansetProbe {
	stage: Stage,
}

impl Default for ScansetProbe {
	fn default() -> Self {
		Self::new()
	}
}

impl ScansetProbe {
	pub const fn new() -> Self {
		ScansetProbe { stage: Stage::First }
	}

	//Bytes that can never start a keystroke
	pub fn is_special(byte: u8) -> bool {
		byte >= KEYBOARD_ACK || byte == 0x00 || byte == KEYBOARD_BAT_OK
	}

	/*
	 * push - Feed one byte to the probe
	 *
	 * A failed probe starts over from scratch, so callers that choose to
	 * keep going may simply continue feeding bytes.
	 */
	pub fn push(&mut self, byte: u8) -> Result<ProbeStep, KeyboardError> {
		match self.stage {
			Stage::First => {
				if !Self::is_special(byte) {
					self.stage = Stage::Second { first: byte };
				}
				Ok(ProbeStep::Pending)
			}
			Stage::Second { first } => {
				if u16::from(first) + u16::from(SET1_BREAK_BIT) == u16::from(byte) {
					self.stage = Stage::First;
					return Ok(Self::locked(Scanset::Set1, first));
				}
				if byte == RELEASE_PREFIX {
					self.stage = Stage::Third { first };
					return Ok(ProbeStep::Pending);
				}
				self.stage = Stage::First;
				Err(KeyboardError::ScansetUndetected { first, second: byte })
			}
			Stage::Third { first } => {
				self.stage = Stage::First;
				if byte == first {
					Ok(Self::locked(Scanset::Set2, first))
				} else {
					Err(KeyboardError::ScansetUndetected { first, second: byte })
				}
			}
		}
	}

	fn locked(scanset: Scanset, make: u8) -> ProbeStep {
		ProbeStep::Locked {
			scanset,
			key: scanset.table().lookup(make as u16),
		}
	}
}

/*
 * Keyboard Byte Stream
 *
 * Front end for a PS/2 keyboard: runs the scan set probe until a set is
 * locked, then hands every further byte to the decoder. The probe is the
 * only stage that can fail.
 */

use crate::decoder::Ps2Decoder;
use crate::error::KeyboardError;
use crate::probe::{ProbeStep, ScansetProbe};
use crate::scancode::Scanset;
use crate::vkey::KeyEvent;

/*
 * trait ScancodeSource - Non-blocking supplier of raw keyboard bytes
 *
 * next_byte() returns None when nothing is pending; it never waits.
 */
pub trait ScancodeSource {
	fn next_byte(&mut self) -> Option<u8>;
}

#[derive(Debug, Clone)]
enum Phase {
	Probing(ScansetProbe),
	Decoding(Ps2Decoder),
}

#[derive(Debug, Clone)]
pub struct KeyStream {
	phase: Phase,
}

impl KeyStream {
	//Start undetermined; the first keystroke picks the scan set
	pub fn detecting() -> Self {
		KeyStream {
			phase: Phase::Probing(ScansetProbe::new()),
		}
	}

	pub fn with_scanset(scanset: Scanset) -> Self {
		KeyStream {
			phase: Phase::Decoding(Ps2Decoder::new(scanset)),
		}
	}

	pub fn scanset(&self) -> Option<Scanset> {
		match &self.phase {
			Phase::Probing(_) => None,
			Phase::Decoding(decoder) => Some(decoder.scanset()),
		}
	}

	pub fn decoder(&self) -> Option<&Ps2Decoder> {
		match &self.phase {
			Phase::Probing(_) => None,
			Phase::Decoding(decoder) => Some(decoder),
		}
	}

	/*
	 * push - Feed one byte, appending any completed events to @out
	 *
	 * The keystroke consumed by a successful probe is reported as a press
	 * followed by a release, since both halves were read.
	 */
	pub fn push<E>(&mut self, byte: u8, out: &mut E) -> Result<(), KeyboardError>
	where
		E: Extend<KeyEvent>,
	{
		hal::log_debug!("ps2", "byte {:#04x}", byte);
		match &mut self.phase {
			Phase::Decoding(decoder) => {
				out.extend(decoder.push(byte));
				Ok(())
			}
			Phase::Probing(probe) => match probe.push(byte) {
				Ok(ProbeStep::Pending) => Ok(()),
				Ok(ProbeStep::Locked { scanset, key }) => {
					hal::log_info!("ps2", "scan code set {} detected", scanset.number());
					if let Some(vkey) = key {
						out.extend([KeyEvent::press(vkey), KeyEvent::release(vkey)]);
					}
					self.phase = Phase::Decoding(Ps2Decoder::new(scanset));
					Ok(())
				}
				Err(err) => {
					hal::log_error!("ps2", "{}", err);
					Err(err)
				}
			},
		}
	}

	/*
	 * drain - Pull bytes from @source until it runs dry
	 *
	 * Stops at the first probe failure, leaving the remaining bytes in
	 * the source.
	 */
	pub fn drain<S, E>(&mut self, source: &mut S, out: &mut E) -> Result<(), KeyboardError>
	where
		S: ScancodeSource + ?Sized,
		E: Extend<KeyEvent>,
	{
		while let Some(byte) = source.next_byte() {
			self.push(byte, out)?;
		}
		Ok(())
	}
}

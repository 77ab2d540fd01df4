/*
 * i8042 PS/2 Controller
 *
 * Brings the keyboard port of the legacy controller into a known state
 * (IRQ on, translation off, scan code set 2) and then serves as the
 * non-blocking byte source for the decoder. All waits are bounded.
 */

use bitflags::bitflags;
use hal::cpu::spin_delay;
use hal::io::PortIo;
use hal::{log_info, log_warn};

use crate::error::KeyboardError;
use crate::scancode::Scanset;
use crate::stream::ScancodeSource;

const DATA_PORT: u16 = 0x60;
const STATUS_PORT: u16 = 0x64;
const COMMAND_PORT: u16 = 0x64;

/* Controller commands */
const CMD_READ_CONFIG: u8 = 0x20;
const CMD_WRITE_CONFIG: u8 = 0x60;
const CMD_DISABLE_PORT2: u8 = 0xA7;
const CMD_SELF_TEST: u8 = 0xAA;
const CMD_TEST_PORT1: u8 = 0xAB;
const CMD_DISABLE_PORT1: u8 = 0xAD;
const CMD_ENABLE_PORT1: u8 = 0xAE;

/* Keyboard commands */
const KBD_SET_LEDS: u8 = 0xED;
const KBD_SET_SCANCODE_SET: u8 = 0xF0;
const KBD_ENABLE_SCAN: u8 = 0xF4;
const KBD_DISABLE_SCAN: u8 = 0xF5;
const KBD_RESET: u8 = 0xFF;

/* Responses */
const SELF_TEST_OK: u8 = 0x55;
const PORT_TEST_OK: u8 = 0x00;
const KBD_ACK: u8 = 0xFA;
const KBD_BAT_OK: u8 = 0xAA;
const KBD_ERROR: u8 = 0xFC;

const POLL_LIMIT: u32 = 100_000;
const COMMAND_RETRIES: u32 = 8;
const CONFIG_RETRIES: u32 = 24;
const BAT_WAIT_BYTES: u32 = 16;

bitflags! {
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Status: u8 {
		const OUTPUT_FULL = 0x01;
		const INPUT_FULL = 0x02;
		const SYSTEM = 0x04;
		const COMMAND = 0x08;
		const AUX_DATA = 0x20;
		const TIMEOUT = 0x40;
		const PARITY = 0x80;
	}
}

bitflags! {
	/* Controller configuration byte */
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Config: u8 {
		const PORT1_IRQ = 0x01;
		const PORT2_IRQ = 0x02;
		const SYSTEM = 0x04;
		const PORT1_CLOCK_OFF = 0x10;
		const PORT2_CLOCK_OFF = 0x20;
		const TRANSLATION = 0x40;
	}
}

pub struct Controller<P: PortIo> {
	io: P,
}

impl<P: PortIo> Controller<P> {
	pub fn new(io: P) -> Self {
		Controller { io }
	}

	pub fn into_inner(self) -> P {
		self.io
	}

	pub fn status(&mut self) -> Status {
		Status::from_bits_retain(self.io.read_u8(STATUS_PORT))
	}

	/*
	 * init - Reset the controller and the keyboard behind it
	 *
	 * Leaves port 1 enabled with its IRQ on, translation off, and the
	 * keyboard switched to scan code set 2. The decoder still probes the
	 * set afterwards: some devices ignore the switch.
	 */
	pub fn init(&mut self) -> Result<(), KeyboardError> {
		self.command(CMD_DISABLE_PORT1)?;
		self.command(CMD_DISABLE_PORT2)?;
		self.flush();

		//Self test first, it clobbers the configuration byte on some chips
		self.command(CMD_SELF_TEST)?;
		let res = self.read()?;
		if res != SELF_TEST_OK {
			return Err(KeyboardError::ControllerSelfTest(res));
		}

		self.command(CMD_READ_CONFIG)?;
		let mut config = Config::from_bits_retain(self.read()?);
		config.insert(Config::PORT1_IRQ);
		config.remove(Config::TRANSLATION);
		self.write_config(config)?;

		self.command(CMD_TEST_PORT1)?;
		let res = self.read()?;
		if res != PORT_TEST_OK {
			return Err(KeyboardError::InterfaceTest(res));
		}

		self.command(CMD_ENABLE_PORT1)?;
		self.flush();

		self.reset_keyboard()?;
		self.set_scanset(Scanset::Set2)?;
		log_info!("i8042", "keyboard ready, config {:#04x}", config.bits());
		Ok(())
	}

	/*
	 * reset_keyboard - Reset the device and wait for its self test
	 *
	 * Returns ResetFailed if the keyboard reports a BAT error.
	 */
	pub fn reset_keyboard(&mut self) -> Result<(), KeyboardError> {
		self.keyboard_command(KBD_RESET)?;
		for _ in 0..BAT_WAIT_BYTES {
			match self.read()? {
				KBD_BAT_OK => return Ok(()),
				KBD_ERROR => return Err(KeyboardError::ResetFailed(KBD_ERROR)),
				_ => {}
			}
		}
		Err(KeyboardError::Timeout)
	}

	pub fn set_scanset(&mut self, scanset: Scanset) -> Result<(), KeyboardError> {
		self.keyboard_command(KBD_DISABLE_SCAN)?;
		self.keyboard_command_param(KBD_SET_SCANCODE_SET, scanset.number())?;
		self.keyboard_command(KBD_ENABLE_SCAN)
	}

	pub fn set_leds(&mut self, scroll_lock: bool, num_lock: bool, caps_lock: bool) -> Result<(), KeyboardError> {
		let leds = scroll_lock as u8 | (num_lock as u8) << 1 | (caps_lock as u8) << 2;
		self.keyboard_command_param(KBD_SET_LEDS, leds)
	}

	/*
	 * flush - Discard whatever sits in the output buffer
	 *
	 * Returns the number of bytes dropped. Racy by nature: an ACK still
	 * in flight lands after the flush.
	 */
	pub fn flush(&mut self) -> usize {
		let mut dropped = 0;
		for _ in 0..POLL_LIMIT {
			if !self.status().contains(Status::OUTPUT_FULL) {
				break;
			}
			self.io.read_u8(DATA_PORT);
			dropped += 1;
		}
		dropped
	}

	//Write the config byte and read it back until it sticks
	fn write_config(&mut self, config: Config) -> Result<(), KeyboardError> {
		for attempt in 0..CONFIG_RETRIES {
			self.command(CMD_WRITE_CONFIG)?;
			spin_delay(1 << attempt.min(16));
			self.write_data(config.bits())?;
			spin_delay(1 << attempt.min(16));
			self.command(CMD_READ_CONFIG)?;
			if self.read()? == config.bits() {
				return Ok(());
			}
		}
		log_warn!("i8042", "config byte {:#04x} did not stick", config.bits());
		Ok(())
	}

	fn keyboard_command(&mut self, cmd: u8) -> Result<(), KeyboardError> {
		for _ in 0..COMMAND_RETRIES {
			self.write_data(cmd)?;
			if self.read()? == KBD_ACK {
				return Ok(());
			}
		}
		Err(KeyboardError::NoAck(cmd))
	}

	fn keyboard_command_param(&mut self, cmd: u8, param: u8) -> Result<(), KeyboardError> {
		for _ in 0..COMMAND_RETRIES {
			self.write_data(cmd)?;
			if self.read()? != KBD_ACK {
				continue;
			}
			self.write_data(param)?;
			if self.read()? == KBD_ACK {
				return Ok(());
			}
		}
		Err(KeyboardError::NoAck(cmd))
	}

	fn command(&mut self, cmd: u8) -> Result<(), KeyboardError> {
		self.wait_input_empty()?;
		self.io.write_u8(COMMAND_PORT, cmd);
		Ok(())
	}

	fn write_data(&mut self, byte: u8) -> Result<(), KeyboardError> {
		self.wait_input_empty()?;
		self.io.write_u8(DATA_PORT, byte);
		Ok(())
	}

	//Blocking read, bounded by POLL_LIMIT status polls
	fn read(&mut self) -> Result<u8, KeyboardError> {
		for _ in 0..POLL_LIMIT {
			if self.status().contains(Status::OUTPUT_FULL) {
				return Ok(self.io.read_u8(DATA_PORT));
			}
			core::hint::spin_loop();
		}
		Err(KeyboardError::Timeout)
	}

	fn wait_input_empty(&mut self) -> Result<(), KeyboardError> {
		for _ in 0..POLL_LIMIT {
			if !self.status().contains(Status::INPUT_FULL) {
				return Ok(());
			}
			core::hint::spin_loop();
		}
		Err(KeyboardError::Timeout)
	}
}

impl<P: PortIo> ScancodeSource for Controller<P> {
	fn next_byte(&mut self) -> Option<u8> {
		if self.status().contains(Status::OUTPUT_FULL) {
			Some(self.io.read_u8(DATA_PORT))
		} else {
			None
		}
	}
}

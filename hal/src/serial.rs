use crate::io::{PortIo, X86PortIo};

//COM1 serial port base address
const COM1: u16 = 0x3F8;

//Serial port register offsets
const DATA_REG: u16 = 0;        //Data register
const INT_EN_REG: u16 = 1;      //Interrupt enable register
const FIFO_REG: u16 = 2;        //FIFO control register
const LINE_CTRL_REG: u16 = 3;   //Line control register
const MODEM_CTRL_REG: u16 = 4;  //Modem Control register
const LINE_STATUS_REG: u16 = 5; //Line status register

//Debug-level logging is compiled in only with the debug-log feature
pub const DEBUG_LOG: bool = cfg!(feature = "debug-log");

pub struct SerialPort {
	base: u16,
	io: X86PortIo,
}

impl SerialPort {
	//init COM1
	pub fn new() -> Self {
		let mut port = SerialPort {
			base: COM1,
			io: unsafe { X86PortIo::new() },
		};
		port.init();
		port
	}

	//115200 baud, 8N1, no interrupts: the core only ever polls
	fn init(&mut self) {
		let base = self.base;
		self.io.write_u8(base + INT_EN_REG, 0x00);     //Disable interrupts
		self.io.write_u8(base + LINE_CTRL_REG, 0x80);  //Enable DLAB
		self.io.write_u8(base + DATA_REG, 0x01);       //Divisor low byte
		self.io.write_u8(base + INT_EN_REG, 0x00);     //Divisor high byte
		self.io.write_u8(base + LINE_CTRL_REG, 0x03);  //8N1
		self.io.write_u8(base + FIFO_REG, 0xC7);       //enable fifo;clear;14 byte threshold
		self.io.write_u8(base + MODEM_CTRL_REG, 0x03); //DTR + RTS
	}

	fn is_transmit_empty(&mut self) -> bool {
		self.io.read_u8(self.base + LINE_STATUS_REG) & 0x20 != 0
	}

	pub fn write_byte(&mut self, byte: u8) {
		while !self.is_transmit_empty() {
			core::hint::spin_loop();
		}
		self.io.write_u8(self.base + DATA_REG, byte);
	}

	pub fn write_str(&mut self, s: &str) {
		for byte in s.bytes() {
			if byte == b'\n' {
				self.write_byte(b'\r');
			}
			self.write_byte(byte);
		}
	}
}

//Global serial port instance (lazy init)
use spin::Mutex;
use spin::Once;

static SERIAL_PORT: Once<Mutex<SerialPort>> = Once::new();

//init global serial port
pub fn init_serial() {
	SERIAL_PORT.call_once(|| Mutex::new(SerialPort::new()));
}

//True once init_serial() ran; before that all output is dropped
pub fn serial_ready() -> bool {
	SERIAL_PORT.get().is_some()
}

pub fn serial_print(s: &str) {
	if let Some(serial) = SERIAL_PORT.get() {
		serial.lock().write_str(s);
	}
}

//Serial print macro
#[macro_export]
macro_rules! serial_print {
	($($arg:tt)*) => {
		$crate::serial::_serial_print(format_args!($($arg)*))
	};
}

//Serial println macro
#[macro_export]
macro_rules! serial_println {
	() => ($crate::serial_print!("\n"));
	($($arg:tt)*) => {
		$crate::serial_print!("{}\n", format_args!($($arg)*))
	};
}

/*
 * Leveled logging
 *
 * log_info!("ps2", "scanset {} locked", 2) prints
 * "[INFO] ps2: scanset 2 locked". Debug lines vanish unless the
 * debug-log feature is on.
 */
#[macro_export]
macro_rules! log_info {
	($tag:expr, $($arg:tt)*) => {
		$crate::serial::_log("INFO", $tag, format_args!($($arg)*))
	};
}

#[macro_export]
macro_rules! log_warn {
	($tag:expr, $($arg:tt)*) => {
		$crate::serial::_log("WARN", $tag, format_args!($($arg)*))
	};
}

#[macro_export]
macro_rules! log_error {
	($tag:expr, $($arg:tt)*) => {
		$crate::serial::_log("ERROR", $tag, format_args!($($arg)*))
	};
}

#[macro_export]
macro_rules! log_debug {
	($tag:expr, $($arg:tt)*) => {
		if $crate::serial::DEBUG_LOG {
			$crate::serial::_log("DEBUG", $tag, format_args!($($arg)*))
		}
	};
}

//Internal function for serial printing with formatting
pub fn _serial_print(args: core::fmt::Arguments) {
	use core::fmt::Write;

	struct SerialWriter;

	impl Write for SerialWriter {
		fn write_str(&mut self, s: &str) -> core::fmt::Result {
			serial_print(s);
			Ok(())
		}
	}

	if !serial_ready() {
		return;
	}
	SerialWriter.write_fmt(args).ok();
}

pub fn _log(level: &str, tag: &str, args: core::fmt::Arguments) {
	_serial_print(format_args!("[{}] {}: {}\n", level, tag, args));
}

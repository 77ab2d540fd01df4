/*
 * Port I/O Operations
 *
 * Byte-wide x86 port access. Drivers talk to ports through the PortIo
 * trait so they can be driven by a scripted port map in tests.
 */

use x86_64::instructions::port::Port;

/*
 * trait PortIo - Byte-wide access to the I/O port space
 *
 * Implementors must not block; callers do their own polling.
 */
pub trait PortIo {
	fn read_u8(&mut self, port: u16) -> u8;
	fn write_u8(&mut self, port: u16, value: u8);
}

/*
 * struct X86PortIo - PortIo backed by the in/out instructions
 *
 * Only constructible through an unsafe constructor: whoever creates one
 * asserts the current privilege level is allowed to touch the ports.
 */
#[derive(Debug)]
pub struct X86PortIo {
	_private: (),
}

impl X86PortIo {
	/*
	 * new - Claim direct port access
	 *
	 * Safety: the caller must run at a privilege level with I/O permission
	 * and must not hand the same ports to a second driver.
	 */
	pub const unsafe fn new() -> Self {
		X86PortIo { _private: () }
	}
}

impl PortIo for X86PortIo {
	#[inline]
	fn read_u8(&mut self, port: u16) -> u8 {
		unsafe { inb(port) }
	}

	#[inline]
	fn write_u8(&mut self, port: u16, value: u8) {
		unsafe { outb(port, value) }
	}
}

/*
 * outb - Write a byte to an I/O port
 * @port: Port address
 * @value: Byte value to write
 */
#[inline]
pub unsafe fn outb(port: u16, value: u8) {
	let mut port: Port<u8> = Port::new(port);
	unsafe { port.write(value) }
}

/*
 * inb - Read a byte from an I/O port
 * @port: Port address
 *
 * Returns the byte value read from the port.
 */
#[inline]
pub unsafe fn inb(port: u16) -> u8 {
	let mut port: Port<u8> = Port::new(port);
	unsafe { port.read() }
}

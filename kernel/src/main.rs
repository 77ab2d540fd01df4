#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

extern crate alloc;

mod boot;
mod demo;
mod heap;

use driver::{DriverError, FrameDriver, VideoConfig};
use graphics::{DeviceFormat, Framebuffer, GraphicsError};
use hal::X86PortIo;
use keyboard::{Controller, KeyboardError};
use thiserror::Error;

/* Spin iterations between tics; the game loop has no timer to wait on */
const TIC_SPIN: u32 = 200_000;
/* Time the test picture stays up before the first frame */
const TEST_PATTERN_SPIN: u32 = 50_000_000;

#[derive(Debug, Error)]
pub enum KernelError {
	#[error("boot loader base revision not supported")]
	BaseRevision,
	#[error("boot loader provided no framebuffer")]
	NoFramebuffer,
	#[error("{0}")]
	Keyboard(#[from] KeyboardError),
	#[error("{0}")]
	Graphics(#[from] GraphicsError),
	#[error("{0}")]
	Driver(#[from] DriverError),
}

#[cfg(not(test))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
	hal::serial_println!("[KERNEL PANIC]");
	if let Some(loc) = info.location() {
		hal::serial_println!("Location: {}:{}", loc.file(), loc.line());
	}
	hal::serial_println!("{}", info.message());
	hal::cpu::halt_loop();
}

#[cfg(not(test))]
#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
	hal::init_serial();
	hal::log_info!("kernel", "starting");

	match run() {
		Ok(never) => match never {},
		Err(err) => {
			hal::log_error!("kernel", "fatal: {}", err);
			hal::cpu::halt_loop();
		}
	}
}

/*
 * run - Bring up display and keyboard, then drive the tic loop
 *
 * Only returns if initialization fails or the keyboard's scan set
 * cannot be identified.
 */
fn run() -> Result<core::convert::Infallible, KernelError> {
	boot::check_revision()?;
	heap::init_heap();

	let options = option_env!("FRAME_OPTIONS").unwrap_or("");
	let config = VideoConfig::parse(options)?;
	hal::log_info!("kernel", "options '{}': {:?}", options, config);

	let (mode, base) = boot::framebuffer()?;
	let format = DeviceFormat::from_mode(mode)?;
	// SAFETY: limine maps the whole framebuffer and nothing else touches it.
	let framebuffer = unsafe { Framebuffer::from_raw(base, format) };

	// SAFETY: the i8042 ports are owned by this controller alone.
	let mut controller = Controller::new(unsafe { X86PortIo::new() });
	controller.init()?;
	hal::log_info!("ps2", "controller ready");

	let mut driver = FrameDriver::new(controller, framebuffer, &config)?;
	driver.show_test_pattern();
	hal::cpu::spin_delay(TEST_PATTERN_SPIN);

	let mut engine = demo::TestPicture::new();
	loop {
		driver.run_tic(&mut engine)?;
		hal::cpu::spin_delay(TIC_SPIN);
	}
}

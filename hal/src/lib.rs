/*
 * Hardware Abstraction Layer (HAL)
 *
 * Provides the low-level hardware access the display/input core needs:
 * - Port I/O behind the PortIo trait (real ports or test doubles)
 * - Serial console and leveled logging macros
 * - CPU halt helpers
 */

#![allow(dead_code)]
#![cfg_attr(not(test), no_std)]

pub mod cpu;
pub mod io;
pub mod serial;

pub use io::*;
pub use serial::{init_serial, serial_print};

/*
 * Frame Driver
 *
 * Glue between a 320x200 indexed-color game and the bare machine: keyboard
 * events in, scaled frames out, once per tic.
 */

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod config;
pub mod error;
pub mod frame_driver;

pub use config::{ScansetPolicy, VideoConfig};
pub use error::DriverError;
pub use frame_driver::{Engine, FrameDriver, PaletteUpdate};

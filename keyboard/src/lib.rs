/*
 * PS/2 Keyboard Input
 *
 * Turns the raw byte stream of a PS/2 keyboard into key press/release
 * events: scan code tables for sets 1 and 2, the decoding state machine,
 * scan set detection, and the i8042 controller that feeds them.
 */

#![cfg_attr(not(test), no_std)]

pub mod controller;
pub mod decoder;
pub mod error;
pub mod probe;
pub mod scancode;
pub mod stream;
pub mod vkey;

pub use controller::Controller;
pub use decoder::{DecoderState, Pending, Ps2Decoder};
pub use error::KeyboardError;
pub use probe::{ProbeStep, ScansetProbe};
pub use scancode::Scanset;
pub use stream::{KeyStream, ScancodeSource};
pub use vkey::{KeyEvent, Vkey};

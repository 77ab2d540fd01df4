use thiserror::Error;

/*
 * enum KeyboardError - Fatal keyboard initialization failures
 *
 * Only the probe and the controller bring-up can fail. Once a scan set
 * is locked, decoding is infallible.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyboardError {
	#[error("scan set detection failed: {first:#04x} followed by {second:#04x}")]
	ScansetUndetected { first: u8, second: u8 },
	#[error("unsupported scan set {0}")]
	UnsupportedScanset(u8),
	#[error("i8042 self test failed with {0:#04x}")]
	ControllerSelfTest(u8),
	#[error("keyboard interface test failed with {0:#04x}")]
	InterfaceTest(u8),
	#[error("keyboard reset failed with {0:#04x}")]
	ResetFailed(u8),
	#[error("keyboard did not acknowledge command {0:#04x}")]
	NoAck(u8),
	#[error("i8042 controller timed out")]
	Timeout,
}

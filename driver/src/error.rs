use alloc::string::String;

use graphics::GraphicsError;
use keyboard::KeyboardError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
	#[error("keyboard: {0}")]
	Keyboard(#[from] KeyboardError),
	#[error("display: {0}")]
	Graphics(#[from] GraphicsError),
	#[error("bad option '{0}'")]
	BadOption(String),
}

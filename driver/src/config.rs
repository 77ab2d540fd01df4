/*
 * Video and Input Configuration
 *
 * Chosen once before the driver starts. The option string form is
 * "scale=2 gamma=1 center scanset=2"; every key is optional.
 */

use alloc::string::ToString;

use graphics::{GammaLevel, Placement, ScaleMode};
use keyboard::Scanset;

use crate::error::DriverError;

/*
 * enum ScansetPolicy - How the keyboard's scan code set is found
 * @Detect: lock onto whatever the first keystroke uses
 * @Fixed: trust the controller setup and decode from the first byte
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScansetPolicy {
	#[default]
	Detect,
	Fixed(Scanset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VideoConfig {
	/* None picks the largest factor that fits */
	pub scale: Option<ScaleMode>,
	pub gamma: GammaLevel,
	pub placement: Placement,
	pub scanset: ScansetPolicy,
}

impl VideoConfig {
	pub fn with_scale(mut self, scale: ScaleMode) -> Self {
		self.scale = Some(scale);
		self
	}

	pub fn with_gamma(mut self, gamma: GammaLevel) -> Self {
		self.gamma = gamma;
		self
	}

	pub fn with_placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	pub fn with_scanset(mut self, scanset: ScansetPolicy) -> Self {
		self.scanset = scanset;
		self
	}

	/*
	 * parse - Build a configuration from a whitespace separated option list
	 * @options: e.g. "scale=3 gamma=2 topleft scanset=auto"
	 *
	 * Later options override earlier ones. Values out of range report the
	 * owning subsystem's error; anything unrecognised is BadOption.
	 */
	pub fn parse(options: &str) -> Result<Self, DriverError> {
		let mut config = VideoConfig::default();
		for token in options.split_whitespace() {
			let bad = || DriverError::BadOption(token.to_string());
			match token.split_once('=') {
				None => match token {
					"center" | "centered" => config.placement = Placement::Centered,
					"topleft" => config.placement = Placement::TopLeft,
					_ => return Err(bad()),
				},
				Some(("scale", "auto")) => config.scale = None,
				Some(("scale", value)) => {
					let n: u8 = value.parse().map_err(|_| bad())?;
					config.scale = Some(ScaleMode::try_from(n)?);
				}
				Some(("gamma", value)) => {
					let n: u8 = value.parse().map_err(|_| bad())?;
					config.gamma = GammaLevel::new(n)?;
				}
				Some(("scanset", "auto")) => config.scanset = ScansetPolicy::Detect,
				Some(("scanset", value)) => {
					let n: u8 = value.parse().map_err(|_| bad())?;
					config.scanset = ScansetPolicy::Fixed(Scanset::try_from(n)?);
				}
				Some(_) => return Err(bad()),
			}
		}
		Ok(config)
	}
}

/*
 * Gamma Correction
 *
 * Five brightness curves, selected by level. Level 0 is the identity,
 * level 4 a full square-root curve; the levels in between blend
 * linearly. Every table keeps 0 and 255 fixed and is monotonic.
 */

use crate::error::GraphicsError;

pub const GAMMA_LEVELS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct GammaLevel(u8);

impl GammaLevel {
	pub const IDENTITY: GammaLevel = GammaLevel(0);

	pub fn new(level: u8) -> Result<Self, GraphicsError> {
		if level < GAMMA_LEVELS {
			Ok(GammaLevel(level))
		} else {
			Err(GraphicsError::GammaLevel(level))
		}
	}

	pub fn level(self) -> u8 {
		self.0
	}

	pub fn table(self) -> &'static GammaTable {
		&GAMMA_TABLES[self.0 as usize]
	}
}

pub type GammaTable = [u8; 256];

static GAMMA_TABLES: [GammaTable; GAMMA_LEVELS as usize] = build_tables();

//Floor square root by bisection over [0, 256)
const fn isqrt(n: u32) -> u32 {
	let mut lo = 0;
	let mut hi = 256;
	while hi - lo > 1 {
		let mid = (lo + hi) / 2;
		if mid * mid <= n {
			lo = mid;
		} else {
			hi = mid;
		}
	}
	lo
}

const fn build_tables() -> [GammaTable; GAMMA_LEVELS as usize] {
	let mut tables = [[0u8; 256]; GAMMA_LEVELS as usize];
	let mut level = 0;
	while level < GAMMA_LEVELS as usize {
		let mut i = 0;
		while i < 256 {
			let linear = i as u32;
			let curved = isqrt(255 * linear);
			let max = GAMMA_LEVELS as u32 - 1;
			let value = (linear * (max - level as u32) + curved * level as u32) / max;
			tables[level][i] = value as u8;
			i += 1;
		}
		level += 1;
	}
	tables
}

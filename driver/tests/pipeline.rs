use std::collections::VecDeque;

use driver::{DriverError, Engine, FrameDriver, PaletteUpdate, VideoConfig};
use graphics::{DeviceFormat, Framebuffer, IndexedFrame, ScaleMode, SCREEN_PIXELS};
use keyboard::{KeyEvent, KeyboardError, ScancodeSource, Scanset, Vkey};

struct Script(VecDeque<u8>);

impl Script {
	fn new(bytes: &[u8]) -> Self {
		Script(bytes.iter().copied().collect())
	}

	fn feed(&mut self, bytes: &[u8]) {
		self.0.extend(bytes);
	}
}

impl ScancodeSource for Script {
	fn next_byte(&mut self) -> Option<u8> {
		self.0.pop_front()
	}
}

fn palette_bytes(f: impl Fn(u8) -> [u8; 3]) -> Vec<u8> {
	(0..=255u8).flat_map(f).collect()
}

#[test]
fn keystrokes_are_detected_then_decoded() {
	let format = DeviceFormat::xrgb8888(640, 480, 640).unwrap();
	let mut words = vec![0u32; format.len_words()];
	let fb = Framebuffer::new(&mut words, format).unwrap();
	// ACK and BAT chatter, then 'a' pressed and released in set 2.
	let mut driver = FrameDriver::new(Script::new(&[0xFA, 0xAA, 0x1C, 0xF0, 0x1C]), fb, &VideoConfig::default()).unwrap();

	let a = Vkey::ascii(b'a');
	assert_eq!(driver.pump_input().unwrap(), vec![KeyEvent::press(a), KeyEvent::release(a)]);
	assert_eq!(driver.scanset(), Some(Scanset::Set2));
	assert!(driver.pump_input().unwrap().is_empty());

	driver.source_mut().feed(&[0xE0, 0x75, 0x1C, 0xE0, 0xF0, 0x75, 0xF0, 0x1C]);
	assert_eq!(
		driver.pump_input().unwrap(),
		vec![
			KeyEvent::press(Vkey::UP_ARROW),
			KeyEvent::press(a),
			KeyEvent::release(Vkey::UP_ARROW),
			KeyEvent::release(a),
		]
	);
}

#[test]
fn sequences_split_across_pumps_are_joined() {
	let format = DeviceFormat::xrgb8888(320, 200, 320).unwrap();
	let mut words = vec![0u32; format.len_words()];
	let fb = Framebuffer::new(&mut words, format).unwrap();
	let mut driver = FrameDriver::new(Script::new(&[0x39, 0xB9, 0xE0]), fb, &VideoConfig::default()).unwrap();
	assert_eq!(
		driver.pump_input().unwrap(),
		vec![KeyEvent::press(Vkey::SPACE), KeyEvent::release(Vkey::SPACE)]
	);
	assert_eq!(driver.scanset(), Some(Scanset::Set1));
	driver.source_mut().feed(&[0x48]);
	assert_eq!(driver.pump_input().unwrap(), vec![KeyEvent::press(Vkey::UP_ARROW)]);
}

#[test]
fn failed_detection_is_reported_and_retried() {
	let format = DeviceFormat::xrgb8888(320, 200, 320).unwrap();
	let mut words = vec![0u32; format.len_words()];
	let fb = Framebuffer::new(&mut words, format).unwrap();
	let mut driver = FrameDriver::new(Script::new(&[0x1C, 0x55, 0x1E, 0x9E]), fb, &VideoConfig::default()).unwrap();

	assert_eq!(
		driver.pump_input(),
		Err(DriverError::Keyboard(KeyboardError::ScansetUndetected { first: 0x1C, second: 0x55 }))
	);
	assert_eq!(driver.scanset(), None);

	let a = Vkey::ascii(b'a');
	assert_eq!(driver.pump_input().unwrap(), vec![KeyEvent::press(a), KeyEvent::release(a)]);
	assert_eq!(driver.scanset(), Some(Scanset::Set1));
}

#[test]
fn present_is_idempotent() {
	let format = DeviceFormat::xrgb8888(1000, 700, 1008).unwrap();
	let mut words = vec![0u32; format.len_words()];
	let fb = Framebuffer::new(&mut words, format).unwrap();
	let mut driver = FrameDriver::new(Script::new(&[]), fb, &VideoConfig::default()).unwrap();
	assert_eq!(driver.scale_mode(), ScaleMode::X3);

	let pixels: Vec<u8> = (0..SCREEN_PIXELS).map(|i| (i * 7 % 251) as u8).collect();
	driver.set_palette(&palette_bytes(|i| [i, 255 - i, i / 2])).unwrap();
	driver.present_frame(IndexedFrame::new(&pixels).unwrap());
	let first = driver.framebuffer().words().to_vec();
	driver.present_frame(IndexedFrame::new(&pixels).unwrap());
	assert_eq!(driver.framebuffer().words(), &first[..]);

	// Re-applying the same palette changes nothing either.
	driver.set_palette(&palette_bytes(|i| [i, 255 - i, i / 2])).unwrap();
	driver.present_frame(IndexedFrame::new(&pixels).unwrap());
	assert_eq!(driver.framebuffer().words(), &first[..]);
}

#[test]
fn palette_changes_show_on_the_next_present() {
	let format = DeviceFormat::xrgb8888(640, 400, 640).unwrap();
	let mut words = vec![0u32; format.len_words()];
	let fb = Framebuffer::new(&mut words, format).unwrap();
	let mut driver = FrameDriver::new(Script::new(&[]), fb, &VideoConfig::default()).unwrap();

	let pixels = vec![5u8; SCREEN_PIXELS];
	driver.present_frame(IndexedFrame::new(&pixels).unwrap());
	assert_eq!(driver.framebuffer().words()[0], 0x0005_0505);

	driver.set_palette_range(5, &[0xFF, 0x00, 0x00]).unwrap();
	assert!(driver.palette_dirty());
	// Not visible until presented.
	assert_eq!(driver.color_table().get(5), 0x0005_0505);
	driver.present_frame(IndexedFrame::new(&pixels).unwrap());
	assert!(driver.framebuffer().words().iter().all(|&w| w == 0x00FF_0000));
}

/* Draws the number of keys pressed so far, turns the screen red on Escape */
struct Counter {
	pressed: u8,
	escape: bool,
	frame: Vec<u8>,
	log: Vec<&'static str>,
}

impl Engine for Counter {
	fn respond(&mut self, events: &[KeyEvent]) {
		self.log.push("respond");
		for event in events.iter().filter(|e| e.pressed) {
			self.pressed += 1;
			self.escape |= event.vkey == Vkey::ESCAPE;
		}
	}

	fn render<'e>(&'e mut self, palette: &mut PaletteUpdate<'_>) -> IndexedFrame<'e> {
		self.log.push("render");
		if self.escape {
			palette.set_range(usize::from(self.pressed), &[0xFF, 0, 0]).unwrap();
		}
		self.frame.fill(self.pressed);
		IndexedFrame::new(&self.frame).unwrap()
	}
}

#[test]
fn tic_runs_input_then_engine_then_present() {
	let format = DeviceFormat::xrgb8888(320, 200, 320).unwrap();
	let mut words = vec![0u32; format.len_words()];
	let fb = Framebuffer::new(&mut words, format).unwrap();
	let mut driver = FrameDriver::new(Script::new(&[0x1C, 0xF0, 0x1C, 0x32]), fb, &VideoConfig::default()).unwrap();
	let mut engine = Counter {
		pressed: 0,
		escape: false,
		frame: vec![0; SCREEN_PIXELS],
		log: Vec::new(),
	};

	driver.run_tic(&mut engine).unwrap();
	assert_eq!(engine.log, ["respond", "render"]);
	assert_eq!(engine.pressed, 2);
	assert!(driver.framebuffer().words().iter().all(|&w| w == 0x0002_0202));

	driver.source_mut().feed(&[0x76]);
	driver.run_tic(&mut engine).unwrap();
	assert_eq!(engine.log, ["respond", "render", "respond", "render"]);
	assert!(!driver.palette_dirty());
	assert!(driver.framebuffer().words().iter().all(|&w| w == 0x00FF_0000));
}

#[test]
fn tic_stops_before_the_engine_on_detection_failure() {
	let format = DeviceFormat::xrgb8888(320, 200, 320).unwrap();
	let mut words = vec![7u32; format.len_words()];
	let fb = Framebuffer::new(&mut words, format).unwrap();
	let mut driver = FrameDriver::new(Script::new(&[0x1C, 0x1C]), fb, &VideoConfig::default()).unwrap();
	let mut engine = Counter {
		pressed: 0,
		escape: false,
		frame: vec![0; SCREEN_PIXELS],
		log: Vec::new(),
	};
	assert!(driver.run_tic(&mut engine).is_err());
	assert!(engine.log.is_empty());
	assert!(driver.framebuffer().words().iter().all(|&w| w == 7));
}

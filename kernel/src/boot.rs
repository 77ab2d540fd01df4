/*
 * Boot Loader Interface
 *
 * Limine requests and the translation of its framebuffer description
 * into the display's mode info.
 */

use graphics::{Channel, ModeInfo};
use limine::BaseRevision;
use limine::request::{FramebufferRequest, RequestsEndMarker, RequestsStartMarker, StackSizeRequest};

use crate::KernelError;

#[used]
#[unsafe(link_section = ".requests")]
static BASE_REVISION: BaseRevision = BaseRevision::new();

/* Room for the demo frame while it is boxed */
const STACK_SIZE: u64 = 256 * 1024;

#[used]
#[unsafe(link_section = ".requests")]
static STACK_SIZE_REQ: StackSizeRequest = StackSizeRequest::new().with_size(STACK_SIZE);

#[used]
#[unsafe(link_section = ".requests")]
static FRAMEBUFFER_REQ: FramebufferRequest = FramebufferRequest::new();

#[used]
#[unsafe(link_section = ".requests_start_marker")]
static _START_MARKER: RequestsStartMarker = RequestsStartMarker::new();

#[used]
#[unsafe(link_section = ".requests_end_marker")]
static _END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

pub fn check_revision() -> Result<(), KernelError> {
	if BASE_REVISION.is_supported() {
		Ok(())
	} else {
		Err(KernelError::BaseRevision)
	}
}

/*
 * framebuffer - First framebuffer the boot loader set up
 *
 * Returns its mode description and the virtual address of pixel 0.
 */
pub fn framebuffer() -> Result<(ModeInfo, *mut u32), KernelError> {
	let fb = FRAMEBUFFER_REQ
		.get_response()
		.and_then(|response| response.framebuffers().next())
		.ok_or(KernelError::NoFramebuffer)?;

	let mode = ModeInfo {
		width: fb.width() as u32,
		height: fb.height() as u32,
		bytes_per_line: fb.pitch() as u32,
		bits_per_pixel: fb.bpp(),
		red: Channel::new(fb.red_mask_shift(), fb.red_mask_size()),
		green: Channel::new(fb.green_mask_shift(), fb.green_mask_size()),
		blue: Channel::new(fb.blue_mask_shift(), fb.blue_mask_size()),
	};
	hal::log_info!(
		"boot",
		"framebuffer at {:p}: {}x{}, {} bytes per line, {} bpp",
		fb.addr(),
		mode.width,
		mode.height,
		mode.bytes_per_line,
		mode.bits_per_pixel
	);
	Ok((mode, fb.addr().cast::<u32>()))
}

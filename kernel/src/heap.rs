/*
 * Kernel Heap
 *
 * A fixed arena in .bss handed to the linked list allocator. Only the
 * driver's event vectors and the demo frame live here.
 */

use linked_list_allocator::LockedHeap;

const HEAP_SIZE: usize = 256 * 1024;

#[repr(align(4096))]
struct Arena([u8; HEAP_SIZE]);

static mut ARENA: Arena = Arena([0; HEAP_SIZE]);

#[cfg_attr(not(test), global_allocator)]
static HEAP_ALLOCATOR: LockedHeap = LockedHeap::empty();

/* Must run once, before the first allocation */
pub fn init_heap() {
	unsafe {
		let start = core::ptr::addr_of_mut!(ARENA).cast::<u8>();
		HEAP_ALLOCATOR.lock().init(start, HEAP_SIZE);
	}
	hal::log_info!("heap", "{} KiB arena ready", HEAP_SIZE / 1024);
}

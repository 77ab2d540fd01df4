/*
 * CPU Control Functions
 */

use x86_64::instructions::{hlt, interrupts};

/*
 * halt - Halt the CPU until next interrupt
 */
#[inline(always)]
pub fn halt() {
	hlt();
}

#[inline(always)]
pub fn disable_interrupts() {
	interrupts::disable();
}

/*
 * halt_loop - Park the CPU forever
 *
 * Used once startup has failed; interrupts are masked first so the
 * halt is final.
 */
pub fn halt_loop() -> ! {
	disable_interrupts();
	loop {
		halt();
	}
}

/*
 * spin_delay - Busy wait for roughly @n iterations
 *
 * Used for the settle time some PS/2 controllers need between a command
 * and the read-back of its result.
 */
#[inline]
pub fn spin_delay(n: u32) {
	for _ in 0..n {
		core::hint::spin_loop();
	}
}

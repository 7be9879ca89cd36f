//! FFI bindings for the C implementation of Xoshiro256**.

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn mc_xoshiro256ss_seed(state: *mut u64, seed: u64);
        pub fn mc_xoshiro256ss_next(state: *mut u64) -> u64;
    }
}

/// C seeding wrapper
#[cfg(c_implementation_active)]
pub fn seed_c_wrapper(seed: u64) -> [u64; 4] {
    let mut state = [0u64; 4];
    // SAFETY: the C side writes exactly four lanes into the array.
    unsafe { ffi::mc_xoshiro256ss_seed(state.as_mut_ptr(), seed) };
    state
}

/// C step wrapper
#[cfg(c_implementation_active)]
pub fn xoshiro_c_wrapper(state: &mut [u64; 4]) -> u64 {
    // SAFETY: the C side reads and writes exactly four lanes.
    unsafe { ffi::mc_xoshiro256ss_next(state.as_mut_ptr()) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stubs for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn seed_c_wrapper(_seed: u64) -> [u64; 4] {
    panic!("C implementation not compiled (requires a C compiler)")
}

#[cfg(not(c_implementation_active))]
pub fn xoshiro_c_wrapper(_state: &mut [u64; 4]) -> u64 {
    panic!("C implementation not compiled (requires a C compiler)")
}
